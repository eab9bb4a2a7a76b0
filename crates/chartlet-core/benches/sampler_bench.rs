use chartlet_core::{sample, Bounds, Interval, SamplerOptions, Step, UpperExit};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    let bounds = Bounds::new(Interval { min: 0.0, max: 100.0 }, Interval { min: -1.0, max: 1.0 });
    let domain = Interval { min: 0.0, max: 100.0 };
    for &px in &[1_000f32, 10_000f32, 100_000f32] {
        for upper_exit in [UpperExit::Stop, UpperExit::Reenter] {
            let opts = SamplerOptions { upper_exit, ..SamplerOptions::default() };
            group.bench_with_input(BenchmarkId::from_parameter(format!("px{px}_{upper_exit:?}")), &px, |b, &px| {
                // amplitude > 1 so the wave clips on both edges
                b.iter(|| black_box(sample(|x| 1.3 * (x * 0.7).sin(), domain, &bounds, Step::PerPixel(px), &opts)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_sample);
criterion_main!(benches);
