// File: crates/chartlet-demo/src/main.rs
// Summary: Demo draws clipped function plots and an optional CSV series side by side into one PNG.

use anyhow::{Context, Result};
use chartlet_core::{theme, Axis, ChartContext, ChartOptions, DataPoint, Interval, RectF, TextAlign, Vec2};
use chartlet_skia::{GlyphAtlas, SkiaRenderer, DEFAULT_CHARSET};
use log::{info, warn};
use std::path::{Path, PathBuf};

const WIDTH: i32 = 1024;
const HEIGHT: i32 = 480;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Usage: chartlet-demo [points.csv] [out.png]
    let mut args = std::env::args().skip(1);
    let csv_path = args.next().filter(|a| a != "-");
    let out = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out/chartlet_demo.png"));

    let theme = std::env::var("CHARTLET_THEME").map(|n| theme::find(&n)).unwrap_or_default();
    info!("theme: {}", theme.name);
    let options = ChartOptions { theme, ..ChartOptions::default() };

    let mut renderer = SkiaRenderer::new(WIDTH, HEIGHT, theme.background)?;
    let mut atlas = GlyphAtlas::build(options.label_size * 2.0, DEFAULT_CHARSET)?;
    atlas.register(&mut renderer);

    let half = WIDTH as f32 * 0.5;

    // 1) Functions: sin stays inside, x^2 leaves through the top, the V dips below.
    let mut funcs = ChartContext::new(
        RectF::from_ltwh(0.0, 0.0, half, HEIGHT as f32),
        Axis::new("x", -4.0, 4.0),
        Axis::new("y", -1.5, 4.0),
        options.clone(),
    )?;
    funcs.background();
    funcs.frame();
    funcs.axis_labels();
    let domain = Interval::new(-4.0, 4.0)?;
    let n_sin = funcs.function(f64::sin, domain, theme.series_color(0))?;
    let n_sq = funcs.function(|x| x * x, Interval::new(-2.0, 4.0)?, theme.series_color(1))?;
    let n_v = funcs.function(|x| (x - 1.0).abs() * 0.8 - 1.8, domain, theme.series_color(2))?;
    info!("function segments: sin={n_sin} square={n_sq} v={n_v}");
    funcs.number(std::f64::consts::PI, DataPoint::new(std::f64::consts::PI, 0.3), theme.label);
    funcs.flush(&mut renderer, &atlas)?;

    // 2) Data: CSV series if given, else a sampled damped wave.
    let data = match &csv_path {
        Some(p) => load_xy_csv(Path::new(p)).with_context(|| format!("failed to load CSV '{p}'"))?,
        None => (0..60)
            .map(|i| {
                let x = i as f64 * 0.25;
                DataPoint::new(x, (-x * 0.15).exp() * (x * 1.3).cos())
            })
            .collect(),
    };
    if data.len() < 2 {
        anyhow::bail!("need at least two data points, got {}", data.len());
    }
    let (x_axis, y_axis) = axes_for(&data);
    let mut series = ChartContext::new(
        RectF::from_ltwh(half, 0.0, half, HEIGHT as f32),
        x_axis,
        y_axis,
        options,
    )?;
    series.background();
    series.frame();
    series.axis_labels();
    series.line_chart(&data, theme.series_color(0));
    let shown = series.points(&data, theme.series_color(3));
    if shown < data.len() {
        warn!("{} points fell outside the plot", data.len() - shown);
    }
    let peak = data.iter().copied().fold(data[0], |a, b| if b.y > a.y { b } else { a });
    series.number(peak.y, peak, theme.label);
    let title = csv_path.as_deref().unwrap_or("damped wave");
    let anchor = Vec2::new(half + WIDTH as f32 * 0.25, 24.0);
    series.label(title, anchor, theme.label, TextAlign::Center);
    let stats = series.flush(&mut renderer, &atlas)?;
    info!("data chart: {stats:?}");

    renderer.write_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Axis ranges spanning `data` with a 5% vertical margin.
fn axes_for(data: &[DataPoint]) -> (Axis, Axis) {
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in data {
        x_min = x_min.min(p.x);
        x_max = x_max.max(p.x);
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }
    if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
    if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
    let m = (y_max - y_min) * 0.05;
    (Axis::new("x", x_min, x_max), Axis::new("y", y_min - m, y_max + m))
}

/// Load `x,y` rows; headers are matched case-insensitively, else the first two columns are used.
fn load_xy_csv(path: &Path) -> Result<Vec<DataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    let col = |want: &str, fallback: usize| headers.iter().position(|h| h == want).unwrap_or(fallback);
    let (ix, iy) = (col("x", 0), col("y", 1));

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok()).filter(|v| v.is_finite());
        match (parse(ix), parse(iy)) {
            (Some(x), Some(y)) => out.push(DataPoint::new(x, y)),
            _ => warn!("skipping row {}: not a numeric x,y pair", row + 2),
        }
    }
    info!("loaded {} points from {}", out.len(), path.display());
    Ok(out)
}
