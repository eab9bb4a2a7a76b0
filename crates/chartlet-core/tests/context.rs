// File: crates/chartlet-core/tests/context.rs
// Purpose: ChartContext queueing and flush ordering against a recording renderer.

mod common;

use chartlet_core::{
    Axis, ChartContext, ChartOptions, Color, DataPoint, DrawCommand, FlushStats, Insets, Interval, PlotError, RectF,
};
use common::{Call, FixedGlyphs, RecordingRenderer, GLYPH_TEXTURE};

const RED: Color = Color::from_rgb(255, 0, 0);

fn square_chart(options: ChartOptions) -> ChartContext {
    ChartContext::new(
        RectF::from_ltwh(0.0, 0.0, 100.0, 100.0),
        Axis::new("t", 0.0, 10.0),
        Axis::new("v", 0.0, 10.0),
        ChartOptions { insets: Insets::uniform(0), ..options },
    )
    .expect("valid chart")
}

fn unit_step() -> ChartOptions {
    ChartOptions { step: Some(1.0), ..ChartOptions::default() }
}

#[test]
fn function_enqueues_clipped_segments() {
    let mut chart = square_chart(unit_step());
    let n = chart.function(|_| 5.0, Interval::new(0.0, 10.0).unwrap(), RED).unwrap();
    assert_eq!(n, 10);

    match chart.queue().commands() {
        [DrawCommand::Segments { points, color }] => {
            assert_eq!(points.len(), 20);
            assert_eq!(*color, RED);
            assert!(points.iter().all(|p| (p.y - 50.0).abs() < 1e-4));
            assert!((points[0].x - 0.0).abs() < 1e-4);
            assert!((points[19].x - 100.0).abs() < 1e-4);
        }
        other => panic!("unexpected queue {other:?}"),
    }
}

#[test]
fn function_defaults_to_one_sample_per_pixel() {
    let mut chart = square_chart(ChartOptions::default());
    let n = chart.function(|x| x, Interval::new(0.0, 10.0).unwrap(), RED).unwrap();
    assert_eq!(n, 100);
}

#[test]
fn failing_function_enqueues_nothing() {
    let mut chart = square_chart(unit_step());
    let err = chart.function(|x| if x > 3.0 { f64::NAN } else { x }, Interval::new(0.0, 10.0).unwrap(), RED);
    assert!(matches!(err, Err(PlotError::NonFiniteSample { .. })));
    assert!(chart.queue().is_empty());
}

#[test]
fn flush_preserves_call_order() {
    let mut chart = square_chart(unit_step());
    chart.background();
    chart.frame();
    chart.function(|_| 5.0, Interval::new(0.0, 10.0).unwrap(), RED).unwrap();
    chart.points(&[DataPoint::new(5.0, 5.0)], RED);
    chart.number(1.5, DataPoint::new(5.0, 5.0), RED);

    let mut renderer = RecordingRenderer::default();
    let stats = chart.flush(&mut renderer, &FixedGlyphs).unwrap();
    assert_eq!(stats, FlushStats { segments: 14, quads: 2, glyphs: 3 });

    let kinds: Vec<&str> = renderer
        .calls
        .iter()
        .map(|c| match c {
            Call::Segments { .. } => "segments",
            Call::Quad { .. } => "quad",
            Call::Glyph { .. } => "glyph",
        })
        .collect();
    assert_eq!(kinds, ["quad", "segments", "segments", "quad", "glyph", "glyph", "glyph"]);

    // "1.5" centered on (50, 50) at 12 px: three 7.2 px advances
    match &renderer.calls[4] {
        Call::Glyph { position, texture, color, .. } => {
            assert_eq!(*texture, GLYPH_TEXTURE);
            assert_eq!(*color, RED);
            assert!((position.x - 39.2).abs() < 1e-3, "x = {}", position.x);
            assert!((position.y - 38.0).abs() < 1e-3, "y = {}", position.y);
        }
        other => panic!("expected glyph, got {other:?}"),
    }

    assert!(chart.queue().is_empty());
    let again = chart.flush(&mut renderer, &FixedGlyphs).unwrap();
    assert_eq!(again, FlushStats::default());
}

#[test]
fn renderer_error_aborts_flush_and_empties_queue() {
    let mut chart = square_chart(unit_step());
    chart.background();
    chart.frame();

    let mut renderer = RecordingRenderer { fail_on_quad: true, ..Default::default() };
    let err = chart.flush(&mut renderer, &FixedGlyphs).unwrap_err();
    assert!(matches!(err, PlotError::Render(_)));
    assert!(renderer.calls.is_empty());
    assert!(chart.queue().is_empty());
}

#[test]
fn scatter_points_outside_plot_are_skipped() {
    let mut chart = square_chart(ChartOptions { point_size: 4.0, ..ChartOptions::default() });
    let n = chart.points(&[DataPoint::new(5.0, 5.0), DataPoint::new(20.0, 5.0)], RED);
    assert_eq!(n, 1);
    match chart.queue().commands() {
        [DrawCommand::Quad { position, size, .. }] => {
            assert!((position.x - 48.0).abs() < 1e-4 && (position.y - 48.0).abs() < 1e-4);
            assert_eq!((size.x, size.y), (4.0, 4.0));
        }
        other => panic!("unexpected queue {other:?}"),
    }
}

#[test]
fn line_chart_needs_two_points() {
    let mut chart = square_chart(ChartOptions::default());
    assert_eq!(chart.line_chart(&[DataPoint::new(1.0, 1.0)], RED), 0);
    assert!(chart.queue().is_empty());

    let data = [DataPoint::new(0.0, 0.0), DataPoint::new(5.0, 10.0), DataPoint::new(10.0, 0.0)];
    assert_eq!(chart.line_chart(&data, RED), 2);
    match chart.queue().commands() {
        [DrawCommand::Segments { points, .. }] => assert_eq!(points.len(), 4),
        other => panic!("unexpected queue {other:?}"),
    }
}

#[test]
fn axis_labels_cover_ticks_and_captions() {
    let mut chart = square_chart(ChartOptions { tick_count: 3, ..ChartOptions::default() });
    chart.axis_labels();
    let texts: Vec<&str> = chart
        .queue()
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, ["0", "5", "10", "0", "5", "10", "t", "v"]);
}

#[test]
fn uncaptioned_axes_skip_caption_labels() {
    let mut chart = ChartContext::new(
        RectF::from_ltwh(0.0, 0.0, 200.0, 100.0),
        Axis::unlabeled(-1.0, 1.0),
        Axis::unlabeled(-1.0, 1.0),
        ChartOptions { tick_count: 2, ..ChartOptions::default() },
    )
    .unwrap();
    chart.axis_labels();
    assert_eq!(chart.queue().len(), 4);
}

#[test]
fn invalid_axis_range_is_rejected() {
    let err = ChartContext::new(
        RectF::from_ltwh(0.0, 0.0, 100.0, 100.0),
        Axis::new("x", 5.0, 1.0),
        Axis::new("y", 0.0, 1.0),
        ChartOptions::default(),
    );
    assert!(matches!(err, Err(PlotError::InvalidInterval { .. })));
}

#[test]
fn contexts_are_independent() {
    let mut a = square_chart(unit_step());
    let b = square_chart(unit_step());
    a.background();
    assert_eq!(a.queue().len(), 1);
    assert!(b.queue().is_empty());
}
