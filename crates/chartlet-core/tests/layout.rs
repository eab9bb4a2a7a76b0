// File: crates/chartlet-core/tests/layout.rs
// Purpose: Number formatting, label layout, tick spacing and coordinate mapping.

mod common;

use chartlet_core::grid::{axis_ticks, linspace};
use chartlet_core::text::measure_width;
use chartlet_core::{format_number, layout_label, theme, DataPoint, Insets, Interval, LinearTransform, RectF, TextAlign, Vec2};
use common::FixedGlyphs;

#[test]
fn numbers_trim_trailing_zeros() {
    assert_eq!(format_number(1.5, 2), "1.5");
    assert_eq!(format_number(10.0, 2), "10");
    assert_eq!(format_number(100.0, 3), "100");
    assert_eq!(format_number(0.126, 2), "0.13");
    assert_eq!(format_number(-2.26, 1), "-2.3");
    assert_eq!(format_number(-0.001, 2), "0");
    assert_eq!(format_number(7.0, 0), "7");
    assert_eq!(format_number(f64::NAN, 2), "NaN");
    assert_eq!(format_number(f64::NEG_INFINITY, 2), "-inf");
}

#[test]
fn label_alignment_shifts_by_pen_width() {
    let anchor = Vec2::new(100.0, 50.0);
    let left = layout_label(&FixedGlyphs, "12", anchor, 10.0, TextAlign::Left);
    assert_eq!(left.len(), 2);
    assert_eq!(left[0].position, Vec2::new(100.0, 40.0));
    assert_eq!(left[1].position, Vec2::new(106.0, 40.0));
    assert_eq!(left[0].size, Vec2::new(6.0, 10.0));

    let right = layout_label(&FixedGlyphs, "12", anchor, 10.0, TextAlign::Right);
    assert_eq!(right[0].position, Vec2::new(88.0, 40.0));

    let center = layout_label(&FixedGlyphs, "12", anchor, 10.0, TextAlign::Center);
    assert_eq!(center[0].position, Vec2::new(94.0, 40.0));
}

#[test]
fn missing_glyphs_advance_without_quads() {
    let quads = layout_label(&FixedGlyphs, "1x2", Vec2::ZERO, 10.0, TextAlign::Left);
    assert_eq!(quads.len(), 2);
    assert_eq!(quads[1].position.x, 11.0);
    assert_eq!(measure_width(&FixedGlyphs, "1x2", 10.0), 17.0);
}

#[test]
fn labels_scale_with_size() {
    let quads = layout_label(&FixedGlyphs, "8", Vec2::ZERO, 20.0, TextAlign::Left);
    assert_eq!(quads[0].size, Vec2::new(12.0, 20.0));
    assert_eq!(quads[0].position, Vec2::new(0.0, -20.0));
}

#[test]
fn linspace_hits_both_ends() {
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    let v = linspace(0.0, 1.0, 11);
    assert_eq!(v.len(), 11);
    assert_eq!(v[0], 0.0);
    assert_eq!(v[10], 1.0);
}

#[test]
fn ticks_snap_to_zero() {
    let ticks = axis_ticks(&Interval::new(-0.3, 0.3).unwrap(), 3);
    assert_eq!(ticks[1], 0.0);
    assert_eq!(format_number(ticks[1], 2), "0");
}

#[test]
fn transform_maps_corners_and_back() {
    let plot = RectF::from_ltwh(10.0, 20.0, 200.0, 100.0);
    let t = LinearTransform::new(plot, Interval::new(0.0, 4.0).unwrap(), Interval::new(-1.0, 1.0).unwrap());

    assert_eq!(t.to_screen(DataPoint::new(0.0, -1.0)), Vec2::new(10.0, 120.0));
    assert_eq!(t.to_screen(DataPoint::new(4.0, 1.0)), Vec2::new(210.0, 20.0));

    let back = t.to_data(Vec2::new(110.0, 70.0));
    assert!((back.x - 2.0).abs() < 1e-9);
    assert!(back.y.abs() < 1e-9);
    assert!((t.data_per_pixel_x() - 0.02).abs() < 1e-12);
}

#[test]
fn insets_never_invert_the_plot() {
    let r = RectF::from_ltwh(0.0, 0.0, 30.0, 20.0).inset(&Insets::new(20, 20, 15, 15));
    assert_eq!(r.width(), 0.0);
    assert_eq!(r.height(), 0.0);
}

#[test]
fn theme_lookup_falls_back_to_dark() {
    assert_eq!(theme::find("LIGHT").name, "light");
    assert_eq!(theme::find("nope").name, "dark");
    assert_eq!(theme::find("dark").series_color(5), theme::find("dark").palette[1]);
}
