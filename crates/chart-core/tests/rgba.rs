// File: crates/chart-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use sensor_chart_core::{Chart, RenderOptions, Theme};

fn unlabelled(theme: Theme) -> RenderOptions {
    RenderOptions { width: 320, height: 200, theme, draw_labels: false, ..RenderOptions::default() }
}

#[test]
fn render_rgba8_buffer() {
    let chart = Chart::line(&[0.0, 4.0], &[0.0, 4.0], "X", "Y", "").unwrap();
    let opts = unlabelled(Theme::dark());
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (320, 200));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // top-left corner lies in the margin, so it is plain background
    let bg = Theme::dark().background;
    assert_eq!(&px[0..4], &[bg.r(), bg.g(), bg.b(), 255]);
}

#[test]
fn theme_controls_background() {
    let chart = Chart::line(&[0.0, 1.0], &[0.0, 1.0], "X", "Y", "").unwrap();
    let (px, ..) = chart.render_to_rgba8(&unlabelled(Theme::light())).unwrap();
    let bg = Theme::light().background;
    assert_eq!(&px[0..4], &[bg.r(), bg.g(), bg.b(), 255]);
}

#[test]
fn data_changes_the_plot_area() {
    let opts = unlabelled(Theme::dark());
    let empty = Chart::line(&[], &[], "X", "Y", "").unwrap();
    let mut with_line = Chart::line(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0], "X", "Y", "").unwrap();
    // same ranges so only the line differs
    with_line.x_axis = empty.x_axis.clone();
    with_line.y_axis = empty.y_axis.clone();
    with_line.x_axis.max = 2.0;
    let mut empty_same = empty.clone();
    empty_same.x_axis.max = 2.0;

    let (a, ..) = empty_same.render_to_rgba8(&opts).unwrap();
    let (b, ..) = with_line.render_to_rgba8(&opts).unwrap();
    assert_ne!(a, b);
}

#[test]
fn tiny_surface_still_renders() {
    let chart = Chart::line(&[0.0, 1.0], &[0.0, 1.0], "X", "Y", "t").unwrap();
    let opts = RenderOptions { width: 10, height: 10, ..RenderOptions::default() };
    let (px, w, h, _) = chart.render_to_rgba8(&opts).unwrap();
    assert_eq!(px.len(), (w * h * 4) as usize);
}
