// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (RGBA buffer / PNG) using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::error::ChartError;
use crate::geometry::RectI32;
use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

/// Fraction of the y span added above and below the data on autoscale.
pub const DEFAULT_Y_MARGIN: f64 = 0.05;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title, axis labels and tick labels. Off gives font-independent output.
    pub draw_labels: bool,
    /// Longer lines are reduced with LTTB before drawing.
    pub max_points: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            max_points: 4096,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::labeled("x"),
            y_axis: Axis::labeled("y"),
        }
    }

    /// A complete single-line chart: points `(x[i], y[i])` joined in index order,
    /// labelled and autoscaled. Every call builds an independent value.
    pub fn line(
        x: &[f64],
        y: &[f64],
        x_label: &str,
        y_label: &str,
        title: &str,
    ) -> Result<Self, ChartError> {
        let series = Series::from_columns(x, y)?;
        let mut chart = Self {
            title: title.to_string(),
            series: vec![series],
            x_axis: Axis::labeled(x_label),
            y_axis: Axis::labeled(y_label),
        };
        chart.autoscale_axes(DEFAULT_Y_MARGIN);
        Ok(chart)
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data; see [`ViewState::from_chart`].
    pub fn autoscale_axes(&mut self, y_margin: f64) {
        ViewState::from_chart(self, y_margin).apply_to_chart(self);
    }

    /// Render into a tightly packed, unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        self.draw(surface.canvas(), w, h, opts);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back {w}x{h} pixels");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match {w}x{h}"))?;
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .context("encode PNG failed")?;
        Ok(bytes)
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, data).with_context(|| format!("writing {}", path.display()))?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, width: i32, height: i32, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = RectI32::plot_area(width, height, &opts.insets);
        let xs = LinearScale::horizontal(self.x_axis.min, self.x_axis.max, plot.left as f32, plot.right as f32);
        let ys = LinearScale::vertical(self.y_axis.min, self.y_axis.max, plot.top as f32, plot.bottom as f32);
        let x_target = (plot.width() / 100).clamp(2, 10) as usize;
        let y_target = (plot.height() / 60).clamp(2, 8) as usize;
        let x_ticks = nice_ticks(self.x_axis.min, self.x_axis.max, x_target);
        let y_ticks = nice_ticks(self.y_axis.min, self.y_axis.max, y_target);

        draw_grid(canvas, &plot, &xs, &ys, &x_ticks, &y_ticks, theme);

        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32),
            None,
            None,
        );
        for s in &self.series {
            let reduced;
            let s = if s.len() > opts.max_points {
                reduced = s.downsample_xy_lttb(opts.max_points);
                &reduced
            } else {
                s
            };
            draw_line_series(canvas, &xs, &ys, s, theme.line_stroke);
        }
        canvas.restore();

        draw_axes(canvas, &plot, &xs, &ys, &x_ticks, &y_ticks, theme);

        if opts.draw_labels {
            let text = TextShaper::new();
            let x_step = nice_step(self.x_axis.span(), x_target);
            let y_step = nice_step(self.y_axis.span(), y_target);
            draw_labels(canvas, &text, &plot, self, (&xs, x_ticks.as_slice(), x_step), (&ys, y_ticks.as_slice(), y_step), theme);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    xs: &LinearScale,
    ys: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (t, b) = (plot.top as f32, plot.bottom as f32);
    let (l, r) = (plot.left as f32, plot.right as f32);
    for &x in x_ticks {
        let px = xs.to_px(x);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    for &y in y_ticks {
        let py = ys.to_px(y);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    plot: &RectI32,
    xs: &LinearScale,
    ys: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);
    for &x in x_ticks {
        let px = xs.to_px(x);
        canvas.draw_line((px, b), (px, b + 5.0), &tick_paint);
    }
    for &y in y_ticks {
        let py = ys.to_px(y);
        canvas.draw_line((l - 5.0, py), (l, py), &tick_paint);
    }
}

fn draw_labels(
    canvas: &skia::Canvas,
    text: &TextShaper,
    plot: &RectI32,
    chart: &Chart,
    (xs, x_ticks, x_step): (&LinearScale, &[f64], f64),
    (ys, y_ticks, y_step): (&LinearScale, &[f64], f64),
    theme: &Theme,
) {
    let (l, b) = (plot.left as f32, plot.bottom as f32);

    for &x in x_ticks {
        text.draw_centered(canvas, &format_tick(x, x_step), xs.to_px(x), b + 22.0, 12.0, theme.tick, true);
    }
    for &y in y_ticks {
        text.draw_right(canvas, &format_tick(y, y_step), l - 8.0, ys.to_px(y) + 4.0, 12.0, theme.tick, true);
    }

    text.draw_centered(canvas, &chart.x_axis.label, plot.center_x(), b + 48.0, 14.0, theme.axis_label, false);

    // y label runs bottom-to-top along the left edge
    canvas.save();
    canvas.translate((18.0, plot.center_y()));
    canvas.rotate(-90.0, None);
    text.draw_centered(canvas, &chart.y_axis.label, 0.0, 5.0, 14.0, theme.axis_label, false);
    canvas.restore();

    if !chart.title.is_empty() {
        text.draw_centered(canvas, &chart.title, plot.center_x(), plot.top as f32 - 20.0, 18.0, theme.title, false);
    }
}

fn draw_line_series(canvas: &skia::Canvas, xs: &LinearScale, ys: &LinearScale, series: &Series, color: skia::Color) {
    let data = &series.data_xy;

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_color(color);

    match data.as_slice() {
        [] => {}
        [(x, y)] => {
            stroke.set_style(skia::paint::Style::Fill);
            canvas.draw_circle((xs.to_px(*x), ys.to_px(*y)), 3.0, &stroke);
        }
        [(x0, y0), rest @ ..] => {
            let mut path = skia::Path::new();
            path.move_to((xs.to_px(*x0), ys.to_px(*y0)));
            for &(x, y) in rest {
                path.line_to((xs.to_px(x), ys.to_px(y)));
            }
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width(2.0);
            canvas.draw_path(&path, &stroke);
        }
    }
}
