// File: crates/chart-core/src/pipeline.rs
// Summary: Load the pressure and acceleration sample files, print them, and present one line chart per file.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::chart::{Chart, RenderOptions};
use crate::error::SampleError;
use crate::samples::{build_index, format_samples, load_sample_numbers, sample_values};

/// Fixed description of one sample file and how it is charted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartSpec {
    pub file: &'static str,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

pub const ACCELERATION: ChartSpec = ChartSpec {
    file: "g_load.json",
    title: "Acceleration",
    x_label: "sample",
    y_label: "acc (g)",
};

pub const PRESSURE: ChartSpec = ChartSpec {
    file: "pressures.json",
    title: "Pressure",
    x_label: "sample",
    y_label: "pressure (Pa)",
};

/// Destination for finished charts. Returns once the chart has been dealt with
/// (an interactive sink returns only after the user dismissed it).
pub trait ChartSink {
    fn present(&mut self, chart: &Chart) -> Result<()>;
}

/// Writes each chart as `<dir>/<slug>.png`, slug derived from the title.
pub struct PngExporter {
    dir: PathBuf,
    opts: RenderOptions,
    written: Vec<PathBuf>,
}

impl PngExporter {
    pub fn new(dir: impl Into<PathBuf>, opts: RenderOptions) -> Self {
        Self { dir: dir.into(), opts, written: Vec::new() }
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ChartSink for PngExporter {
    fn present(&mut self, chart: &Chart) -> Result<()> {
        let out = self.dir.join(format!("{}.png", slugify(&chart.title)));
        chart
            .render_to_png(&self.opts, &out)
            .with_context(|| format!("exporting chart '{}'", chart.title))?;
        log::info!("wrote {}", out.display());
        self.written.push(out);
        Ok(())
    }
}

/// Both sequences, held unchanged for the rest of the run.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedSamples {
    pub pressure: Vec<f64>,
    pub acceleration: Vec<f64>,
}

/// Load `pressures.json` then `g_load.json` from `dir`, printing each array
/// to `out` right after it loads. Any failure stops before the second load.
pub fn load_all(dir: &Path, out: &mut impl Write) -> Result<LoadedSamples> {
    let pressure = load_and_print(&dir.join(PRESSURE.file), out)?;
    let acceleration = load_and_print(&dir.join(ACCELERATION.file), out)?;
    Ok(LoadedSamples { pressure, acceleration })
}

fn load_and_print(path: &Path, out: &mut impl Write) -> Result<Vec<f64>> {
    let numbers = load_sample_numbers(path)?;
    writeln!(out, "{}", format_samples(&numbers)).context("writing samples to output")?;
    Ok(sample_values(&numbers))
}

/// Build a fresh chart from the given columns and hand it to `sink`.
pub fn render_chart(
    sink: &mut dyn ChartSink,
    x_values: &[f64],
    y_values: &[f64],
    x_label: &str,
    y_label: &str,
    title: &str,
) -> Result<()> {
    let chart = Chart::line(x_values, y_values, x_label, y_label, title)
        .with_context(|| format!("building chart '{title}'"))?;
    log::debug!("presenting '{}' with {} points", title, x_values.len());
    sink.present(&chart)
}

/// Chart one loaded sequence against its sample index.
pub fn render_samples(sink: &mut dyn ChartSink, spec: &ChartSpec, samples: &[f64]) -> Result<()> {
    let index: Vec<f64> = build_index(samples).into_iter().map(|i| i as f64).collect();
    render_chart(sink, &index, samples, spec.x_label, spec.y_label, spec.title)
}

/// Whole run: load and print both files, then present acceleration and pressure in turn.
pub fn run(dir: &Path, out: &mut impl Write, sink: &mut dyn ChartSink) -> Result<()> {
    let loaded = load_all(dir, out)?;
    render_samples(sink, &ACCELERATION, &loaded.acceleration)?;
    render_samples(sink, &PRESSURE, &loaded.pressure)?;
    Ok(())
}

/// The [`SampleError`] behind a pipeline failure, if loading was the cause.
pub fn sample_error(err: &anyhow::Error) -> Option<&SampleError> {
    err.chain().find_map(|e| e.downcast_ref::<SampleError>())
}

fn slugify(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    if slug.is_empty() { "chart".to_string() } else { slug }
}
