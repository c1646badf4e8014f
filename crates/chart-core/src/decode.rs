// File: crates/chart-core/src/decode.rs
// Summary: Flight-log dump -> `g_load.json` + `pressures.json`, with a min/max report.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::flightlog::{DumpOptions, FlightLog};
use crate::pipeline::{ACCELERATION, PRESSURE};
use crate::samples::{save_samples, summarize};

/// Decode `text`, print the g-load and pressure extremes to `out` and write
/// both sample files into `out_dir`. Returns the written paths, g-load first.
///
/// An empty sequence is reported as having no samples and still written as `[]`.
pub fn decode_to_dir(
    text: &str,
    out_dir: &Path,
    opts: &DumpOptions,
    out: &mut impl Write,
) -> Result<Vec<PathBuf>> {
    let dump = FlightLog::from_dump(text, opts).context("decoding page dump")?;
    let g_loads = dump.g_loads();
    let pressures = dump.pressures();

    report(out, "g load", &g_loads, Order::MaxFirst).context("writing report")?;
    report(out, "pressure", &pressures, Order::MinFirst).context("writing report")?;

    let mut written = Vec::with_capacity(2);
    for (file, samples) in [(ACCELERATION.file, &g_loads), (PRESSURE.file, &pressures)] {
        let path = out_dir.join(file);
        save_samples(&path, samples)?;
        log::info!("wrote {} samples to {}", samples.len(), path.display());
        written.push(path);
    }
    Ok(written)
}

#[derive(Clone, Copy)]
enum Order {
    MaxFirst,
    MinFirst,
}

fn report(out: &mut impl Write, name: &str, samples: &[f64], order: Order) -> std::io::Result<()> {
    let Some(stats) = summarize(samples) else {
        return writeln!(out, "No {name} samples");
    };
    let (max, min) = (("Max", stats.max), ("Min", stats.min));
    let lines = match order {
        Order::MaxFirst => [max, min],
        Order::MinFirst => [min, max],
    };
    for (label, value) in lines {
        writeln!(out, "{label} {name} {value}")?;
    }
    Ok(())
}
