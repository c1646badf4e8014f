// File: crates/chart-core/src/samples.rs
// Summary: Sample sequences: load/save flat JSON arrays of numbers, index generation and basic stats.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::{Number, Value};

use crate::error::{ParseFailure, SampleError};

/// Read `path` and parse it as a JSON array of numbers.
///
/// Order and length match the array exactly. Every element is checked here,
/// so a non-numeric entry fails at load time rather than when drawing.
pub fn load_samples(path: impl AsRef<Path>) -> Result<Vec<f64>, SampleError> {
    load_sample_numbers(path).map(|numbers| sample_values(&numbers))
}

/// Like [`load_samples`], but keeps each number as it was written in the file.
pub fn load_sample_numbers(path: impl AsRef<Path>) -> Result<Vec<Number>, SampleError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| SampleError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    // content that is not UTF-8 is bad JSON, not an unreadable file
    let numbers = parse_sample_numbers(&bytes).map_err(|reason| SampleError::Parse {
        path: path.to_path_buf(),
        reason,
    })?;
    log::debug!("loaded {} samples from {}", numbers.len(), path.display());
    Ok(numbers)
}

/// Parse JSON holding a flat array of numbers.
pub fn parse_samples(json: impl AsRef<[u8]>) -> Result<Vec<f64>, ParseFailure> {
    parse_sample_numbers(json).map(|numbers| sample_values(&numbers))
}

pub fn parse_sample_numbers(json: impl AsRef<[u8]>) -> Result<Vec<Number>, ParseFailure> {
    let value: Value = serde_json::from_slice(json.as_ref())?;
    let items = match value {
        Value::Array(items) => items,
        other => return Err(ParseFailure::NotAnArray(kind_of(&other))),
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, v)| match v {
            Value::Number(n) if n.as_f64().is_some() => Ok(n),
            other => Err(ParseFailure::NonNumeric { index, found: kind_of(&other) }),
        })
        .collect()
}

/// Numeric values of parsed sample numbers.
pub fn sample_values(numbers: &[Number]) -> Vec<f64> {
    numbers.iter().filter_map(Number::as_f64).collect()
}

/// `[a, b, c]` with every number shown as written, e.g. `[101325, 1.02]`.
pub fn format_samples(numbers: &[Number]) -> String {
    let items: Vec<String> = numbers.iter().map(Number::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Write `samples` to `path` as a JSON array.
pub fn save_samples(path: impl AsRef<Path>, samples: &[f64]) -> Result<(), SampleError> {
    let path = path.as_ref();
    let io_err = |source| SampleError::FileAccess { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let file = fs::File::create(path).map_err(io_err)?;
    let mut w = BufWriter::new(file);
    serde_json::to_writer(&mut w, samples)
        .map_err(std::io::Error::from)
        .map_err(io_err)?;
    w.flush().map_err(io_err)?;
    Ok(())
}

/// `[0, 1, ..., len - 1]` for the given sequence.
pub fn build_index(samples: &[f64]) -> Vec<usize> {
    (0..samples.len()).collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleStats {
    pub len: usize,
    pub min: f64,
    pub max: f64,
}

/// Min/max over a sequence; `None` when it is empty.
pub fn summarize(samples: &[f64]) -> Option<SampleStats> {
    let (&first, rest) = samples.split_first()?;
    let (min, max) = rest
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    Some(SampleStats { len: samples.len(), min, max })
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
