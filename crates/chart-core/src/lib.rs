// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; sample loading, chart construction/rendering and flight-log decoding.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod downsample;
pub mod error;
pub mod samples;
pub mod flightlog;
pub mod decode;
pub mod pipeline;

pub use chart::{Chart, RenderOptions};
pub use series::Series;
pub use axis::Axis;
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
pub use downsample::lttb;
pub use error::{ChartError, DecodeError, ParseFailure, SampleError};
pub use samples::{
    build_index, format_samples, load_sample_numbers, load_samples, parse_samples, save_samples, summarize,
    SampleStats,
};
pub use flightlog::{DumpOptions, FlightLog, Reading};
pub use pipeline::{ChartSink, ChartSpec, PngExporter, ACCELERATION, PRESSURE};
