// File: crates/viewer/src/main.rs
// Summary: `sensor-chart` CLI; shows the acceleration and pressure charts one after another, or exports them, or decodes a flight-log dump into the sample files.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sensor_chart_core::pipeline;
use sensor_chart_core::types::{HEIGHT, WIDTH};
use sensor_chart_core::{theme, PngExporter, RenderOptions};

mod decode;
mod window;

use window::WindowSink;

/// Line charts of pressure and acceleration samples against sample index
#[derive(Parser)]
#[command(name = "sensor-chart")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    show: ShowArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Chart `g_load.json` and `pressures.json` (the default)
    Show(ShowArgs),

    /// Decode a base64 page dump into `g_load.json` and `pressures.json`
    Decode(decode::DecodeArgs),
}

#[derive(Args, Clone)]
struct ShowArgs {
    /// Directory holding `g_load.json` and `pressures.json`
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// Color theme (dark, light)
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Chart width in pixels
    #[arg(long, default_value_t = WIDTH)]
    width: i32,

    /// Chart height in pixels
    #[arg(long, default_value_t = HEIGHT)]
    height: i32,

    /// Write acceleration.png and pressure.png here instead of opening windows
    #[arg(long, value_name = "OUT_DIR")]
    export: Option<PathBuf>,
}

impl ShowArgs {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width.max(1),
            height: self.height.max(1),
            theme: theme::find(&self.theme),
            ..RenderOptions::default()
        }
    }
}

fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn show(args: &ShowArgs) -> Result<()> {
    let opts = args.render_options();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    log::info!("reading samples from {}", args.dir.display());

    match &args.export {
        Some(out_dir) => {
            let mut sink = PngExporter::new(out_dir, opts);
            pipeline::run(&args.dir, &mut out, &mut sink)?;
            for path in sink.written() {
                writeln!(out, "Wrote {}", path.display())?;
            }
        }
        None => {
            let mut sink = WindowSink::new(opts);
            pipeline::run(&args.dir, &mut out, &mut sink)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Show(args)) => show(&args),
        Some(Commands::Decode(args)) => decode::run(&args, &mut std::io::stdout().lock()),
        None => show(&cli.show),
    }
}
