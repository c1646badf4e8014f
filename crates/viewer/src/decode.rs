// File: crates/viewer/src/decode.rs
// Summary: `decode` subcommand arguments and input handling (file or stdin).

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use sensor_chart_core::decode::decode_to_dir;
use sensor_chart_core::DumpOptions;

#[derive(Args, Clone)]
pub struct DecodeArgs {
    /// Page dump to read; `-` reads standard input
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    input: PathBuf,

    /// Directory the sample files are written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Stop after this many pages
    #[arg(long)]
    max_pages: Option<usize>,
}

pub fn run(args: &DecodeArgs, out: &mut impl Write) -> Result<()> {
    let text = read_input(&args.input)?;
    decode_to_dir(&text, &args.out_dir, &DumpOptions { max_pages: args.max_pages }, out)?;
    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).context("reading page dump from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading page dump {}", input.display()))
    }
}
