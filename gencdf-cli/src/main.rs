use clap::Parser;
use gencdf_common::Config;
use gencdf_core::{apply_padding, build_report, ingest, ingest_file, write_report, CdfOptions};
use std::io::{self, Write};
use std::path::PathBuf;

fn parse_column(s: &str) -> Result<usize, String> {
    // 1-based on the CLI, translated to 0-based internally
    let v: usize = s.parse().map_err(|_| format!("not an integer: {s}"))?;
    if v >= 1 {
        Ok(v)
    } else {
        Err(format!("column must be >= 1, got {v}"))
    }
}

fn parse_increment(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("not a float: {s}"))?;
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(format!("increment must be a positive float, got {s}"))
    }
}

#[derive(Parser)]
#[command(name = "gencdf", version, about = "Generate a CDF from any column of a text file")]
struct Cli {
    /// Input file; reads standard input when absent
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Insert zero-frequency filler rows between sparse values
    #[arg(short, long)]
    pad: bool,
    /// Start padding at this value
    #[arg(long = "pad_start")]
    pad_start: Option<f64>,
    /// Stop padding at this value
    #[arg(long = "pad_stop")]
    pad_stop: Option<f64>,
    /// Padding step size
    #[arg(long = "pad_inc", value_parser = parse_increment)]
    pad_inc: Option<f64>,
    /// Column to use (1-based)
    #[arg(short, long, default_value_t = 1, value_parser = parse_column)]
    col: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();

    if let Some(ref path) = cli.file {
        if !path.exists() {
            // diagnosed as a normal exit: no report, no failure status
            println!("File {} does not exist", path.display());
            return Ok(());
        }
    }

    let opts = CdfOptions {
        column: cli.col - 1,
        padding: cli.pad,
        pad_start: cli.pad_start,
        pad_stop: cli.pad_stop,
        pad_increment: cli.pad_inc.unwrap_or(config.padding.default_increment),
        comment_prefix: config.input.comment_prefix.clone(),
    };

    let mut dist = match cli.file {
        Some(ref path) => ingest_file(path, &opts)?,
        None => ingest(io::stdin().lock(), &opts)?,
    };
    let start = apply_padding(&mut dist, &opts)?;
    let points = build_report(&dist, start, &opts)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&points, &mut out)?;
    out.flush()?;
    Ok(())
}
