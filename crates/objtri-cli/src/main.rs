//! convert_obj
//!
//! Rewrites every quad face of a Wavefront OBJ file as two triangles and
//! copies all other lines through unchanged.
//!
//! # Usage
//!
//! ```bash
//! convert_obj model_quads.obj model_tris.obj
//!
//! # Print line counts as JSON after converting
//! convert_obj --json model_quads.obj model_tris.obj
//!
//! # Debug logging on stderr
//! convert_obj -vv model_quads.obj model_tris.obj
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

/// Triangulate quad faces in an OBJ file
#[derive(Parser, Debug)]
#[command(name = "convert_obj")]
#[command(version, about, long_about = None)]
struct Args {
    /// OBJ file to read
    source: PathBuf,

    /// OBJ file to write (created or overwritten)
    target: PathBuf,

    /// Print conversion statistics as JSON after the completion message
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn log_directive(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    tracing::info!(
        source = %args.source.display(),
        target = %args.target.display(),
        "converting"
    );

    let stats = objtri_mesh::convert(&args.source, &args.target).with_context(|| {
        format!(
            "failed to convert {} into {}",
            args.source.display(),
            args.target.display()
        )
    })?;

    tracing::info!(
        quads_split = stats.quads_split,
        lines_written = stats.lines_written,
        "done"
    );

    println!("Conversion completed.");
    if args.json {
        println!("{}", serde_json::to_string(&stats)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_directive());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(cause) = err.downcast_ref::<objtri_core::ObjTriError>() {
                tracing::debug!(path = %cause.path().display(), "conversion failed");
            }
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
