//! Estimate electron density and thermal energy of a nebula from an H-alpha image
//!
//! Averages the surface brightness stored in one image HDU of a FITS file and
//! prints the electron density, assumed electron temperature, thermal energy
//! density, and total thermal energy of a half-sphere of gas.
//!
//! Set `RUST_LOG=debug` to see image statistics and intermediate quantities.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use nebula::config::save_model;
use nebula::io::HALPHA_HDU_INDEX;
use nebula::shared_args::ModelArgs;
use nebula::{run_pipeline, write_report};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Electron density and thermal energy of an ionized nebula from an H-alpha FITS image"
)]
struct Args {
    /// H-alpha surface-brightness FITS file
    #[arg(default_value = "NGC7538_Halpha.fits")]
    input: PathBuf,

    /// Index of the HDU holding the image (0 is the primary HDU)
    #[arg(long, default_value_t = HALPHA_HDU_INDEX)]
    hdu: usize,

    #[command(flatten)]
    model: ModelArgs,

    /// Write the effective model parameters to this JSON file
    #[arg(long)]
    dump_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let model = args
        .model
        .resolve()
        .context("Failed to build nebula model")?;

    if let Some(path) = &args.dump_config {
        save_model(&model, path)
            .with_context(|| format!("Failed to write model to {}", path.display()))?;
        info!("Wrote model parameters to {}", path.display());
    }

    let output = run_pipeline(&args.input, args.hdu, &model)
        .with_context(|| format!("Failed to process {}", args.input.display()))?;

    let stdout = std::io::stdout();
    write_report(&output.estimate, &mut stdout.lock()).context("Failed to write report")?;

    Ok(())
}
