use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use quickqr_core::placeholder::placeholder_png;

#[derive(Args)]
pub struct PlaceholderArgs {
    /// Output file
    #[arg(short, long, default_value = "placeholder.png")]
    pub output: PathBuf,
}

pub fn run(args: &PlaceholderArgs) -> Result<()> {
    std::fs::write(&args.output, placeholder_png())?;
    println!("Wrote {}", args.output.display());
    Ok(())
}
