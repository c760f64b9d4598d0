use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use quickqr_core::client::QrClient;

use super::RequestArgs;

#[derive(Args)]
pub struct FetchArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Output file
    #[arg(short, long, default_value = "qrcode.png")]
    pub output: PathBuf,
}

pub fn run(args: &FetchArgs) -> Result<()> {
    let request = args.request.to_request()?;
    let client = QrClient::new()?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(format!("Fetching QR code for {:?}", request.text));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = client.fetch(&request);
    spinner.finish_and_clear();

    let image = result?;
    std::fs::write(&args.output, &image.bytes)?;

    let ok = Style::new().green().bold();
    let path = Style::new().underlined();
    println!(
        "{} {} ({}x{}, {} bytes)",
        ok.apply_to("Saved"),
        path.apply_to(args.output.display()),
        image.width,
        image.height,
        image.bytes.len()
    );
    Ok(())
}
