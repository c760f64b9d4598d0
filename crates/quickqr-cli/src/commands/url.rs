use anyhow::Result;
use clap::Args;

use super::RequestArgs;

#[derive(Args)]
pub struct UrlArgs {
    #[command(flatten)]
    pub request: RequestArgs,
}

pub fn run(args: &UrlArgs) -> Result<()> {
    let request = args.request.to_request()?;
    println!("{}", request.url()?);
    Ok(())
}
