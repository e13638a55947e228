//! SLD CLI - fetch the SpaceX launch dataset and inspect dashboard charts.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sld-cli",
    version,
    about = "SpaceX launch records dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: sld_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("starting sld-cli");
    sld_cmd::run(cli.command).await
}
