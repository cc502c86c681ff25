//! wxodds - command line front end for the extreme weather odds service.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wxodds",
    version,
    about = "Extreme weather odds from historical NASA POWER data"
)]
struct Cli {
    /// Base URL of the odds service
    #[arg(long, env = "WXODDS_SERVER", default_value = wxodds_cmd::DEFAULT_SERVER)]
    server: String,

    #[command(subcommand)]
    command: wxodds_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Using server {}", cli.server);
    wxodds_cmd::run(&cli.server, cli.command).await
}
