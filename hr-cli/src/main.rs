//! HR CLI - inspect dashboard chart endpoints and column visibility state.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "hr-cli",
    version,
    about = "HR dashboard chart and column toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: hr_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("hr-cli starting");
    hr_cmd::run(cli.command).await
}
