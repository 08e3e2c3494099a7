//! ARS CLI - Command line tool for the arsenic exceedance dashboard.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ars-cli",
    version,
    about = "Arsenic in Mexican water bodies, 2012-2024"
)]
struct Cli {
    #[command(subcommand)]
    command: ars_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    log::debug!("{:?}", cli.command);
    ars_cmd::run(cli.command)
}
