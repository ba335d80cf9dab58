use std::io;

use clap::Parser;
use provider_settings::{logging, EnvConfig};
use settings_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let env = EnvConfig::from_env();
    logging::init(&env);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    settings_cli::run(cli, &env, &mut out)
}
