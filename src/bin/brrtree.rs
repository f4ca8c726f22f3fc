use std::process::ExitCode;

use brrtrouter_radix::cli::{run_cli, Cli};
use brrtrouter_radix::logging::{init_logging, LogConfig};
use clap::Parser;

fn main() -> anyhow::Result<ExitCode> {
    init_logging(&LogConfig::from_env())?;
    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    if run_cli(&cli, &mut stdout)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
