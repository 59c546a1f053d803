use anyhow::Result;
use clap::Parser;
use lp_rsqrt_app::{Cli, run};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)?;
    Ok(())
}
