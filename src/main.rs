use clap::Parser;
use vecforge::cli::{load_settings, run, Args};
use vecforge::init_logging;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging()?;
    tracing::debug!("vecforge {} (built {})", vecforge::VERSION, vecforge::BUILD_DATE);

    let settings = load_settings(args.config.as_deref())?;
    println!("{}", run(&args.command, &settings)?);

    Ok(())
}
