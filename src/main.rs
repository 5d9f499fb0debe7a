use clap::Parser;
use tracing_subscriber::EnvFilter;

use bible_ref::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("bible_ref=debug,info")
    } else {
        EnvFilter::new("bible_ref=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Convert(args) => {
            cli::convert::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Simplify(args) => {
            cli::simplify::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Contains(args) => {
            cli::contains::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Enumerate(args) => {
            cli::enumerate::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Link(args) => {
            cli::link::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Catalog(args) => {
            cli::catalog::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
