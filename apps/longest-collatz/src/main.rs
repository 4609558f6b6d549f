use anyhow::{anyhow, Context, Result};
use clap::Parser;
use collatz::{peak, Limit, Strategy};

#[derive(Parser)]
#[command(name = "longest-collatz")]
#[command(about = "Find the starting number below N with the longest Collatz chain")]
struct Cli {
    /// Exclusive upper bound on starting numbers
    #[arg(short, long, default_value_t = Limit::default())]
    limit: Limit,

    /// Strategy to run: direct, array or map
    #[arg(short, long, default_value_t = Strategy::default())]
    strategy: Strategy,

    /// Run all strategies one after another
    #[arg(short, long)]
    all: bool,

    /// Also print the highest value the winning chain reaches
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    setup_logger()?;
    let cli = Cli::parse();

    let strategies = if cli.all {
        Strategy::ALL.to_vec()
    } else {
        vec![cli.strategy]
    };

    for strategy in strategies {
        let report = strategy.run(cli.limit);
        println!("{}", report);
        if cli.verbose {
            if let Some(peak) = peak(report.best.start) {
                println!("  chain from {} peaks at {}", report.best.start, peak);
            }
        }
    }
    Ok(())
}

fn setup_logger() -> Result<()> {
    let env = tracing_subscriber::EnvFilter::builder()
        .with_env_var("COLLATZ_LOG")
        .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
        .from_env()
        .context("invalid COLLATZ_LOG filter")?;

    tracing_subscriber::fmt()
        .with_timer(tracing_subscriber::fmt::time::Uptime::default())
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
        .with_writer(std::io::stderr)
        .with_env_filter(env)
        .try_init()
        .map_err(|e| anyhow!(e))?;
    tracing::trace!(pid = std::process::id(), "logger initialised");
    Ok(())
}
