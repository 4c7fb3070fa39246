use anyhow::{Context, Result};
use clap::Parser;
use keycalc::config::Config;
use keycalc::session::Session;
use keycalc::terminal::{TerminalOptions, run_interactive, run_script};
use keycalc::{evaluate, format_result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// keycalc - a keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "keycalc", version)]
#[command(about = "Drive a keypad calculator from the terminal", long_about = None)]
struct Args {
    /// Run a single key script (e.g. "5 + 3 =") and print the final display
    #[arg(long, conflicts_with = "eval")]
    keys: Option<String>,

    /// Evaluate an expression directly and print the result
    #[arg(long)]
    eval: Option<String>,

    /// Print the display after every key
    #[arg(long)]
    trace: bool,

    /// Path to a config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(config: &Config, verbose: bool) {
    let fallback = if verbose {
        "keycalc=debug".to_string()
    } else {
        config.log_filter.clone()
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref()).context("failed to load configuration")?;
    init_logging(&config, args.verbose);

    if let Some(expression) = args.eval {
        let value = evaluate(&expression)
            .with_context(|| format!("failed to evaluate '{}'", expression))?;
        println!("{}", format_result(value));
        return Ok(());
    }

    if let Some(script) = args.keys {
        let mut session = Session::new();
        for display in run_script(&mut session, &script, args.trace)? {
            println!("{}", display);
        }
        return Ok(());
    }

    let options = TerminalOptions::from_config(&config, args.trace);
    let stdin = std::io::stdin();
    run_interactive(stdin.lock(), std::io::stdout(), &options)
}
