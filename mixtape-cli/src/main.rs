use anyhow::Result;
use clap::Parser;
use mixtape_core::{should_use_color, ApplyError, Config, InvalidInput};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod migrate;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        },
    };

    // load_config only hands back configs with a valid report format
    let report = match cli.report {
        Some(report) => report.into(),
        None => config.report_format().unwrap_or_default(),
    };
    let use_color = !cli.no_color && should_use_color(config.defaults.use_color);
    tracing::debug!(?report, use_color, "Resolved report settings");

    let result = migrate::handle_migrate(
        &cli.input,
        &cli.changes,
        &cli.output,
        cli.dry_run,
        cli.indent.unwrap_or(config.defaults.indent),
        report,
        cli.quiet,
        use_color,
    );

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match cli.config {
        Some(ref path) => Config::load_from_path(path),
        // Broken implicit config files fall back to defaults
        None => Ok(Config::load().unwrap_or_default()),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("mixtape={0},mixtape_core={0}", default_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// 1 for data-consistency failures, 2 for unreadable or malformed input,
/// 3 for anything else (output write failures included)
fn exit_code(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<ApplyError>().is_some() {
        1
    } else if error.downcast_ref::<InvalidInput>().is_some() {
        2
    } else {
        3
    }
}
