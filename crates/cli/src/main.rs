use clap::Parser;
use colored::Colorize;
use data_loader::DataLoadError;
use reel_stats::{Cli, Outcome, run};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr so reports on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if !io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    let invocation = Cli::parse().into_invocation();
    let mut stdout = io::stdout().lock();

    match run(&invocation, &mut stdout) {
        Ok(Outcome::Reported) => ExitCode::SUCCESS,
        Ok(Outcome::FilteredOut) => {
            tracing::info!("No records matched the filters");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn report_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "error:".red().bold(), err);

    let missing_file = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<DataLoadError>())
        .any(|cause| matches!(cause, DataLoadError::FileNotFound { .. }));
    if missing_file {
        eprintln!(
            "{} pass the ratings export with {}",
            "hint:".yellow().bold(),
            "--path <FILE>".bold()
        );
    }
}
