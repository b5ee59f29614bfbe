use anyhow::Context;
use clap::Parser;
use std::io::ErrorKind;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod error;
mod registry;
mod services;

use cli::Cli;
use commands::Dispatcher;
use error::DispatchError;
use registry::Registry;
use services::build::MakeBuild;
use services::output::{print_report, Console, Palette};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let registry = match &cli.registry {
        Some(path) => Registry::load(path)
            .with_context(|| format!("loading suite table {}", path.display()))?,
        None => Registry::builtin(cli.profile).context("loading built-in suite table")?,
    };
    tracing::debug!(project = %registry.project, suites = registry.suites().len(), "registry loaded");

    let mut build = MakeBuild::new(cli.make.clone(), cli.dir.clone());
    let mut console = if cli.json {
        Console::sink()
    } else {
        Console::stdout(Palette::detect(cli.no_color))
    };

    let mut dispatcher = Dispatcher::new(&registry, &mut build, &mut console);
    let outcome = dispatcher.dispatch(&cli.tokens);
    let report = dispatcher.into_report();

    match outcome {
        Ok(()) => {
            if cli.json {
                print_report(&report)?;
            }
            if cli.strict && !report.totals.all_passed() {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
        Err(DispatchError::Abort(abort)) => {
            tracing::debug!(%abort, "invocation aborted");
            if cli.json {
                print_report(&report)?;
            }
            Ok(ExitCode::FAILURE)
        }
        Err(DispatchError::Build(err)) => Err(err.into()),
        Err(DispatchError::Output(err)) if err.kind() == ErrorKind::BrokenPipe => {
            tracing::debug!(error = %err, "stdout closed, stopping");
            Ok(ExitCode::FAILURE)
        }
        Err(err @ DispatchError::Output(_)) => Err(err.into()),
    }
}
