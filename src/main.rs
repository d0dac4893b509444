use crate::args::Args;
use crate::error::{ArgumentError, Error};
use crate::output::{write_bare, write_json};
use crate::scanner::nmap::Nmap;
use crate::scanner::Scanner;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

mod args;
mod error;
mod output;
mod scanner;
mod utils;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    let _guard = init_tracing(args.verbose, args.log_dir.as_deref());

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Argument(ArgumentError::MissingSubnet)) => {
            let _ = Args::command().print_help();
            ExitCode::from(1)
        }
        Err(error) => {
            tracing::error!("{} {}", error.headline().red(), error);
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let config = args.into_config()?;
    tracing::info!("Network : {}", config.network.trunc());

    let nmap = Nmap::new(config.nmap, config.timeout);
    let scanner = Scanner::new(nmap, config.subnet, config.verbose);
    let hosts = scanner.run().await?;

    let stdout = io::stdout().lock();
    if config.bare {
        write_bare(&hosts, stdout)?;
    } else {
        write_json(&hosts, stdout)?;
    }
    Ok(())
}

/// Log to stderr, and to a daily rolling file when a log directory is given.
/// The returned guard must be held until exit so the file writer is flushed.
fn init_tracing(verbose: bool, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "subnet-hosts.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (
                Some(fmt::Layer::new().with_ansi(false).with_writer(non_blocking)),
                Some(guard),
            )
        }
        None => (None, None),
    };
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .with(fmt::Layer::new().with_writer(io::stderr))
        .with(file_layer);
    tracing::subscriber::set_global_default(subscriber).expect("Unable to set a global subscriber");
    guard
}
