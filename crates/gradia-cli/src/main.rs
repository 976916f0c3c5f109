//! gradia: command-line front end for the gradient codec.

mod cli;
mod commands;
mod session;

use std::process::ExitCode;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = cli::parse();

    // Logs go to stderr so stdout stays clean for gradient output.
    let log_directive = args.log_level.as_deref().unwrap_or("gradia=info");
    let directive: Directive = log_directive.parse().unwrap_or_else(|e| {
        eprintln!("invalid log level '{log_directive}': {e}");
        "gradia=info".parse().expect("static directive is valid")
    });
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    match commands::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
