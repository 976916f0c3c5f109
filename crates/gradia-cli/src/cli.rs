use clap::{Parser, Subcommand};
use gradia_core::GradientType;
use std::path::PathBuf;

/// Gradia: build, parse and prefix CSS gradient strings.
#[derive(Parser, Debug)]
#[command(name = "gradia", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (e.g. `gradia=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the gradient string for the configured or given stops.
    Format {
        /// Gradient type: linear, radial, repeating-linear, repeating-radial.
        #[arg(short = 't', long = "type")]
        gradient_type: Option<GradientType>,

        /// Angle or keyword, e.g. `90deg` or `to right`.
        #[arg(short, long)]
        direction: Option<String>,

        /// A stop as `"<color> <position>"`; repeat for more stops.
        /// Replaces any stops from the config.
        #[arg(short, long = "stop")]
        stops: Vec<String>,

        /// Print the four vendor-prefixed variants instead.
        #[arg(long)]
        prefixed: bool,
    },

    /// Decode a gradient string and print it as JSON.
    Parse {
        /// The gradient string, e.g. `linear-gradient(90deg, red 0%, blue 100%)`.
        text: String,

        /// Reject stops whose position is not a number.
        #[arg(long)]
        strict: bool,
    },

    /// Load and validate a config file, then print it as JSON.
    CheckConfig {
        /// Path to check; defaults to `--config` or the platform default.
        path: Option<PathBuf>,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
