//! Subcommand implementations.

use gradia_common::{GradiaError, Result};
use gradia_config::{config_to_json, GradiaConfig};
use gradia_core::{EmitOptions, GradientPicker, GradientType, Stop};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::cli::{Args, Command};
use crate::session::{parse_stop_arg, picker_from_config};

/// JSON view of a decoded gradient.
#[derive(Debug, Serialize)]
struct ParsedView<'a> {
    #[serde(rename = "type")]
    gradient_type: GradientType,
    direction: &'a str,
    value: String,
    stops: Vec<StopView<'a>>,
}

#[derive(Debug, Serialize)]
struct StopView<'a> {
    color: &'a str,
    /// `null` when the position was not a number.
    position: Option<f64>,
}

impl<'a> From<&'a Stop> for StopView<'a> {
    fn from(stop: &'a Stop) -> Self {
        Self {
            color: &stop.color,
            position: Some(stop.position).filter(|p| !p.is_nan()),
        }
    }
}

pub fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Format {
            gradient_type,
            direction,
            stops,
            prefixed,
        } => {
            let config = load_or_default(args.config.as_deref());
            let picker = build_picker(&config, &stops)?;
            format(&picker, gradient_type, direction.as_deref(), prefixed);
            Ok(())
        }
        Command::Parse { text, strict } => parse(&text, strict),
        Command::CheckConfig { path } => check_config(path.or(args.config)),
    }
}

fn build_picker(config: &GradiaConfig, stops: &[String]) -> Result<GradientPicker> {
    let mut picker = picker_from_config(config);
    if stops.is_empty() {
        return Ok(picker);
    }

    let quiet = EmitOptions::silent();
    picker.clear(quiet);
    for arg in stops {
        let (color, position) = parse_stop_arg(arg).ok_or_else(|| {
            GradiaError::Other(format!("invalid stop '{arg}', expected \"<color> <position>\""))
        })?;
        picker.add_stop(position, color, false, quiet);
    }
    Ok(picker)
}

fn format(
    picker: &GradientPicker,
    gradient_type: Option<GradientType>,
    direction: Option<&str>,
    prefixed: bool,
) {
    if picker.stops().is_empty() {
        warn!("no stops configured, gradient is empty");
    }
    if prefixed {
        for value in picker.prefixed_values(gradient_type, direction) {
            println!("{value}");
        }
    } else {
        println!("{}", picker.value(gradient_type, direction));
    }
}

fn parse(text: &str, strict: bool) -> Result<()> {
    let mut picker = GradientPicker::default();
    let quiet = EmitOptions::silent();
    if strict {
        picker.set_value_strict(text, quiet)?;
    } else {
        picker.set_value(text, quiet);
    }

    let view = ParsedView {
        gradient_type: picker.gradient_type(),
        direction: picker.direction(),
        value: picker.value(None, None),
        stops: picker.stops().iter().map(StopView::from).collect(),
    };
    let json = serde_json::to_string_pretty(&view)
        .map_err(|e| GradiaError::Other(format!("failed to serialize result: {e}")))?;
    println!("{json}");
    Ok(())
}

fn check_config(path: Option<PathBuf>) -> Result<()> {
    let config = match path {
        Some(path) => gradia_config::load_config_from(&path)?,
        None => gradia_config::load_config()?,
    };
    info!("config is valid");
    println!("{}", config_to_json(&config));
    Ok(())
}

/// Config for commands that can run without one: problems are logged and
/// defaults used.
fn load_or_default(path: Option<&Path>) -> GradiaConfig {
    gradia_config::load_config_or_default(path).unwrap_or_else(|e| {
        warn!("failed to load config: {e}; using defaults");
        GradiaConfig::default()
    })
}
