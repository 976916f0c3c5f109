//! Decoding gradient strings back into a config.

use gradia_common::{format_position, GradientError, GradientType, Stop, StopId};
use serde::Serialize;
use tracing::{debug, warn};

use super::number::parse_float_prefix;
use super::split::{inner_arguments, split_arguments};
use crate::gradient::GradientConfig;

/// What a gradient string says, before it is applied to any config.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedGradient {
    /// `None` when no known gradient function name appears in the text.
    pub gradient_type: Option<GradientType>,
    /// `None` unless there were more than two arguments.
    pub direction: Option<String>,
    /// `(color, position)` pairs in source order.
    pub stops: Vec<(String, f64)>,
}

impl DecodedGradient {
    pub fn has_invalid_positions(&self) -> bool {
        self.stops.iter().any(|(_, position)| position.is_nan())
    }
}

/// Stops removed and added while applying a parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    /// In removal order (last-added first).
    pub removed: Vec<Stop>,
    pub added: Vec<StopId>,
    /// False when the text had no arguments and type/direction were kept.
    pub applied: bool,
}

/// Read a gradient string without touching any config.
///
/// The arguments are split on top-level `", "`. With more than two
/// arguments the first is taken as the direction; with two or fewer there
/// is no way to tell a direction from a stop, so every argument is a stop.
/// Each stop's last space-separated segment is its position and the rest,
/// concatenated, is its color.
pub fn decode(text: &str) -> DecodedGradient {
    let inner = inner_arguments(text);
    if inner.is_empty() {
        return DecodedGradient {
            gradient_type: None,
            direction: None,
            stops: Vec::new(),
        };
    }

    let mut args = split_arguments(inner);
    let direction = if args.len() > 2 {
        Some(args.remove(0).to_string())
    } else {
        None
    };

    let stops = args.into_iter().map(decode_stop).collect();

    DecodedGradient {
        gradient_type: GradientType::detect(text),
        direction,
        stops,
    }
}

fn decode_stop(arg: &str) -> (String, f64) {
    let mut segments: Vec<&str> = arg.split(' ').collect();
    let position = segments.pop().map(parse_float_prefix).unwrap_or(f64::NAN);
    (segments.concat(), position)
}

/// Replace `config`'s stops with those in `text`.
///
/// Existing stops are always cleared first. Type and direction are updated
/// when the text names them and kept otherwise. Positions that are not
/// numbers are stored as `NaN`; use [`parse_strict`] to reject them.
pub fn parse(config: &mut GradientConfig, text: &str) -> ParseOutcome {
    let decoded = decode(text);
    if decoded.has_invalid_positions() {
        let bad: Vec<String> = decoded
            .stops
            .iter()
            .filter(|(_, p)| p.is_nan())
            .map(|(c, p)| format!("{c} {}", format_position(*p)))
            .collect();
        warn!(stops = ?bad, "gradient has non-numeric stop positions");
    }
    apply(config, decoded)
}

/// Like [`parse`], but fails with `MalformedInput` (leaving `config`
/// untouched) if any stop position is not a number.
pub fn parse_strict(config: &mut GradientConfig, text: &str) -> Result<ParseOutcome, GradientError> {
    let decoded = decode(text);
    if let Some((color, _)) = decoded.stops.iter().find(|(_, p)| p.is_nan()) {
        return Err(GradientError::MalformedInput(format!(
            "stop `{color}` has no numeric position in `{text}`"
        )));
    }
    Ok(apply(config, decoded))
}

fn apply(config: &mut GradientConfig, decoded: DecodedGradient) -> ParseOutcome {
    let removed = config.stops.clear();

    // Non-empty arguments always yield at least one stop.
    if decoded.stops.is_empty() {
        debug!("gradient has no arguments, stops cleared");
        return ParseOutcome {
            removed,
            added: Vec::new(),
            applied: false,
        };
    }

    if let Some(direction) = decoded.direction {
        config.direction = direction;
    }
    if let Some(ty) = decoded.gradient_type {
        config.gradient_type = ty;
    }

    let added = decoded
        .stops
        .into_iter()
        .map(|(color, position)| config.stops.add(position, color, false))
        .collect::<Vec<_>>();

    debug!(
        gradient_type = %config.gradient_type,
        direction = %config.direction,
        stops = added.len(),
        "gradient parsed"
    );

    ParseOutcome {
        removed,
        added,
        applied: true,
    }
}
