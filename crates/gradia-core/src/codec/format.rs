//! Encoding a config into gradient strings.

use gradia_common::GradientType;

use crate::gradient::GradientConfig;

/// Vendor prefixes, in the order callers probe them.
pub const VENDOR_PREFIXES: [&str; 4] = ["-moz-", "-webkit-", "-o-", "-ms-"];

/// Render `<type>-gradient(<direction>, <colors>)`.
///
/// `gradient_type` and `direction` override the config's own values when
/// given. With no stops there is nothing to draw and the result is empty.
pub fn format(
    config: &GradientConfig,
    gradient_type: Option<GradientType>,
    direction: Option<&str>,
) -> String {
    let colors = config.stops.color_list_string();
    if colors.is_empty() {
        return String::new();
    }
    let ty = gradient_type.unwrap_or(config.gradient_type);
    let direction = direction.unwrap_or(&config.direction);
    format!("{}{direction}, {colors})", ty.function_open())
}

/// The formatted value with each vendor prefix prepended, in
/// [`VENDOR_PREFIXES`] order.
pub fn prefixed_variants(
    config: &GradientConfig,
    gradient_type: Option<GradientType>,
    direction: Option<&str>,
) -> [String; 4] {
    let value = format(config, gradient_type, direction);
    VENDOR_PREFIXES.map(|prefix| format!("{prefix}{value}"))
}
