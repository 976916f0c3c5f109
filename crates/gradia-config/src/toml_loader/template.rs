//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Gradia Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[gradient]
# linear | radial | repeating-linear | repeating-radial
type = "linear"
# An angle (90deg, 0.25turn) or keyword (left, to right, center)
direction = "90deg"
# Gradient string loaded at startup; when set, [[stops]] is ignored.
# value = "linear-gradient(90deg, #000 0%, white 100%)"

[track]
# Stops can only be placed from the track between these positions.
# min = 0.0
# max = 100.0

# [[stops]]
# position = 0.0
# color = "#000"

# [[stops]]
# position = 100.0
# color = "white"
# selected = true
"##
    .to_string()
}
