//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Recolor Configuration
# Only override what you want to change -- missing fields use defaults.

[convert]
# Target notation: oklch | oklab | lch | lab | rgb | hsl | hex
target_format = "oklch"
# precision = 2            # 0-6, decimal places for non-integer channels
# use_opacity = true       # keep "/ 1" when the source spelled out its alpha
# prompt_for_format = false

[report]
# max_errors_shown = 80    # failed tokens listed inline (use --error-list for all)

[logging]
# level = "warn"           # trace | debug | info | warn | error
"##
    .to_string()
}
