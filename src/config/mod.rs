mod core;
mod loader;

pub use self::core::{DefaultsConfig, OutputConfig, RoasConfig};
pub use loader::{directory_ancestors, load_config, load_config_from, parse_config, CONFIG_FILE_NAME};

/// Default `.roascalc.toml` written by `roascalc init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# roascalc configuration

[defaults]
# ISO currency code used when --currency is omitted
currency = "USD"
# Industry key used when --industry is omitted
# (general, ecommerce, saas, finance, realestate, automotive,
#  education, healthcare, travel, retail, b2b)
industry = "general"

[output]
# terminal, json or markdown
default_format = "terminal"
# Disable colors and emoji
plain = false
"#;
