use serde::{Deserialize, Serialize};

use crate::core::Industry;
use crate::io::OutputFormat;

/// Root configuration structure for roascalc
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RoasConfig {
    /// Default form values
    #[serde(default)]
    pub defaults: Option<DefaultsConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DefaultsConfig {
    /// ISO currency code used when none is given on the command line
    #[serde(default)]
    pub currency: Option<String>,

    /// Industry key used when none is given on the command line
    #[serde(default)]
    pub industry: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<String>,
    /// Disable colors and emoji
    #[serde(default)]
    pub plain: Option<bool>,
}

impl RoasConfig {
    pub fn currency_code(&self) -> &str {
        self.defaults
            .as_ref()
            .and_then(|d| d.currency.as_deref())
            .unwrap_or("USD")
    }

    pub fn industry(&self) -> Industry {
        let Some(key) = self.defaults.as_ref().and_then(|d| d.industry.as_deref()) else {
            return Industry::General;
        };
        Industry::lookup(key).unwrap_or_else(|| {
            log::warn!("Unknown industry '{}' in config. Using general.", key);
            Industry::General
        })
    }

    pub fn output_format(&self) -> OutputFormat {
        let Some(name) = self.output.as_ref().and_then(|o| o.default_format.as_deref()) else {
            return OutputFormat::Terminal;
        };
        OutputFormat::parse(name).unwrap_or_else(|| {
            log::warn!("Unknown output format '{}' in config. Using terminal.", name);
            OutputFormat::Terminal
        })
    }

    pub fn plain(&self) -> bool {
        self.output.as_ref().and_then(|o| o.plain).unwrap_or(false)
    }
}
