use crate::insights::InsightSeverity;
use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    Auto,   // Use emoji if terminal supports Unicode
    Always, // Always use emoji
    Never,  // Never use emoji
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_emoji_support(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: EmojiMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Resolve the color policy from `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if var("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }

        if var("CLICOLOR").as_deref() == Some("0") {
            config.color = ColorMode::Never;
        }

        if var("CLICOLOR_FORCE").as_deref() == Some("1") {
            config.color = ColorMode::Always;
        }

        config
    }

    /// ASCII-only, no colors, no emoji
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }
}

/// Applies color and emoji policy to terminal text.
pub struct TerminalStyle {
    color: bool,
    emoji: bool,
}

impl TerminalStyle {
    pub fn new(config: FormattingConfig) -> Self {
        Self {
            color: config.color.should_use_color(),
            emoji: config.emoji.should_use_emoji(),
        }
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    pub fn danger(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    pub fn severity(&self, text: &str, severity: InsightSeverity) -> String {
        match severity {
            InsightSeverity::Success => self.success(text),
            InsightSeverity::Warning => self.warning(text),
            InsightSeverity::Danger => self.danger(text),
        }
    }

    /// The emoji itself, or its bracketed ASCII fallback.
    pub fn icon(&self, emoji: &str) -> String {
        if self.emoji {
            emoji.to_string()
        } else {
            emoji_fallback(emoji).to_string()
        }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

fn detect_emoji_support() -> bool {
    if env::var("TERM").is_ok_and(|term| term == "dumb") {
        return false;
    }

    // First non-empty of LC_ALL, LC_CTYPE, LANG decides, as in setlocale(3)
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.is_empty());
    match locale {
        Some(locale) => locale_is_unicode(&locale),
        None => cfg!(windows),
    }
}

fn locale_is_unicode(locale: &str) -> bool {
    let lower = locale.to_ascii_lowercase();
    lower.contains("utf-8") || lower.contains("utf8")
}

/// Point `colored` at the resolved color policy for the rest of the process.
pub fn configure_output(config: &FormattingConfig) {
    colored::control::set_override(config.color.should_use_color());
}

pub fn emoji_fallback(emoji: &str) -> &'static str {
    match emoji {
        "🎉" => "[WIN]",
        "👍" => "[GOOD]",
        "⚠️" => "[WARN]",
        "❌" => "[LOSS]",
        "💰" => "[MONEY]",
        "📉" => "[DOWN]",
        "🚀" => "[FAST]",
        "📈" => "[UP]",
        "🎯" => "[TARGET]",
        "✍️" => "[EDIT]",
        "🔄" => "[CYCLE]",
        "📱" => "[CHANNEL]",
        "🧪" => "[TEST]",
        "📊" => "[STATS]",
        "💡" => "[IDEA]",
        "✅" => "[OK]",
        _ => "*",
    }
}

/// Format an amount with thousands separators and exactly two decimals,
/// e.g. `12345.6` becomes `12,345.60`.
pub fn format_grouped(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Amounts that round to zero lose their sign.
    let sign = if amount < 0.0 && fixed.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac}")
}

/// Currency symbol followed by the grouped amount, e.g. `$1,500.00`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    format!("{symbol}{}", format_grouped(amount))
}
