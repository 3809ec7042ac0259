//! Currency code to display symbol mapping.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Symbol used when a currency code is not in the table.
pub const DEFAULT_SYMBOL: &str = "$";

/// Supported currency codes in display order.
pub const CURRENCY_CODES: [(&str, &str); 34] = [
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("INR", "₹"),
    ("AUD", "A$"),
    ("CAD", "C$"),
    ("CHF", "CHF"),
    ("CNY", "¥"),
    ("JPY", "¥"),
    ("SGD", "S$"),
    ("NZD", "NZ$"),
    ("HKD", "HK$"),
    ("SEK", "kr"),
    ("NOK", "kr"),
    ("DKK", "kr"),
    ("PLN", "zł"),
    ("CZK", "Kč"),
    ("HUF", "Ft"),
    ("RON", "lei"),
    ("TRY", "₺"),
    ("ZAR", "R"),
    ("BRL", "R$"),
    ("MXN", "$"),
    ("AED", "د.إ"),
    ("SAR", "﷼"),
    ("THB", "฿"),
    ("MYR", "RM"),
    ("IDR", "Rp"),
    ("PHP", "₱"),
    ("VND", "₫"),
    ("KRW", "₩"),
    ("ILS", "₪"),
    ("RUB", "₽"),
    ("UAH", "₴"),
];

static SYMBOLS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CURRENCY_CODES.iter().copied().collect());

/// Symbol for a currency code, or `None` if the code is not supported.
pub fn lookup_symbol(code: &str) -> Option<&'static str> {
    SYMBOLS.get(code.trim().to_uppercase().as_str()).copied()
}

/// Symbol for a currency code, falling back to [`DEFAULT_SYMBOL`].
pub fn currency_symbol(code: &str) -> &'static str {
    lookup_symbol(code).unwrap_or(DEFAULT_SYMBOL)
}
