//! Currency formatting
//!
//! Amounts are rounded to two fraction digits only here, when they are
//! turned into text. Grouping and separators follow the user's settings.

use rust_decimal::Decimal;

use crate::config::Settings;
use crate::models::Money;

/// Formatting rules for amounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl CurrencyFormat {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            symbol: settings.currency_symbol.clone(),
            thousands_separator: settings.thousands_separator,
            decimal_separator: settings.decimal_separator,
        }
    }

    /// Format an amount, e.g. `1 234,56 €`
    pub fn format(&self, amount: Money) -> String {
        let rounded = amount.rounded();
        let negative = rounded < Decimal::ZERO;
        let digits = format!("{:.2}", rounded.abs());
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut out = String::with_capacity(digits.len() + self.symbol.len() + 6);
        if negative {
            out.push('-');
        }
        out.push_str(&group_thousands(whole, self.thousands_separator));
        out.push(self.decimal_separator);
        out.push_str(fraction);
        if !self.symbol.is_empty() {
            out.push(' ');
            out.push_str(&self.symbol);
        }
        out
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Insert `separator` between groups of three digits, from the right
fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
