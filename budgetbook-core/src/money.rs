//! Currency selection and display formatting.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
    CHF,
    INR,
}

impl Currency {
    pub const ALL: [Currency; 8] = [
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
        Currency::CAD,
        Currency::AUD,
        Currency::CHF,
        Currency::INR,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::CHF => "CHF",
            Currency::INR => "INR",
        }
    }

    /// Symbol as en-US locale formatting shows it.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
            Currency::CHF => "CHF ",
            Currency::INR => "₹",
        }
    }

    pub fn fraction_digits(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| format!("Unsupported currency: {}", s))
    }
}

/// Render an amount the way `Intl.NumberFormat('en-US', {style: 'currency'})`
/// does: symbol first, comma grouping, fixed fraction digits.
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    let digits = currency.fraction_digits();
    let rounded = amount.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let text = format!("{:.*}", digits as usize, rounded.abs());

    let (whole, fraction) = match text.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(currency.symbol());
    out.push_str(&group_thousands(whole));
    if let Some(f) = fraction {
        out.push('.');
        out.push_str(f);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_formats_usd() {
        assert_eq!(format_amount(dec!(1234.5), Currency::USD), "$1,234.50");
        assert_eq!(format_amount(dec!(0), Currency::USD), "$0.00");
        assert_eq!(format_amount(dec!(999), Currency::USD), "$999.00");
        assert_eq!(format_amount(dec!(1000000), Currency::USD), "$1,000,000.00");
    }

    #[test]
    fn test_formats_negative() {
        assert_eq!(format_amount(dec!(-12), Currency::EUR), "-€12.00");
    }

    #[test]
    fn test_yen_has_no_fraction() {
        assert_eq!(format_amount(dec!(1234.5), Currency::JPY), "¥1,235");
    }

    #[test]
    fn test_parses_codes_case_insensitively() {
        assert_eq!("gbp".parse::<Currency>(), Ok(Currency::GBP));
        assert!("XYZ".parse::<Currency>().is_err());
    }
}
