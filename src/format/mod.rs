//! Display formatting for money and energy

use crate::pricing::TariffContext;

/// Formats amounts in the active tariff currency with two fraction digits
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormatter {
    prefix: String,
}

impl CurrencyFormatter {
    pub fn new(currency_code: &str, currency_symbol: &str) -> Self {
        // "$" alone is ambiguous between the dollar and peso countries
        let prefix = if currency_symbol.is_empty() || (currency_symbol == "$" && currency_code != "USD") {
            format!("{} ", currency_code)
        } else {
            currency_symbol.to_string()
        };
        Self { prefix }
    }

    pub fn for_tariff(tariff: &TariffContext) -> Self {
        Self::new(&tariff.currency_code, &tariff.currency_symbol)
    }

    /// `1234.5` -> `€1,234.50`
    pub fn format(&self, value: f64) -> String {
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{}{}{}", sign, self.prefix, group_thousands(value.abs(), 2))
    }
}

/// `180.0` -> `180.00 kWh`
pub fn format_kwh(value: f64) -> String {
    format!("{} kWh", group_thousands(value, 2))
}

/// Digits printed past the requested precision to detect exact ties
const TIE_CHECK_DIGITS: usize = 30;

/// Fixed-point rendering that resolves exact ties away from zero.
///
/// `format!("{:.2}")` rounds `0.125` to `"0.12"`; chart and summary figures
/// are expected as `"0.13"`. Negative zero prints without a sign.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    let expanded = format!("{:.*}", decimals + TIE_CHECK_DIGITS, magnitude);
    let (head, tail) = expanded.split_at(expanded.len() - TIE_CHECK_DIGITS);
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');

    let digits = if is_tie {
        increment_last_digit(head.trim_end_matches('.'))
    } else {
        format!("{:.*}", decimals, magnitude)
    };
    format!("{}{}", sign, digits)
}

/// `"0.12"` -> `"0.13"`, `"9.99"` -> `"10.00"`
fn increment_last_digit(digits: &str) -> String {
    let mut chars: Vec<char> = digits.chars().collect();
    let mut carry = true;
    for ch in chars.iter_mut().rev() {
        match *ch {
            '.' => continue,
            '9' => *ch = '0',
            d => {
                *ch = char::from(d as u8 + 1);
                carry = false;
                break;
            }
        }
    }
    if carry {
        chars.insert(0, '1');
    }
    chars.into_iter().collect()
}

/// Fixed-point rendering with `,` thousands separators
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let fixed = to_fixed(value, decimals);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_ties_round_up() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.375, 2), "0.38");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(9.995, 2), "9.99");
        assert_eq!(to_fixed(99.875, 2), "99.88");
        assert_eq!(to_fixed(9.5, 0), "10");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
    }

    #[test]
    fn test_to_fixed_plain_values() {
        assert_eq!(to_fixed(180.0, 2), "180.00");
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(0.126, 2), "0.13");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0, 2), "0.00");
        assert_eq!(group_thousands(999.999, 2), "1,000.00");
        assert_eq!(group_thousands(1234567.891, 2), "1,234,567.89");
        assert_eq!(group_thousands(-1234.5, 2), "-1,234.50");
        assert_eq!(group_thousands(42.0, 0), "42");
        assert_eq!(group_thousands(1000.125, 2), "1,000.13");
    }

    #[test]
    fn test_currency_prefixes() {
        assert_eq!(CurrencyFormatter::new("EUR", "\u{20AC}").format(1234.5), "\u{20AC}1,234.50");
        assert_eq!(CurrencyFormatter::new("USD", "$").format(27.0), "$27.00");
        assert_eq!(CurrencyFormatter::new("MXN", "$").format(1.5), "MXN 1.50");
        assert_eq!(CurrencyFormatter::new("PEN", "S/").format(3.0), "S/3.00");
        assert_eq!(CurrencyFormatter::new("EUR", "\u{20AC}").format(-2.0), "-\u{20AC}2.00");
    }

    #[test]
    fn test_format_kwh() {
        assert_eq!(format_kwh(180.0), "180.00 kWh");
        assert_eq!(format_kwh(1500.256), "1,500.26 kWh");
    }
}
