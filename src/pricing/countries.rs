//! Country reference table: currency and average residential tariff per country

use serde::{Deserialize, Serialize};

/// Static information about a country's electricity market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryInfo {
    /// ISO 3166-1 alpha-2 code
    pub code: String,
    pub display_name: String,
    /// ISO 4217 currency code
    pub currency_code: String,
    pub currency_symbol: String,
    /// Average price per kWh in the local currency
    pub default_tariff: f64,
}

impl CountryInfo {
    fn builtin(code: &str, display_name: &str, currency_code: &str, currency_symbol: &str, default_tariff: f64) -> Self {
        Self {
            code: code.to_string(),
            display_name: display_name.to_string(),
            currency_code: currency_code.to_string(),
            currency_symbol: currency_symbol.to_string(),
            default_tariff,
        }
    }
}

/// Ordered set of known countries, looked up by code
#[derive(Debug, Clone)]
pub struct CountryTable {
    countries: Vec<CountryInfo>,
}

impl CountryTable {
    /// Table with the built-in countries only
    pub fn builtin() -> Self {
        Self {
            countries: vec![
                CountryInfo::builtin("ES", "Espa\u{00F1}a", "EUR", "\u{20AC}", 0.15),
                CountryInfo::builtin("US", "Estados Unidos", "USD", "$", 0.14),
                CountryInfo::builtin("MX", "M\u{00E9}xico", "MXN", "$", 1.5),
                CountryInfo::builtin("AR", "Argentina", "ARS", "$", 5.0),
                CountryInfo::builtin("CO", "Colombia", "COP", "$", 500.0),
                CountryInfo::builtin("CL", "Chile", "CLP", "$", 100.0),
                CountryInfo::builtin("PE", "Per\u{00FA}", "PEN", "S/", 0.6),
            ],
        }
    }

    /// Built-in table extended (or overridden by code) with configured entries
    pub fn with_overrides(extra: &[CountryInfo]) -> Self {
        let mut table = Self::builtin();
        for entry in extra {
            let mut entry = entry.clone();
            entry.code = entry.code.to_uppercase();
            match table.countries.iter_mut().find(|c| c.code == entry.code) {
                Some(existing) => {
                    log::debug!("Overriding built-in country {}", entry.code);
                    *existing = entry;
                }
                None => table.countries.push(entry),
            }
        }
        table
    }

    /// Case-insensitive lookup
    pub fn get(&self, code: &str) -> Option<&CountryInfo> {
        let code = code.trim();
        self.countries.iter().find(|c| c.code.eq_ignore_ascii_case(code))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryInfo> {
        self.countries.iter()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl Default for CountryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let table = CountryTable::builtin();
        assert_eq!(table.len(), 7);
        assert_eq!(table.get("MX").unwrap().default_tariff, 1.5);
        assert_eq!(table.get("pe").unwrap().currency_symbol, "S/");
        assert_eq!(table.get("ES").unwrap().currency_code, "EUR");
        assert!(table.get("FR").is_none());
    }

    #[test]
    fn test_overrides() {
        let extra = vec![
            CountryInfo::builtin("fr", "Francia", "EUR", "\u{20AC}", 0.25),
            CountryInfo::builtin("ES", "Espa\u{00F1}a", "EUR", "\u{20AC}", 0.18),
        ];
        let table = CountryTable::with_overrides(&extra);

        assert_eq!(table.len(), 8);
        assert_eq!(table.get("FR").unwrap().default_tariff, 0.25);
        assert_eq!(table.get("ES").unwrap().default_tariff, 0.18);
        // Built-ins keep their position
        assert_eq!(table.iter().next().unwrap().code, "ES");
    }
}
