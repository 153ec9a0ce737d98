//! Pricing engine for electricity cost calculation
//!
//! Holds the active tariff context: the selected country, its currency, and
//! the price per kWh. Selecting a country always resets the price to that
//! country's average tariff, discarding any manual edit.

mod countries;

pub use countries::{CountryInfo, CountryTable};

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Active tariff: country, currency and price per kWh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffContext {
    pub country_code: String,
    pub currency_code: String,
    pub currency_symbol: String,
    pub price_per_kwh: f64,
}

impl TariffContext {
    /// Tariff context at the country's default price
    pub fn for_country(country: &CountryInfo) -> Self {
        Self {
            country_code: country.code.clone(),
            currency_code: country.currency_code.clone(),
            currency_symbol: country.currency_symbol.clone(),
            price_per_kwh: country.default_tariff,
        }
    }
}

/// Pricing engine that owns the country table and the active tariff
#[derive(Debug, Clone)]
pub struct PricingEngine {
    countries: CountryTable,
    tariff: TariffContext,
}

impl PricingEngine {
    /// Create a new pricing engine with the given country selected
    pub fn new(countries: CountryTable, country_code: &str) -> Result<Self> {
        let country = countries
            .get(country_code)
            .ok_or_else(|| Error::UnknownCountry(country_code.to_string()))?;
        let tariff = TariffContext::for_country(country);

        Ok(Self { countries, tariff })
    }

    /// Select a country, resetting the price to its default tariff
    pub fn select_country(&mut self, country_code: &str) -> Result<&TariffContext> {
        let country = self
            .countries
            .get(country_code)
            .ok_or_else(|| Error::UnknownCountry(country_code.to_string()))?;

        self.tariff = TariffContext::for_country(country);
        log::debug!(
            "Selected country {} ({} {}/kWh)",
            self.tariff.country_code,
            self.tariff.price_per_kwh,
            self.tariff.currency_code
        );
        Ok(&self.tariff)
    }

    /// Manually set the price per kWh. The value must already be validated.
    pub fn set_rate(&mut self, price_per_kwh: f64) {
        self.tariff.price_per_kwh = price_per_kwh;
    }

    /// Current price per kWh
    pub fn rate(&self) -> f64 {
        self.tariff.price_per_kwh
    }

    /// Whether the current rate differs from the selected country's default
    pub fn is_manual_rate(&self) -> bool {
        self.current_country()
            .map(|c| c.default_tariff != self.tariff.price_per_kwh)
            .unwrap_or(false)
    }

    pub fn tariff(&self) -> &TariffContext {
        &self.tariff
    }

    pub fn current_country(&self) -> Option<&CountryInfo> {
        self.countries.get(&self.tariff.country_code)
    }

    pub fn countries(&self) -> &CountryTable {
        &self.countries
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        let countries = CountryTable::builtin();
        let tariff = countries
            .iter()
            .next()
            .map(TariffContext::for_country)
            .unwrap_or_else(|| TariffContext {
                country_code: String::new(),
                currency_code: String::new(),
                currency_symbol: String::new(),
                price_per_kwh: 0.0,
            });
        Self { countries, tariff }
    }
}
