//! Application runtime state (not persisted)
//!
//! One explicitly owned value holding the appliance list, the appliance form,
//! the tariff, and the view selections. Derived figures are recomputed from
//! scratch on every call through the consumption engine.

use crate::consumption;
use crate::core::input::{parse_daily_hours, parse_name, parse_non_negative};
use crate::core::{
    Appliance, ApplianceCost, ApplianceId, ChartBucket, ChartPeriod, Config, ConsumptionSummary, Error, Result,
    Theme,
};
use crate::format::CurrencyFormatter;
use crate::pricing::{CountryTable, PricingEngine, TariffContext};

/// Whether the form adds a new appliance or replaces an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Idle,
    Editing(ApplianceId),
}

/// Raw text fields of the appliance form, as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplianceForm {
    pub name: String,
    pub power_watts: String,
    pub daily_hours: String,
    pub mode: FormMode,
}

impl ApplianceForm {
    fn clear(&mut self) {
        *self = Self::default();
    }
}

pub struct AppState {
    appliances: Vec<Appliance>,
    form: ApplianceForm,
    pricing: PricingEngine,
    /// Tariff as last typed or reset by a country change
    tariff_input: String,
    chart_period: ChartPeriod,
    theme: Theme,
    last_id: ApplianceId,
}

impl AppState {
    pub fn new(pricing: PricingEngine) -> Self {
        let tariff_input = pricing.rate().to_string();
        Self {
            appliances: Vec::new(),
            form: ApplianceForm::default(),
            pricing,
            tariff_input,
            chart_period: ChartPeriod::default(),
            theme: Theme::default(),
            last_id: 0,
        }
    }

    /// Build the initial state from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let countries = CountryTable::with_overrides(&config.countries);
        let pricing = PricingEngine::new(countries, &config.general.country)?;

        let mut state = Self::new(pricing);
        state.chart_period = config.general.chart_period;
        state.theme = config.general.theme;

        if let Some(rate) = config.pricing.tariff_override {
            state.set_tariff_input(&rate.to_string())?;
        }

        Ok(state)
    }

    // Form

    /// Fill the form fields
    pub fn set_form(&mut self, name: &str, power_watts: &str, daily_hours: &str) {
        self.form.name = name.to_string();
        self.form.power_watts = power_watts.to_string();
        self.form.daily_hours = daily_hours.to_string();
    }

    /// Pre-fill the form with an appliance and switch to editing it
    pub fn begin_edit(&mut self, id: ApplianceId) -> Result<()> {
        let appliance = self.find(id).ok_or(Error::ApplianceNotFound(id))?.clone();

        self.form.name = appliance.name;
        self.form.power_watts = appliance.power_watts.to_string();
        self.form.daily_hours = appliance.daily_hours.to_string();
        self.form.mode = FormMode::Editing(id);

        log::debug!("Editing appliance {}", id);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.form.clear();
    }

    /// Validate the form and append or replace an appliance.
    ///
    /// On failure nothing changes, including the form contents.
    pub fn submit_form(&mut self) -> Result<ApplianceId> {
        let (name, power_watts, daily_hours) = match self.validate_form() {
            Ok(fields) => fields,
            Err(e) => {
                log::warn!("Rejected appliance form: {}", e);
                return Err(e);
            }
        };

        let id = match self.form.mode {
            FormMode::Idle => {
                let id = self.next_id();
                self.appliances.push(Appliance {
                    id,
                    name,
                    power_watts,
                    daily_hours,
                });
                log::debug!("Added appliance {}", id);
                id
            }
            FormMode::Editing(id) => {
                let appliance = self
                    .appliances
                    .iter_mut()
                    .find(|a| a.id == id)
                    .ok_or(Error::ApplianceNotFound(id))?;
                appliance.name = name;
                appliance.power_watts = power_watts;
                appliance.daily_hours = daily_hours;
                log::debug!("Updated appliance {}", id);
                id
            }
        };

        self.form.clear();
        Ok(id)
    }

    fn validate_form(&self) -> Result<(String, f64, f64)> {
        let name = parse_name(&self.form.name)?;
        let power_watts = parse_non_negative("power (W)", &self.form.power_watts)?;
        let daily_hours = parse_daily_hours(&self.form.daily_hours)?;
        Ok((name, power_watts, daily_hours))
    }

    /// Creation timestamp in milliseconds, strictly increasing within the session
    fn next_id(&mut self) -> ApplianceId {
        let now = chrono::Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }

    // List

    /// Remove the appliance with `id`
    pub fn delete(&mut self, id: ApplianceId) -> Result<Appliance> {
        let index = self
            .appliances
            .iter()
            .position(|a| a.id == id)
            .ok_or(Error::ApplianceNotFound(id))?;

        if self.form.mode == FormMode::Editing(id) {
            self.form.clear();
        }

        log::debug!("Deleted appliance {}", id);
        Ok(self.appliances.remove(index))
    }

    pub fn appliances(&self) -> &[Appliance] {
        &self.appliances
    }

    pub fn find(&self, id: ApplianceId) -> Option<&Appliance> {
        self.appliances.iter().find(|a| a.id == id)
    }

    pub fn form(&self) -> &ApplianceForm {
        &self.form
    }

    // Tariff

    /// Apply a manually typed tariff. Invalid text keeps the previous tariff.
    pub fn set_tariff_input(&mut self, text: &str) -> Result<f64> {
        let rate = parse_non_negative("tariff", text).map_err(|e| {
            log::warn!("Rejected tariff: {}", e);
            e
        })?;
        self.pricing.set_rate(rate);
        self.tariff_input = text.trim().to_string();
        Ok(rate)
    }

    /// Switch country, resetting the tariff to its default
    pub fn select_country(&mut self, code: &str) -> Result<&TariffContext> {
        self.pricing.select_country(code)?;
        self.tariff_input = self.pricing.rate().to_string();
        Ok(self.pricing.tariff())
    }

    pub fn tariff(&self) -> &TariffContext {
        self.pricing.tariff()
    }

    pub fn tariff_input(&self) -> &str {
        &self.tariff_input
    }

    pub fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    // View selections

    pub fn set_chart_period(&mut self, period: ChartPeriod) {
        self.chart_period = period;
    }

    pub fn chart_period(&self) -> ChartPeriod {
        self.chart_period
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    // Derived views

    pub fn summary(&self) -> ConsumptionSummary {
        consumption::summarize(&self.appliances, self.pricing.rate())
    }

    pub fn breakdown(&self) -> Vec<ApplianceCost> {
        consumption::cost_breakdown(&self.appliances, self.pricing.rate())
    }

    pub fn chart_series(&self) -> Vec<ChartBucket> {
        consumption::build_chart_series(&self.appliances, self.pricing.rate(), self.chart_period)
    }

    pub fn formatter(&self) -> CurrencyFormatter {
        CurrencyFormatter::for_tariff(self.pricing.tariff())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PricingEngine::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(state: &mut AppState, name: &str, watts: &str, hours: &str) -> ApplianceId {
        state.set_form(name, watts, hours);
        state.submit_form().unwrap()
    }

    fn sample() -> AppState {
        let mut state = AppState::default();
        add(&mut state, "Horno", "2000", "3");
        add(&mut state, "Nevera", "150", "24");
        add(&mut state, "Televisor", "100", "4");
        state
    }

    #[test]
    fn test_add_appends_and_clears_form() {
        let mut state = AppState::default();
        let id = add(&mut state, "Horno", "2000", "3");

        assert_eq!(state.appliances().len(), 1);
        assert_eq!(state.find(id).unwrap().power_watts, 2000.0);
        assert_eq!(state.form(), &ApplianceForm::default());
        assert_eq!(state.summary().total_energy_kwh, 180.0);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let state = sample();
        let ids: Vec<_> = state.appliances().iter().map(|a| a.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_edit_replaces_only_target() {
        let mut state = sample();
        let before = state.appliances().to_vec();
        let target = before[1].id;

        state.begin_edit(target).unwrap();
        assert_eq!(state.form().mode, FormMode::Editing(target));
        assert_eq!(state.form().name, "Nevera");
        assert_eq!(state.form().power_watts, "150");
        assert_eq!(state.form().daily_hours, "24");

        state.set_form("Nevera nueva", "90", "24");
        assert_eq!(state.submit_form().unwrap(), target);

        let after = state.appliances();
        assert_eq!(after.len(), before.len());
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[1].id, target);
        assert_eq!(after[1].name, "Nevera nueva");
        assert_eq!(after[1].power_watts, 90.0);
        assert_eq!(state.form().mode, FormMode::Idle);
    }

    #[test]
    fn test_begin_edit_unknown_id() {
        let mut state = sample();
        assert!(matches!(state.begin_edit(42), Err(Error::ApplianceNotFound(42))));
        assert_eq!(state.form().mode, FormMode::Idle);
    }

    #[test]
    fn test_cancel_edit() {
        let mut state = sample();
        let id = state.appliances()[0].id;
        state.begin_edit(id).unwrap();
        state.cancel_edit();

        assert_eq!(state.form(), &ApplianceForm::default());
        add(&mut state, "Microondas", "800", "0.5");
        assert_eq!(state.appliances().len(), 4);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut state = sample();
        let target = state.appliances()[0].id;
        let others: Vec<_> = state.appliances()[1..].to_vec();

        let removed = state.delete(target).unwrap();
        assert_eq!(removed.name, "Horno");
        assert_eq!(state.appliances(), others.as_slice());
        assert!(matches!(state.delete(target), Err(Error::ApplianceNotFound(_))));
        assert_eq!(state.appliances().len(), 2);
    }

    #[test]
    fn test_delete_while_editing_cancels_edit() {
        let mut state = sample();
        let id = state.appliances()[2].id;
        state.begin_edit(id).unwrap();
        state.delete(id).unwrap();
        assert_eq!(state.form().mode, FormMode::Idle);
    }

    #[test]
    fn test_invalid_form_changes_nothing() {
        let mut state = sample();
        let before = state.appliances().to_vec();

        for (name, watts, hours) in [("Horno", "abc", "3"), ("Horno", "2000", ""), ("", "2000", "3"), ("Horno", "-5", "1")] {
            state.set_form(name, watts, hours);
            assert!(matches!(state.submit_form(), Err(Error::InvalidInput { .. })));
            assert_eq!(state.appliances(), before.as_slice());
            assert_eq!(state.form().power_watts, watts);
        }
    }

    #[test]
    fn test_invalid_edit_keeps_editing() {
        let mut state = sample();
        let id = state.appliances()[0].id;
        state.begin_edit(id).unwrap();
        state.set_form("Horno", "NaN", "3");

        assert!(state.submit_form().is_err());
        assert_eq!(state.form().mode, FormMode::Editing(id));
        assert_eq!(state.find(id).unwrap().power_watts, 2000.0);
    }

    #[test]
    fn test_tariff_input() {
        let mut state = sample();
        assert_eq!(state.tariff_input(), "0.15");

        assert_eq!(state.set_tariff_input("0.2").unwrap(), 0.2);
        assert_eq!(state.tariff().price_per_kwh, 0.2);

        assert!(state.set_tariff_input("cheap").is_err());
        assert_eq!(state.tariff().price_per_kwh, 0.2);
        assert_eq!(state.tariff_input(), "0.2");
    }

    #[test]
    fn test_negative_zero_input() {
        let mut state = sample();
        state.set_tariff_input("-0").unwrap();
        assert!(state.tariff().price_per_kwh.is_sign_positive());
        assert_eq!(state.formatter().format(state.summary().total_cost), "\u{20AC}0.00");
        assert!(state.chart_series().iter().all(|b| b.cost == "0.00"));

        let mut state = AppState::default();
        add(&mut state, "Apagado", "-0", "5");
        assert!(state.appliances()[0].power_watts.is_sign_positive());
        assert_eq!(crate::format::format_kwh(state.summary().total_energy_kwh), "0.00 kWh");
    }

    #[test]
    fn test_country_change_resets_tariff() {
        let mut state = sample();
        state.set_tariff_input("0.3").unwrap();

        let tariff = state.select_country("MX").unwrap();
        assert_eq!(tariff.price_per_kwh, 1.5);
        assert_eq!(tariff.currency_code, "MXN");
        assert_eq!(state.tariff_input(), "1.5");
        assert_eq!(state.formatter().format(1.5), "MXN 1.50");

        assert!(state.select_country("ZZ").is_err());
        assert_eq!(state.tariff().country_code, "MX");
    }

    #[test]
    fn test_chart_follows_period() {
        let mut state = sample();
        assert_eq!(state.chart_series().len(), 24);
        state.set_chart_period(ChartPeriod::Weekly);
        assert_eq!(state.chart_series().len(), 7);
        state.set_chart_period(ChartPeriod::Monthly);
        assert_eq!(state.chart_series().len(), 30);
    }

    #[test]
    fn test_breakdown_uses_current_tariff() {
        let mut state = sample();
        state.set_tariff_input("1").unwrap();
        let rows = state.breakdown();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].monthly_cost, 180.0);
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.general.country = "PE".to_string();
        config.general.theme = Theme::Dark;
        config.general.chart_period = ChartPeriod::Monthly;
        config.pricing.tariff_override = Some(0.75);

        let state = AppState::from_config(&config).unwrap();
        assert_eq!(state.tariff().currency_code, "PEN");
        assert_eq!(state.tariff().price_per_kwh, 0.75);
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(state.chart_period(), ChartPeriod::Monthly);

        config.general.country = "XX".to_string();
        assert!(AppState::from_config(&config).is_err());
    }

    #[test]
    fn test_toggle_theme() {
        let mut state = AppState::default();
        assert_eq!(state.toggle_theme(), Theme::Dark);
        assert_eq!(state.toggle_theme(), Theme::Light);
    }
}
