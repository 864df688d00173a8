use serde::Serialize;

use crate::entities::Provider::{self, Bolt, Uber, Yango};

pub const DEFAULT_COUNTRY_CODE: &str = "US";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryConfig {
    pub code: &'static str,
    pub name: &'static str,
    pub currency: &'static str,
    pub currency_symbol: &'static str,
    pub services: &'static [Provider],
    pub price_multiplier: f64,
}

impl CountryConfig {
    pub fn offers(&self, provider: Provider) -> bool {
        self.services.contains(&provider)
    }
}

macro_rules! country {
    ($code:literal, $name:literal, $currency:literal, $symbol:literal, [$($service:expr),*], $multiplier:literal) => {
        CountryConfig {
            code: $code,
            name: $name,
            currency: $currency,
            currency_symbol: $symbol,
            services: &[$($service),*],
            price_multiplier: $multiplier,
        }
    };
}

pub static COUNTRIES: [CountryConfig; 10] = [
    country!("US", "United States", "USD", "$", [Uber, Bolt], 1.0),
    country!("GB", "United Kingdom", "GBP", "£", [Uber, Bolt], 0.8),
    country!("DE", "Germany", "EUR", "€", [Uber, Bolt], 0.9),
    country!("FR", "France", "EUR", "€", [Uber, Bolt], 0.95),
    country!("CA", "Canada", "CAD", "C$", [Uber, Bolt], 0.75),
    country!("AU", "Australia", "AUD", "A$", [Uber, Bolt], 0.7),
    country!("IN", "India", "INR", "₹", [Uber, Bolt, Yango], 0.25),
    country!("BR", "Brazil", "BRL", "R$", [Uber, Bolt], 0.35),
    country!("RU", "Russia", "RUB", "₽", [Yango, Bolt], 0.4),
    country!("ZA", "South Africa", "ZAR", "R", [Uber, Bolt], 0.3),
];

fn lookup(code: &str) -> Option<&'static CountryConfig> {
    COUNTRIES
        .iter()
        .find(|country| country.code.eq_ignore_ascii_case(code))
}

/// Resolves a country code to its pricing config. Unknown, blank or missing
/// codes fall back to the US entry, so this never fails.
pub fn resolve_country(code: Option<&str>) -> &'static CountryConfig {
    code.map(str::trim)
        .filter(|code| !code.is_empty())
        .and_then(lookup)
        .or_else(|| lookup(DEFAULT_COUNTRY_CODE))
        .unwrap_or(&COUNTRIES[0])
}
