use async_trait::async_trait;
use rand::{rngs::StdRng, Rng};
use rand_distr::{Distribution, Uniform};

use super::rates::{PriceBand, ProviderRates, TierRates, CAPACITY};
use super::{Estimator, Trip};
use crate::entities::{CountryConfig, Provider, RideEstimate};
use crate::error::Error;

pub fn base_price(rates: &ProviderRates, distance_m: u64) -> f64 {
    let distance_km = distance_m as f64 / 1000.0;
    (distance_km * rates.per_km + rates.flat_fee).round()
}

/// Draws the surge multiplier for one quote; 1.0 means no surge.
pub fn draw_surge<R: Rng + ?Sized>(rates: &ProviderRates, rng: &mut R) -> f64 {
    if rng.gen_bool(rates.surge.probability) {
        Uniform::new(rates.surge.low, rates.surge.high).sample(rng)
    } else {
        1.0
    }
}

pub fn mock_estimates<R: Rng + ?Sized>(
    rates: &ProviderRates,
    distance_m: u64,
    duration_min: u64,
    country: &CountryConfig,
    rng: &mut R,
) -> Vec<RideEstimate> {
    let base = base_price(rates, distance_m);
    let surge = draw_surge(rates, rng);

    rates
        .tiers
        .iter()
        .map(|tier| {
            tier_estimate(
                rates.provider,
                tier,
                base,
                surge,
                distance_m,
                duration_min,
                country,
                rng,
            )
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn tier_estimate<R: Rng + ?Sized>(
    provider: Provider,
    tier: &TierRates,
    base: f64,
    surge: f64,
    distance_m: u64,
    duration_min: u64,
    country: &CountryConfig,
    rng: &mut R,
) -> RideEstimate {
    let multiplier = country.price_multiplier;
    let price = (base * tier.uplift * surge * multiplier).round();

    let (low, high) = match tier.band {
        PriceBand::Absolute { below, above } => (price as i64 - below, price as i64 + above),
        PriceBand::Relative { low, high } => (
            (base * low * surge * multiplier).round() as i64,
            (base * high * surge * multiplier).round() as i64,
        ),
    };

    let eta = rng.gen_range(tier.eta.0..=tier.eta.1);
    let rating = Uniform::new(tier.rating.0, tier.rating.1).sample(rng);

    RideEstimate {
        id: tier.id.into(),
        provider,
        service_name: tier.service_name.into(),
        description: tier.description.into(),
        price,
        price_range: format!("{}{}-{}", country.currency_symbol, low, high),
        currency: country.currency.into(),
        arrival_time: format!("{} min away", eta),
        capacity: CAPACITY,
        category: tier.category,
        estimated_duration: duration_min,
        distance: distance_m,
        surge: (surge > 1.0).then(|| surge),
        rating: Some(rating),
        eta: Some(eta),
    }
}

#[derive(Debug)]
pub struct MockEstimator {
    rates: &'static ProviderRates,
}

impl MockEstimator {
    pub fn new(rates: &'static ProviderRates) -> Self {
        Self { rates }
    }
}

#[async_trait]
impl Estimator for MockEstimator {
    fn provider(&self) -> Provider {
        self.rates.provider
    }

    async fn estimate(
        &self,
        trip: &Trip<'_>,
        country: &CountryConfig,
        mut rng: StdRng,
    ) -> Result<Vec<RideEstimate>, Error> {
        Ok(mock_estimates(
            self.rates,
            trip.distance,
            trip.duration,
            country,
            &mut rng,
        ))
    }
}
