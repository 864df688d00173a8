use async_trait::async_trait;
use rand::{rngs::StdRng, Rng};

use super::mock::mock_estimates;
use super::rates::{CAPACITY, UBER};
use super::{Estimator, Trip};
use crate::entities::{Category, CountryConfig, Provider, RideEstimate};
use crate::error::{upstream_error, Error};
use crate::external::uber::{PriceEstimate, UberClient};

const METERS_PER_MILE: f64 = 1609.344;

/// Uber estimates. Uses the live price API when a client is configured and
/// falls back to synthesized fares whenever that call does not succeed.
#[derive(Debug)]
pub struct UberEstimator {
    client: Option<UberClient>,
}

impl UberEstimator {
    pub fn new(client: Option<UberClient>) -> Self {
        Self { client }
    }

    pub fn mock() -> Self {
        Self { client: None }
    }

    async fn live_estimates(
        &self,
        client: &UberClient,
        trip: &Trip<'_>,
        rng: &mut StdRng,
    ) -> Result<Vec<RideEstimate>, Error> {
        let prices = client
            .find_price_estimates(trip.pickup, trip.dropoff)
            .await?;

        // An empty list means no usable live quote, so the mock rows are shown instead.
        if prices.is_empty() {
            return Err(upstream_error());
        }

        Ok(prices
            .into_iter()
            .enumerate()
            .map(|(index, price)| to_estimate(index, price, trip, rng))
            .collect())
    }
}

#[async_trait]
impl Estimator for UberEstimator {
    fn provider(&self) -> Provider {
        Provider::Uber
    }

    #[tracing::instrument(skip(self, rng))]
    async fn estimate(
        &self,
        trip: &Trip<'_>,
        country: &CountryConfig,
        mut rng: StdRng,
    ) -> Result<Vec<RideEstimate>, Error> {
        let client = match &self.client {
            Some(client) => client,
            None => {
                tracing::debug!("no uber server token configured, using mock estimates");
                return Ok(mock_estimates(
                    &UBER,
                    trip.distance,
                    trip.duration,
                    country,
                    &mut rng,
                ));
            }
        };

        match self.live_estimates(client, trip, &mut rng).await {
            Ok(estimates) => Ok(estimates),
            Err(err) => {
                tracing::warn!("uber price api unavailable, using mock estimates: {}", err);
                Ok(mock_estimates(
                    &UBER,
                    trip.distance,
                    trip.duration,
                    country,
                    &mut rng,
                ))
            }
        }
    }
}

fn to_estimate(index: usize, price: PriceEstimate, trip: &Trip<'_>, rng: &mut StdRng) -> RideEstimate {
    let eta = rng.gen_range(2..=6);

    let amount = price
        .high_estimate
        .or_else(|| price.estimate.as_deref().and_then(highest_amount))
        .unwrap_or(0.0);

    let price_range = price.estimate.clone().unwrap_or_else(|| {
        format!(
            "${}-{}",
            price.low_estimate.unwrap_or(amount),
            price.high_estimate.unwrap_or(amount)
        )
    });

    RideEstimate {
        id: format!("uber-{}", index),
        provider: Provider::Uber,
        service_name: price
            .localized_display_name
            .clone()
            .unwrap_or_else(|| price.display_name.clone()),
        description: description(&price.display_name).into(),
        price: amount,
        price_range,
        currency: price.currency_code.unwrap_or_else(|| "USD".into()),
        arrival_time: format!("{} min away", eta),
        capacity: CAPACITY,
        category: category(&price.display_name),
        estimated_duration: price
            .duration
            .map(|seconds| (seconds / 60.0).round() as u64)
            .unwrap_or(trip.duration),
        distance: price
            .distance
            .map(|miles| (miles * METERS_PER_MILE).round() as u64)
            .unwrap_or(trip.distance),
        surge: None,
        rating: None,
        eta: Some(eta),
    }
}

fn description(display_name: &str) -> &'static str {
    match display_name {
        "UberX" => "Affordable everyday rides",
        "UberXL" => "Larger vehicles for groups",
        "Uber Comfort" => "Newer cars, extra space",
        "UberBLACK" => "Premium rides with professional drivers",
        "UberSUV" => "Premium SUVs for larger groups",
        _ => "Ride with Uber",
    }
}

fn category(display_name: &str) -> Category {
    if display_name.contains("BLACK") || display_name.contains("SUV") {
        Category::Luxury
    } else if display_name.contains("Comfort") || display_name.contains("XL") {
        Category::Premium
    } else {
        Category::Economy
    }
}

/// Largest number in a display estimate such as "$15-20" or "€8.50".
fn highest_amount(estimate: &str) -> Option<f64> {
    estimate
        .split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter_map(|part| part.parse::<f64>().ok())
        .fold(None, |max: Option<f64>, value| {
            Some(max.map_or(value, |max| max.max(value)))
        })
}
