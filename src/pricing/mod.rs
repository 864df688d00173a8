mod mock;
mod rates;
mod uber;

pub use mock::{base_price, draw_surge, mock_estimates, MockEstimator};
pub use rates::{PriceBand, ProviderRates, SurgeRates, TierRates, BOLT, UBER, YANGO};
pub use uber::UberEstimator;

use async_trait::async_trait;
use rand::rngs::StdRng;

use crate::entities::{CountryConfig, Location, Provider, RideEstimate};
use crate::error::Error;

/// A trip after validation, with its straight-line distance and duration.
#[derive(Debug)]
pub struct Trip<'a> {
    pub pickup: &'a Location,
    pub dropoff: &'a Location,
    /// Meters.
    pub distance: u64,
    /// Minutes.
    pub duration: u64,
}

/// Produces fare estimates for one provider. Each call gets its own RNG so
/// estimators can run concurrently without sharing state.
#[async_trait]
pub trait Estimator {
    fn provider(&self) -> Provider;

    async fn estimate(
        &self,
        trip: &Trip<'_>,
        country: &CountryConfig,
        rng: StdRng,
    ) -> Result<Vec<RideEstimate>, Error>;
}
