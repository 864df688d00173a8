use super::Engine;

use async_trait::async_trait;
use futures::future::join_all;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    api::FareAPI,
    entities::{resolve_country, RideComparisonResponse, TripRequest},
    error::Error,
    geo,
    pricing::Trip,
};

#[async_trait]
impl FareAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn compare_rides(&self, request: TripRequest) -> Result<RideComparisonResponse, Error> {
        request.pickup.validate("pickup")?;
        request.dropoff.validate("dropoff")?;

        let country = resolve_country(request.country.as_deref());

        let distance = geo::distance(
            request.pickup.latitude,
            request.pickup.longitude,
            request.dropoff.latitude,
            request.dropoff.longitude,
        );
        let duration = geo::duration(distance);

        let trip = Trip {
            pickup: &request.pickup,
            dropoff: &request.dropoff,
            distance,
            duration,
        };

        let rngs: Vec<StdRng> = {
            let mut rng = self.rng.lock().await;
            self.estimators
                .iter()
                .map(|_| StdRng::seed_from_u64(rng.gen()))
                .collect()
        };

        let results = join_all(
            self.estimators
                .iter()
                .zip(rngs)
                .map(|(estimator, rng)| estimator.estimate(&trip, country, rng)),
        )
        .await;

        let mut estimates = Vec::new();

        for (estimator, result) in self.estimators.iter().zip(results) {
            match result {
                Ok(provider_estimates) => estimates.extend(provider_estimates),
                Err(err) => {
                    tracing::error!(
                        provider = estimator.provider().name(),
                        "estimator failed, skipping: {}",
                        err
                    );
                }
            }
        }

        estimates.retain(|estimate| country.offers(estimate.provider));

        tracing::info!(
            country = country.code,
            distance,
            duration,
            estimates = estimates.len(),
            "compared rides"
        );

        Ok(RideComparisonResponse {
            trip_distance: distance,
            trip_duration: duration,
            estimates,
        })
    }
}
