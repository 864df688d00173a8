mod country_api;
mod fare_api;

use rand::{rngs::StdRng, SeedableRng};
use tokio::sync::Mutex;

use crate::{
    api::API,
    config::Config,
    error::Error,
    external::uber::UberClient,
    pricing::{Estimator, MockEstimator, UberEstimator, BOLT, YANGO},
};

pub type DynEstimator = Box<dyn Estimator + Send + Sync>;

pub struct Engine {
    estimators: Vec<DynEstimator>,
    rng: Mutex<StdRng>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(config: &Config) -> Result<Self, Error> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Builds an engine whose random fields (surge, rating, eta) are drawn
    /// from `rng`. A seeded rng makes comparisons reproducible.
    pub fn with_rng(config: &Config, rng: StdRng) -> Result<Self, Error> {
        let uber = match &config.uber {
            Some(uber) => {
                tracing::info!(api_base = %uber.api_base, "uber price api enabled");
                let client =
                    UberClient::new(uber.token.clone(), uber.api_base.clone(), uber.timeout)?;
                UberEstimator::new(Some(client))
            }
            None => {
                tracing::info!("no uber server token, uber estimates are mocked");
                UberEstimator::mock()
            }
        };

        Ok(Self::with_estimators(
            vec![
                Box::new(uber) as DynEstimator,
                Box::new(MockEstimator::new(&BOLT)),
                Box::new(MockEstimator::new(&YANGO)),
            ],
            rng,
        ))
    }

    pub fn with_estimators(estimators: Vec<DynEstimator>, rng: StdRng) -> Self {
        Self {
            estimators,
            rng: Mutex::new(rng),
        }
    }
}

impl API for Engine {}
