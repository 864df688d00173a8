use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{CountryConfig, RideComparisonResponse, TripRequest};
use crate::error::Error;

#[async_trait]
pub trait FareAPI {
    async fn compare_rides(&self, request: TripRequest) -> Result<RideComparisonResponse, Error>;
}

#[async_trait]
pub trait CountryAPI {
    async fn list_countries(&self) -> Result<Vec<CountryConfig>, Error>;
    async fn find_country(&self, code: String) -> Result<CountryConfig, Error>;
}

pub trait API: FareAPI + CountryAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
