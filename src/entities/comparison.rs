use serde::{Deserialize, Serialize};

use crate::entities::{Location, RideEstimate};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TripRequest {
    pub pickup: Location,
    pub dropoff: Location,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideComparisonResponse {
    /// Meters.
    pub trip_distance: u64,
    /// Minutes.
    pub trip_duration: u64,
    pub estimates: Vec<RideEstimate>,
}

impl TripRequest {
    pub fn new(pickup: Location, dropoff: Location, country: Option<String>) -> Self {
        Self {
            pickup,
            dropoff,
            country,
        }
    }
}
