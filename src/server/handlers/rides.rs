use axum::extract::{rejection::JsonRejection, Extension, Json};

use crate::api::DynAPI;
use crate::entities::{RideComparisonResponse, TripRequest};
use crate::error::{validation_error, Error};

pub async fn compare(
    Extension(api): Extension<DynAPI>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> Result<Json<RideComparisonResponse>, Error> {
    let Json(request) = payload.map_err(|rejection| validation_error(rejection.to_string()))?;

    let response = api.compare_rides(request).await?;

    Ok(response.into())
}
