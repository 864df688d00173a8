use axum::extract::{Extension, Json, Path};

use crate::api::DynAPI;
use crate::entities::CountryConfig;
use crate::error::Error;

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<CountryConfig>>, Error> {
    let countries = api.list_countries().await?;

    Ok(countries.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(code): Path<String>,
) -> Result<Json<CountryConfig>, Error> {
    let country = api.find_country(code).await?;

    Ok(country.into())
}
