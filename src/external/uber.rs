use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    entities::Location,
    error::{upstream_error, Error},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub display_name: String,
    pub localized_display_name: Option<String>,
    pub estimate: Option<String>,
    pub low_estimate: Option<f64>,
    pub high_estimate: Option<f64>,
    pub currency_code: Option<String>,
    /// Seconds.
    pub duration: Option<f64>,
    /// Miles.
    pub distance: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    prices: Option<Vec<PriceEstimate>>,
}

/// Client for the Uber price-estimate endpoint.
pub struct UberClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
}

impl std::fmt::Debug for UberClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UberClient")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

impl UberClient {
    pub fn new(token: String, api_base: String, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').into(),
            token,
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn find_price_estimates(
        &self,
        start: &Location,
        end: &Location,
    ) -> Result<Vec<PriceEstimate>, Error> {
        let url = format!("{}/v1.2/estimates/price", self.api_base);

        let res = self
            .http
            .get(url)
            .header("Authorization", format!("Token {}", self.token))
            .header("Accept-Language", "en_US")
            .header("Content-Type", "application/json")
            .query(&[("start_latitude", start.latitude)])
            .query(&[("start_longitude", start.longitude)])
            .query(&[("end_latitude", end.latitude)])
            .query(&[("end_longitude", end.longitude)])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if !res.status().is_success() {
            tracing::warn!(status_code, "uber price estimate request failed");
            return Err(upstream_error());
        }

        let data: Response = res.json().await?;

        data.prices.ok_or_else(upstream_error)
    }
}
