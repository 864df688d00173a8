use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Uber,
    Bolt,
    Yango,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uber => "uber",
            Self::Bolt => "bolt",
            Self::Yango => "yango",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Economy,
    Premium,
    Luxury,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideEstimate {
    pub id: String,
    pub provider: Provider,
    pub service_name: String,
    pub description: String,
    pub price: f64,
    pub price_range: String,
    pub currency: String,
    pub arrival_time: String,
    pub capacity: u32,
    pub category: Category,
    /// Minutes.
    pub estimated_duration: u64,
    /// Meters.
    pub distance: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surge: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta: Option<u32>,
}

#[test]
fn estimate_serialization_test() {
    let estimate = RideEstimate {
        id: "bolt-standard".into(),
        provider: Provider::Bolt,
        service_name: "Bolt".into(),
        description: "Fast & affordable".into(),
        price: 20.0,
        price_range: "$19-22".into(),
        currency: "USD".into(),
        arrival_time: "5 min away".into(),
        capacity: 4,
        category: Category::Economy,
        estimated_duration: 1300,
        distance: 5200,
        surge: None,
        rating: Some(4.6),
        eta: Some(5),
    };

    let value = serde_json::to_value(&estimate).unwrap();

    assert_eq!(value["provider"], "bolt");
    assert_eq!(value["serviceName"], "Bolt");
    assert_eq!(value["priceRange"], "$19-22");
    assert_eq!(value["category"], "economy");
    assert_eq!(value["estimatedDuration"], 1300);
    assert!(value.get("surge").is_none());
}
