use crate::entities::{Category, Provider};

/// Fare constants for one provider. The mock estimator is driven entirely by
/// a row of this table.
#[derive(Debug)]
pub struct ProviderRates {
    pub provider: Provider,
    pub per_km: f64,
    pub flat_fee: f64,
    pub surge: SurgeRates,
    pub tiers: [TierRates; 2],
}

#[derive(Debug)]
pub struct SurgeRates {
    pub probability: f64,
    /// Surge multiplier is drawn from `[low, high)`.
    pub low: f64,
    pub high: f64,
}

#[derive(Debug)]
pub struct TierRates {
    pub id: &'static str,
    pub service_name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub uplift: f64,
    pub band: PriceBand,
    pub rating: (f64, f64),
    /// Minutes until pickup, drawn from `[min, max]`.
    pub eta: (u32, u32),
}

#[derive(Debug)]
pub enum PriceBand {
    /// Fixed offsets around the final price.
    Absolute { below: i64, above: i64 },
    /// Base-fare factors for the bottom and top of the range.
    Relative { low: f64, high: f64 },
}

pub const CAPACITY: u32 = 4;

pub static UBER: ProviderRates = ProviderRates {
    provider: Provider::Uber,
    per_km: 3.5,
    flat_fee: 5.0,
    surge: SurgeRates {
        probability: 0.3,
        low: 1.2,
        high: 2.0,
    },
    tiers: [
        TierRates {
            id: "uber-x",
            service_name: "UberX",
            description: "Affordable everyday rides",
            category: Category::Economy,
            uplift: 1.0,
            band: PriceBand::Absolute { below: 1, above: 2 },
            rating: (4.7, 5.0),
            eta: (2, 5),
        },
        TierRates {
            id: "uber-comfort",
            service_name: "Uber Comfort",
            description: "Newer cars, extra space",
            category: Category::Premium,
            uplift: 1.35,
            band: PriceBand::Relative {
                low: 1.25,
                high: 1.5,
            },
            rating: (4.8, 5.0),
            eta: (3, 5),
        },
    ],
};

pub static BOLT: ProviderRates = ProviderRates {
    provider: Provider::Bolt,
    per_km: 3.2,
    flat_fee: 4.5,
    surge: SurgeRates {
        probability: 0.2,
        low: 1.1,
        high: 1.5,
    },
    tiers: [
        TierRates {
            id: "bolt-standard",
            service_name: "Bolt",
            description: "Fast & affordable",
            category: Category::Economy,
            uplift: 1.0,
            band: PriceBand::Absolute { below: 1, above: 2 },
            rating: (4.5, 4.9),
            eta: (4, 7),
        },
        TierRates {
            id: "bolt-comfort",
            service_name: "Bolt Comfort",
            description: "More comfortable rides",
            category: Category::Premium,
            uplift: 1.25,
            band: PriceBand::Relative {
                low: 1.15,
                high: 1.35,
            },
            rating: (4.6, 4.9),
            eta: (5, 7),
        },
    ],
};

pub static YANGO: ProviderRates = ProviderRates {
    provider: Provider::Yango,
    per_km: 3.0,
    flat_fee: 4.0,
    surge: SurgeRates {
        probability: 0.15,
        low: 1.05,
        high: 1.35,
    },
    tiers: [
        TierRates {
            id: "yango-economy",
            service_name: "Economy",
            description: "Budget-friendly option",
            category: Category::Economy,
            uplift: 1.0,
            band: PriceBand::Absolute { below: 1, above: 2 },
            rating: (4.3, 4.8),
            eta: (6, 10),
        },
        TierRates {
            id: "yango-comfort",
            service_name: "Comfort",
            description: "More comfort for your journey",
            category: Category::Premium,
            uplift: 1.3,
            band: PriceBand::Relative {
                low: 1.2,
                high: 1.4,
            },
            rating: (4.4, 4.8),
            eta: (7, 10),
        },
    ],
};
