mod comparison;
mod country;
mod estimate;
mod location;

pub use comparison::{RideComparisonResponse, TripRequest};
pub use country::{resolve_country, CountryConfig, COUNTRIES, DEFAULT_COUNTRY_CODE};
pub use estimate::{Category, Provider, RideEstimate};
pub use location::Location;
