use serde::{Deserialize, Serialize};

use crate::error::{validation_error, Error};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            address: address.into(),
            latitude,
            longitude,
        }
    }

    /// Checks the address is present and the coordinates are finite degrees
    /// within range. `role` names the location in the error message.
    pub fn validate(&self, role: &str) -> Result<(), Error> {
        if self.address.trim().is_empty() {
            return Err(validation_error(format!("{} address is required", role)));
        }

        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(validation_error(format!(
                "{} latitude must be between -90 and 90",
                role
            )));
        }

        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(validation_error(format!(
                "{} longitude must be between -180 and 180",
                role
            )));
        }

        Ok(())
    }
}

#[test]
fn location_validation_test() {
    let location = Location::new("Times Square", 40.7580, -73.9855);
    assert!(location.validate("pickup").is_ok());

    let blank = Location::new("   ", 40.7580, -73.9855);
    let err = blank.validate("pickup").unwrap_err();
    assert_eq!(err.message, "pickup address is required");

    let off_the_map = Location::new("Nowhere", 91.0, 0.0);
    assert!(off_the_map.validate("dropoff").is_err());

    let not_a_number = Location::new("Nowhere", 0.0, f64::NAN);
    assert!(not_a_number.validate("dropoff").is_err());
}
