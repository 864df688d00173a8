pub mod countries;
pub mod health;
pub mod rides;
