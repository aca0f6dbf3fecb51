//! Core types for Car Expo.

pub mod features;
pub mod filter;
pub mod id;
pub mod vehicle;

pub use features::{MalformedStoredData, decode_features, encode_features};
pub use filter::CarFilter;
pub use id::*;
pub use vehicle::{Car, VehicleType};
