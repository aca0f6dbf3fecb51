//! Business logic services for the API.
//!
//! # Services
//!
//! - `catalog` - Vehicle types and cars, read through a [`crate::db::CatalogRepository`]

pub mod catalog;
