//! Car Expo Core - Catalog domain types.
//!
//! This crate provides the types shared by every Car Expo component:
//! - `api` - REST catalog server (Postgres or in-memory backed)
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP. The car filtering rules live here so that every store
//! implementation shares one definition of what "matches" means.
//!
//! # Modules
//!
//! - [`types`] - Newtype ids, vehicle types, cars, filters, and stored feature decoding

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
