//! Core building blocks for the Palanca Real listings marketplace.
//!
//! The crate hosts the environment-driven configuration, the listing catalog
//! (domain model, storage traits, search filters, HTTP router, CSV import)
//! and the two calculation engines behind the site tools: the financing
//! calculator and the property scoring/comparison engine.

pub mod config;
pub mod error;
pub mod finance;
pub mod listings;
pub mod scoring;
pub mod telemetry;
