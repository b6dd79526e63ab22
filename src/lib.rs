//! Raise Eligibility Engine for civil-service teaching staff
//!
//! This crate computes when an employee's salary coefficient is next raised
//! under the Vietnamese civil-service pay-grade table, and how many full
//! months remain until then. It also runs the computation over whole rosters
//! and serves it over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod dates;
pub mod error;
pub mod grades;
pub mod models;
