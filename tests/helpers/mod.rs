//! Test helpers module
//!
//! Shared setup for the integration tests: an in-memory SQLite store with
//! migrations applied, a wired workout service and row builders.

#![allow(dead_code)]

pub mod database_helper;
pub mod test_data;

#[allow(unused_imports)]
pub use database_helper::*;
#[allow(unused_imports)]
pub use test_data::*;
