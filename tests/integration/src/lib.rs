//! Integration test utilities for the inventory dashboard
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API, backed either by an in-memory store or by PostgreSQL.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
