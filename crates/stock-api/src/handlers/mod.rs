//! Route handlers
//!
//! All HTTP request handlers organized by dashboard resource.

pub mod health;
pub mod items;
pub mod locations;
pub mod stats;
pub mod teams;
pub mod transactions;
pub mod users;
