//! Model to entity mappers
//!
//! This module provides conversions from database rows to domain entities (stock-core).
//! - `From<Model> for Entity` where every column maps directly
//! - `TryFrom<Model> for Entity` where a text column must parse into a closed domain set

mod item;
mod location;
mod membership;
mod team;
mod transaction;
mod user;
