//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, auth types, errors)
//! - `decision` - AHP weighting, SMART normalization and ranking
//! - `dashboard` - Read-only summary of the working state

pub mod dashboard;
pub mod decision;
pub mod foundation;
