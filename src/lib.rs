//! AHP-SMART - Supplier Decision Support
//!
//! This crate ranks alternatives (suppliers) against a set of criteria.
//! Criterion weights come from an AHP pairwise comparison matrix, with a
//! consistency check; raw ratings are normalized per criterion with SMART
//! and combined into a weighted score and competition ranking.
//!
//! Layout follows a hexagonal architecture:
//! - `domain` - the numeric pipeline and its value types
//! - `ports` - table store, auth and export contracts
//! - `adapters` - in-memory, YAML file and Supabase implementations
//! - `application` - handlers that drive the pipeline through the ports
//! - `config` - environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
