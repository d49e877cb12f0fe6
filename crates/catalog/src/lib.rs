//! Catalog view module.
//!
//! This crate contains the catalog filtering rules, implemented purely as
//! deterministic derived-state computation (no IO, no HTTP, no storage).

pub mod filter;

pub use filter::{CatalogFilter, FilterCriteria, LOW_STOCK_THRESHOLD};
