//! `mercato-core` — shared building blocks for the catalog module.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the product shape supplied by the external product source, and the error
//! model for calls into external collaborators.

pub mod error;
pub mod product;

pub use error::CollaboratorError;
pub use product::Product;
