//! Category domain module.
//!
//! This crate contains the `Category` entity, implemented purely as deterministic
//! domain data on top of the `catalog-core` seedwork (no IO, no HTTP, no storage).

pub mod category;

pub use category::{Category, CategoryProps};
