//! `catalog-core` — domain seedwork.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! value objects, the validated [`UniqueEntityId`], and the [`Entity`] capability
//! that concrete entities build on.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::UniqueEntityId;
pub use value_object::{ValueObject, render_fields};
