//! Semantic entities.
//!
//! Identifiers in the decorated tree point at these objects rather than
//! carrying names. This module holds:
//!
//! - `Variable` and `Function` entities with identity equality
//! - The `Entity` sum over the two
//! - The standard-library table injected into every root scope

pub mod entities;
pub mod stdlib;
