//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `assessment` - Question bank model, traversal step, outcome resolver
//! - `respondent` - Append-only answer records and in-progress positions

pub mod assessment;
pub mod foundation;
pub mod respondent;
