//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects, identifiers, and error types that form
//! the vocabulary of the assessment domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AssessmentId, AssessmentType, OutcomeId, ProposerId, QuestionId};
pub use timestamp::Timestamp;
