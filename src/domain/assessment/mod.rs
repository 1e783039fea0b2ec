//! Assessment module - the question bank data model and traversal logic.

mod aggregate;
mod errors;
mod resolver;
mod traversal;

pub use aggregate::{
    AnswerType, Assessment, Choice, Criterion, LintFinding, Outcome, Question,
};
pub use errors::AssessmentError;
pub use resolver::resolve_outcome;
pub use traversal::{step, StepDecision};
