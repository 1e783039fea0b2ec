//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    AssessmentSummary, GetQuestionHandler, GetQuestionQuery, ListAssessmentsHandler, NextStep,
    QuestionPayload, ResolvedOutcome, StartAssessmentCommand, StartAssessmentHandler,
    StartAssessmentResult, SubmitAnswerCommand, SubmitAnswerHandler,
};
