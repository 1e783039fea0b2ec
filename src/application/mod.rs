//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    AssessmentSummary, GetQuestionHandler, GetQuestionQuery, ListAssessmentsHandler, NextStep,
    QuestionPayload, ResolvedOutcome, StartAssessmentCommand, StartAssessmentHandler,
    StartAssessmentResult, SubmitAnswerCommand, SubmitAnswerHandler,
};
