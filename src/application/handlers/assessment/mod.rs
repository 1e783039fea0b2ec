//! Assessment handlers - start, submit answer, question fetch, catalog.

mod get_question;
mod list_assessments;
mod payloads;
mod start_assessment;
mod submit_answer;

pub use get_question::{GetQuestionHandler, GetQuestionQuery};
pub use list_assessments::ListAssessmentsHandler;
pub use payloads::{AssessmentSummary, QuestionPayload, ResolvedOutcome};
pub use start_assessment::{StartAssessmentCommand, StartAssessmentHandler, StartAssessmentResult};
pub use submit_answer::{NextStep, SubmitAnswerCommand, SubmitAnswerHandler};
