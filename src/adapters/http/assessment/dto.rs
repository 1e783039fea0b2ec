//! HTTP DTOs for assessment endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::assessment::{
    AssessmentSummary, NextStep, QuestionPayload, ResolvedOutcome,
};
use crate::domain::assessment::AnswerType;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request body for submitting one answer.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer: String,
    /// Explicit question id; when absent the stored position is used.
    #[serde(default)]
    pub question_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A question as served to the applicant. Never carries next-question
/// references.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub question_id: String,
    pub question_text: String,
    pub answer_type: AnswerType,
    pub choices: Vec<String>,
}

impl From<QuestionPayload> for QuestionResponse {
    fn from(payload: QuestionPayload) -> Self {
        Self {
            question_id: payload.question_id.to_string(),
            question_text: payload.question_text,
            answer_type: payload.answer_type,
            choices: payload.choices,
        }
    }
}

/// The resolved terminal classification.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeResponse {
    pub outcome_id: String,
    pub description: String,
    pub icd10_code: String,
}

impl From<ResolvedOutcome> for OutcomeResponse {
    fn from(outcome: ResolvedOutcome) -> Self {
        Self {
            outcome_id: outcome.outcome_id.to_string(),
            description: outcome.description,
            icd10_code: outcome.icd10_code,
        }
    }
}

/// Result of one traversal step: either the next question or completion.
#[derive(Debug, Clone, Serialize)]
pub struct StepResponse {
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<OutcomeResponse>,
}

impl From<NextStep> for StepResponse {
    fn from(step: NextStep) -> Self {
        match step {
            NextStep::NextQuestion(payload) => Self {
                completed: false,
                question: Some(payload.into()),
                outcome: None,
            },
            NextStep::Completed { outcome } => Self {
                completed: true,
                question: None,
                outcome: outcome.map(Into::into),
            },
        }
    }
}

/// Catalog entry for the assessment listing.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummaryResponse {
    pub assessment_type: String,
    pub assessment_id: String,
    pub question_count: usize,
}

impl From<AssessmentSummary> for AssessmentSummaryResponse {
    fn from(summary: AssessmentSummary) -> Self {
        Self {
            assessment_type: summary.assessment_type.to_string(),
            assessment_id: summary.assessment_id.to_string(),
            question_count: summary.question_count,
        }
    }
}

/// The active assessment catalog.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentListResponse {
    pub items: Vec<AssessmentSummaryResponse>,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{OutcomeId, QuestionId};

    #[test]
    fn submit_answer_request_deserializes_without_question_id() {
        let json = r#"{"answer": "Yes"}"#;
        let req: SubmitAnswerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.answer, "Yes");
        assert!(req.question_id.is_none());
    }

    #[test]
    fn submit_answer_request_deserializes_with_question_id() {
        let json = r#"{"answer": "No", "question_id": "Q2"}"#;
        let req: SubmitAnswerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.question_id, Some("Q2".to_string()));
    }

    #[test]
    fn next_question_step_serializes_as_incomplete() {
        let step = NextStep::NextQuestion(QuestionPayload {
            question_id: QuestionId::new("Q2").unwrap(),
            question_text: "On insulin?".to_string(),
            answer_type: AnswerType::SingleChoice,
            choices: vec!["Yes".to_string(), "No".to_string()],
        });

        let response: StepResponse = step.into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["completed"], false);
        assert_eq!(json["question"]["question_text"], "On insulin?");
        assert_eq!(json["question"]["answer_type"], "single_choice");
        assert!(json.get("outcome").is_none());
    }

    #[test]
    fn completed_step_serializes_outcome() {
        let step = NextStep::Completed {
            outcome: Some(ResolvedOutcome {
                outcome_id: OutcomeId::new("O1").unwrap(),
                description: "Type 2 diabetes on insulin".to_string(),
                icd10_code: "E11.9".to_string(),
            }),
        };

        let response: StepResponse = step.into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["completed"], true);
        assert_eq!(json["outcome"]["icd10_code"], "E11.9");
        assert!(json.get("question").is_none());
    }

    #[test]
    fn completed_step_without_outcome_omits_field() {
        let response: StepResponse = NextStep::Completed { outcome: None }.into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["completed"], true);
        assert!(json.get("outcome").is_none());
    }

    #[test]
    fn error_response_bad_request_creates_correctly() {
        let error = ErrorResponse::bad_request("Invalid proposer ID");
        assert_eq!(error.code, "BAD_REQUEST");
        assert_eq!(error.message, "Invalid proposer ID");
    }
}
