//! Assessment-specific error types.
//!
//! Every failure kind maps to a distinct code so callers can tell
//! "no session in progress" apart from "that answer is not offered"
//! apart from "your answer could not be saved".

use crate::domain::foundation::{
    AssessmentType, DomainError, ErrorCode, QuestionId, ValidationError,
};

/// Errors raised by assessment traversal and lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// No assessment with the given type exists in the question bank.
    NotFound(AssessmentType),
    /// The question does not exist within the assessment (read-side lookup).
    QuestionNotFound {
        assessment_type: AssessmentType,
        question_id: QuestionId,
    },
    /// The submitted answer matches none of the offered choices.
    InvalidAnswer {
        question_id: QuestionId,
        answer: String,
    },
    /// The position references a question that does not exist, or a choice
    /// points at a dangling question id. Data-integrity violation.
    InvalidState(String),
    /// The assessment has no questions.
    EmptyAssessment(AssessmentType),
    /// No assessment is in progress for this proposer and no explicit
    /// question id was supplied.
    MissingSession,
    /// The request carried no proposer identity.
    MissingIdentity,
    /// Input failed value-object validation.
    ValidationFailed { field: String, message: String },
    /// The record store could not durably save a step.
    Persistence(String),
}

impl AssessmentError {
    pub fn not_found(assessment_type: AssessmentType) -> Self {
        AssessmentError::NotFound(assessment_type)
    }

    pub fn question_not_found(assessment_type: AssessmentType, question_id: QuestionId) -> Self {
        AssessmentError::QuestionNotFound {
            assessment_type,
            question_id,
        }
    }

    pub fn invalid_answer(question_id: QuestionId, answer: impl Into<String>) -> Self {
        AssessmentError::InvalidAnswer {
            question_id,
            answer: answer.into(),
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        AssessmentError::InvalidState(message.into())
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        AssessmentError::Persistence(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::NotFound(_) => ErrorCode::AssessmentNotFound,
            AssessmentError::QuestionNotFound { .. } => ErrorCode::QuestionNotFound,
            AssessmentError::InvalidAnswer { .. } => ErrorCode::InvalidAnswer,
            AssessmentError::InvalidState(_) => ErrorCode::InvalidState,
            AssessmentError::EmptyAssessment(_) => ErrorCode::EmptyAssessment,
            AssessmentError::MissingSession => ErrorCode::MissingSession,
            AssessmentError::MissingIdentity => ErrorCode::MissingIdentity,
            AssessmentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AssessmentError::Persistence(_) => ErrorCode::PersistenceFailure,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AssessmentError::NotFound(assessment_type) => {
                format!("Assessment not found: {}", assessment_type)
            }
            AssessmentError::QuestionNotFound {
                assessment_type,
                question_id,
            } => format!(
                "Question '{}' not found in assessment '{}'",
                question_id, assessment_type
            ),
            AssessmentError::InvalidAnswer {
                question_id,
                answer,
            } => format!(
                "Answer '{}' is not an offered choice for question '{}'",
                answer, question_id
            ),
            AssessmentError::InvalidState(msg) => format!("Invalid assessment state: {}", msg),
            AssessmentError::EmptyAssessment(assessment_type) => {
                format!("Assessment '{}' has no questions", assessment_type)
            }
            AssessmentError::MissingSession => {
                "No assessment in progress for this proposer".to_string()
            }
            AssessmentError::MissingIdentity => "Proposer identity is required".to_string(),
            AssessmentError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            AssessmentError::Persistence(msg) => {
                format!("Failed to save assessment step: {}", msg)
            }
        }
    }
}

impl std::fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AssessmentError {}

impl From<ValidationError> for AssessmentError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field } => field.clone(),
            ValidationError::InvalidFormat { field, .. } => field.clone(),
            ValidationError::Duplicate { field, .. } => field.clone(),
        };
        AssessmentError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::PersistenceFailure => AssessmentError::Persistence(err.message),
            ErrorCode::InvalidState => AssessmentError::InvalidState(err.message),
            ErrorCode::ValidationFailed => AssessmentError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => AssessmentError::Persistence(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diabetes() -> AssessmentType {
        AssessmentType::new("diabetes").unwrap()
    }

    #[test]
    fn not_found_maps_to_assessment_not_found_code() {
        let err = AssessmentError::not_found(diabetes());
        assert_eq!(err.code(), ErrorCode::AssessmentNotFound);
        assert_eq!(err.message(), "Assessment not found: diabetes");
    }

    #[test]
    fn invalid_answer_names_question_and_answer() {
        let err =
            AssessmentError::invalid_answer(QuestionId::new("Q1").unwrap(), "Perhaps");
        assert_eq!(err.code(), ErrorCode::InvalidAnswer);
        assert!(err.message().contains("Perhaps"));
        assert!(err.message().contains("Q1"));
    }

    #[test]
    fn missing_session_is_distinct_from_missing_identity() {
        assert_ne!(
            AssessmentError::MissingSession.code(),
            AssessmentError::MissingIdentity.code()
        );
    }

    #[test]
    fn persistence_domain_error_converts_to_persistence_variant() {
        let err: AssessmentError =
            DomainError::new(ErrorCode::PersistenceFailure, "disk full").into();
        assert!(matches!(err, AssessmentError::Persistence(_)));
    }

    #[test]
    fn validation_error_carries_field_name() {
        let err: AssessmentError = ValidationError::empty_field("proposer_id").into();
        match err {
            AssessmentError::ValidationFailed { field, .. } => assert_eq!(field, "proposer_id"),
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
    }
}
