//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::assessment::{
    GetQuestionHandler, GetQuestionQuery, ListAssessmentsHandler, StartAssessmentCommand,
    StartAssessmentHandler, SubmitAnswerCommand, SubmitAnswerHandler,
};
use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::{AssessmentType, ProposerId, QuestionId};

use super::dto::{
    AssessmentListResponse, ErrorResponse, QuestionResponse, StepResponse, SubmitAnswerRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    start_handler: Arc<StartAssessmentHandler>,
    submit_handler: Arc<SubmitAnswerHandler>,
    get_question_handler: Arc<GetQuestionHandler>,
    list_handler: Arc<ListAssessmentsHandler>,
}

impl AssessmentHandlers {
    pub fn new(
        start_handler: Arc<StartAssessmentHandler>,
        submit_handler: Arc<SubmitAnswerHandler>,
        get_question_handler: Arc<GetQuestionHandler>,
        list_handler: Arc<ListAssessmentsHandler>,
    ) -> Self {
        Self {
            start_handler,
            submit_handler,
            get_question_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/assessments - List the active assessment catalog
pub async fn list_assessments(State(handlers): State<AssessmentHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(summaries) => {
            let response = AssessmentListResponse {
                items: summaries.into_iter().map(Into::into).collect(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/assessments/:assessment_type/questions/:question_id - Fetch one question
pub async fn get_question(
    State(handlers): State<AssessmentHandlers>,
    Path((assessment_type, question_id)): Path<(String, String)>,
) -> Response {
    let assessment_type = match AssessmentType::new(assessment_type) {
        Ok(t) => t,
        Err(_) => return bad_request("Invalid assessment type"),
    };
    let question_id = match QuestionId::new(question_id) {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid question ID"),
    };

    let query = GetQuestionQuery {
        assessment_type,
        question_id,
    };

    match handlers.get_question_handler.handle(query).await {
        Ok(payload) => {
            let response: QuestionResponse = payload.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// POST /api/proposers/:proposer_id/assessments/:assessment_type/start - Begin an assessment
pub async fn start_assessment(
    State(handlers): State<AssessmentHandlers>,
    Path((proposer_id, assessment_type)): Path<(String, String)>,
) -> Response {
    let proposer_id = match ProposerId::new(proposer_id) {
        Ok(id) => id,
        Err(_) => return handle_assessment_error(AssessmentError::MissingIdentity),
    };
    let assessment_type = match AssessmentType::new(assessment_type) {
        Ok(t) => t,
        Err(_) => return bad_request("Invalid assessment type"),
    };

    let cmd = StartAssessmentCommand {
        proposer_id,
        assessment_type,
    };

    match handlers.start_handler.handle(cmd).await {
        Ok(result) => {
            let response: QuestionResponse = result.question.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// POST /api/proposers/:proposer_id/assessments/:assessment_type/answers - Submit one answer
pub async fn submit_answer(
    State(handlers): State<AssessmentHandlers>,
    Path((proposer_id, assessment_type)): Path<(String, String)>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Response {
    let proposer_id = match ProposerId::new(proposer_id) {
        Ok(id) => id,
        Err(_) => return handle_assessment_error(AssessmentError::MissingIdentity),
    };
    let assessment_type = match AssessmentType::new(assessment_type) {
        Ok(t) => t,
        Err(_) => return bad_request("Invalid assessment type"),
    };
    let question_id = match req.question_id.map(QuestionId::new).transpose() {
        Ok(id) => id,
        Err(_) => return bad_request("Invalid question ID"),
    };

    let cmd = SubmitAnswerCommand {
        proposer_id,
        assessment_type,
        answer: req.answer,
        question_id,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(step) => {
            let response: StepResponse = step.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(message)),
    )
        .into_response()
}

fn handle_assessment_error(error: AssessmentError) -> Response {
    let status = match &error {
        AssessmentError::NotFound(_) | AssessmentError::QuestionNotFound { .. } => {
            StatusCode::NOT_FOUND
        }
        AssessmentError::InvalidAnswer { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentError::InvalidState(_) | AssessmentError::EmptyAssessment(_) => {
            StatusCode::CONFLICT
        }
        AssessmentError::MissingSession
        | AssessmentError::MissingIdentity
        | AssessmentError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        AssessmentError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = ErrorResponse::new(error.code().to_string(), error.message());
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AssessmentType, QuestionId};

    fn diabetes() -> AssessmentType {
        AssessmentType::new("diabetes").unwrap()
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_assessment_error(AssessmentError::not_found(diabetes()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_answer_maps_to_422() {
        let error =
            AssessmentError::invalid_answer(QuestionId::new("Q1").unwrap(), "Perhaps");
        let response = handle_assessment_error(error);
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn invalid_state_maps_to_409() {
        let response =
            handle_assessment_error(AssessmentError::invalid_state("stale position"));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn missing_session_maps_to_400() {
        let response = handle_assessment_error(AssessmentError::MissingSession);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn persistence_failure_maps_to_500() {
        let response = handle_assessment_error(AssessmentError::persistence("disk full"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
