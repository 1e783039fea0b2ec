//! HTTP routes for assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_question, list_assessments, start_assessment, submit_answer, AssessmentHandlers,
};

/// Creates the assessment router with all endpoints.
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/assessments", get(list_assessments))
        .route(
            "/assessments/:assessment_type/questions/:question_id",
            get(get_question),
        )
        .route(
            "/proposers/:proposer_id/assessments/:assessment_type/start",
            post(start_assessment),
        )
        .route(
            "/proposers/:proposer_id/assessments/:assessment_type/answers",
            post(submit_answer),
        )
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_routes_compiles() {
        // This test just ensures the route definitions compile correctly
        // Actual HTTP testing lives in the integration tests
    }
}
