//! HTTP adapter for the assessment endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AssessmentHandlers;
pub use routes::assessment_routes;
