//! PED Assess server binary.
//!
//! Loads configuration from the environment, reads the question bank from
//! disk, wires the in-memory adapters into the application handlers and
//! serves the REST API.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ped_assess::adapters::http::assessment::{assessment_routes, AssessmentHandlers};
use ped_assess::adapters::{
    load_bank_dir, InMemoryPositionStore, InMemoryQuestionBank, InMemoryRespondentStore,
};
use ped_assess::application::handlers::assessment::{
    GetQuestionHandler, ListAssessmentsHandler, StartAssessmentHandler, SubmitAnswerHandler,
};
use ped_assess::config::AppConfig;
use ped_assess::ports::{PositionStore, QuestionBank, RespondentRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        bank_dir = %config.bank.dir.display(),
        "Starting PED assessment service"
    );

    let assessments = load_bank_dir(&config.bank.dir)?;
    tracing::info!(count = assessments.len(), "Question bank loaded");

    let bank: Arc<dyn QuestionBank> = Arc::new(InMemoryQuestionBank::with_assessments(assessments));
    let records: Arc<dyn RespondentRepository> = Arc::new(InMemoryRespondentStore::new());
    let positions: Arc<dyn PositionStore> = Arc::new(InMemoryPositionStore::new());

    let handlers = AssessmentHandlers::new(
        Arc::new(StartAssessmentHandler::new(
            bank.clone(),
            positions.clone(),
        )),
        Arc::new(SubmitAnswerHandler::new(
            bank.clone(),
            records.clone(),
            positions.clone(),
        )),
        Arc::new(GetQuestionHandler::new(bank.clone())),
        Arc::new(ListAssessmentsHandler::new(bank.clone())),
    );

    let cors = build_cors_layer(&config);

    let app = Router::new()
        .nest("/api", assessment_routes(handlers))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| o.parse::<HeaderValue>().ok())
            .collect();
        layer.allow_origin(parsed)
    }
}
