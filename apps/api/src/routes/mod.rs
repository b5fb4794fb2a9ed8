pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless scoring
        .route("/api/v1/match", post(handlers::handle_compute_match))
        .route("/api/v1/match/breakdown", post(handlers::handle_breakdown))
        .route("/api/v1/match/summary", post(handlers::handle_summary))
        // Scoring over stored profiles and postings
        .route(
            "/api/v1/jobs/:job_id/candidates/:candidate_id/match",
            get(handlers::handle_candidate_match),
        )
        .route(
            "/api/v1/jobs/:job_id/candidates/:candidate_id/summary",
            get(handlers::handle_candidate_summary),
        )
        .route(
            "/api/v1/jobs/:job_id/applicants",
            get(handlers::handle_rank_applicants),
        )
        .route(
            "/api/v1/candidates/:candidate_id/job-matches",
            get(handlers::handle_job_matches),
        )
        .with_state(state)
}
