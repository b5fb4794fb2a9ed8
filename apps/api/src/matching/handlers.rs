//! Axum route handlers for the Match API.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::matching::breakdown::build_breakdown;
use crate::matching::models::{
    CandidateSkill, MatchResult, ScoreBreakdown, SkillRequirement,
};
use crate::matching::ranking::{rank_applicants, rank_jobs, JobMatch, RankedApplicant};
use crate::matching::scorer::compute_match_with_weights;
use crate::matching::summary::{assessment_summary, summary_filename};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub candidate_skills: Vec<CandidateSkill>,
    #[serde(default)]
    pub job_skills: Vec<SkillRequirement>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub candidate_name: String,
    pub job_title: String,
    pub match_result: MatchResult,
}

#[derive(Debug, Serialize)]
pub struct CandidateMatchResponse {
    pub candidate_id: Uuid,
    pub candidate_name: String,
    pub job_id: Uuid,
    pub job_title: String,
    pub match_result: MatchResult,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Deserialize)]
pub struct JobMatchQuery {
    #[serde(default)]
    pub min_score: Option<u32>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Scores caller-supplied skill lists. Nothing is read from storage.
pub async fn handle_compute_match(
    State(state): State<AppState>,
    AppJson(request): AppJson<MatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    let result = compute_match_with_weights(
        &request.candidate_skills,
        &request.job_skills,
        &state.config.match_weights,
    )?;
    Ok(Json(result))
}

/// POST /api/v1/match/breakdown
pub async fn handle_breakdown(
    AppJson(result): AppJson<MatchResult>,
) -> Result<Json<ScoreBreakdown>, AppError> {
    Ok(Json(build_breakdown(&result)?))
}

/// POST /api/v1/match/summary
///
/// Returns the plain-text assessment as a downloadable attachment.
pub async fn handle_summary(
    AppJson(request): AppJson<SummaryRequest>,
) -> Result<Response, AppError> {
    if request.candidate_name.trim().is_empty() {
        return Err(AppError::Validation(
            "candidate_name cannot be empty".to_string(),
        ));
    }
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }

    let text = assessment_summary(
        &request.candidate_name,
        &request.job_title,
        &request.match_result,
        Utc::now(),
    )?;
    Ok(text_attachment(&request.candidate_name, text))
}

/// GET /api/v1/jobs/:job_id/candidates/:candidate_id/match
pub async fn handle_candidate_match(
    State(state): State<AppState>,
    Path((job_id, candidate_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<CandidateMatchResponse>, AppError> {
    let job = state.directory.job(job_id).await?;
    let candidate = state.directory.candidate(candidate_id).await?;

    let match_result =
        compute_match_with_weights(&candidate.skills, &job.skills, &state.config.match_weights)?;
    let breakdown = build_breakdown(&match_result)?;

    info!(
        "Scored candidate {candidate_id} for job {job_id}: {}%",
        match_result.score
    );

    Ok(Json(CandidateMatchResponse {
        candidate_id,
        candidate_name: candidate.full_name,
        job_id,
        job_title: job.title,
        match_result,
        breakdown,
    }))
}

/// GET /api/v1/jobs/:job_id/candidates/:candidate_id/summary
pub async fn handle_candidate_summary(
    State(state): State<AppState>,
    Path((job_id, candidate_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, AppError> {
    let job = state.directory.job(job_id).await?;
    let candidate = state.directory.candidate(candidate_id).await?;

    let match_result =
        compute_match_with_weights(&candidate.skills, &job.skills, &state.config.match_weights)?;
    let text = assessment_summary(&candidate.full_name, &job.title, &match_result, Utc::now())?;

    Ok(text_attachment(&candidate.full_name, text))
}

/// GET /api/v1/jobs/:job_id/applicants
///
/// Every applicant to the posting, best match first.
pub async fn handle_rank_applicants(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<Vec<RankedApplicant>>, AppError> {
    let job = state.directory.job(job_id).await?;
    let applicants = state.directory.applicants(job_id).await?;

    let ranked = rank_applicants(&job, &applicants, &state.config.match_weights)?;
    info!("Ranked {} applicants for job {job_id}", ranked.len());

    Ok(Json(ranked))
}

/// GET /api/v1/candidates/:candidate_id/job-matches?min_score=N
///
/// Open postings scored for one job seeker, best match first.
pub async fn handle_job_matches(
    State(state): State<AppState>,
    Path(candidate_id): Path<Uuid>,
    Query(query): Query<JobMatchQuery>,
) -> Result<Json<Vec<JobMatch>>, AppError> {
    let min_score = query.min_score.unwrap_or(0);
    if min_score > 100 {
        return Err(AppError::Validation(format!(
            "min_score must be between 0 and 100, got {min_score}"
        )));
    }

    let candidate = state.directory.candidate(candidate_id).await?;
    let jobs = state.directory.open_jobs().await?;

    let matches = rank_jobs(&candidate, &jobs, &state.config.match_weights, min_score)?;
    info!(
        "Matched candidate {candidate_id} against {} open jobs ({} at or above {min_score}%)",
        jobs.len(),
        matches.len()
    );

    Ok(Json(matches))
}

fn text_attachment(candidate_name: &str, body: String) -> Response {
    let disposition = format!(
        "attachment; filename=\"{}\"",
        summary_filename(candidate_name)
    );
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;
    use crate::directory::memory::InMemoryDirectory;
    use crate::directory::{CandidateProfile, JobPosting};
    use crate::matching::error::MatchError;
    use crate::matching::models::{FactorStatus, Proficiency};
    use crate::matching::scorer::MatchWeights;

    fn test_state(directory: InMemoryDirectory) -> AppState {
        AppState {
            config: Config {
                database_url: "postgres://unused".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
                match_weights: MatchWeights::default(),
            },
            directory: Arc::new(directory),
        }
    }

    fn seeded() -> (InMemoryDirectory, Uuid, Uuid) {
        let job_id = Uuid::new_v4();
        let candidate_id = Uuid::new_v4();
        let mut directory = InMemoryDirectory::default();
        directory.add_job(JobPosting {
            job_id,
            title: "Data Engineer".to_string(),
            skills: vec![
                SkillRequirement::required("SQL"),
                SkillRequirement::required("Python"),
                SkillRequirement::required("Go"),
            ],
        });
        directory.add_candidate(CandidateProfile {
            candidate_id,
            full_name: "Jane Doe".to_string(),
            skills: vec![
                CandidateSkill::new("SQL", Proficiency::Expert),
                CandidateSkill::new("Python", Proficiency::Intermediate),
            ],
        });
        directory.apply(job_id, candidate_id);
        (directory, job_id, candidate_id)
    }

    #[tokio::test]
    async fn test_compute_match_uses_request_skills() {
        let state = test_state(InMemoryDirectory::default());
        let request = MatchRequest {
            candidate_skills: vec![CandidateSkill::new("Rust", Proficiency::Expert)],
            job_skills: vec![SkillRequirement::required("Rust")],
        };
        let Json(result) = handle_compute_match(State(state), AppJson(request))
            .await
            .unwrap();
        assert_eq!(result.score, 100);
        assert_eq!(result.required_skills_coverage, 100);
    }

    #[tokio::test]
    async fn test_compute_match_rejects_duplicate_job_skill() {
        let state = test_state(InMemoryDirectory::default());
        let request = MatchRequest {
            candidate_skills: vec![],
            job_skills: vec![
                SkillRequirement::required("Rust"),
                SkillRequirement::required("RUST"),
            ],
        };
        let err = handle_compute_match(State(state), AppJson(request))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidInput(MatchError::DuplicateSkill(_))
        ));
    }

    #[tokio::test]
    async fn test_candidate_match_combines_result_and_breakdown() {
        let (directory, job_id, candidate_id) = seeded();
        let state = test_state(directory);

        let Json(response) = handle_candidate_match(State(state), Path((job_id, candidate_id)))
            .await
            .unwrap();
        assert_eq!(response.candidate_name, "Jane Doe");
        assert_eq!(response.match_result.required_skills_coverage, 67);
        assert_eq!(response.breakdown.factors[0].status, FactorStatus::Moderate);
    }

    #[tokio::test]
    async fn test_unknown_job_is_not_found() {
        let (directory, _, candidate_id) = seeded();
        let state = test_state(directory);
        let err = handle_candidate_match(State(state), Path((Uuid::new_v4(), candidate_id)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_rank_applicants_lists_applicants() {
        let (directory, job_id, candidate_id) = seeded();
        let state = test_state(directory);
        let Json(ranked) = handle_rank_applicants(State(state), Path(job_id))
            .await
            .unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].candidate_id, candidate_id);
    }

    #[tokio::test]
    async fn test_job_matches_rejects_min_score_above_100() {
        let (directory, _, candidate_id) = seeded();
        let state = test_state(directory);
        let err = handle_job_matches(
            State(state),
            Path(candidate_id),
            Query(JobMatchQuery {
                min_score: Some(101),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_job_matches_skips_closed_jobs() {
        let (mut directory, job_id, candidate_id) = seeded();
        directory.closed_jobs.push(job_id);
        let state = test_state(directory);
        let Json(matches) = handle_job_matches(
            State(state),
            Path(candidate_id),
            Query(JobMatchQuery { min_score: None }),
        )
        .await
        .unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_summary_requires_candidate_name() {
        let request = SummaryRequest {
            candidate_name: " ".to_string(),
            job_title: "Engineer".to_string(),
            match_result: MatchResult {
                score: 50,
                matched_skills: vec![],
                partially_matched_skills: vec![],
                missing_skills: vec![],
                required_skills_coverage: 100,
            },
        };
        let err = handle_summary(AppJson(request)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_summary_is_text_attachment() {
        let (directory, job_id, candidate_id) = seeded();
        let state = test_state(directory);
        let response = handle_candidate_summary(State(state), Path((job_id, candidate_id)))
            .await
            .unwrap();
        let headers = response.headers();
        assert_eq!(
            headers[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"assessment-jane-doe.txt\""
        );
    }
}
