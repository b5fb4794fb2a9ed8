//! Skill Directory: where candidate and job skill lists come from.
//!
//! The scoring core never reads from storage itself; handlers ask a
//! `SkillDirectory` for profiles and postings and pass the skills in.
//!
//! `AppState` holds an `Arc<dyn SkillDirectory>`: Postgres in production,
//! an in-memory map in tests.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::models::{CandidateSkill, SkillRequirement};

/// A job seeker together with the skills they hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub candidate_id: Uuid,
    pub full_name: String,
    pub skills: Vec<CandidateSkill>,
}

/// A job posting together with the skills it asks for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_id: Uuid,
    pub title: String,
    pub skills: Vec<SkillRequirement>,
}

#[async_trait]
pub trait SkillDirectory: Send + Sync {
    /// Fails with `AppError::NotFound` when no such job seeker exists.
    async fn candidate(&self, candidate_id: Uuid) -> Result<CandidateProfile, AppError>;

    /// Fails with `AppError::NotFound` when no such posting exists.
    async fn job(&self, job_id: Uuid) -> Result<JobPosting, AppError>;

    /// Everyone who applied to `job_id`.
    async fn applicants(&self, job_id: Uuid) -> Result<Vec<CandidateProfile>, AppError>;

    /// Postings currently open for applications.
    async fn open_jobs(&self) -> Result<Vec<JobPosting>, AppError>;
}
