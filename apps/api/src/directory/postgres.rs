use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::directory::{CandidateProfile, JobPosting, SkillDirectory};
use crate::errors::AppError;
use crate::matching::models::{CandidateSkill, SkillRequirement};
use crate::models::job::JobRow;
use crate::models::profile::ProfileRow;
use crate::models::skill::{CandidateSkillRow, JobSkillRow};

/// Reads profiles, postings and skills from the hosted Postgres store.
#[derive(Clone)]
pub struct PgSkillDirectory {
    pool: PgPool,
}

impl PgSkillDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn candidate_skills(
        &self,
        candidate_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<CandidateSkill>>, AppError> {
        let rows = sqlx::query_as::<_, CandidateSkillRow>(
            "SELECT candidate_id, skill_name, proficiency FROM candidate_skills WHERE candidate_id = ANY($1)",
        )
        .bind(candidate_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<Uuid, Vec<CandidateSkill>> = HashMap::new();
        for row in rows {
            let candidate_id = row.candidate_id;
            grouped
                .entry(candidate_id)
                .or_default()
                .push(CandidateSkill::try_from(row)?);
        }
        Ok(grouped)
    }

    async fn job_skills(
        &self,
        job_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<SkillRequirement>>, AppError> {
        let rows = sqlx::query_as::<_, JobSkillRow>(
            "SELECT job_id, skill_name, is_required, minimum_proficiency FROM job_skills WHERE job_id = ANY($1)",
        )
        .bind(job_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<Uuid, Vec<SkillRequirement>> = HashMap::new();
        for row in rows {
            let job_id = row.job_id;
            grouped
                .entry(job_id)
                .or_default()
                .push(SkillRequirement::try_from(row)?);
        }
        Ok(grouped)
    }

    async fn with_candidate_skills(
        &self,
        profiles: Vec<ProfileRow>,
    ) -> Result<Vec<CandidateProfile>, AppError> {
        let ids: Vec<Uuid> = profiles.iter().map(|p| p.id).collect();
        let mut skills = self.candidate_skills(&ids).await?;
        Ok(profiles
            .into_iter()
            .map(|p| CandidateProfile {
                candidate_id: p.id,
                skills: skills.remove(&p.id).unwrap_or_default(),
                full_name: p.full_name,
            })
            .collect())
    }

    async fn with_job_skills(&self, jobs: Vec<JobRow>) -> Result<Vec<JobPosting>, AppError> {
        let ids: Vec<Uuid> = jobs.iter().map(|j| j.id).collect();
        let mut skills = self.job_skills(&ids).await?;
        Ok(jobs
            .into_iter()
            .map(|j| JobPosting {
                job_id: j.id,
                skills: skills.remove(&j.id).unwrap_or_default(),
                title: j.title,
            })
            .collect())
    }
}

#[async_trait]
impl SkillDirectory for PgSkillDirectory {
    async fn candidate(&self, candidate_id: Uuid) -> Result<CandidateProfile, AppError> {
        let profile = sqlx::query_as::<_, ProfileRow>(
            "SELECT id, full_name, role FROM profiles WHERE id = $1 AND role = 'job_seeker'",
        )
        .bind(candidate_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {candidate_id} not found")))?;

        let mut profiles = self.with_candidate_skills(vec![profile]).await?;
        profiles
            .pop()
            .ok_or_else(|| AppError::NotFound(format!("Candidate {candidate_id} not found")))
    }

    async fn job(&self, job_id: Uuid) -> Result<JobPosting, AppError> {
        let job = sqlx::query_as::<_, JobRow>(
            "SELECT id, title, company_id, is_active FROM jobs WHERE id = $1",
        )
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

        let mut jobs = self.with_job_skills(vec![job]).await?;
        jobs.pop()
            .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
    }

    async fn applicants(&self, job_id: Uuid) -> Result<Vec<CandidateProfile>, AppError> {
        let profiles = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT DISTINCT p.id, p.full_name, p.role
            FROM applications a
            JOIN profiles p ON p.id = a.candidate_id
            WHERE a.job_id = $1
            "#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;

        debug!("Loaded {} applicants for job {job_id}", profiles.len());
        self.with_candidate_skills(profiles).await
    }

    async fn open_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        let jobs = sqlx::query_as::<_, JobRow>(
            "SELECT id, title, company_id, is_active FROM jobs WHERE is_active ORDER BY title",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("Loaded {} open jobs", jobs.len());
        self.with_job_skills(jobs).await
    }
}
