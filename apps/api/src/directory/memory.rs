use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::directory::{CandidateProfile, JobPosting, SkillDirectory};
use crate::errors::AppError;

/// Fixed set of profiles and postings for handler and router tests.
#[derive(Default)]
pub struct InMemoryDirectory {
    pub candidates: HashMap<Uuid, CandidateProfile>,
    pub jobs: HashMap<Uuid, JobPosting>,
    pub closed_jobs: Vec<Uuid>,
    pub applications: Vec<(Uuid, Uuid)>,
}

impl InMemoryDirectory {
    pub fn add_candidate(&mut self, profile: CandidateProfile) {
        self.candidates.insert(profile.candidate_id, profile);
    }

    pub fn add_job(&mut self, posting: JobPosting) {
        self.jobs.insert(posting.job_id, posting);
    }

    pub fn apply(&mut self, job_id: Uuid, candidate_id: Uuid) {
        self.applications.push((job_id, candidate_id));
    }
}

#[async_trait]
impl SkillDirectory for InMemoryDirectory {
    async fn candidate(&self, candidate_id: Uuid) -> Result<CandidateProfile, AppError> {
        self.candidates
            .get(&candidate_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Candidate {candidate_id} not found")))
    }

    async fn job(&self, job_id: Uuid) -> Result<JobPosting, AppError> {
        self.jobs
            .get(&job_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
    }

    async fn applicants(&self, job_id: Uuid) -> Result<Vec<CandidateProfile>, AppError> {
        Ok(self
            .applications
            .iter()
            .filter(|(job, _)| *job == job_id)
            .filter_map(|(_, candidate)| self.candidates.get(candidate).cloned())
            .collect())
    }

    async fn open_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        Ok(self
            .jobs
            .values()
            .filter(|job| !self.closed_jobs.contains(&job.job_id))
            .cloned()
            .collect())
    }
}
