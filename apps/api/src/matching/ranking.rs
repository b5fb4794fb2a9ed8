//! Batch scoring: applicants for one posting, or open postings for one
//! seeker. Every pair is scored independently, so order of evaluation never
//! affects a score; only the final sort is shared.

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::directory::{CandidateProfile, JobPosting};
use crate::matching::error::MatchError;
use crate::matching::scorer::{
    check_candidate_skills, check_job_skills, compute_match_with_weights, MatchWeights,
};
use crate::matching::status::ScoreBand;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedApplicant {
    pub candidate_id: Uuid,
    pub candidate_name: String,
    pub score: i32,
    pub required_skills_coverage: i32,
    pub band: ScoreBand,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub job_id: Uuid,
    pub job_title: String,
    pub score: i32,
    pub required_skills_coverage: i32,
    pub band: ScoreBand,
}

/// Scores every applicant against `job`, best first; ties broken by name.
///
/// A malformed posting or invalid weights fail the whole call. An applicant
/// whose skills cannot be scored is logged and left out.
pub fn rank_applicants(
    job: &JobPosting,
    applicants: &[CandidateProfile],
    weights: &MatchWeights,
) -> Result<Vec<RankedApplicant>, MatchError> {
    weights.validate()?;
    check_job_skills(&job.skills)?;

    let mut ranked: Vec<RankedApplicant> = applicants
        .iter()
        .filter_map(|candidate| {
            match compute_match_with_weights(&candidate.skills, &job.skills, weights) {
                Ok(result) => Some(RankedApplicant {
                    candidate_id: candidate.candidate_id,
                    candidate_name: candidate.full_name.clone(),
                    score: result.score,
                    required_skills_coverage: result.required_skills_coverage,
                    band: ScoreBand::for_score(result.score as u32),
                }),
                Err(error) => {
                    warn!(
                        job_id = %job.job_id,
                        candidate_id = %candidate.candidate_id,
                        %error,
                        "Skipping applicant that cannot be scored"
                    );
                    None
                }
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.candidate_name.cmp(&b.candidate_name))
            .then_with(|| a.candidate_id.cmp(&b.candidate_id))
    });
    Ok(ranked)
}

/// Scores `candidate` against every posting, keeping those at or above
/// `min_score`; best first, ties broken by title.
///
/// Malformed candidate skills or invalid weights fail the whole call. A
/// posting that cannot be scored is logged and left out.
pub fn rank_jobs(
    candidate: &CandidateProfile,
    jobs: &[JobPosting],
    weights: &MatchWeights,
    min_score: u32,
) -> Result<Vec<JobMatch>, MatchError> {
    weights.validate()?;
    check_candidate_skills(&candidate.skills)?;

    let mut matches = Vec::with_capacity(jobs.len());
    for job in jobs {
        let result = match compute_match_with_weights(&candidate.skills, &job.skills, weights) {
            Ok(result) => result,
            Err(error) => {
                warn!(
                    job_id = %job.job_id,
                    candidate_id = %candidate.candidate_id,
                    %error,
                    "Skipping job posting that cannot be scored"
                );
                continue;
            }
        };
        if (result.score as u32) < min_score {
            continue;
        }
        matches.push(JobMatch {
            job_id: job.job_id,
            job_title: job.title.clone(),
            score: result.score,
            required_skills_coverage: result.required_skills_coverage,
            band: ScoreBand::for_score(result.score as u32),
        });
    }

    matches.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.job_title.cmp(&b.job_title))
            .then_with(|| a.job_id.cmp(&b.job_id))
    });
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::models::{CandidateSkill, Proficiency, SkillRequirement};

    fn candidate(name: &str, skills: &[(&str, Proficiency)]) -> CandidateProfile {
        CandidateProfile {
            candidate_id: Uuid::new_v4(),
            full_name: name.to_string(),
            skills: skills
                .iter()
                .map(|(n, p)| CandidateSkill::new(*n, *p))
                .collect(),
        }
    }

    fn job(title: &str, required: &[&str]) -> JobPosting {
        JobPosting {
            job_id: Uuid::new_v4(),
            title: title.to_string(),
            skills: required.iter().map(|n| SkillRequirement::required(*n)).collect(),
        }
    }

    #[test]
    fn test_applicants_sorted_by_score_then_name() {
        let posting = job("Backend Engineer", &["Rust", "SQL"]);
        let applicants = vec![
            candidate("Zoe", &[("Rust", Proficiency::Expert)]),
            candidate("Ann", &[("Rust", Proficiency::Expert), ("SQL", Proficiency::Expert)]),
            candidate("Bob", &[("SQL", Proficiency::Expert)]),
        ];

        let ranked = rank_applicants(&posting, &applicants, &MatchWeights::default()).unwrap();
        let names: Vec<_> = ranked.iter().map(|r| r.candidate_name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bob", "Zoe"]);
        assert_eq!(ranked[0].score, 100);
        assert_eq!(ranked[0].band, ScoreBand::Excellent);
        assert_eq!(ranked[1].score, ranked[2].score);
    }

    #[test]
    fn test_ranking_does_not_depend_on_applicant_order() {
        let posting = job("Data Engineer", &["Python", "Spark"]);
        let applicants = vec![
            candidate("A", &[("Python", Proficiency::Beginner)]),
            candidate("B", &[("Spark", Proficiency::Expert), ("Python", Proficiency::Advanced)]),
            candidate("C", &[]),
        ];
        let mut reversed = applicants.clone();
        reversed.reverse();

        let weights = MatchWeights::default();
        let forward = rank_applicants(&posting, &applicants, &weights).unwrap();
        let backward = rank_applicants(&posting, &reversed, &weights).unwrap();
        let ids = |r: &[RankedApplicant]| r.iter().map(|a| a.candidate_id).collect::<Vec<_>>();
        assert_eq!(ids(&forward), ids(&backward));
    }

    #[test]
    fn test_jobs_below_min_score_are_dropped() {
        let seeker = candidate("Ann", &[("Rust", Proficiency::Expert)]);
        let jobs = vec![
            job("Rust Engineer", &["Rust"]),
            job("Go Engineer", &["Go"]),
        ];

        let all = rank_jobs(&seeker, &jobs, &MatchWeights::default(), 0).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].job_title, "Rust Engineer");

        let filtered = rank_jobs(&seeker, &jobs, &MatchWeights::default(), 50).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].job_title, "Rust Engineer");
    }

    #[test]
    fn test_invalid_posting_fails_its_own_ranking() {
        let mut posting = job("Broken", &["Rust"]);
        posting.skills.push(SkillRequirement::optional("rust"));
        let applicants = vec![candidate("Ann", &[])];
        assert!(matches!(
            rank_applicants(&posting, &applicants, &MatchWeights::default()),
            Err(MatchError::DuplicateSkill(_))
        ));
    }

    #[test]
    fn test_unscorable_applicant_is_skipped() {
        let posting = job("Backend Engineer", &["Rust"]);
        let applicants = vec![
            candidate("Ann", &[("Rust", Proficiency::Expert)]),
            candidate("Blank", &[("  ", Proficiency::Expert)]),
        ];

        let ranked = rank_applicants(&posting, &applicants, &MatchWeights::default()).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].candidate_name, "Ann");
    }

    #[test]
    fn test_malformed_posting_does_not_hide_other_jobs() {
        let seeker = candidate("Ann", &[("Rust", Proficiency::Expert)]);
        let mut broken = job("Go Engineer", &["Go"]);
        broken.skills.push(SkillRequirement::optional("go"));
        let jobs = vec![job("Rust Engineer", &["Rust"]), broken];

        let matches = rank_jobs(&seeker, &jobs, &MatchWeights::default(), 0).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].job_title, "Rust Engineer");
        assert_eq!(matches[0].score, 100);
    }

    #[test]
    fn test_malformed_seeker_fails_job_ranking() {
        let seeker = candidate("Ann", &[("", Proficiency::Expert)]);
        let jobs = vec![job("Rust Engineer", &["Rust"])];
        assert!(matches!(
            rank_jobs(&seeker, &jobs, &MatchWeights::default(), 0),
            Err(MatchError::EmptySkillName { side: "candidate" })
        ));
    }
}
