//! Skill Match Scorer: partitions a job's skills against a candidate's and
//! folds the coverage into a single 0–100 score.
//!
//! Algorithm:
//! 1. Index candidate skills by normalized name (duplicates keep the highest level).
//! 2. For each job skill:
//!    - no candidate counterpart → missing
//!    - held below `minimum_proficiency` → partially matched
//!    - otherwise → matched
//! 3. coverage = (full + 0.5 × partial) / total, vacuously 1.0 for an empty category
//! 4. score = w_req × required_cov + w_opt × optional_cov + w_prof × proficiency_quality

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::matching::error::MatchError;
use crate::matching::models::{
    normalize_skill_name, CandidateSkill, MatchResult, MatchedSkill, MissingSkill,
    PartiallyMatchedSkill, Proficiency, SkillRequirement,
};

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Relative weight of each component of the overall score. Must sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub required: f64,
    pub optional: f64,
    pub proficiency: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            required: 0.6,
            optional: 0.2,
            proficiency: 0.2,
        }
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.required + self.optional + self.proficiency
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        let parts = [
            ("required", self.required),
            ("optional", self.optional),
            ("proficiency", self.proficiency),
        ];
        for (name, value) in parts {
            if !value.is_finite() || value < 0.0 {
                return Err(MatchError::InvalidWeights(format!(
                    "{name} weight must be a non-negative number, got {value}"
                )));
            }
        }
        if (self.sum() - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(MatchError::InvalidWeights(format!(
                "weights must sum to 1.0, got {:.4}",
                self.sum()
            )));
        }
        Ok(())
    }
}

/// Scores `candidate_skills` against `job_skills` with the default weights.
/// The service itself always scores with the configured weights.
#[allow(dead_code)]
pub fn compute_match(
    candidate_skills: &[CandidateSkill],
    job_skills: &[SkillRequirement],
) -> Result<MatchResult, MatchError> {
    compute_match_with_weights(candidate_skills, job_skills, &MatchWeights::default())
}

pub fn compute_match_with_weights(
    candidate_skills: &[CandidateSkill],
    job_skills: &[SkillRequirement],
    weights: &MatchWeights,
) -> Result<MatchResult, MatchError> {
    weights.validate()?;
    check_job_skills(job_skills)?;

    let held = index_candidate_skills(candidate_skills)?;

    let mut matched_skills = Vec::new();
    let mut partially_matched_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for requirement in job_skills {
        let key = normalize_skill_name(&requirement.skill_name);
        let skill_name = requirement.skill_name.trim().to_string();

        match (held.get(&key), requirement.minimum_proficiency) {
            (None, _) => missing_skills.push(MissingSkill {
                skill_name,
                is_required: requirement.is_required,
            }),
            (Some(&level), Some(minimum)) if level < minimum => {
                partially_matched_skills.push(PartiallyMatchedSkill {
                    skill_name,
                    is_required: requirement.is_required,
                    candidate_proficiency: level,
                    required_proficiency: minimum,
                })
            }
            (Some(&level), _) => matched_skills.push(MatchedSkill {
                skill_name,
                is_required: requirement.is_required,
                candidate_proficiency: level,
            }),
        }
    }

    // Required first, then by name: output does not depend on input order.
    matched_skills.sort_by_cached_key(|s| (!s.is_required, normalize_skill_name(&s.skill_name)));
    partially_matched_skills
        .sort_by_cached_key(|s| (!s.is_required, normalize_skill_name(&s.skill_name)));
    missing_skills.sort_by_cached_key(|s| (!s.is_required, normalize_skill_name(&s.skill_name)));

    let mut result = MatchResult {
        score: 0,
        matched_skills,
        partially_matched_skills,
        missing_skills,
        required_skills_coverage: 0,
    };

    let required = coverage_ratio(
        result.matched_required(),
        result.partial_required(),
        result.total_required(),
    );
    let optional = coverage_ratio(
        result.matched_optional(),
        result.partial_optional(),
        result.total_optional(),
    );
    let proficiency = proficiency_quality(&result.matched_skills, job_skills.is_empty());

    let combined =
        weights.required * required + weights.optional * optional + weights.proficiency * proficiency;

    result.required_skills_coverage = to_percentage(required) as i32;
    result.score = to_percentage(combined) as i32;
    Ok(result)
}

/// Rejects a job skill list with a blank name or the same skill twice.
pub fn check_job_skills(job_skills: &[SkillRequirement]) -> Result<(), MatchError> {
    let mut seen = HashSet::with_capacity(job_skills.len());
    for requirement in job_skills {
        let key = normalize_skill_name(&requirement.skill_name);
        if key.is_empty() {
            return Err(MatchError::EmptySkillName { side: "job" });
        }
        if !seen.insert(key) {
            return Err(MatchError::DuplicateSkill(
                requirement.skill_name.trim().to_string(),
            ));
        }
    }
    Ok(())
}

/// Rejects a candidate skill list with a blank name. Duplicates are allowed.
pub fn check_candidate_skills(candidate_skills: &[CandidateSkill]) -> Result<(), MatchError> {
    index_candidate_skills(candidate_skills).map(|_| ())
}

/// Coverage of a category as a whole percentage, partial matches at half
/// weight. An empty category is fully covered.
pub fn coverage_percentage(full: usize, partial: usize, total: usize) -> u32 {
    to_percentage(coverage_ratio(full, partial, total))
}

/// Average proficiency weight of `matched` relative to the top weight, 0–100.
pub fn proficiency_percentage(matched: &[MatchedSkill]) -> u32 {
    to_percentage(proficiency_quality(matched, false))
}

fn coverage_ratio(full: usize, partial: usize, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    (full as f64 + 0.5 * partial as f64) / total as f64
}

fn proficiency_quality(matched: &[MatchedSkill], nothing_requested: bool) -> f64 {
    if matched.is_empty() {
        return if nothing_requested { 1.0 } else { 0.0 };
    }
    let weighted: u32 = matched.iter().map(|s| s.candidate_proficiency.weight()).sum();
    weighted as f64 / (Proficiency::MAX_WEIGHT as f64 * matched.len() as f64)
}

fn to_percentage(ratio: f64) -> u32 {
    debug_assert!(
        (0.0..=1.0 + WEIGHT_TOLERANCE).contains(&ratio),
        "ratio {ratio} outside 0..=1"
    );
    (ratio * 100.0).round() as u32
}

fn index_candidate_skills(
    candidate_skills: &[CandidateSkill],
) -> Result<HashMap<String, Proficiency>, MatchError> {
    let mut held: HashMap<String, Proficiency> = HashMap::with_capacity(candidate_skills.len());
    for skill in candidate_skills {
        let key = normalize_skill_name(&skill.skill_name);
        if key.is_empty() {
            return Err(MatchError::EmptySkillName { side: "candidate" });
        }
        held.entry(key)
            .and_modify(|level| *level = (*level).max(skill.proficiency))
            .or_insert(skill.proficiency);
    }
    Ok(held)
}
