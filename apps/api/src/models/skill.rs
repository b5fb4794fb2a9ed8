use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::error::MatchError;
use crate::matching::models::{CandidateSkill, SkillRequirement};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateSkillRow {
    pub candidate_id: Uuid,
    pub skill_name: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobSkillRow {
    pub job_id: Uuid,
    pub skill_name: String,
    pub is_required: bool,
    pub minimum_proficiency: Option<String>,
}

// Proficiency is stored as free text; anything outside the four levels is
// rejected here rather than guessed at.

impl TryFrom<CandidateSkillRow> for CandidateSkill {
    type Error = MatchError;

    fn try_from(row: CandidateSkillRow) -> Result<Self, Self::Error> {
        Ok(CandidateSkill {
            proficiency: row.proficiency.parse()?,
            skill_name: row.skill_name,
        })
    }
}

impl TryFrom<JobSkillRow> for SkillRequirement {
    type Error = MatchError;

    fn try_from(row: JobSkillRow) -> Result<Self, Self::Error> {
        let minimum_proficiency = match row.minimum_proficiency.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(level) => Some(level.parse()?),
        };
        Ok(SkillRequirement {
            skill_name: row.skill_name,
            is_required: row.is_required,
            minimum_proficiency,
        })
    }
}
