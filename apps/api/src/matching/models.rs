#![allow(dead_code)]

//! Skill and match data shared by the scorer, the breakdown presenter and the
//! HTTP layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::matching::error::MatchError;

// ────────────────────────────────────────────────────────────────────────────
// Proficiency
// ────────────────────────────────────────────────────────────────────────────

/// Self-reported or assessed skill level. Ordered from weakest to strongest.
/// Serialized in snake_case; deserialized through `FromStr`, so JSON input
/// accepts the same spellings as stored rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    /// Highest value `weight()` can return.
    pub const MAX_WEIGHT: u32 = 3;

    /// Quality weight used by the proficiency factor: advanced and expert
    /// both count as top tier.
    pub fn weight(self) -> u32 {
        match self {
            Proficiency::Expert | Proficiency::Advanced => 3,
            Proficiency::Intermediate => 2,
            Proficiency::Beginner => 1,
        }
    }

    pub fn is_high(self) -> bool {
        self.weight() == Self::MAX_WEIGHT
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Proficiency::Beginner => "beginner",
            Proficiency::Intermediate => "intermediate",
            Proficiency::Advanced => "advanced",
            Proficiency::Expert => "expert",
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Proficiency {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Proficiency::Beginner),
            "intermediate" => Ok(Proficiency::Intermediate),
            "advanced" => Ok(Proficiency::Advanced),
            "expert" => Ok(Proficiency::Expert),
            _ => Err(MatchError::UnknownProficiency(s.to_string())),
        }
    }
}

impl TryFrom<String> for Proficiency {
    type Error = MatchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

/// A skill a job posting asks for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub skill_name: String,
    pub is_required: bool,
    /// Level below which a candidate only partially satisfies the skill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_proficiency: Option<Proficiency>,
}

impl SkillRequirement {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            skill_name: name.into(),
            is_required: true,
            minimum_proficiency: None,
        }
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            skill_name: name.into(),
            is_required: false,
            minimum_proficiency: None,
        }
    }

    pub fn at_least(mut self, level: Proficiency) -> Self {
        self.minimum_proficiency = Some(level);
        self
    }
}

/// A skill a candidate holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSkill {
    pub skill_name: String,
    pub proficiency: Proficiency,
}

impl CandidateSkill {
    pub fn new(name: impl Into<String>, proficiency: Proficiency) -> Self {
        Self {
            skill_name: name.into(),
            proficiency,
        }
    }
}

/// Identity used when comparing skill names across both sides.
pub fn normalize_skill_name(name: &str) -> String {
    name.trim().to_lowercase()
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedSkill {
    pub skill_name: String,
    pub is_required: bool,
    pub candidate_proficiency: Proficiency,
}

/// The candidate holds the skill, but below the posting's minimum level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartiallyMatchedSkill {
    pub skill_name: String,
    pub is_required: bool,
    pub candidate_proficiency: Proficiency,
    pub required_proficiency: Proficiency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingSkill {
    pub skill_name: String,
    pub is_required: bool,
}

/// Result of scoring one candidate against one job posting.
///
/// `score` and `required_skills_coverage` are signed so that a malformed
/// result coming back from a caller can be reported instead of failing to
/// deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: i32,
    pub matched_skills: Vec<MatchedSkill>,
    pub partially_matched_skills: Vec<PartiallyMatchedSkill>,
    pub missing_skills: Vec<MissingSkill>,
    pub required_skills_coverage: i32,
}

impl MatchResult {
    pub fn matched_required(&self) -> usize {
        self.matched_skills.iter().filter(|s| s.is_required).count()
    }

    pub fn matched_optional(&self) -> usize {
        self.matched_skills.len() - self.matched_required()
    }

    pub fn partial_required(&self) -> usize {
        self.partially_matched_skills
            .iter()
            .filter(|s| s.is_required)
            .count()
    }

    pub fn partial_optional(&self) -> usize {
        self.partially_matched_skills.len() - self.partial_required()
    }

    pub fn missing_required(&self) -> usize {
        self.missing_skills.iter().filter(|s| s.is_required).count()
    }

    pub fn missing_optional(&self) -> usize {
        self.missing_skills.len() - self.missing_required()
    }

    pub fn total_required(&self) -> usize {
        self.matched_required() + self.partial_required() + self.missing_required()
    }

    pub fn total_optional(&self) -> usize {
        self.matched_optional() + self.partial_optional() + self.missing_optional()
    }

    /// Every skill name in the result, in category order.
    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.matched_skills
            .iter()
            .map(|s| s.skill_name.as_str())
            .chain(
                self.partially_matched_skills
                    .iter()
                    .map(|s| s.skill_name.as_str()),
            )
            .chain(self.missing_skills.iter().map(|s| s.skill_name.as_str()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Presentation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorStatus {
    Strong,
    Moderate,
    Weak,
}

impl FactorStatus {
    /// Upper-case label used in the exported text summary.
    pub fn label(self) -> &'static str {
        match self {
            FactorStatus::Strong => "STRONG",
            FactorStatus::Moderate => "MODERATE",
            FactorStatus::Weak => "WEAK",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreFactor {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
    pub percentage: u32,
    pub status: FactorStatus,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub factors: Vec<ScoreFactor>,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendation: String,
}
