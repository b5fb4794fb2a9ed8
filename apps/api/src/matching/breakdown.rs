//! Score Breakdown Presenter: turns a `MatchResult` into display factors,
//! strengths, gaps and a narrative recommendation.

use std::collections::HashSet;

use crate::matching::error::MatchError;
use crate::matching::models::{
    normalize_skill_name, FactorStatus, MatchResult, Proficiency, ScoreBreakdown, ScoreFactor,
};
use crate::matching::scorer::{coverage_percentage, proficiency_percentage};
use crate::matching::status::{
    ScoreBand, Thresholds, NICE_TO_HAVE_THRESHOLDS, PROFICIENCY_THRESHOLDS,
    REQUIRED_SKILLS_THRESHOLDS,
};

pub const REQUIRED_SKILLS: &str = "Required Skills";
pub const NICE_TO_HAVE_SKILLS: &str = "Nice-to-Have Skills";
pub const SKILL_PROFICIENCY: &str = "Skill Proficiency";

/// Named examples per detail line before the rest collapse into "(+N more)".
const MAX_EXAMPLES: usize = 3;

type FactorBuilder = fn(&MatchResult) -> Option<ScoreFactor>;

/// Factor builders in display order. A builder yields `None` when the
/// result has nothing for it to describe.
const FACTOR_BUILDERS: [FactorBuilder; 3] = [
    required_skills_factor,
    nice_to_have_factor,
    proficiency_factor,
];

pub fn build_breakdown(result: &MatchResult) -> Result<ScoreBreakdown, MatchError> {
    validate_result(result)?;

    let factors = FACTOR_BUILDERS
        .iter()
        .filter_map(|build| build(result))
        .collect();

    Ok(ScoreBreakdown {
        factors,
        strengths: collect_strengths(result),
        gaps: collect_gaps(result),
        recommendation: ScoreBand::for_score(result.score as u32)
            .recommendation()
            .to_string(),
    })
}

/// Rejects results no scorer could have produced instead of clamping them.
pub fn validate_result(result: &MatchResult) -> Result<(), MatchError> {
    check_percentage("score", result.score)?;
    check_percentage("required_skills_coverage", result.required_skills_coverage)?;

    let mut seen = HashSet::new();
    for name in result.skill_names() {
        let key = normalize_skill_name(name);
        if key.is_empty() {
            return Err(MatchError::EmptySkillName { side: "result" });
        }
        if !seen.insert(key) {
            return Err(MatchError::OverlappingSkill(name.trim().to_string()));
        }
    }
    Ok(())
}

fn check_percentage(field: &'static str, value: i32) -> Result<(), MatchError> {
    if (0..=100).contains(&value) {
        Ok(())
    } else {
        Err(MatchError::OutOfRange {
            field,
            value: value as i64,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Factors
// ────────────────────────────────────────────────────────────────────────────

fn required_skills_factor(result: &MatchResult) -> Option<ScoreFactor> {
    let percentage = result.required_skills_coverage as u32;

    let mut details = Vec::new();
    push_examples(
        &mut details,
        "Matched",
        result
            .matched_skills
            .iter()
            .filter(|s| s.is_required)
            .map(|s| s.skill_name.as_str()),
    );
    push_examples(
        &mut details,
        "Below required level",
        result
            .partially_matched_skills
            .iter()
            .filter(|s| s.is_required)
            .map(|s| s.skill_name.as_str()),
    );
    push_examples(
        &mut details,
        "Missing",
        result
            .missing_skills
            .iter()
            .filter(|s| s.is_required)
            .map(|s| s.skill_name.as_str()),
    );
    if details.is_empty() {
        details.push("No required skills specified".to_string());
    }

    Some(factor(
        REQUIRED_SKILLS,
        (2 * result.matched_required() + result.partial_required()) as u32,
        (2 * result.total_required()) as u32,
        percentage,
        &REQUIRED_SKILLS_THRESHOLDS,
        details,
    ))
}

fn nice_to_have_factor(result: &MatchResult) -> Option<ScoreFactor> {
    let total = result.total_optional();
    if total == 0 {
        return None;
    }
    let matched = result.matched_optional();
    let partial = result.partial_optional();

    let mut details = Vec::new();
    push_examples(
        &mut details,
        "Has",
        result
            .matched_skills
            .iter()
            .filter(|s| !s.is_required)
            .map(|s| s.skill_name.as_str()),
    );
    push_examples(
        &mut details,
        "Partial",
        result
            .partially_matched_skills
            .iter()
            .filter(|s| !s.is_required)
            .map(|s| s.skill_name.as_str()),
    );
    push_examples(
        &mut details,
        "Missing",
        result
            .missing_skills
            .iter()
            .filter(|s| !s.is_required)
            .map(|s| s.skill_name.as_str()),
    );

    Some(factor(
        NICE_TO_HAVE_SKILLS,
        (2 * matched + partial) as u32,
        (2 * total) as u32,
        coverage_percentage(matched, partial, total),
        &NICE_TO_HAVE_THRESHOLDS,
        details,
    ))
}

fn proficiency_factor(result: &MatchResult) -> Option<ScoreFactor> {
    let matched = &result.matched_skills;
    if matched.is_empty() {
        return None;
    }

    let mut details = Vec::new();
    for level in [
        Proficiency::Expert,
        Proficiency::Advanced,
        Proficiency::Intermediate,
        Proficiency::Beginner,
    ] {
        push_examples(
            &mut details,
            level_heading(level),
            matched
                .iter()
                .filter(|s| s.candidate_proficiency == level)
                .map(|s| s.skill_name.as_str()),
        );
    }

    let weighted: u32 = matched.iter().map(|s| s.candidate_proficiency.weight()).sum();

    Some(factor(
        SKILL_PROFICIENCY,
        weighted,
        Proficiency::MAX_WEIGHT * matched.len() as u32,
        proficiency_percentage(matched),
        &PROFICIENCY_THRESHOLDS,
        details,
    ))
}

fn factor(
    name: &str,
    score: u32,
    max_score: u32,
    percentage: u32,
    thresholds: &Thresholds<FactorStatus>,
    details: Vec<String>,
) -> ScoreFactor {
    ScoreFactor {
        name: name.to_string(),
        score,
        max_score,
        percentage,
        status: thresholds.classify(percentage),
        details,
    }
}

fn level_heading(level: Proficiency) -> &'static str {
    match level {
        Proficiency::Expert => "Expert",
        Proficiency::Advanced => "Advanced",
        Proficiency::Intermediate => "Intermediate",
        Proficiency::Beginner => "Beginner",
    }
}

/// Appends `"<heading>: a, b, c (+N more)"` unless `names` is empty.
fn push_examples<'a>(
    details: &mut Vec<String>,
    heading: &str,
    names: impl Iterator<Item = &'a str>,
) {
    let names: Vec<&str> = names.collect();
    if names.is_empty() {
        return;
    }
    let shown = names[..names.len().min(MAX_EXAMPLES)].join(", ");
    let hidden = names.len().saturating_sub(MAX_EXAMPLES);
    if hidden > 0 {
        details.push(format!("{heading}: {shown} (+{hidden} more)"));
    } else {
        details.push(format!("{heading}: {shown}"));
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Strengths & gaps
// ────────────────────────────────────────────────────────────────────────────

fn collect_strengths(result: &MatchResult) -> Vec<String> {
    let mut strengths = Vec::new();
    let coverage = result.required_skills_coverage;

    if coverage >= 80 {
        strengths.push(format!("Strong coverage of required skills ({coverage}%)"));
    }

    let high = result
        .matched_skills
        .iter()
        .filter(|s| s.candidate_proficiency.is_high())
        .count();
    if high >= 3 {
        strengths.push(format!("{high} skills at advanced or expert level"));
    }

    let optional = result.matched_optional();
    if optional > 2 {
        strengths.push(format!("Brings {optional} nice-to-have skills"));
    }

    strengths
}

fn collect_gaps(result: &MatchResult) -> Vec<String> {
    let mut gaps = Vec::new();
    let coverage = result.required_skills_coverage;

    if coverage < 50 {
        gaps.push(format!(
            "Significant gaps in required skills ({coverage}% coverage)"
        ));
    }

    let missing = result.missing_required();
    if missing > 0 {
        gaps.push(format!("Missing {missing} required skill(s)"));
    }

    let partial = result.partially_matched_skills.len();
    if partial > 0 {
        gaps.push(format!(
            "{partial} skill(s) below the required proficiency level"
        ));
    }

    gaps
}
