//! Plain-text candidate assessment, suitable for copy-to-clipboard or a
//! `.txt` download.

use chrono::{DateTime, Utc};

use crate::matching::breakdown::build_breakdown;
use crate::matching::error::MatchError;
use crate::matching::models::{MatchResult, ScoreBreakdown};

const HEAVY_RULE_WIDTH: usize = 40;
const LIGHT_RULE_WIDTH: usize = 20;

/// Renders the assessment text. Output depends only on the arguments, so a
/// fixed `generated_at` gives byte-identical text.
pub fn render_summary(
    candidate_name: &str,
    job_title: &str,
    result: &MatchResult,
    breakdown: &ScoreBreakdown,
    generated_at: DateTime<Utc>,
) -> String {
    let heavy = "=".repeat(HEAVY_RULE_WIDTH);
    let light = "-".repeat(LIGHT_RULE_WIDTH);

    let mut lines = vec![
        "CANDIDATE ASSESSMENT SUMMARY".to_string(),
        heavy.clone(),
        String::new(),
        format!("Candidate: {candidate_name}"),
        format!("Position: {job_title}"),
        format!("Overall Match Score: {}%", result.score),
        String::new(),
        "SCORE BREAKDOWN".to_string(),
        light.clone(),
    ];

    for factor in &breakdown.factors {
        lines.push(format!(
            "{}: {}% ({})",
            factor.name,
            factor.percentage,
            factor.status.label()
        ));
        lines.extend(factor.details.iter().map(|d| format!("  - {d}")));
    }

    lines.push(String::new());
    lines.push("STRENGTHS".to_string());
    lines.push(light.clone());
    lines.extend(breakdown.strengths.iter().map(|s| format!("+ {s}")));

    lines.push(String::new());
    lines.push("AREAS OF CONCERN".to_string());
    lines.push(light);
    lines.extend(breakdown.gaps.iter().map(|g| format!("- {g}")));

    lines.push(String::new());
    lines.push(heavy);
    lines.push(format!("Generated on {}", generated_at.format("%-m/%-d/%Y")));

    lines.join("\n")
}

/// Builds the breakdown for `result` and renders it in one step.
pub fn assessment_summary(
    candidate_name: &str,
    job_title: &str,
    result: &MatchResult,
    generated_at: DateTime<Utc>,
) -> Result<String, MatchError> {
    let breakdown = build_breakdown(result)?;
    Ok(render_summary(
        candidate_name,
        job_title,
        result,
        &breakdown,
        generated_at,
    ))
}

/// Download filename for a candidate's summary, e.g. `assessment-jane-doe.txt`.
pub fn summary_filename(candidate_name: &str) -> String {
    let slug = candidate_name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "assessment.txt".to_string()
    } else {
        format!("assessment-{slug}.txt")
    }
}
