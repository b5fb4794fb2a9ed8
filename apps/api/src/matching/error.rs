use thiserror::Error;

/// Rejections raised by the scoring core.
///
/// Every variant is deterministic for a given input: callers should treat it
/// as a bug in whatever produced the data, not as something to retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("skill name must not be blank ({side} side)")]
    EmptySkillName { side: &'static str },

    #[error("job lists skill '{0}' more than once")]
    DuplicateSkill(String),

    #[error("unknown proficiency level '{0}' (expected beginner, intermediate, advanced or expert)")]
    UnknownProficiency(String),

    #[error("{field} must be within 0..=100, got {value}")]
    OutOfRange { field: &'static str, value: i64 },

    #[error("skill '{0}' appears in more than one match category")]
    OverlappingSkill(String),

    #[error("invalid match weights: {0}")]
    InvalidWeights(String),
}
