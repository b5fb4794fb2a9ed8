//! Percentage → status classification.
//!
//! Each table is an ordered list of `(min_percentage, value)` rows evaluated
//! top-down; the first row whose minimum is met wins, otherwise the floor.

use serde::{Deserialize, Serialize};

use crate::matching::models::FactorStatus;

#[derive(Debug, Clone, Copy)]
pub struct Thresholds<T: 'static> {
    pub bands: &'static [(u32, T)],
    pub floor: T,
}

impl<T: Copy> Thresholds<T> {
    pub fn classify(&self, percentage: u32) -> T {
        self.bands
            .iter()
            .find(|(min, _)| percentage >= *min)
            .map(|(_, value)| *value)
            .unwrap_or(self.floor)
    }
}

pub const REQUIRED_SKILLS_THRESHOLDS: Thresholds<FactorStatus> = Thresholds {
    bands: &[(80, FactorStatus::Strong), (50, FactorStatus::Moderate)],
    floor: FactorStatus::Weak,
};

pub const NICE_TO_HAVE_THRESHOLDS: Thresholds<FactorStatus> = Thresholds {
    bands: &[(70, FactorStatus::Strong), (40, FactorStatus::Moderate)],
    floor: FactorStatus::Weak,
};

pub const PROFICIENCY_THRESHOLDS: Thresholds<FactorStatus> = Thresholds {
    bands: &[(75, FactorStatus::Strong), (50, FactorStatus::Moderate)],
    floor: FactorStatus::Weak,
};

/// Narrative band of an overall match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Limited,
}

pub const SCORE_BANDS: Thresholds<ScoreBand> = Thresholds {
    bands: &[
        (80, ScoreBand::Excellent),
        (60, ScoreBand::Good),
        (40, ScoreBand::Fair),
    ],
    floor: ScoreBand::Limited,
};

impl ScoreBand {
    pub fn for_score(score: u32) -> Self {
        SCORE_BANDS.classify(score)
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            ScoreBand::Excellent => {
                "Excellent match. This candidate meets or exceeds most requirements and is highly recommended for an interview."
            }
            ScoreBand::Good => {
                "Good match. This candidate covers the core requirements; consider an interview to explore the remaining gaps."
            }
            ScoreBand::Fair => {
                "Fair match. This candidate has relevant skills but notable gaps; review carefully before moving forward."
            }
            ScoreBand::Limited => {
                "Limited match. This candidate is missing several key requirements for this role."
            }
        }
    }
}
