use serde::{Deserialize, Serialize};

use super::config::CompletionConfig;

/// Qualitative completion band derived from the percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionLevel {
    Incomplete,
    Basic,
    Good,
    Excellent,
}

impl CompletionLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Incomplete => "Incomplete",
            Self::Basic => "Basic",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

pub(crate) fn level_for(percentage: u8, config: &CompletionConfig) -> CompletionLevel {
    if percentage >= config.excellent_threshold {
        CompletionLevel::Excellent
    } else if percentage >= config.good_threshold {
        CompletionLevel::Good
    } else if percentage >= config.basic_threshold {
        CompletionLevel::Basic
    } else {
        CompletionLevel::Incomplete
    }
}

/// How far the profile is from the next completion band. At the top band
/// `target == current` and `remaining == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub current: u8,
    pub target: u8,
    pub remaining: u8,
    /// `current` as a share of `target`, rounded, clamped to 100.
    pub percent_of_target: u8,
}

pub(crate) fn progress_to_next_level(percentage: u8, config: &CompletionConfig) -> LevelProgress {
    let target = match level_for(percentage, config) {
        CompletionLevel::Incomplete => config.basic_threshold,
        CompletionLevel::Basic => config.good_threshold,
        CompletionLevel::Good => config.excellent_threshold,
        CompletionLevel::Excellent => percentage,
    };

    let remaining = target.saturating_sub(percentage);
    let percent_of_target = if target == 0 || percentage >= target {
        100
    } else {
        let pct = (f64::from(percentage) * 100.0 / f64::from(target)).round();
        pct.clamp(0.0, 100.0) as u8
    };

    LevelProgress {
        current: percentage,
        target,
        remaining,
        percent_of_target,
    }
}
