use serde::{Deserialize, Serialize};

/// How far a fuzzy match can be trusted.
///
/// `High` and `Medium` matches are auto-applied; `Low` matches are only suggested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchConfidence {
    High,
    Medium,
    Low,
}

impl MatchConfidence {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

const NEAR_EXACT_MIN_LEN: usize = 5;
const CONTAINMENT_MIN_LEN: usize = 6;
const TWO_EDIT_MIN_LEN: usize = 8;

/// Classify a candidate given the comparison keys of both sides.
///
/// Short names need an exact or single-edit match; several brands differ by one
/// character only.
pub fn classify(
    input_key: &str,
    candidate_key: &str,
    distance: usize,
    contains: bool,
) -> MatchConfidence {
    let min_len = input_key
        .chars()
        .count()
        .min(candidate_key.chars().count());

    let exact = distance == 0;
    let near_exact = distance == 1 && min_len >= NEAR_EXACT_MIN_LEN;
    let contained = contains && min_len >= CONTAINMENT_MIN_LEN;
    let two_edits = distance == 2 && min_len >= TWO_EDIT_MIN_LEN;

    if exact || near_exact {
        MatchConfidence::High
    } else if contained || two_edits {
        MatchConfidence::Medium
    } else {
        MatchConfidence::Low
    }
}
