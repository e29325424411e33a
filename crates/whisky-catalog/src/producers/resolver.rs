use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::canonical::canonicalize;
use super::confidence::{classify, MatchConfidence};
use super::distance::{contains_either, levenshtein};
use super::normalizer::normalize_producer_name;

const MAX_SUGGESTIONS: usize = 3;
const MIN_SUGGESTION_DISTANCE: usize = 3;

/// Outcome of resolving one raw producer name against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerResolution {
    pub input: String,
    pub normalized: String,
    pub resolved_name: Option<String>,
    pub confidence: MatchConfidence,
    pub suggestions: Vec<String>,
}

impl ProducerResolution {
    fn unresolved(input: &str, normalized: String) -> Self {
        Self {
            input: input.to_string(),
            normalized,
            resolved_name: None,
            confidence: MatchConfidence::Low,
            suggestions: Vec::new(),
        }
    }
}

#[derive(Debug)]
struct RankedCandidate<'a> {
    name: &'a str,
    key: String,
    distance: usize,
    contains: bool,
}

impl RankedCandidate<'_> {
    fn rank_key(&self) -> (usize, bool, usize) {
        (self.distance, !self.contains, self.name.chars().count())
    }
}

/// Resolve `raw` against a list of canonical producer names.
///
/// Candidates are trimmed and de-duplicated first. They are ranked by edit distance,
/// then containment, then shorter name. Only a non-`low` top match is reported as
/// `resolved_name`.
pub fn resolve_producer_name<S: AsRef<str>>(raw: &str, candidates: &[S]) -> ProducerResolution {
    let normalized = normalize_producer_name(raw);
    if normalized.is_empty() {
        return ProducerResolution::unresolved(raw, normalized);
    }

    let unique: BTreeSet<&str> = candidates
        .iter()
        .map(|candidate| candidate.as_ref().trim())
        .filter(|candidate| !candidate.is_empty())
        .collect();
    if unique.is_empty() {
        return ProducerResolution::unresolved(raw, normalized);
    }

    let input_key = canonicalize(&normalized);
    let mut ranked: Vec<RankedCandidate<'_>> = unique
        .into_iter()
        .map(|name| {
            let key = canonicalize(name);
            RankedCandidate {
                name,
                distance: levenshtein(&input_key, &key),
                contains: contains_either(&input_key, &key),
                key,
            }
        })
        .collect();
    ranked.sort_by_key(RankedCandidate::rank_key);

    let best = &ranked[0];
    let confidence = classify(&input_key, &best.key, best.distance, best.contains);
    let resolved_name = (confidence != MatchConfidence::Low).then(|| best.name.to_string());

    let max_distance = MIN_SUGGESTION_DISTANCE.max(input_key.chars().count() / 3);
    let suggestions = ranked
        .iter()
        .filter(|candidate| candidate.distance <= max_distance || candidate.contains)
        .take(MAX_SUGGESTIONS)
        .map(|candidate| candidate.name.to_string())
        .collect();

    ProducerResolution {
        input: raw.to_string(),
        normalized,
        resolved_name,
        confidence,
        suggestions,
    }
}
