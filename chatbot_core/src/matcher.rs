//! Approximate matcher collaborator - similarity-scored name lookup.
//!
//! Wraps `strsim`'s Jaro-Winkler metric behind the 0-100 score scale the
//! resolver thresholds are written against. Callers treat the score as an
//! opaque similarity signal.

use tracing::trace;

/// A candidate together with its similarity score in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMatch<'a> {
    pub candidate: &'a str,
    pub score: u8,
}

/// Score two strings on the 0-100 scale.
pub fn similarity(a: &str, b: &str) -> u8 {
    (strsim::jaro_winkler(a, b) * 100.0).round() as u8
}

/// Find the best-scoring candidate for `query`.
///
/// Ties keep the earliest candidate in iteration order; an empty candidate
/// sequence yields `None`.
pub fn best_match<'a>(
    query: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<ScoredMatch<'a>> {
    let mut best: Option<ScoredMatch<'a>> = None;

    for candidate in candidates {
        let score = similarity(query, candidate);
        if best.map_or(true, |current| score > current.score) {
            best = Some(ScoredMatch { candidate, score });
        }
    }

    if let Some(found) = best {
        trace!(
            query,
            candidate = found.candidate,
            score = found.score,
            "best approximate match"
        );
    }
    best
}
