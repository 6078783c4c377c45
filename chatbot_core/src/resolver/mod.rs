//! Entity resolver - turns free-text fragments into Pokédex records.
//!
//! Resolution is two-stage: an exact case-insensitive lookup keeps the common
//! case deterministic, and only misspellings or partial names fall through to
//! approximate matching over the full name set.

use pokedex_data::{Record, RecordStore};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matcher;
use crate::tokens;

/// Acceptance thresholds for approximate name matching.
///
/// One consolidated set of values. The legacy implementations disagreed on
/// the single-name threshold (75 vs 90); 75 is adopted here, see DESIGN.md.
/// Scores must strictly exceed a threshold to be accepted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Skip approximate matching entirely; exact lookups only.
    pub exact_match_only: bool,

    /// Per-token acceptance when scanning a whole query.
    pub token_threshold: u8,

    /// Per-token acceptance when the caller already knows the query names a
    /// single well-specified subject.
    pub strict_token_threshold: u8,

    /// Acceptance when resolving one candidate fragment on its own.
    pub single_name_threshold: u8,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            exact_match_only: false,
            token_threshold: 85,
            strict_token_threshold: 90,
            single_name_threshold: 75,
        }
    }
}

/// Extraction modes for [`EntityResolver::extract_candidates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    /// Broad scan: accept anything above `token_threshold`.
    Relaxed,
    /// Single-subject scan: accept only above `strict_token_threshold`.
    Strict,
}

impl ResolverConfig {
    fn token_threshold_for(&self, strictness: Strictness) -> u8 {
        match strictness {
            Strictness::Relaxed => self.token_threshold,
            Strictness::Strict => self.strict_token_threshold,
        }
    }
}

/// Resolves name references against a record store.
///
/// Holds thresholds only; the store is passed by reference per call, so one
/// resolver serves any number of stores and concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct EntityResolver {
    config: ResolverConfig,
}

impl EntityResolver {
    /// Create a resolver with the given thresholds.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a single candidate fragment to a record.
    ///
    /// An exact (case-insensitive) name wins outright. Otherwise the best
    /// approximate match over all known names is accepted only when its score
    /// strictly exceeds `single_name_threshold`.
    pub fn resolve_one<'a>(&self, store: &'a RecordStore, candidate: &str) -> Option<&'a Record> {
        let needle = candidate.to_lowercase();
        if let Some(record) = store.lookup_exact(&needle) {
            return Some(record);
        }
        if self.config.exact_match_only {
            return None;
        }

        let found = matcher::best_match(&needle, store.all_names().iter().map(String::as_str))?;
        if found.score > self.config.single_name_threshold {
            debug!(
                candidate,
                matched = found.candidate,
                score = found.score,
                "fuzzy-resolved single name"
            );
            store.lookup_exact(found.candidate)
        } else {
            None
        }
    }

    /// Scan a whole query for name references.
    ///
    /// Alphabetic tokens are matched one by one against the known names.
    /// Accepted names come back deduplicated in first-occurrence order;
    /// comparison answers index into the result positionally, so the order
    /// is part of the contract even though the result is conceptually a set.
    pub fn extract_candidates(
        &self,
        store: &RecordStore,
        query: &str,
        strictness: Strictness,
    ) -> Vec<String> {
        let threshold = self.config.token_threshold_for(strictness);
        let mut found: Vec<String> = Vec::new();

        for token in tokens::tokenize(query) {
            if !token.is_alphabetic() {
                continue;
            }
            let word = token.text.to_lowercase();

            let name = if self.config.exact_match_only {
                store.lookup_exact(&word).map(|record| record.key())
            } else {
                matcher::best_match(&word, store.all_names().iter().map(String::as_str))
                    .filter(|m| m.score > threshold)
                    .map(|m| m.candidate.to_string())
            };

            if let Some(name) = name {
                if !found.contains(&name) {
                    found.push(name);
                }
            }
        }

        debug!(candidates = ?found, ?strictness, "extracted name candidates");
        found
    }
}
