//! Chatbot pipeline - from raw query text to a rendered answer.
//!
//! Every query flows through the same stages:
//! 1. **Normalize**: lowercase the raw text
//! 2. **Extract**: scan the query for name references (relaxed thresholds)
//! 3. **Classify**: walk the ordered keyword rules to pick an intent
//! 4. **Synthesize**: render the template for that intent

use pokedex_data::RecordStore;
use rand::seq::SliceRandom;
use serde::Deserialize;
use tracing::debug;

use crate::classifier::{self, Intent};
use crate::resolver::{EntityResolver, ResolverConfig, Strictness};
use crate::synthesizer;

/// Top-level configuration. TOML-loadable; missing keys keep their defaults.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct ChatbotConfig {
    pub resolver: ResolverConfig,
}

impl ChatbotConfig {
    /// Parse a TOML document, e.g.
    ///
    /// ```toml
    /// [resolver]
    /// single_name_threshold = 90
    /// ```
    pub fn from_toml_str(document: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(document)
    }
}

/// The chatbot: an immutable record store plus the query-understanding stack.
///
/// Construct once at startup and share by reference. Queries are handled
/// statelessly with no suspension points, so any number of concurrent
/// callers can use one instance without synchronization; the store is the
/// only shared resource and is read-only after load.
pub struct Chatbot {
    store: RecordStore,
    resolver: EntityResolver,
}

impl Chatbot {
    /// Create a chatbot over the given store with default thresholds.
    pub fn new(store: RecordStore) -> Self {
        Self::with_config(store, ChatbotConfig::default())
    }

    /// Create a chatbot with explicit configuration.
    pub fn with_config(store: RecordStore, config: ChatbotConfig) -> Self {
        Self {
            store,
            resolver: EntityResolver::new(config.resolver),
        }
    }

    /// The underlying record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Answer a free-text query.
    ///
    /// This is the single seam the surrounding CLI/HTTP wrappers call. It is
    /// total: malformed input never raises, it degrades to one of the fixed
    /// fallback answers.
    pub fn handle_query(&self, text: &str) -> String {
        let query = text.to_lowercase();
        let candidates =
            self.resolver
                .extract_candidates(&self.store, &query, Strictness::Relaxed);
        let intent = classifier::classify(&query, candidates.len());
        debug!(
            intent = intent.as_str(),
            candidates = candidates.len(),
            "dispatching query"
        );

        match intent {
            Intent::Random => self.answer_random(),
            Intent::Compare => self.answer_compare(&candidates),
            Intent::Weakness => self.answer_weakness(&candidates),
            Intent::Info => self.answer_info(&query),
            Intent::Lookup => self.answer_lookup(&candidates),
            Intent::Unrecognized => synthesizer::FALLBACK.to_string(),
        }
    }

    fn answer_random(&self) -> String {
        let mut rng = rand::thread_rng();
        match self.store.all_records().choose(&mut rng) {
            Some(record) => synthesizer::describe(record),
            // An empty store leaves nothing to surprise anyone with.
            None => synthesizer::FALLBACK.to_string(),
        }
    }

    fn answer_compare(&self, candidates: &[String]) -> String {
        let resolved = (
            candidates
                .first()
                .and_then(|name| self.resolver.resolve_one(&self.store, name)),
            candidates
                .get(1)
                .and_then(|name| self.resolver.resolve_one(&self.store, name)),
        );

        match resolved {
            (Some(a), Some(b)) => synthesizer::compare(a, b),
            _ => synthesizer::COMPARE_UNRESOLVED.to_string(),
        }
    }

    fn answer_weakness(&self, candidates: &[String]) -> String {
        candidates
            .first()
            .and_then(|name| self.resolver.resolve_one(&self.store, name))
            .map(synthesizer::type_profile)
            .unwrap_or_else(|| synthesizer::NOT_FOUND.to_string())
    }

    fn answer_info(&self, query: &str) -> String {
        // The caller asked about a single well-specified subject; re-extract
        // with the strict threshold so stray words cannot hijack it.
        let subjects = self
            .resolver
            .extract_candidates(&self.store, query, Strictness::Strict);
        subjects
            .first()
            .and_then(|name| self.resolver.resolve_one(&self.store, name))
            .map(synthesizer::describe)
            .unwrap_or_else(|| synthesizer::NOT_FOUND.to_string())
    }

    fn answer_lookup(&self, candidates: &[String]) -> String {
        candidates
            .first()
            .and_then(|name| self.resolver.resolve_one(&self.store, name))
            .map(synthesizer::describe)
            .unwrap_or_else(|| synthesizer::NOT_FOUND.to_string())
    }
}
