//! Intent classifier - ordered keyword rules over the normalized query.
//!
//! Classification is a flat priority list, not a tree: the first rule whose
//! keywords and entity requirement are satisfied wins, regardless of how many
//! keywords any later rule would have matched. The list order is observed
//! product behavior and must not be "fixed".

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The caller's classified request category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Describe a randomly drawn record.
    Random,
    /// Stat-by-stat comparison of two records.
    Compare,
    /// Weakness/resistance/immunity profile of one record.
    Weakness,
    /// Explicit info request ("tell me about X").
    Info,
    /// Bare name mention; describe it.
    Lookup,
    /// Nothing matched; answer with the fallback text.
    Unrecognized,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Random => "random",
            Intent::Compare => "compare",
            Intent::Weakness => "weakness",
            Intent::Info => "info",
            Intent::Lookup => "lookup",
            Intent::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One keyword rule in the priority table.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    /// Substring keywords; any hit satisfies the rule. Substring (not word)
    /// containment is the legacy matching granularity, kept deliberately.
    pub keywords: &'static [&'static str],
    /// Minimum number of distinct resolved entities required.
    pub min_entities: usize,
}

impl IntentRule {
    /// Whether this rule fires for the given lowercased query.
    pub fn matches(&self, query: &str, entity_count: usize) -> bool {
        entity_count >= self.min_entities
            && self.keywords.iter().any(|keyword| query.contains(keyword))
    }
}

/// The priority table, checked top to bottom.
pub const RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Random,
        keywords: &["random", "surprise"],
        min_entities: 0,
    },
    IntentRule {
        intent: Intent::Compare,
        keywords: &["compare", "vs", "versus", "better", "stronger", "and"],
        min_entities: 2,
    },
    IntentRule {
        intent: Intent::Weakness,
        keywords: &[
            "weak",
            "weakness",
            "resist",
            "resistance",
            "immune",
            "immunity",
            "immunities",
            "battle",
        ],
        min_entities: 0,
    },
    IntentRule {
        intent: Intent::Info,
        keywords: &["tell", "about", "what", "give", "info", "information"],
        min_entities: 0,
    },
];

/// Classify a lowercased query given how many entities resolved from it.
///
/// Falls through the rule table in order; a query matching no rule is a
/// plain lookup when at least one entity resolved, otherwise unrecognized.
pub fn classify(query: &str, entity_count: usize) -> Intent {
    for rule in RULES {
        if rule.matches(query, entity_count) {
            debug!(intent = rule.intent.as_str(), "intent rule matched");
            return rule.intent;
        }
    }

    if entity_count > 0 {
        Intent::Lookup
    } else {
        Intent::Unrecognized
    }
}
