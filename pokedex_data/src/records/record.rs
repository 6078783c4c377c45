//! Record definitions - one entry per creature in the Pokédex.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::BaseStats;
use crate::types::{Effectiveness, TypeTag};

fn placeholder_description() -> String {
    "No description available".to_string()
}

/// A full Pokédex entry.
///
/// The display name doubles as the primary key: lookups fold it to lowercase
/// and the store rejects case-insensitive duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub name: String,

    /// One or two type tags, in dataset order.
    pub types: Vec<TypeTag>,

    pub base_stats: BaseStats,

    /// Ability names, in dataset order.
    pub abilities: Vec<String>,

    /// Flavor text per ability. May be shorter than `abilities` (or empty)
    /// when the enrichment step never ran; consumers zip to the shorter side.
    #[serde(default, alias = "abilityDescriptions")]
    pub ability_descriptions: Vec<String>,

    /// Damage multiplier per attacking type, over the keys present only.
    /// The dataset abbreviates Fighting as "fight".
    pub type_effectiveness: HashMap<TypeTag, f32>,

    pub meta: Meta,

    /// Pokédex flavor text.
    #[serde(default = "placeholder_description")]
    pub description: String,

    /// Official artwork URL, if the enrichment step attached one.
    #[serde(default)]
    pub image: Option<String>,

    /// Shiny sprite URL.
    #[serde(default, alias = "shiny")]
    pub shiny_image: Option<String>,
}

/// Dex metadata.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Meta {
    pub generation: u32,
    pub is_legendary: bool,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            generation: 1,
            is_legendary: false,
        }
    }
}

impl Record {
    /// Create a new record with the given display name and empty data.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
            base_stats: BaseStats::default(),
            abilities: Vec::new(),
            ability_descriptions: Vec::new(),
            type_effectiveness: HashMap::new(),
            meta: Meta::default(),
            description: placeholder_description(),
            image: None,
            shiny_image: None,
        }
    }

    /// Set the type tags.
    pub fn with_types(mut self, types: impl IntoIterator<Item = TypeTag>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    /// Set the base stats.
    pub fn with_stats(mut self, stats: BaseStats) -> Self {
        self.base_stats = stats;
        self
    }

    /// Set the ability names.
    pub fn with_abilities<I, S>(mut self, abilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.abilities = abilities.into_iter().map(Into::into).collect();
        self
    }

    /// Set the per-ability flavor text.
    pub fn with_ability_descriptions<I, S>(mut self, descriptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ability_descriptions = descriptions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the damage multipliers.
    pub fn with_effectiveness(
        mut self,
        multipliers: impl IntoIterator<Item = (TypeTag, f32)>,
    ) -> Self {
        self.type_effectiveness = multipliers.into_iter().collect();
        self
    }

    /// Set the flavor text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the generation number.
    pub fn with_generation(mut self, generation: u32) -> Self {
        self.meta.generation = generation;
        self
    }

    /// Mark the record as legendary.
    pub fn with_legendary(mut self, legendary: bool) -> Self {
        self.meta.is_legendary = legendary;
        self
    }

    /// Set the artwork URLs.
    pub fn with_artwork(
        mut self,
        image: impl Into<String>,
        shiny_image: impl Into<String>,
    ) -> Self {
        self.image = Some(image.into());
        self.shiny_image = Some(shiny_image.into());
        self
    }

    /// The lowercase lookup key.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Partition the effectiveness table into weaknesses, resistances, and
    /// immunities. Types at exactly 1x appear in none of the three sets.
    pub fn type_profile(&self) -> TypeProfile {
        let mut profile = TypeProfile::default();

        for (tag, multiplier) in &self.type_effectiveness {
            match Effectiveness::classify(*multiplier) {
                Effectiveness::Weak => profile.weak.push(*tag),
                Effectiveness::Resistant => profile.resist.push(*tag),
                Effectiveness::Immune => profile.immune.push(*tag),
                Effectiveness::Neutral => {}
            }
        }

        profile.weak.sort();
        profile.resist.sort();
        profile.immune.sort();
        profile
    }
}

/// Derived weakness/resistance/immunity partition, sorted in chart order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TypeProfile {
    pub weak: Vec<TypeTag>,
    pub resist: Vec<TypeTag>,
    pub immune: Vec<TypeTag>,
}
