//! The type chart: the closed vocabulary of creature types and their display symbols.

use serde::{Deserialize, Serialize};

/// All creature types in the system.
///
/// The vocabulary is closed: every record's `types` entry and every key of its
/// effectiveness table is one of these tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    /// The dataset abbreviates this tag as "fight" in effectiveness keys.
    #[serde(alias = "fight")]
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl TypeTag {
    /// Every tag in the vocabulary, in canonical chart order.
    pub const ALL: [TypeTag; 18] = [
        TypeTag::Normal,
        TypeTag::Fire,
        TypeTag::Water,
        TypeTag::Electric,
        TypeTag::Grass,
        TypeTag::Ice,
        TypeTag::Fighting,
        TypeTag::Poison,
        TypeTag::Ground,
        TypeTag::Flying,
        TypeTag::Psychic,
        TypeTag::Bug,
        TypeTag::Rock,
        TypeTag::Ghost,
        TypeTag::Dragon,
        TypeTag::Dark,
        TypeTag::Steel,
        TypeTag::Fairy,
    ];

    /// Canonical capitalized display name.
    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::Normal => "Normal",
            TypeTag::Fire => "Fire",
            TypeTag::Water => "Water",
            TypeTag::Electric => "Electric",
            TypeTag::Grass => "Grass",
            TypeTag::Ice => "Ice",
            TypeTag::Fighting => "Fighting",
            TypeTag::Poison => "Poison",
            TypeTag::Ground => "Ground",
            TypeTag::Flying => "Flying",
            TypeTag::Psychic => "Psychic",
            TypeTag::Bug => "Bug",
            TypeTag::Rock => "Rock",
            TypeTag::Ghost => "Ghost",
            TypeTag::Dragon => "Dragon",
            TypeTag::Dark => "Dark",
            TypeTag::Steel => "Steel",
            TypeTag::Fairy => "Fairy",
        }
    }

    /// Display symbol for type badges. Total over the vocabulary.
    pub fn symbol(&self) -> &'static str {
        match self {
            TypeTag::Normal => "✨",
            TypeTag::Fire => "🔥",
            TypeTag::Water => "💧",
            TypeTag::Electric => "⚡",
            TypeTag::Grass => "🌿",
            TypeTag::Ice => "❄️",
            TypeTag::Fighting => "🥊",
            TypeTag::Poison => "☠️",
            TypeTag::Ground => "🌍",
            TypeTag::Flying => "🕊️",
            TypeTag::Psychic => "🧠",
            TypeTag::Bug => "🐛",
            TypeTag::Rock => "🪨",
            TypeTag::Ghost => "👻",
            TypeTag::Dragon => "🐉",
            TypeTag::Dark => "🌑",
            TypeTag::Steel => "🛡️",
            TypeTag::Fairy => "🧚",
        }
    }

    /// Parse a tag from its name, case-insensitively.
    pub fn from_name(name: &str) -> Option<TypeTag> {
        TypeTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How strongly an attack type lands, derived from its damage multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effectiveness {
    /// Above 1x damage.
    Weak,
    /// Exactly 1x damage.
    Neutral,
    /// Below 1x but nonzero.
    Resistant,
    /// 0x damage.
    Immune,
}

impl Effectiveness {
    /// Classify a non-negative damage multiplier.
    pub fn classify(multiplier: f32) -> Self {
        if multiplier == 0.0 {
            Effectiveness::Immune
        } else if multiplier > 1.0 {
            Effectiveness::Weak
        } else if multiplier < 1.0 {
            Effectiveness::Resistant
        } else {
            Effectiveness::Neutral
        }
    }
}
