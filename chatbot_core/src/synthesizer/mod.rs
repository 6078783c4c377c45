//! Response synthesizer - fixed text templates over resolved records.
//!
//! Every output here is an ordinary string. "Didn't understand" outcomes are
//! first-class answers with their own fixed texts, not errors.

use pokedex_data::{Record, StatKind, TypeTag};

/// Answer when a weakness/lookup/info request names nothing the store knows.
pub const NOT_FOUND: &str = "I couldn't find that Pokémon.";

/// Answer when a comparison found two textual candidates but one failed to
/// resolve to a record.
pub const COMPARE_UNRESOLVED: &str = "One of those Pokémon names wasn't recognized.";

/// Catch-all answer for queries with no recognizable intent or entity.
pub const FALLBACK: &str =
    "Hmm... I didn't catch that. Try asking about a Pokémon or type 'random'!";

/// Render type badges for the header line, e.g. `Electric ⚡`.
fn type_badges(types: &[TypeTag]) -> String {
    types
        .iter()
        .map(|tag| format!("{} {}", tag.name(), tag.symbol()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn join_or_none(tags: &[TypeTag]) -> String {
    if tags.is_empty() {
        "None".to_string()
    } else {
        tags.iter()
            .map(TypeTag::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Full card for one record.
///
/// Section order is fixed: artwork (when present), header with type badges,
/// flavor text, the six base stats, abilities, and dex metadata.
pub fn describe(record: &Record) -> String {
    let mut out = String::new();

    if let Some(image) = &record.image {
        out.push_str(&format!("Artwork: {}\n", image));
    }
    if let Some(shiny) = &record.shiny_image {
        out.push_str(&format!("Shiny: {}\n", shiny));
    }

    out.push_str(&format!(
        "✨ {} — {}\n",
        record.name,
        type_badges(&record.types)
    ));
    out.push_str(&format!("{}\n", record.description));

    let stats = &record.base_stats;
    out.push_str(&format!(
        "HP: {}, Atk: {}, Def: {}\n",
        stats.hp, stats.attack, stats.defense
    ));
    out.push_str(&format!(
        "Sp. Atk: {}, Sp. Def: {}, Speed: {}\n",
        stats.sp_atk, stats.sp_def, stats.speed
    ));

    if !record.abilities.is_empty() {
        out.push_str("Abilities:\n");
        for (position, ability) in record.abilities.iter().enumerate() {
            // Descriptions pair up positionally; a missing one renders a bare
            // name rather than inventing padding.
            match record.ability_descriptions.get(position) {
                Some(description) => {
                    out.push_str(&format!("- {} — {}\n", ability, description))
                }
                None => out.push_str(&format!("- {}\n", ability)),
            }
        }
    }

    out.push_str(&format!(
        "Legendary: {}, Gen: {}",
        if record.meta.is_legendary { "Yes" } else { "No" },
        record.meta.generation
    ));

    out
}

/// Stat-by-stat comparison: six independent verdict lines, no aggregate.
pub fn compare(a: &Record, b: &Record) -> String {
    let mut lines = vec![format!("📊 Comparing {} vs {}", a.name, b.name)];

    for kind in StatKind::ORDER {
        let left = a.base_stats.get(kind);
        let right = b.base_stats.get(kind);
        let winner = if left == right {
            "Tie"
        } else if left > right {
            a.name.as_str()
        } else {
            b.name.as_str()
        };
        lines.push(format!("{}: {} vs {} → {}", kind.label(), left, right, winner));
    }

    lines.join("\n")
}

/// Weakness/resistance/immunity profile: three lines, each a comma-joined
/// type list or the literal `None`.
pub fn type_profile(record: &Record) -> String {
    let profile = record.type_profile();
    format!(
        "{} is weak to: {}\nResistant to: {}\nImmune to: {}",
        record.name,
        join_or_none(&profile.weak),
        join_or_none(&profile.resist),
        join_or_none(&profile.immune)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_data::BaseStats;

    fn pikachu() -> Record {
        Record::new("Pikachu")
            .with_types([TypeTag::Electric])
            .with_stats(BaseStats {
                hp: 35,
                attack: 55,
                defense: 40,
                sp_atk: 50,
                sp_def: 50,
                speed: 90,
            })
            .with_abilities(["Static", "Lightning Rod"])
            .with_ability_descriptions(["May paralyze on contact."])
            .with_effectiveness([
                (TypeTag::Ground, 2.0),
                (TypeTag::Electric, 0.5),
                (TypeTag::Flying, 0.5),
            ])
            .with_description("Mouse Pokémon. Stores electricity in its cheeks.")
    }

    fn snorlax() -> Record {
        Record::new("Snorlax")
            .with_types([TypeTag::Normal])
            .with_stats(BaseStats {
                hp: 160,
                attack: 110,
                defense: 65,
                sp_atk: 65,
                sp_def: 110,
                speed: 30,
            })
            .with_effectiveness([(TypeTag::Ghost, 0.0), (TypeTag::Fighting, 2.0)])
    }

    #[test]
    fn test_describe_sections() {
        let text = describe(&pikachu());

        assert!(text.contains("✨ Pikachu — Electric ⚡"));
        assert!(text.contains("Stores electricity in its cheeks."));
        for label in ["HP:", "Atk:", "Def:", "Sp. Atk:", "Sp. Def:", "Speed:"] {
            assert!(text.contains(label), "missing stat label {}", label);
        }
        assert!(text.contains("- Static — May paralyze on contact."));
        assert!(text.contains("- Lightning Rod\n"));
        assert!(text.ends_with("Legendary: No, Gen: 1"));
        // No artwork attached, no artwork lines.
        assert!(!text.contains("Artwork:"));
    }

    #[test]
    fn test_describe_renders_artwork_when_present() {
        let record = pikachu().with_artwork(
            "https://example.invalid/25.png",
            "https://example.invalid/shiny/25.png",
        );
        let text = describe(&record);
        assert!(text.starts_with("Artwork: https://example.invalid/25.png\n"));
        assert!(text.contains("Shiny: https://example.invalid/shiny/25.png\n"));
    }

    #[test]
    fn test_compare_emits_six_verdicts_in_order() {
        let text = compare(&pikachu(), &snorlax());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "📊 Comparing Pikachu vs Snorlax");
        assert_eq!(lines[1], "HP: 35 vs 160 → Snorlax");
        assert_eq!(lines[2], "ATTACK: 55 vs 110 → Snorlax");
        assert_eq!(lines[3], "DEFENSE: 40 vs 65 → Snorlax");
        assert_eq!(lines[4], "SP_ATK: 50 vs 65 → Snorlax");
        assert_eq!(lines[5], "SP_DEF: 50 vs 110 → Snorlax");
        assert_eq!(lines[6], "SPEED: 90 vs 30 → Pikachu");
    }

    #[test]
    fn test_compare_ties() {
        let a = Record::new("Left").with_stats(BaseStats {
            hp: 50,
            attack: 50,
            defense: 50,
            sp_atk: 50,
            sp_def: 50,
            speed: 50,
        });
        let b = Record::new("Right").with_stats(a.base_stats);

        let text = compare(&a, &b);
        assert_eq!(text.lines().filter(|l| l.ends_with("Tie")).count(), 6);
    }

    #[test]
    fn test_compare_is_symmetric_per_stat() {
        let forward = compare(&pikachu(), &snorlax());
        let backward = compare(&snorlax(), &pikachu());

        for kind in StatKind::ORDER {
            let winner_of = |text: &str| -> String {
                text.lines()
                    .find(|line| line.starts_with(kind.label()))
                    .and_then(|line| line.rsplit("→ ").next())
                    .unwrap()
                    .to_string()
            };
            assert_eq!(winner_of(&forward), winner_of(&backward));
        }
    }

    #[test]
    fn test_type_profile_lines() {
        let text = type_profile(&snorlax());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Snorlax is weak to: Fighting");
        assert_eq!(lines[1], "Resistant to: None");
        assert_eq!(lines[2], "Immune to: Ghost");
    }

    #[test]
    fn test_type_profile_all_neutral_renders_none_three_times() {
        let record = Record::new("Ditto")
            .with_types([TypeTag::Normal])
            .with_effectiveness([(TypeTag::Fire, 1.0)]);
        let text = type_profile(&record);

        assert_eq!(text.matches("None").count(), 3);
    }
}
