//! Base stat definitions for records.

use serde::{Deserialize, Serialize};

/// The six base stats every record carries.
///
/// Field names match the dataset JSON produced by the ETL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub sp_atk: u16,
    pub sp_def: u16,
    pub speed: u16,
}

/// Stat identifiers for positional access and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    SpAtk,
    SpDef,
    Speed,
}

impl StatKind {
    /// The canonical stat order used by every rendered answer:
    /// hp, attack, defense, sp-atk, sp-def, speed.
    pub const ORDER: [StatKind; 6] = [
        StatKind::Hp,
        StatKind::Attack,
        StatKind::Defense,
        StatKind::SpAtk,
        StatKind::SpDef,
        StatKind::Speed,
    ];

    /// Uppercase label used in comparison lines.
    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Hp => "HP",
            StatKind::Attack => "ATTACK",
            StatKind::Defense => "DEFENSE",
            StatKind::SpAtk => "SP_ATK",
            StatKind::SpDef => "SP_DEF",
            StatKind::Speed => "SPEED",
        }
    }
}

impl BaseStats {
    /// Look up a single stat by kind.
    pub fn get(&self, kind: StatKind) -> u16 {
        match kind {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpAtk => self.sp_atk,
            StatKind::SpDef => self.sp_def,
            StatKind::Speed => self.speed,
        }
    }
}
