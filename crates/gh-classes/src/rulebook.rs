//! Every read-only table the class subsystem consults, built once.

use crate::bonus::AttributeBonusTables;
use crate::experience::ExperienceTable;
use crate::gates::GuildGates;
use crate::registry::ClassRegistry;
use crate::spells::SpellTable;
use crate::titles::TitleTable;

/// The lookup tables, shared by reference with everything that needs them.
#[derive(Debug, Clone, Default)]
pub struct Rulebook {
    /// Class definitions.
    pub registry: ClassRegistry,
    /// Experience thresholds.
    pub experience: ExperienceTable,
    /// Level titles.
    pub titles: TitleTable,
    /// Spell and skill availability.
    pub spells: SpellTable,
    /// Guarded guild exits.
    pub gates: GuildGates,
    /// Attribute-derived bonuses.
    pub bonuses: AttributeBonusTables,
}

impl Rulebook {
    /// The standard tables.
    pub fn standard() -> Self {
        Self {
            registry: ClassRegistry::standard(),
            experience: ExperienceTable::standard(),
            titles: TitleTable::standard(),
            spells: SpellTable::standard(),
            gates: GuildGates::standard(),
            bonuses: AttributeBonusTables::standard(),
        }
    }
}
