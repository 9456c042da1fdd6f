//! Character classes and level progression for Guildhall.
//!
//! Holds the class registry, the experience and title tables, the attribute
//! roller, the level-up engine and the eligibility checks other systems use
//! to ask what a class may do. Every table is built once into a
//! [`Rulebook`] and read-only afterwards.

pub mod bonus;
pub mod combat;
pub mod config;
pub mod dice;
pub mod eligibility;
pub mod error;
pub mod experience;
pub mod gates;
pub mod level;
pub mod practice;
pub mod progression;
pub mod registry;
pub mod roller;
pub mod rulebook;
pub mod spells;
pub mod start;
pub mod titles;

pub use bonus::AttributeBonusTables;
pub use combat::{
    SaveKind, accuracy_baseline, backstab_multiplier, headshot_chance, headshot_damage,
    masochism_damage, saving_throw,
};
pub use config::{GuildConfig, ToughnessPolicy};
pub use dice::{RandomSource, ScriptedDice};
pub use eligibility::{can_pass_gate, can_use_ability, is_class_restricted};
pub use error::{ClassError, ClassResult};
pub use experience::{EXP_MAX, EXP_TABLE_SENTINEL, ExperienceTable};
pub use gates::{Direction, GateClass, GuildGateRule, GuildGates};
pub use level::{
    GOD_LEVEL, GREATER_GOD_LEVEL, IMMORTAL_LEVEL, IMPLEMENTOR_LEVEL, MAX_LEVEL, MORTAL_CAP,
    is_administrative,
};
pub use practice::{PracticeListing, practice, practice_listing};
pub use progression::{LevelGain, NoRevalidation, Progression, Revalidate};
pub use registry::{ClassDefinition, ClassRegistry, PracticeParams, Terminology};
pub use roller::{assign_scores, roll_abilities, roll_scores};
pub use rulebook::Rulebook;
pub use spells::{SpellAvailability, SpellTable};
pub use start::start_character;
pub use titles::{ClassTitles, TitleTable};
