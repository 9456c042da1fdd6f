//! The persisted character record touched by the class subsystem.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ability::Ability;
use crate::attributes::AttributeSet;
use crate::class::ClassId;

/// Highest percentage any ability can be trained to.
pub const MAX_SKILL_PERCENT: u8 = 100;

/// Unique identifier for a character record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Generate a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Grammatical gender, used to pick title forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Uses the masculine title forms.
    #[default]
    Neutral,
    /// Masculine title forms.
    Male,
    /// Feminine title forms.
    Female,
}

/// Hunger, thirst and drunkenness counters.
///
/// `None` means the counter is disabled: the character no longer gets
/// hungry, thirsty or drunk (administrative tier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditions {
    /// Drunkenness level.
    pub drunk: Option<u8>,
    /// Fullness level.
    pub full: Option<u8>,
    /// Thirst level.
    pub thirst: Option<u8>,
}

impl Conditions {
    /// All three counters disabled.
    pub const DISABLED: Conditions = Conditions {
        drunk: None,
        full: None,
        thirst: None,
    };

    /// Returns true when every counter is disabled.
    pub fn all_disabled(&self) -> bool {
        *self == Self::DISABLED
    }
}

impl Default for Conditions {
    fn default() -> Self {
        Self {
            drunk: Some(0),
            full: Some(24),
            thirst: Some(24),
        }
    }
}

/// Current and maximum hit points and mana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Points {
    /// Current hit points.
    pub hit: i32,
    /// Maximum hit points.
    pub max_hit: i32,
    /// Current mana.
    pub mana: i32,
    /// Maximum mana.
    pub max_mana: i32,
}

/// A player character as far as classes and progression are concerned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier.
    pub id: CharacterId,
    /// Character name.
    pub name: String,
    /// Class, fixed at creation.
    pub class: ClassId,
    /// Gender, used for titles.
    pub gender: Gender,
    /// Current level.
    pub level: u8,
    /// Accumulated experience.
    pub experience: u64,
    /// Display title.
    pub title: String,
    /// Rolled attributes.
    pub real_abilities: AttributeSet,
    /// Rolled attributes plus temporary modifiers.
    pub affected_abilities: AttributeSet,
    /// Hit points and mana.
    pub points: Points,
    /// Unspent practice sessions.
    pub practices: u32,
    /// Trained percentage per ability.
    pub skills: BTreeMap<Ability, u8>,
    /// Hunger, thirst and drunkenness.
    pub conditions: Conditions,
    /// Attacks per combat round.
    pub attacks: u8,
    /// Chance to dodge incoming fire.
    pub evasion: u8,
    /// Sees everything regardless of light and invisibility.
    pub holylight: bool,
    /// Allowed to log in from any site.
    pub site_ok: bool,
    /// Zone this character may build in, if any.
    pub olc_zone: Option<u32>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Character {
    /// Create a blank level-0 record.
    pub fn new(name: impl Into<String>, class: ClassId, gender: Gender) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            class,
            gender,
            level: 0,
            experience: 0,
            title: String::new(),
            real_abilities: AttributeSet::default(),
            affected_abilities: AttributeSet::default(),
            points: Points::default(),
            practices: 0,
            skills: BTreeMap::new(),
            conditions: Conditions::default(),
            attacks: 0,
            evasion: 0,
            holylight: false,
            site_ok: false,
            olc_zone: None,
            created_at: Utc::now(),
        }
    }

    /// Trained percentage in an ability; 0 when untrained.
    pub fn skill(&self, ability: Ability) -> u8 {
        self.skills.get(&ability).copied().unwrap_or(0)
    }

    /// Returns true if the ability has been trained at all.
    pub fn knows(&self, ability: Ability) -> bool {
        self.skill(ability) > 0
    }

    /// Set a trained percentage, clamped to [`MAX_SKILL_PERCENT`].
    pub fn set_skill(&mut self, ability: Ability, percent: u8) {
        self.skills.insert(ability, percent.min(MAX_SKILL_PERCENT));
    }
}
