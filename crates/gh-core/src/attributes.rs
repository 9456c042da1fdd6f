//! The six base attributes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest value a rolled attribute can take (three six-sided dice).
pub const MAX_ROLLED_ATTRIBUTE: u8 = 18;

/// Lowest value a rolled attribute can take.
pub const MIN_ROLLED_ATTRIBUTE: u8 = 3;

/// One of the six attribute slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Physical power; gates the percentile strength bonus.
    Strength,
    /// Agility and reflexes.
    Dexterity,
    /// Toughness; drives hit points gained per level.
    Constitution,
    /// Reasoning; drives practice learn rate.
    Intelligence,
    /// Insight and willpower.
    Wisdom,
    /// Presence.
    Charisma,
}

impl Attribute {
    /// All six slots in sheet order.
    pub const ALL: [Attribute; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Three-letter abbreviation.
    pub fn abbrev(self) -> &'static str {
        match self {
            Self::Strength => "Str",
            Self::Dexterity => "Dex",
            Self::Constitution => "Con",
            Self::Intelligence => "Int",
            Self::Wisdom => "Wis",
            Self::Charisma => "Cha",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

/// A full set of attribute scores.
///
/// `strength_bonus` is the percentile add-on (0..=100) that only applies
/// when strength sits at [`MAX_ROLLED_ATTRIBUTE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttributeSet {
    /// Strength score.
    pub strength: u8,
    /// Percentile strength bonus.
    pub strength_bonus: u8,
    /// Dexterity score.
    pub dexterity: u8,
    /// Constitution score.
    pub constitution: u8,
    /// Intelligence score.
    pub intelligence: u8,
    /// Wisdom score.
    pub wisdom: u8,
    /// Charisma score.
    pub charisma: u8,
}

impl AttributeSet {
    /// Read one slot.
    pub fn get(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    /// Write one slot.
    pub fn set(&mut self, attribute: Attribute, value: u8) {
        let slot = match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Constitution => &mut self.constitution,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Wisdom => &mut self.wisdom,
            Attribute::Charisma => &mut self.charisma,
        };
        *slot = value;
    }

    /// The six scores in sheet order (bonus excluded).
    pub fn scores(&self) -> [u8; 6] {
        Attribute::ALL.map(|a| self.get(a))
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.strength == MAX_ROLLED_ATTRIBUTE && self.strength_bonus > 0 {
            write!(f, "Str {}/{:02}", self.strength, self.strength_bonus % 100)?;
        } else {
            write!(f, "Str {}", self.strength)?;
        }
        for attribute in &Attribute::ALL[1..] {
            write!(f, " {} {}", attribute.abbrev(), self.get(*attribute))?;
        }
        Ok(())
    }
}
