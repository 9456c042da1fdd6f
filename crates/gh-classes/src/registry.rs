//! The class registry.
//!
//! One [`ClassDefinition`] per playable class, built once at startup and
//! shared read-only afterwards. Adding a class means adding a [`ClassId`]
//! variant and a definition here, then rows in the experience, title and
//! spell tables.

use std::ops::RangeInclusive;

use gh_core::{Attribute, ClassId, ClassMask};

/// What a class calls the things it trains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminology {
    /// Trained abilities are "spells".
    Spells,
    /// Trained abilities are "skills".
    Skills,
}

impl Terminology {
    /// Plural noun shown in practice listings.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Spells => "spells",
            Self::Skills => "skills",
        }
    }
}

/// How members of a class learn at a guildmaster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeParams {
    /// Highest percentage a member may train any ability to.
    pub learned_ceiling: u8,
    /// Largest gain a single practice can give.
    pub max_gain: u8,
    /// Smallest gain a single practice can give.
    pub min_gain: u8,
    /// Spell or skill wording.
    pub terminology: Terminology,
}

/// Static definition of one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDefinition {
    /// Which class this defines.
    pub id: ClassId,
    /// Two-letter abbreviation for who-lists.
    pub abbrev: &'static str,
    /// Full display name.
    pub name: &'static str,
    /// Label on the class selection menu, selection letter in brackets.
    pub menu_label: &'static str,
    /// Guildmaster training parameters.
    pub practice: PracticeParams,
    /// Attribute slots from best roll to worst.
    pub priority: [Attribute; 6],
    /// Hit points rolled per level on top of the constitution bonus.
    pub hit_roll: RangeInclusive<i32>,
    /// Whether members gain mana on level-up.
    pub gains_mana: bool,
}

/// Order classes appear in on the selection menu.
const MENU_ORDER: [ClassId; ClassId::COUNT] = [
    ClassId::Cleric,
    ClassId::BountyHunter,
    ClassId::Warrior,
    ClassId::MagicUser,
    ClassId::HellRaiser,
];

/// All playable classes, indexed by [`ClassId`].
#[derive(Debug, Clone)]
pub struct ClassRegistry {
    classes: Vec<ClassDefinition>,
}

impl ClassRegistry {
    /// The standard five-class registry.
    pub fn standard() -> Self {
        use Attribute::{Charisma, Constitution, Dexterity, Intelligence, Strength, Wisdom};

        let classes = vec![
            ClassDefinition {
                id: ClassId::MagicUser,
                abbrev: "Mu",
                name: "Magic User",
                menu_label: "[M]agic-user",
                practice: PracticeParams {
                    learned_ceiling: 95,
                    max_gain: 100,
                    min_gain: 25,
                    terminology: Terminology::Spells,
                },
                priority: [Intelligence, Wisdom, Dexterity, Strength, Constitution, Charisma],
                hit_roll: 3..=8,
                gains_mana: true,
            },
            ClassDefinition {
                id: ClassId::Cleric,
                abbrev: "Cl",
                name: "Cleric",
                menu_label: "[C]leric",
                practice: PracticeParams {
                    learned_ceiling: 95,
                    max_gain: 100,
                    min_gain: 25,
                    terminology: Terminology::Spells,
                },
                priority: [Wisdom, Intelligence, Strength, Dexterity, Constitution, Charisma],
                hit_roll: 5..=10,
                gains_mana: true,
            },
            ClassDefinition {
                id: ClassId::BountyHunter,
                abbrev: "Bh",
                name: "Bounty Hunter",
                menu_label: "[B]ounty-Hunter",
                practice: PracticeParams {
                    learned_ceiling: 85,
                    max_gain: 85,
                    min_gain: 0,
                    terminology: Terminology::Skills,
                },
                priority: [Dexterity, Strength, Constitution, Intelligence, Wisdom, Charisma],
                hit_roll: 7..=13,
                gains_mana: false,
            },
            ClassDefinition {
                id: ClassId::Warrior,
                abbrev: "Wa",
                name: "Warrior",
                menu_label: "[W]arrior",
                practice: PracticeParams {
                    learned_ceiling: 80,
                    max_gain: 12,
                    min_gain: 0,
                    terminology: Terminology::Skills,
                },
                priority: [Strength, Dexterity, Constitution, Wisdom, Intelligence, Charisma],
                hit_roll: 10..=15,
                gains_mana: false,
            },
            ClassDefinition {
                id: ClassId::HellRaiser,
                abbrev: "Hr",
                name: "Hell Raiser",
                menu_label: "[H]ell-raiser",
                practice: PracticeParams {
                    learned_ceiling: 70,
                    max_gain: 70,
                    min_gain: 70,
                    terminology: Terminology::Spells,
                },
                priority: [Constitution, Dexterity, Strength, Intelligence, Wisdom, Charisma],
                hit_roll: 5..=10,
                gains_mana: false,
            },
        ];

        debug_assert!(classes.iter().enumerate().all(|(i, c)| c.id.index() == i));
        Self { classes }
    }

    /// Number of classes.
    pub fn count(&self) -> usize {
        self.classes.len()
    }

    /// The definition of a class.
    pub fn get(&self, class: ClassId) -> &ClassDefinition {
        &self.classes[class.index()]
    }

    /// Iterate over every definition in bit order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.classes.iter()
    }

    /// Two-letter abbreviation, e.g. `"Wa"`.
    pub fn abbreviation(&self, class: ClassId) -> &'static str {
        self.get(class).abbrev
    }

    /// Full display name, e.g. `"Bounty Hunter"`.
    pub fn display_name(&self, class: ClassId) -> &'static str {
        self.get(class).name
    }

    /// Guildmaster training parameters.
    pub fn practice_params(&self, class: ClassId) -> PracticeParams {
        self.get(class).practice
    }

    /// Map a menu letter to a class; `None` is the "undefined" answer.
    pub fn parse_class(&self, letter: char) -> Option<ClassId> {
        ClassId::from_letter(letter)
    }

    /// Union of the class bits named by `letters`.
    pub fn class_bitvector(&self, letters: &str) -> ClassMask {
        ClassMask::from_letters(letters)
    }

    /// The class selection menu shown to new players.
    pub fn menu(&self) -> String {
        let mut menu = String::from("\r\nSelect a class:\r\n");
        let labels: Vec<String> = MENU_ORDER
            .iter()
            .map(|&class| format!("  {}", self.get(class).menu_label))
            .collect();
        menu.push_str(&labels.join("\r\n"));
        menu
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
