//! Class identifiers and class membership masks.
//!
//! Every playable class owns one bit in a [`ClassMask`]. Bit positions follow
//! declaration order, so new classes must be appended at the end to keep
//! stored masks (who-lists, item anti-class flags) valid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A playable character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassId {
    /// Arcane caster; trains spells.
    MagicUser,
    /// Divine caster; trains spells.
    Cleric,
    /// Stealthy tracker; trains skills.
    BountyHunter,
    /// Melee fighter; trains skills.
    Warrior,
    /// Firearms specialist; trains skills.
    HellRaiser,
}

impl ClassId {
    /// All classes in bit order.
    pub const ALL: [ClassId; 5] = [
        Self::MagicUser,
        Self::Cleric,
        Self::BountyHunter,
        Self::Warrior,
        Self::HellRaiser,
    ];

    /// Number of playable classes.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this class in [`ClassId::ALL`], also its mask bit index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look a class up by its bit index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The single-bit mask for this class.
    pub fn bit(self) -> u32 {
        1 << self.index()
    }

    /// The selection letter used on the class menu.
    pub fn letter(self) -> char {
        match self {
            Self::MagicUser => 'm',
            Self::Cleric => 'c',
            Self::BountyHunter => 'b',
            Self::Warrior => 'w',
            Self::HellRaiser => 'h',
        }
    }

    /// Map a menu letter to a class, ignoring case.
    ///
    /// Unknown letters yield `None`; this never fails.
    pub fn from_letter(letter: char) -> Option<Self> {
        let lower = letter.to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.letter() == lower)
    }

    /// Returns true for classes whose members gain mana on level-up.
    pub fn is_caster(self) -> bool {
        matches!(self, Self::MagicUser | Self::Cleric)
    }
}

impl FromStr for ClassId {
    type Err = CoreError;

    /// Parse a class from a single menu letter (`"w"`) or its snake-case name
    /// (`"warrior"`, `"hell_raiser"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_letter(c).ok_or(CoreError::UnknownClass(trimmed.to_string()));
        }
        let normalized = trimmed.to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "magic_user" | "mage" => Ok(Self::MagicUser),
            "cleric" => Ok(Self::Cleric),
            "bounty_hunter" => Ok(Self::BountyHunter),
            "warrior" => Ok(Self::Warrior),
            "hell_raiser" => Ok(Self::HellRaiser),
            _ => Err(CoreError::UnknownClass(trimmed.to_string())),
        }
    }
}

/// A set of classes packed one bit per class.
///
/// Used for who-list filters, class-restricted equipment (`anti-class`
/// flags) and anywhere else a set of classes must be stored compactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ClassMask(pub u32);

impl ClassMask {
    /// The empty mask.
    pub const EMPTY: ClassMask = ClassMask(0);

    /// A mask containing exactly one class.
    pub fn of(class: ClassId) -> Self {
        Self(class.bit())
    }

    /// A mask containing every playable class.
    pub fn all() -> Self {
        Self::from_classes(ClassId::ALL)
    }

    /// Build a mask from any collection of classes.
    pub fn from_classes(classes: impl IntoIterator<Item = ClassId>) -> Self {
        classes
            .into_iter()
            .fold(Self::EMPTY, |mask, class| mask.with(class))
    }

    /// Build a mask from a string of class letters, e.g. `"mw"`.
    ///
    /// Letters that name no class contribute no bit. Only defined class bits
    /// can ever be set, so an unknown letter never aliases onto another class.
    pub fn from_letters(letters: &str) -> Self {
        Self::from_classes(letters.chars().filter_map(ClassId::from_letter))
    }

    /// Returns a copy of this mask with `class` added.
    pub fn with(self, class: ClassId) -> Self {
        Self(self.0 | class.bit())
    }

    /// Add a class to the mask in place.
    pub fn insert(&mut self, class: ClassId) {
        self.0 |= class.bit();
    }

    /// Returns true if the class's bit is set.
    pub fn contains(self, class: ClassId) -> bool {
        self.0 & class.bit() != 0
    }

    /// Returns true if no class bit is set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The raw bits.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Iterate over member classes in bit order.
    pub fn classes(self) -> impl Iterator<Item = ClassId> {
        ClassId::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl std::ops::BitOr for ClassMask {
    type Output = ClassMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        ClassMask(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for ClassMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<ClassId> for ClassMask {
    fn from(class: ClassId) -> Self {
        Self::of(class)
    }
}

impl fmt::Display for ClassMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.classes().map(ClassId::letter).collect();
        write!(f, "{letters}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_follow_declaration_order() {
        for (i, class) in ClassId::ALL.iter().enumerate() {
            assert_eq!(class.index(), i);
            assert_eq!(class.bit(), 1 << i);
            assert_eq!(ClassId::from_index(i), Some(*class));
        }
        assert_eq!(ClassId::from_index(ClassId::COUNT), None);
    }

    #[test]
    fn letter_parsing_is_case_insensitive() {
        assert_eq!(ClassId::from_letter('m'), Some(ClassId::MagicUser));
        assert_eq!(ClassId::from_letter('C'), Some(ClassId::Cleric));
        assert_eq!(ClassId::from_letter('B'), Some(ClassId::BountyHunter));
        assert_eq!(ClassId::from_letter('w'), Some(ClassId::Warrior));
        assert_eq!(ClassId::from_letter('H'), Some(ClassId::HellRaiser));
    }

    #[test]
    fn unknown_letters_are_undefined() {
        for c in ['x', 'z', '1', ' ', '\n', 'é'] {
            assert_eq!(ClassId::from_letter(c), None, "letter {c:?}");
        }
    }

    #[test]
    fn mask_from_letters() {
        let mask = ClassMask::from_letters("mw");
        assert_eq!(
            mask.bits(),
            (1 << ClassId::MagicUser.index()) | (1 << ClassId::Warrior.index())
        );
        assert!(mask.contains(ClassId::MagicUser));
        assert!(mask.contains(ClassId::Warrior));
        assert!(!mask.contains(ClassId::Cleric));
    }

    #[test]
    fn unknown_letters_add_no_bits() {
        assert_eq!(ClassMask::from_letters("xyz"), ClassMask::EMPTY);
        assert_eq!(ClassMask::from_letters("x"), ClassMask::EMPTY);
        assert!(!ClassMask::from_letters("qw").contains(ClassId::MagicUser));
        assert_eq!(ClassMask::from_letters("").bits(), 0);
    }

    #[test]
    fn mask_never_exceeds_defined_bits() {
        let every: String = (0u8..=127).map(char::from).collect();
        let mask = ClassMask::from_letters(&every);
        assert_eq!(mask, ClassMask::all());
        assert_eq!(mask.bits(), (1 << ClassId::COUNT) - 1);
    }

    #[test]
    fn mask_iterates_in_bit_order() {
        let mask = ClassMask::from_letters("hwc");
        let classes: Vec<_> = mask.classes().collect();
        assert_eq!(
            classes,
            vec![ClassId::Cleric, ClassId::Warrior, ClassId::HellRaiser]
        );
        assert_eq!(mask.to_string(), "cwh");
    }

    #[test]
    fn mask_union() {
        let mut mask = ClassMask::of(ClassId::Cleric) | ClassMask::of(ClassId::Warrior);
        mask |= ClassMask::from(ClassId::HellRaiser);
        mask.insert(ClassId::Cleric);
        assert_eq!(mask, ClassMask::from_letters("cwh"));
    }

    #[test]
    fn from_str_accepts_letters_and_names() {
        assert_eq!("w".parse::<ClassId>().unwrap(), ClassId::Warrior);
        assert_eq!("Hell Raiser".parse::<ClassId>().unwrap(), ClassId::HellRaiser);
        assert_eq!("bounty-hunter".parse::<ClassId>().unwrap(), ClassId::BountyHunter);
        assert!("q".parse::<ClassId>().is_err());
        assert!("paladin".parse::<ClassId>().is_err());
    }

    proptest::proptest! {
        #[test]
        fn any_string_sets_only_letter_bits(letters in ".{0,16}") {
            let mask = ClassMask::from_letters(&letters);
            proptest::prop_assert_eq!(mask.bits() & !ClassMask::all().bits(), 0);
            for class in ClassId::ALL {
                let named = letters.chars().any(|c| c.to_ascii_lowercase() == class.letter());
                proptest::prop_assert_eq!(mask.contains(class), named);
            }
        }
    }
}
