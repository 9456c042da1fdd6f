//! Yes/no questions other systems ask about a class.

use gh_core::{Ability, ClassId, ClassMask};

use crate::gates::GuildGateRule;
use crate::spells::SpellTable;

/// Returns true if an item's anti-class flags forbid `class` from using it.
pub fn is_class_restricted(class: ClassId, anti_classes: ClassMask) -> bool {
    anti_classes.contains(class)
}

/// Returns true if `class` may use `ability` at `level`.
pub fn can_use_ability(spells: &SpellTable, class: ClassId, ability: Ability, level: u8) -> bool {
    spells.can_use(class, ability, level)
}

/// Returns true if `rule` lets `class` through.
pub fn can_pass_gate(class: ClassId, rule: &GuildGateRule) -> bool {
    rule.class.admits(class)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::gates::{Direction, GateClass};

    #[test]
    fn restriction_matches_class_bit() {
        let anti = ClassMask::from_letters("mc");
        assert!(is_class_restricted(ClassId::MagicUser, anti));
        assert!(is_class_restricted(ClassId::Cleric, anti));
        assert!(!is_class_restricted(ClassId::Warrior, anti));
        assert!(!is_class_restricted(ClassId::Warrior, ClassMask::EMPTY));
    }

    #[test]
    fn ability_needs_entry_and_level() {
        let spells = SpellTable::standard();
        assert!(can_use_ability(&spells, ClassId::MagicUser, Ability::Fireball, 15));
        assert!(!can_use_ability(&spells, ClassId::MagicUser, Ability::Fireball, 14));
        assert!(!can_use_ability(&spells, ClassId::Cleric, Ability::Fireball, 30));
    }

    #[test]
    fn gate_wildcard_and_exact() {
        let any = GuildGateRule {
            class: GateClass::Any,
            room: 1,
            direction: Direction::North,
        };
        let clerics = GuildGateRule {
            class: GateClass::Only(ClassId::Cleric),
            ..any
        };
        for class in ClassId::ALL {
            assert!(can_pass_gate(class, &any));
            assert_eq!(can_pass_gate(class, &clerics), class == ClassId::Cleric);
        }
    }

    proptest! {
        #[test]
        fn restricted_iff_bit_set(bits in 0u32..32) {
            let anti = ClassMask(bits);
            for class in ClassId::ALL {
                prop_assert_eq!(is_class_restricted(class, anti), bits & class.bit() != 0);
            }
        }
    }
}
