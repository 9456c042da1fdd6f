//! Combat numbers that depend only on level or simple character state.
//!
//! The level curves share one banding: level 0, 1-7, 8-13, 14-20, 21-28,
//! the remaining mortal levels, then the administrative tier.

use gh_core::{Ability, ClassId, Points};

use crate::level::is_administrative;

/// Index of the band `level` falls into, 0 through 6.
fn band(level: u8) -> usize {
    match level {
        0 => 0,
        1..=7 => 1,
        8..=13 => 2,
        14..=20 => 3,
        21..=28 => 4,
        l if !is_administrative(l) => 5,
        _ => 6,
    }
}

const BACKSTAB_MULTIPLIER: [i32; 7] = [1, 2, 3, 4, 5, 6, 20];
const HEADSHOT_CHANCE: [u8; 7] = [0, 65, 70, 75, 80, 85, 100];
const HEADSHOT_DAMAGE: [i32; 7] = [0, 3, 4, 5, 6, 7, 100];

/// Damage multiplier for a backstab.
pub fn backstab_multiplier(level: u8) -> i32 {
    BACKSTAB_MULTIPLIER[band(level)]
}

/// Percent chance that a headshot lands.
pub fn headshot_chance(level: u8) -> u8 {
    HEADSHOT_CHANCE[band(level)]
}

/// Damage multiplier for a landed headshot.
pub fn headshot_damage(level: u8) -> i32 {
    HEADSHOT_DAMAGE[band(level)]
}

/// Bonus damage from masochism: one point per 15 hit points missing past
/// the first 10.
pub fn masochism_damage(points: &Points) -> i32 {
    (points.max_hit - points.hit - 10) / 15
}

/// Base to-hit chance by wielded weapon type. `None` is bare-handed.
pub fn accuracy_baseline(weapon: Option<Ability>) -> i32 {
    match weapon {
        Some(Ability::MachineGun) => 40,
        Some(Ability::Shotgun) => 45,
        Some(Ability::Pistol) => 55,
        Some(Ability::Rifle) => 60,
        _ => 50,
    }
}

/// What a saving throw protects against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SaveKind {
    /// Paralysis.
    Paralysis,
    /// Rods, staves and wands.
    Rod,
    /// Petrification.
    Petrification,
    /// Breath weapons.
    Breath,
    /// Spells.
    Spell,
}

/// Saving throw target for a class at a level. No class has a save table,
/// so every lookup lands on the fallback of 100.
pub fn saving_throw(_class: ClassId, _kind: SaveKind, _level: u8) -> u8 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{IMMORTAL_LEVEL, MAX_LEVEL, MORTAL_CAP};

    #[test]
    fn backstab_bands() {
        let expected = [
            (0, 1),
            (1, 2),
            (7, 2),
            (8, 3),
            (13, 3),
            (14, 4),
            (20, 4),
            (21, 5),
            (28, 5),
            (29, 6),
            (MORTAL_CAP, 6),
            (IMMORTAL_LEVEL, 20),
            (MAX_LEVEL, 20),
        ];
        for (level, mult) in expected {
            assert_eq!(backstab_multiplier(level), mult, "level {level}");
        }
    }

    #[test]
    fn headshot_bands() {
        assert_eq!(headshot_chance(0), 0);
        assert_eq!(headshot_chance(5), 65);
        assert_eq!(headshot_chance(10), 70);
        assert_eq!(headshot_chance(20), 75);
        assert_eq!(headshot_chance(25), 80);
        assert_eq!(headshot_chance(30), 85);
        assert_eq!(headshot_chance(32), 100);

        assert_eq!(headshot_damage(0), 0);
        assert_eq!(headshot_damage(1), 3);
        assert_eq!(headshot_damage(8), 4);
        assert_eq!(headshot_damage(14), 5);
        assert_eq!(headshot_damage(21), 6);
        assert_eq!(headshot_damage(29), 7);
        assert_eq!(headshot_damage(IMMORTAL_LEVEL), 100);
    }

    #[test]
    fn curves_never_decrease() {
        for level in 1..=MAX_LEVEL {
            assert!(backstab_multiplier(level) >= backstab_multiplier(level - 1));
            assert!(headshot_chance(level) >= headshot_chance(level - 1));
            assert!(headshot_damage(level) >= headshot_damage(level - 1));
        }
    }

    #[test]
    fn masochism_truncates_toward_zero() {
        let hurt = |max_hit, hit| Points {
            hit,
            max_hit,
            ..Points::default()
        };
        assert_eq!(masochism_damage(&hurt(100, 100)), 0);
        assert_eq!(masochism_damage(&hurt(100, 75)), 1);
        assert_eq!(masochism_damage(&hurt(100, 59)), 2);
        assert_eq!(masochism_damage(&hurt(100, 60)), 2);
        assert_eq!(masochism_damage(&hurt(100, 61)), 1);
        assert_eq!(masochism_damage(&hurt(100, 74)), 1);
        assert_eq!(masochism_damage(&hurt(100, 76)), 0);
    }

    #[test]
    fn saving_throws_use_the_fallback() {
        let kinds = [
            SaveKind::Paralysis,
            SaveKind::Rod,
            SaveKind::Petrification,
            SaveKind::Breath,
            SaveKind::Spell,
        ];
        for class in ClassId::ALL {
            for kind in kinds {
                for level in [0, 1, MORTAL_CAP, MAX_LEVEL] {
                    assert_eq!(saving_throw(class, kind, level), 100);
                }
            }
        }
    }

    #[test]
    fn accuracy_by_weapon() {
        assert_eq!(accuracy_baseline(Some(Ability::MachineGun)), 40);
        assert_eq!(accuracy_baseline(Some(Ability::Shotgun)), 45);
        assert_eq!(accuracy_baseline(Some(Ability::Pistol)), 55);
        assert_eq!(accuracy_baseline(Some(Ability::Rifle)), 60);
        assert_eq!(accuracy_baseline(Some(Ability::Kick)), 50);
        assert_eq!(accuracy_baseline(None), 50);
    }
}
