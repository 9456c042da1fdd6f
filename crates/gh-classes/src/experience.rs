//! Experience required per class and level.
//!
//! Mortal levels (and the immortal level itself) come from a per-class row.
//! Levels above the immortal level are shared by every class and sit just
//! below [`EXP_MAX`], one fixed step apart.

use gh_core::ClassId;

use crate::level::{IMMORTAL_LEVEL, MAX_LEVEL};

/// Experience held by an implementor. Must stay well above every class's
/// immortal threshold.
pub const EXP_MAX: u64 = 10_000_000;

/// Experience between consecutive administrative levels above immortal.
pub const ADMIN_EXP_STEP: u64 = 1_000;

/// Returned when a class row is missing a level. Conspicuous on purpose.
pub const EXP_TABLE_SENTINEL: u64 = 123_456;

/// Number of entries in a complete class row: levels 0 through immortal.
pub const ROW_LEN: usize = IMMORTAL_LEVEL as usize + 1;

const MAGIC_USER: [u64; ROW_LEN] = [
    0, 1, 2_500, 5_000, 10_000, 20_000, 40_000, 60_000, 90_000, 135_000, 250_000, 375_000,
    750_000, 1_125_000, 1_500_000, 1_875_000, 2_250_000, 2_625_000, 3_000_000, 3_375_000,
    3_750_000, 4_000_000, 4_300_000, 4_600_000, 4_900_000, 5_200_000, 5_500_000, 5_950_000,
    6_400_000, 6_850_000, 7_400_000, 8_000_000,
];

const CLERIC: [u64; ROW_LEN] = [
    0, 1, 1_500, 3_000, 6_000, 13_000, 27_500, 55_000, 110_000, 225_000, 450_000, 675_000,
    900_000, 1_125_000, 1_350_000, 1_575_000, 1_800_000, 2_100_000, 2_400_000, 2_700_000,
    3_000_000, 3_250_000, 3_500_000, 3_800_000, 4_100_000, 4_400_000, 4_800_000, 5_200_000,
    5_600_000, 6_000_000, 6_400_000, 7_000_000,
];

const BOUNTY_HUNTER: [u64; ROW_LEN] = [
    0, 1, 1_250, 2_500, 5_000, 10_000, 20_000, 40_000, 70_000, 110_000, 160_000, 220_000,
    440_000, 660_000, 880_000, 1_100_000, 1_500_000, 2_000_000, 2_500_000, 3_000_000, 3_500_000,
    3_650_000, 3_800_000, 4_100_000, 4_400_000, 4_700_000, 5_100_000, 5_500_000, 5_900_000,
    6_300_000, 6_650_000, 7_000_000,
];

const WARRIOR: [u64; ROW_LEN] = [
    0, 1, 2_000, 4_000, 8_000, 16_000, 32_000, 64_000, 125_000, 250_000, 500_000, 750_000,
    1_000_000, 1_250_000, 1_500_000, 1_850_000, 2_200_000, 2_550_000, 2_900_000, 3_250_000,
    3_600_000, 3_900_000, 4_200_000, 4_500_000, 4_800_000, 5_150_000, 5_500_000, 5_950_000,
    6_400_000, 6_850_000, 7_400_000, 8_000_000,
];

const HELL_RAISER: [u64; ROW_LEN] = [
    0, 1, 1_800, 3_600, 7_200, 14_500, 29_000, 58_000, 115_000, 230_000, 460_000, 690_000,
    920_000, 1_150_000, 1_400_000, 1_700_000, 2_000_000, 2_350_000, 2_700_000, 3_050_000,
    3_400_000, 3_700_000, 4_000_000, 4_300_000, 4_600_000, 4_950_000, 5_300_000, 5_700_000,
    6_100_000, 6_500_000, 6_900_000, 7_500_000,
];

/// Experience thresholds, class × level.
#[derive(Debug, Clone)]
pub struct ExperienceTable {
    rows: Vec<Option<Vec<u64>>>,
}

impl ExperienceTable {
    /// Thresholds for every standard class.
    pub fn standard() -> Self {
        Self::from_rows([
            (ClassId::MagicUser, &MAGIC_USER[..]),
            (ClassId::Cleric, &CLERIC[..]),
            (ClassId::BountyHunter, &BOUNTY_HUNTER[..]),
            (ClassId::Warrior, &WARRIOR[..]),
            (ClassId::HellRaiser, &HELL_RAISER[..]),
        ])
    }

    /// Build a table from per-class rows indexed by level.
    ///
    /// Classes without a row, or rows shorter than [`ROW_LEN`], answer
    /// lookups for the missing levels with [`EXP_TABLE_SENTINEL`].
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = (ClassId, &'a [u64])>) -> Self {
        let mut table = vec![None; ClassId::COUNT];
        for (class, row) in rows {
            table[class.index()] = Some(row.to_vec());
        }
        Self { rows: table }
    }

    /// Experience needed to hold `level` as a member of `class`.
    ///
    /// Levels above [`MAX_LEVEL`] log a warning and return 0.
    pub fn for_level(&self, class: ClassId, level: u8) -> u64 {
        if level > MAX_LEVEL {
            tracing::warn!(level, "requesting exp for invalid level");
            return 0;
        }

        if level > IMMORTAL_LEVEL {
            return EXP_MAX - u64::from(MAX_LEVEL - level) * ADMIN_EXP_STEP;
        }

        let found = self.rows[class.index()]
            .as_ref()
            .and_then(|row| row.get(usize::from(level)))
            .copied();
        match found {
            Some(exp) => exp,
            None => {
                tracing::error!(?class, level, "experience table incomplete");
                EXP_TABLE_SENTINEL
            }
        }
    }

    /// Returns true if `class` has an entry for every level up to immortal.
    pub fn is_complete(&self, class: ClassId) -> bool {
        self.rows[class.index()]
            .as_ref()
            .is_some_and(|row| row.len() >= ROW_LEN)
    }

    /// The level that `experience` qualifies `class` for, capped at `cap`.
    pub fn level_for(&self, class: ClassId, experience: u64, cap: u8) -> u8 {
        let cap = cap.min(MAX_LEVEL);
        (1..=cap)
            .take_while(|&level| experience >= self.for_level(class, level))
            .last()
            .unwrap_or(0)
    }
}

impl Default for ExperienceTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{GOD_LEVEL, GREATER_GOD_LEVEL, MORTAL_CAP};

    #[test]
    fn known_thresholds() {
        let table = ExperienceTable::standard();
        assert_eq!(table.for_level(ClassId::MagicUser, 0), 0);
        assert_eq!(table.for_level(ClassId::MagicUser, 1), 1);
        assert_eq!(table.for_level(ClassId::MagicUser, 2), 2_500);
        assert_eq!(table.for_level(ClassId::Cleric, 10), 450_000);
        assert_eq!(table.for_level(ClassId::BountyHunter, 21), 3_650_000);
        assert_eq!(table.for_level(ClassId::Warrior, 30), 7_400_000);
        assert_eq!(table.for_level(ClassId::Warrior, IMMORTAL_LEVEL), 8_000_000);
    }

    #[test]
    fn administrative_levels_share_a_formula() {
        let table = ExperienceTable::standard();
        for class in ClassId::ALL {
            assert_eq!(table.for_level(class, GOD_LEVEL), 9_998_000);
            assert_eq!(table.for_level(class, GREATER_GOD_LEVEL), 9_999_000);
            assert_eq!(table.for_level(class, MAX_LEVEL), EXP_MAX);
        }
    }

    #[test]
    fn out_of_range_level_is_zero() {
        let table = ExperienceTable::standard();
        assert_eq!(table.for_level(ClassId::Warrior, MAX_LEVEL + 1), 0);
        assert_eq!(table.for_level(ClassId::Cleric, u8::MAX), 0);
    }

    #[test]
    fn standard_rows_are_complete() {
        let table = ExperienceTable::standard();
        for class in ClassId::ALL {
            assert!(table.is_complete(class), "{class:?}");
            for level in 0..=MAX_LEVEL {
                assert_ne!(table.for_level(class, level), EXP_TABLE_SENTINEL);
            }
        }
    }

    #[test]
    fn strictly_increasing_through_every_level() {
        let table = ExperienceTable::standard();
        for class in ClassId::ALL {
            for level in 1..=MAX_LEVEL {
                assert!(
                    table.for_level(class, level) > table.for_level(class, level - 1),
                    "{class:?} level {level}"
                );
            }
        }
    }

    #[test]
    fn immortal_threshold_stays_below_admin_formula() {
        let table = ExperienceTable::standard();
        for class in ClassId::ALL {
            let immortal = table.for_level(class, IMMORTAL_LEVEL);
            assert!(immortal + 20_000 < table.for_level(class, GOD_LEVEL), "{class:?}");
        }
    }

    #[test]
    fn missing_row_returns_sentinel() {
        let table = ExperienceTable::from_rows([(ClassId::Warrior, &WARRIOR[..])]);
        assert!(!table.is_complete(ClassId::Cleric));
        assert_eq!(table.for_level(ClassId::Cleric, 5), EXP_TABLE_SENTINEL);
        assert_eq!(table.for_level(ClassId::Warrior, 5), 16_000);
        // The administrative formula does not depend on rows.
        assert_eq!(table.for_level(ClassId::Cleric, MAX_LEVEL), EXP_MAX);
    }

    #[test]
    fn short_row_returns_sentinel() {
        let table = ExperienceTable::from_rows([(ClassId::Warrior, &WARRIOR[..10])]);
        assert!(!table.is_complete(ClassId::Warrior));
        assert_eq!(table.for_level(ClassId::Warrior, 9), 250_000);
        assert_eq!(table.for_level(ClassId::Warrior, 10), EXP_TABLE_SENTINEL);
    }

    #[test]
    fn level_for_experience() {
        let table = ExperienceTable::standard();
        assert_eq!(table.level_for(ClassId::Warrior, 0, MORTAL_CAP), 0);
        assert_eq!(table.level_for(ClassId::Warrior, 1, MORTAL_CAP), 1);
        assert_eq!(table.level_for(ClassId::Warrior, 1_999, MORTAL_CAP), 1);
        assert_eq!(table.level_for(ClassId::Warrior, 2_000, MORTAL_CAP), 2);
        assert_eq!(table.level_for(ClassId::Warrior, EXP_MAX, MORTAL_CAP), MORTAL_CAP);
        assert_eq!(table.level_for(ClassId::Warrior, EXP_MAX, MAX_LEVEL), MAX_LEVEL);
    }

    #[test]
    fn cleric_thresholds_snapshot() {
        let table = ExperienceTable::standard();
        let rendered: Vec<String> = (0..=8)
            .map(|level| format!("{level}: {}", table.for_level(ClassId::Cleric, level)))
            .collect();
        insta::assert_snapshot!(rendered.join("\n"), @r"
        0: 0
        1: 1
        2: 1500
        3: 3000
        4: 6000
        5: 13000
        6: 27500
        7: 55000
        8: 110000
        ");
    }
}
