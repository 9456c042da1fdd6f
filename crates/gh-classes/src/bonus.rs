//! Attribute-to-bonus lookup tables.

/// Hit points gained per level, indexed by constitution 0..=25.
const CON_HIT_BONUS: [i32; 26] = [
    -4, -3, -2, -2, -1, -1, -1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 2, 3, 3, 4, 5, 5, 5, 6, 6,
];

/// Percent learned per practice, indexed by intelligence 0..=25.
const INT_LEARN_RATE: [u8; 26] = [
    3, 5, 7, 8, 9, 10, 11, 12, 13, 15, 17, 19, 22, 25, 30, 35, 40, 45, 50, 53, 55, 56, 57, 58, 59,
    60,
];

/// Bonuses derived from attribute scores.
///
/// Scores past either end of a table use the nearest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeBonusTables {
    con_hit: Vec<i32>,
    int_learn: Vec<u8>,
}

impl AttributeBonusTables {
    /// The classic tables for scores 0 through 25.
    pub fn standard() -> Self {
        Self {
            con_hit: CON_HIT_BONUS.to_vec(),
            int_learn: INT_LEARN_RATE.to_vec(),
        }
    }

    /// Custom tables. Both must have at least one entry.
    pub fn new(con_hit: Vec<i32>, int_learn: Vec<u8>) -> Option<Self> {
        if con_hit.is_empty() || int_learn.is_empty() {
            return None;
        }
        Some(Self { con_hit, int_learn })
    }

    /// Hit point bonus per level for a constitution score.
    pub fn con_hit_bonus(&self, constitution: u8) -> i32 {
        let i = usize::from(constitution).min(self.con_hit.len() - 1);
        self.con_hit[i]
    }

    /// Percent learned per practice for an intelligence score.
    pub fn learn_rate(&self, intelligence: u8) -> u8 {
        let i = usize::from(intelligence).min(self.int_learn.len() - 1);
        self.int_learn[i]
    }
}

impl Default for AttributeBonusTables {
    fn default() -> Self {
        Self::standard()
    }
}
