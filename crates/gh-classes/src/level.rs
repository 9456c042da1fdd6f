//! Level bands.
//!
//! Levels `1..=MORTAL_CAP` belong to players. Everything from
//! [`IMMORTAL_LEVEL`] up is the administrative tier reserved for staff.

/// Highest level a mortal can reach.
pub const MORTAL_CAP: u8 = 30;
/// First administrative level.
pub const IMMORTAL_LEVEL: u8 = 31;
/// Second administrative level.
pub const GOD_LEVEL: u8 = 32;
/// Third administrative level.
pub const GREATER_GOD_LEVEL: u8 = 33;
/// Top administrative level.
pub const IMPLEMENTOR_LEVEL: u8 = 34;
/// Highest defined level.
pub const MAX_LEVEL: u8 = IMPLEMENTOR_LEVEL;

/// Returns true for staff levels.
pub fn is_administrative(level: u8) -> bool {
    level >= IMMORTAL_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands() {
        assert!(!is_administrative(0));
        assert!(!is_administrative(MORTAL_CAP));
        assert!(is_administrative(IMMORTAL_LEVEL));
        assert!(is_administrative(MAX_LEVEL));
        assert_eq!(IMMORTAL_LEVEL, MORTAL_CAP + 1);
        assert_eq!(MAX_LEVEL, GREATER_GOD_LEVEL + 1);
        assert_eq!(GREATER_GOD_LEVEL, GOD_LEVEL + 1);
    }
}
