//! Error types for the class subsystem.
//!
//! Table lookups never fail; they log and hand back a sentinel. Errors here
//! cover player-driven operations (practicing, promotions) and loading
//! configuration.

use gh_core::Ability;

/// Errors that can occur in class and progression operations.
#[derive(Debug, thiserror::Error)]
pub enum ClassError {
    /// The character has no practice sessions left.
    #[error("you do not seem to be able to practice now")]
    NoPracticeSessions,

    /// The character's class never learns the ability.
    #[error("you do not know of '{ability}'")]
    AbilityUnavailable {
        /// The ability asked for.
        ability: Ability,
    },

    /// The class learns the ability, but only from a higher level.
    #[error("'{ability}' opens at level {min_level}")]
    LevelTooLow {
        /// The ability asked for.
        ability: Ability,
        /// Level the class gains access at.
        min_level: u8,
    },

    /// The ability is already trained to the class ceiling.
    #[error("you are already learned in '{ability}' ({percent}%)")]
    AlreadyLearned {
        /// The ability asked for.
        ability: Ability,
        /// Current trained percentage.
        percent: u8,
    },

    /// A promotion target is not above the current level.
    #[error("level {target} is not above the current level {current}")]
    NotAPromotion {
        /// Level the character is at.
        current: u8,
        /// Level that was requested.
        target: u8,
    },

    /// A level outside `0..=MAX_LEVEL` was requested.
    #[error("level {0} is out of range")]
    LevelOutOfRange(u8),

    /// A configuration file could not be read.
    #[error("failed to read config: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// A configuration file is not valid TOML for [`crate::GuildConfig`].
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Convenience result type for class operations.
pub type ClassResult<T> = Result<T, ClassError>;
