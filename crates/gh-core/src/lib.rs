//! Character data model for the Guildhall class subsystem.
//!
//! Defines the closed set of classes and their membership masks, the
//! trainable abilities, attribute scores, and the character record that the
//! progression rules in `gh-classes` mutate. Storage of records sits behind
//! the [`CharacterStore`] seam.

/// Trainable spells and skills.
pub mod ability;
/// The six base attributes.
pub mod attributes;
/// The character record.
pub mod character;
/// Class identifiers and class membership masks.
pub mod class;
/// Error types used throughout the crate.
pub mod error;
/// Character record stores.
pub mod store;

/// Re-export ability types.
pub use ability::Ability;
/// Re-export attribute types.
pub use attributes::{Attribute, AttributeSet, MAX_ROLLED_ATTRIBUTE, MIN_ROLLED_ATTRIBUTE};
/// Re-export character record types.
pub use character::{Character, CharacterId, Conditions, Gender, MAX_SKILL_PERCENT, Points};
/// Re-export class types.
pub use class::{ClassId, ClassMask};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export store types.
pub use store::{CharacterStore, JsonFileStore, MemoryStore};
