//! Character record stores.
//!
//! The class subsystem saves a character after every level-up but does not
//! own the failure policy: a store decides what to do when a write fails
//! and reports it through its own diagnostics.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::character::{Character, CharacterId};
use crate::error::{CoreError, CoreResult};

/// Somewhere character records are saved to and loaded from.
pub trait CharacterStore {
    /// Persist a character. Failures are handled by the store.
    fn save(&mut self, character: &Character);

    /// Load a previously saved character.
    fn load(&self, id: CharacterId) -> CoreResult<Character>;
}

/// An in-memory store, mostly for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<CharacterId, Character>,
    saves: usize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Number of distinct records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CharacterStore for MemoryStore {
    fn save(&mut self, character: &Character) {
        self.saves += 1;
        self.records.insert(character.id, character.clone());
    }

    fn load(&self, id: CharacterId) -> CoreResult<Character> {
        self.records
            .get(&id)
            .cloned()
            .ok_or(CoreError::CharacterNotFound(id))
    }
}

/// Stores each character as `<id>.json` inside a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Use `dir` as the record directory. It is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The record directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: CharacterId) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Save a character, reporting failures to the caller.
    pub fn try_save(&self, character: &Character) -> CoreResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(character)?;
        std::fs::write(self.path_for(character.id), json)?;
        Ok(())
    }
}

impl CharacterStore for JsonFileStore {
    fn save(&mut self, character: &Character) {
        if let Err(e) = self.try_save(character) {
            tracing::error!(
                character = %character.name,
                id = %character.id,
                "failed to save character record: {e}"
            );
        }
    }

    fn load(&self, id: CharacterId) -> CoreResult<Character> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(CoreError::CharacterNotFound(id));
        }
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::class::ClassId;
    use crate::character::Gender;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        let ch = Character::new("Kael", ClassId::Warrior, Gender::Male);
        store.save(&ch);
        store.save(&ch);
        assert_eq!(store.save_count(), 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.load(ch.id).unwrap(), ch);
    }

    #[test]
    fn memory_store_missing_record() {
        let store = MemoryStore::new();
        let err = store.load(CharacterId::new()).unwrap_err();
        assert!(matches!(err, CoreError::CharacterNotFound(_)));
    }

    #[test]
    fn json_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("players"));
        let ch = Character::new("Mira", ClassId::Cleric, Gender::Female);
        store.save(&ch);
        assert!(store.dir().join(format!("{}.json", ch.id)).exists());
        assert_eq!(store.load(ch.id).unwrap(), ch);
    }

    #[test]
    fn json_store_missing_record() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(matches!(
            store.load(CharacterId::new()),
            Err(CoreError::CharacterNotFound(_))
        ));
    }

    #[test]
    fn json_store_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        let id = CharacterId::new();
        std::fs::write(dir.path().join(format!("{id}.json")), "not json").unwrap();
        assert!(matches!(store.load(id), Err(CoreError::Json(_))));
    }
}
