//! Practicing spells and skills at a guildmaster.

use std::fmt;

use gh_core::{Ability, Character};

use crate::error::{ClassError, ClassResult};
use crate::rulebook::Rulebook;

/// Spend one practice session on `ability`. Returns the new percentage.
pub fn practice(rules: &Rulebook, character: &mut Character, ability: Ability) -> ClassResult<u8> {
    if character.practices == 0 {
        return Err(ClassError::NoPracticeSessions);
    }
    match rules.spells.min_level(ability, character.class) {
        None => return Err(ClassError::AbilityUnavailable { ability }),
        Some(min_level) if min_level > character.level => {
            return Err(ClassError::LevelTooLow { ability, min_level });
        }
        Some(_) => {}
    }

    let params = rules.registry.practice_params(character.class);
    let current = character.skill(ability);
    if current >= params.learned_ceiling {
        return Err(ClassError::AlreadyLearned {
            ability,
            percent: current,
        });
    }

    character.practices -= 1;

    let learn = rules
        .bonuses
        .learn_rate(character.affected_abilities.intelligence);
    let gain = learn.max(params.min_gain).min(params.max_gain);
    let percent = current.saturating_add(gain).min(params.learned_ceiling);
    character.set_skill(ability, percent);

    tracing::debug!(name = %character.name, %ability, percent, "practiced");
    Ok(percent)
}

/// What a character could practice right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeListing {
    /// "spells" or "skills".
    pub noun: &'static str,
    /// Unspent sessions.
    pub practices: u32,
    /// Each available ability with its current percentage.
    pub entries: Vec<(Ability, u8)>,
}

/// Every ability open to the character at its level and how well it is known.
pub fn practice_listing(rules: &Rulebook, character: &Character) -> PracticeListing {
    let entries = rules
        .spells
        .available(character.class, character.level)
        .into_iter()
        .map(|e| (e.ability, character.skill(e.ability)))
        .collect();
    PracticeListing {
        noun: rules
            .registry
            .practice_params(character.class)
            .terminology
            .noun(),
        practices: character.practices,
        entries,
    }
}

impl fmt::Display for PracticeListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "You have {} practice sessions remaining.", self.practices)?;
        writeln!(f, "You know of the following {}:", self.noun)?;
        for (ability, percent) in &self.entries {
            writeln!(f, "{:<20} {percent:>3}%", ability.name())?;
        }
        Ok(())
    }
}
