//! Level advancement.
//!
//! [`Progression`] bundles the tables, configuration, dice and collaborators
//! a level-up touches. It never holds a character; callers lend one per call
//! and are responsible for serializing calls on the same character.

use gh_core::{Ability, Character, CharacterStore, Conditions};

use crate::config::{GuildConfig, ToughnessPolicy};
use crate::dice::RandomSource;
use crate::error::{ClassError, ClassResult};
use crate::level::{IMMORTAL_LEVEL, MAX_LEVEL, MORTAL_CAP, is_administrative};
use crate::rulebook::Rulebook;

/// Called after every level-up, before the record is saved.
pub trait Revalidate {
    /// Re-check anything that depends on the character's level.
    fn revalidate(&mut self, character: &Character);
}

/// A [`Revalidate`] that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRevalidation;

impl Revalidate for NoRevalidation {
    fn revalidate(&mut self, _character: &Character) {}
}

/// What a single level-up changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelGain {
    /// The level reached.
    pub level: u8,
    /// Added to max hit points.
    pub hit_points: i32,
    /// Added to max mana.
    pub mana: i32,
    /// Practice sessions granted.
    pub practices: u32,
}

/// Mutable context for advancing characters.
pub struct Progression<'a> {
    /// Lookup tables.
    pub rules: &'a Rulebook,
    /// Tunables.
    pub config: &'a GuildConfig,
    /// Dice for hit point and mana rolls.
    pub dice: &'a mut dyn RandomSource,
    /// Where records are saved after each level.
    pub store: &'a mut dyn CharacterStore,
    /// Optional post-level check.
    pub revalidate: Option<&'a mut dyn Revalidate>,
}

impl<'a> Progression<'a> {
    /// A context without revalidation.
    pub fn new(
        rules: &'a Rulebook,
        config: &'a GuildConfig,
        dice: &'a mut dyn RandomSource,
        store: &'a mut dyn CharacterStore,
    ) -> Self {
        Self {
            rules,
            config,
            dice,
            store,
            revalidate: None,
        }
    }

    /// Run `revalidate` after each level-up.
    pub fn with_revalidation(mut self, revalidate: &'a mut dyn Revalidate) -> Self {
        self.revalidate = Some(revalidate);
        self
    }

    /// Raise `character` by exactly one level.
    ///
    /// Returns `None` and changes nothing if the character is already at
    /// [`MAX_LEVEL`].
    pub fn advance_level(&mut self, character: &mut Character) -> Option<LevelGain> {
        if character.level >= MAX_LEVEL {
            tracing::warn!(
                name = %character.name,
                level = character.level,
                "cannot advance past max level"
            );
            return None;
        }

        let previous = character.level;
        character.level += 1;
        let level = character.level;
        let class = self.rules.registry.get(character.class);

        let con_bonus = self
            .rules
            .bonuses
            .con_hit_bonus(character.affected_abilities.constitution);
        let base = match self.config.toughness {
            ToughnessPolicy::Overwritten => con_bonus,
            ToughnessPolicy::Additive if character.knows(Ability::Toughness) => {
                con_bonus.saturating_add(self.config.toughness_bonus_hp)
            }
            ToughnessPolicy::Additive => con_bonus,
        };

        let hit_roll = self
            .dice
            .range(*class.hit_roll.start(), *class.hit_roll.end());
        let mana_roll = if class.gains_mana {
            let lvl = i32::from(level);
            self.dice.range(lvl, lvl * 3 / 2).min(10)
        } else {
            0
        };

        let hit_points = base.saturating_add(hit_roll).max(1);
        character.points.max_hit = character.points.max_hit.saturating_add(hit_points);

        // The first level out of 0 grants no mana.
        let mana = if previous >= 1 { mana_roll } else { 0 };
        character.points.max_mana = character.points.max_mana.saturating_add(mana);

        let practices = self.config.practices_per_level;
        character.practices = character.practices.saturating_add(practices);

        if is_administrative(level) {
            character.conditions = Conditions::DISABLED;
            character.holylight = true;
        }

        tracing::debug!(
            name = %character.name,
            level,
            hit_points,
            mana,
            practices,
            "level gained"
        );

        if let Some(revalidate) = self.revalidate.as_deref_mut() {
            revalidate.revalidate(character);
        }
        self.store.save(character);

        Some(LevelGain {
            level,
            hit_points,
            mana,
            practices,
        })
    }

    /// Award experience and advance through every threshold crossed.
    ///
    /// Only started mortals gain experience. A single award is capped at
    /// [`GuildConfig::max_exp_gain`]. Returns the number of levels gained.
    pub fn gain_experience(&mut self, character: &mut Character, amount: u64) -> u32 {
        if character.level == 0 || is_administrative(character.level) {
            return 0;
        }

        let amount = amount.min(self.config.max_exp_gain);
        character.experience = character.experience.saturating_add(amount);

        let cap = if self.config.mortals_reach_immortal {
            IMMORTAL_LEVEL
        } else {
            MORTAL_CAP
        };
        let mut gained = 0;
        while character.level < cap
            && character.experience
                >= self
                    .rules
                    .experience
                    .for_level(character.class, character.level + 1)
        {
            if self.advance_level(character).is_none() {
                break;
            }
            gained += 1;
        }

        if gained > 0 {
            self.refresh_title(character);
            tracing::info!(
                name = %character.name,
                gained,
                "advanced to level {}",
                character.level
            );
        }
        gained
    }

    /// Promote `character` straight to `target`, one level at a time.
    ///
    /// Experience is set to the threshold of the new level.
    pub fn advance_to(
        &mut self,
        character: &mut Character,
        target: u8,
    ) -> ClassResult<Vec<LevelGain>> {
        if target > MAX_LEVEL {
            return Err(ClassError::LevelOutOfRange(target));
        }
        if target <= character.level {
            return Err(ClassError::NotAPromotion {
                current: character.level,
                target,
            });
        }

        let mut gains = Vec::with_capacity(usize::from(target - character.level));
        while character.level < target {
            match self.advance_level(character) {
                Some(gain) => gains.push(gain),
                None => break,
            }
        }

        character.experience = self.rules.experience.for_level(character.class, target);
        self.refresh_title(character);
        tracing::info!(name = %character.name, "advanced to level {}", character.level);
        Ok(gains)
    }

    /// Set the character's title to the standard one for its level.
    pub fn refresh_title(&self, character: &mut Character) {
        character.title = self
            .rules
            .titles
            .for_level(character.class, character.level, character.gender)
            .to_string();
    }
}
