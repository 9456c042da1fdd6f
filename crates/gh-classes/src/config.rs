//! Tunables for the class subsystem.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ClassResult;

/// How the toughness bonus combines with the constitution bonus on level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToughnessPolicy {
    /// The toughness bonus is computed and then replaced by the constitution
    /// bonus, so it never applies. Matches long-standing live behavior.
    #[default]
    Overwritten,
    /// The toughness bonus is added on top of the constitution bonus.
    Additive,
}

/// Configuration for character creation and progression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuildConfig {
    /// RNG seed for deterministic runs.
    pub seed: u64,
    /// Max hit points a new character starts with before its first level.
    pub starting_max_hit: i32,
    /// Max mana a new character starts with before its first level.
    pub starting_max_mana: i32,
    /// Practice sessions granted per level gained.
    pub practices_per_level: u32,
    /// Extra hit points per level for characters trained in toughness.
    pub toughness_bonus_hp: i32,
    /// Whether the toughness bonus actually applies.
    pub toughness: ToughnessPolicy,
    /// Mark new characters as allowed to connect from any site.
    pub all_sites_ok: bool,
    /// Largest experience award a single gain can grant.
    pub max_exp_gain: u64,
    /// Let mortals level into the immortal tier through experience alone.
    pub mortals_reach_immortal: bool,
}

impl Default for GuildConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_max_hit: 100,
            starting_max_mana: 100,
            practices_per_level: 1,
            toughness_bonus_hp: 5,
            toughness: ToughnessPolicy::Overwritten,
            all_sites_ok: false,
            max_exp_gain: 100_000,
            mortals_reach_immortal: false,
        }
    }
}

impl GuildConfig {
    /// Parse a config from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> ClassResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> ClassResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting max hit points and mana.
    pub fn with_starting_points(mut self, max_hit: i32, max_mana: i32) -> Self {
        self.starting_max_hit = max_hit;
        self.starting_max_mana = max_mana;
        self
    }

    /// Set how many practice sessions each level grants.
    pub fn with_practices_per_level(mut self, practices: u32) -> Self {
        self.practices_per_level = practices;
        self
    }

    /// Set the toughness policy.
    pub fn with_toughness(mut self, policy: ToughnessPolicy) -> Self {
        self.toughness = policy;
        self
    }

    /// Set whether new characters may connect from any site.
    pub fn with_all_sites_ok(mut self, ok: bool) -> Self {
        self.all_sites_ok = ok;
        self
    }

    /// Set the cap on a single experience award.
    pub fn with_max_exp_gain(mut self, max: u64) -> Self {
        self.max_exp_gain = max;
        self
    }

    /// Set whether experience alone can carry a mortal into the immortal tier.
    pub fn with_mortals_reach_immortal(mut self, allowed: bool) -> Self {
        self.mortals_reach_immortal = allowed;
        self
    }
}
