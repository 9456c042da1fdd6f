//! Trainable abilities: spells and skills.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A spell or skill a character can be trained in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    /// The "armor" spell.
    Armor,
    /// The "bless" spell.
    Bless,
    /// The "blindness" spell.
    Blindness,
    /// The "burning hands" spell.
    BurningHands,
    /// The "call lightning" spell.
    CallLightning,
    /// The "charm person" spell.
    Charm,
    /// The "chill touch" spell.
    ChillTouch,
    /// The "clone" spell.
    Clone,
    /// The "color spray" spell.
    ColorSpray,
    /// The "control weather" spell.
    ControlWeather,
    /// The "create food" spell.
    CreateFood,
    /// The "create water" spell.
    CreateWater,
    /// The "cure blind" spell.
    CureBlind,
    /// The "cure critic" spell.
    CureCritic,
    /// The "cure light" spell.
    CureLight,
    /// The "curse" spell.
    Curse,
    /// The "detect alignment" spell.
    DetectAlign,
    /// The "detect invisibility" spell.
    DetectInvis,
    /// The "detect magic" spell.
    DetectMagic,
    /// The "detect poison" spell.
    DetectPoison,
    /// The "dispel evil" spell.
    DispelEvil,
    /// The "dispel good" spell.
    DispelGood,
    /// The "earthquake" spell.
    Earthquake,
    /// The "enchant weapon" spell.
    EnchantWeapon,
    /// The "energy drain" spell.
    EnergyDrain,
    /// The "fireball" spell.
    Fireball,
    /// The "group armor" spell.
    GroupArmor,
    /// The "group heal" spell.
    GroupHeal,
    /// The "harm" spell.
    Harm,
    /// The "heal" spell.
    Heal,
    /// The "infravision" spell.
    Infravision,
    /// The "invisibility" spell.
    Invisible,
    /// The "lightning bolt" spell.
    LightningBolt,
    /// The "locate object" spell.
    LocateObject,
    /// The "magic missile" spell.
    MagicMissile,
    /// The "poison" spell.
    Poison,
    /// The "protection from evil" spell.
    ProtFromEvil,
    /// The "remove curse" spell.
    RemoveCurse,
    /// The "remove poison" spell.
    RemovePoison,
    /// The "sanctuary" spell.
    Sanctuary,
    /// The "sense life" spell.
    SenseLife,
    /// The "shocking grasp" spell.
    ShockingGrasp,
    /// The "sleep" spell.
    Sleep,
    /// The "strength" spell.
    Strength,
    /// The "summon" spell.
    Summon,
    /// The "word of recall" spell.
    WordOfRecall,
    /// The "backstab" skill.
    Backstab,
    /// The "bash" skill.
    Bash,
    /// The "hide" skill.
    Hide,
    /// The "kick" skill.
    Kick,
    /// The "pick lock" skill.
    PickLock,
    /// The "rescue" skill.
    Rescue,
    /// The "sneak" skill.
    Sneak,
    /// The "steal" skill.
    Steal,
    /// The "track" skill.
    Track,
    /// The "machine gun" technique.
    MachineGun,
    /// The "shotgun" technique.
    Shotgun,
    /// The "pistol" technique.
    Pistol,
    /// The "rifle" technique.
    Rifle,
    /// The "heal pack" technique.
    HealPack,
    /// The "evasion" technique.
    Evasion,
    /// The "dual pistol" technique.
    DualPistol,
    /// The "quick reload" technique.
    QuickReload,
    /// The "masochism" technique.
    Masochism,
    /// The "toughness" technique.
    Toughness,
    /// The "accuracy" technique.
    Accuracy,
    /// The "critical" technique.
    Critical,
    /// The "adrenaline" technique.
    Adrenaline,
    /// The "counter attack" technique.
    CounterAttack,
    /// The "bleed crit" technique.
    BleedCrit,
    /// The "heal crit" technique.
    HealCrit,
    /// The "rapid fire" technique.
    RapidFire,
    /// The "berserk" technique.
    Berserk,
    /// The "pierce shot" technique.
    PierceShot,
    /// The "turret" technique.
    Turret,
    /// The "headshot" technique.
    Headshot,
    /// The "extend mag" technique.
    ExtendMag,
    /// The "slow shot" technique.
    SlowShot,
}

impl Ability {
    /// Every ability, spells first.
    pub const ALL: &'static [Ability] = &[
        Self::Armor,
        Self::Bless,
        Self::Blindness,
        Self::BurningHands,
        Self::CallLightning,
        Self::Charm,
        Self::ChillTouch,
        Self::Clone,
        Self::ColorSpray,
        Self::ControlWeather,
        Self::CreateFood,
        Self::CreateWater,
        Self::CureBlind,
        Self::CureCritic,
        Self::CureLight,
        Self::Curse,
        Self::DetectAlign,
        Self::DetectInvis,
        Self::DetectMagic,
        Self::DetectPoison,
        Self::DispelEvil,
        Self::DispelGood,
        Self::Earthquake,
        Self::EnchantWeapon,
        Self::EnergyDrain,
        Self::Fireball,
        Self::GroupArmor,
        Self::GroupHeal,
        Self::Harm,
        Self::Heal,
        Self::Infravision,
        Self::Invisible,
        Self::LightningBolt,
        Self::LocateObject,
        Self::MagicMissile,
        Self::Poison,
        Self::ProtFromEvil,
        Self::RemoveCurse,
        Self::RemovePoison,
        Self::Sanctuary,
        Self::SenseLife,
        Self::ShockingGrasp,
        Self::Sleep,
        Self::Strength,
        Self::Summon,
        Self::WordOfRecall,
        Self::Backstab,
        Self::Bash,
        Self::Hide,
        Self::Kick,
        Self::PickLock,
        Self::Rescue,
        Self::Sneak,
        Self::Steal,
        Self::Track,
        Self::MachineGun,
        Self::Shotgun,
        Self::Pistol,
        Self::Rifle,
        Self::HealPack,
        Self::Evasion,
        Self::DualPistol,
        Self::QuickReload,
        Self::Masochism,
        Self::Toughness,
        Self::Accuracy,
        Self::Critical,
        Self::Adrenaline,
        Self::CounterAttack,
        Self::BleedCrit,
        Self::HealCrit,
        Self::RapidFire,
        Self::Berserk,
        Self::PierceShot,
        Self::Turret,
        Self::Headshot,
        Self::ExtendMag,
        Self::SlowShot,
    ];

    /// Returns true for magical spells, false for mundane skills.
    pub fn is_spell(self) -> bool {
        self <= Self::WordOfRecall
    }

    /// The in-game display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Armor => "armor",
            Self::Bless => "bless",
            Self::Blindness => "blindness",
            Self::BurningHands => "burning hands",
            Self::CallLightning => "call lightning",
            Self::Charm => "charm person",
            Self::ChillTouch => "chill touch",
            Self::Clone => "clone",
            Self::ColorSpray => "color spray",
            Self::ControlWeather => "control weather",
            Self::CreateFood => "create food",
            Self::CreateWater => "create water",
            Self::CureBlind => "cure blind",
            Self::CureCritic => "cure critic",
            Self::CureLight => "cure light",
            Self::Curse => "curse",
            Self::DetectAlign => "detect alignment",
            Self::DetectInvis => "detect invisibility",
            Self::DetectMagic => "detect magic",
            Self::DetectPoison => "detect poison",
            Self::DispelEvil => "dispel evil",
            Self::DispelGood => "dispel good",
            Self::Earthquake => "earthquake",
            Self::EnchantWeapon => "enchant weapon",
            Self::EnergyDrain => "energy drain",
            Self::Fireball => "fireball",
            Self::GroupArmor => "group armor",
            Self::GroupHeal => "group heal",
            Self::Harm => "harm",
            Self::Heal => "heal",
            Self::Infravision => "infravision",
            Self::Invisible => "invisibility",
            Self::LightningBolt => "lightning bolt",
            Self::LocateObject => "locate object",
            Self::MagicMissile => "magic missile",
            Self::Poison => "poison",
            Self::ProtFromEvil => "protection from evil",
            Self::RemoveCurse => "remove curse",
            Self::RemovePoison => "remove poison",
            Self::Sanctuary => "sanctuary",
            Self::SenseLife => "sense life",
            Self::ShockingGrasp => "shocking grasp",
            Self::Sleep => "sleep",
            Self::Strength => "strength",
            Self::Summon => "summon",
            Self::WordOfRecall => "word of recall",
            Self::Backstab => "backstab",
            Self::Bash => "bash",
            Self::Hide => "hide",
            Self::Kick => "kick",
            Self::PickLock => "pick lock",
            Self::Rescue => "rescue",
            Self::Sneak => "sneak",
            Self::Steal => "steal",
            Self::Track => "track",
            Self::MachineGun => "machine gun",
            Self::Shotgun => "shotgun",
            Self::Pistol => "pistol",
            Self::Rifle => "rifle",
            Self::HealPack => "heal pack",
            Self::Evasion => "evasion",
            Self::DualPistol => "dual pistol",
            Self::QuickReload => "quick reload",
            Self::Masochism => "masochism",
            Self::Toughness => "toughness",
            Self::Accuracy => "accuracy",
            Self::Critical => "critical",
            Self::Adrenaline => "adrenaline",
            Self::CounterAttack => "counter attack",
            Self::BleedCrit => "bleed crit",
            Self::HealCrit => "heal crit",
            Self::RapidFire => "rapid fire",
            Self::Berserk => "berserk",
            Self::PierceShot => "pierce shot",
            Self::Turret => "turret",
            Self::Headshot => "headshot",
            Self::ExtendMag => "extend mag",
            Self::SlowShot => "slow shot",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Ability {
    type Err = CoreError;

    /// Parse by display name, case-insensitively; `_` and `-` count as spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['_', '-'], " ");
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| CoreError::UnknownAbility(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = Ability::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names.len(), Ability::ALL.len());
    }

    #[test]
    fn spells_and_skills_split() {
        assert!(Ability::MagicMissile.is_spell());
        assert!(Ability::WordOfRecall.is_spell());
        assert!(!Ability::Backstab.is_spell());
        assert!(!Ability::Toughness.is_spell());
    }

    #[test]
    fn parse_by_name() {
        assert_eq!("magic missile".parse::<Ability>().unwrap(), Ability::MagicMissile);
        assert_eq!("Pick_Lock".parse::<Ability>().unwrap(), Ability::PickLock);
        assert_eq!("machine-gun".parse::<Ability>().unwrap(), Ability::MachineGun);
        assert!("teleport".parse::<Ability>().is_err());
    }

    #[test]
    fn every_ability_parses_back() {
        for ability in Ability::ALL {
            assert_eq!(ability.name().parse::<Ability>().unwrap(), *ability);
        }
    }
}
