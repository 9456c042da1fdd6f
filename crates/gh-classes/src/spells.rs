//! Which class may use which spell or skill, and from what level.

use std::collections::HashMap;

use gh_core::{Ability, ClassId};

use Ability as A;
use ClassId::{
    BountyHunter as BH, Cleric as CL, HellRaiser as HR, MagicUser as MU, Warrior as WA,
};

/// One availability entry: `ability` opens to `class` at `min_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellAvailability {
    /// The spell or skill.
    pub ability: Ability,
    /// The class it opens to.
    pub class: ClassId,
    /// First level it can be used at.
    pub min_level: u8,
}

const fn entry(ability: Ability, class: ClassId, min_level: u8) -> SpellAvailability {
    SpellAvailability {
        ability,
        class,
        min_level,
    }
}

const STANDARD: &[SpellAvailability] = &[
    // Magic users
    entry(A::MagicMissile, MU, 1),
    entry(A::DetectInvis, MU, 2),
    entry(A::DetectMagic, MU, 2),
    entry(A::ChillTouch, MU, 3),
    entry(A::Infravision, MU, 3),
    entry(A::Invisible, MU, 4),
    entry(A::Armor, MU, 4),
    entry(A::BurningHands, MU, 5),
    entry(A::LocateObject, MU, 6),
    entry(A::Strength, MU, 6),
    entry(A::ShockingGrasp, MU, 7),
    entry(A::Sleep, MU, 8),
    entry(A::LightningBolt, MU, 9),
    entry(A::Blindness, MU, 9),
    entry(A::DetectPoison, MU, 10),
    entry(A::ColorSpray, MU, 11),
    entry(A::EnergyDrain, MU, 13),
    entry(A::Curse, MU, 14),
    entry(A::Poison, MU, 14),
    entry(A::Fireball, MU, 15),
    entry(A::Charm, MU, 16),
    entry(A::EnchantWeapon, MU, 26),
    entry(A::Clone, MU, 30),
    // Clerics
    entry(A::CureLight, CL, 1),
    entry(A::Armor, CL, 1),
    entry(A::CreateFood, CL, 2),
    entry(A::CreateWater, CL, 2),
    entry(A::DetectPoison, CL, 3),
    entry(A::DetectAlign, CL, 4),
    entry(A::CureBlind, CL, 4),
    entry(A::Bless, CL, 5),
    entry(A::DetectInvis, CL, 6),
    entry(A::Blindness, CL, 6),
    entry(A::Infravision, CL, 7),
    entry(A::ProtFromEvil, CL, 8),
    entry(A::Poison, CL, 8),
    entry(A::GroupArmor, CL, 9),
    entry(A::CureCritic, CL, 9),
    entry(A::Summon, CL, 10),
    entry(A::RemovePoison, CL, 10),
    entry(A::WordOfRecall, CL, 12),
    entry(A::Earthquake, CL, 12),
    entry(A::DispelEvil, CL, 14),
    entry(A::DispelGood, CL, 14),
    entry(A::Sanctuary, CL, 15),
    entry(A::CallLightning, CL, 15),
    entry(A::Heal, CL, 16),
    entry(A::ControlWeather, CL, 17),
    entry(A::SenseLife, CL, 18),
    entry(A::Harm, CL, 19),
    entry(A::GroupHeal, CL, 22),
    entry(A::RemoveCurse, CL, 26),
    // Bounty hunters
    entry(A::Sneak, BH, 1),
    entry(A::PickLock, BH, 2),
    entry(A::Backstab, BH, 3),
    entry(A::Steal, BH, 4),
    entry(A::Hide, BH, 5),
    entry(A::Track, BH, 6),
    entry(A::Pistol, BH, 1),
    entry(A::Rifle, BH, 1),
    // Warriors
    entry(A::Kick, WA, 1),
    entry(A::Rescue, WA, 3),
    entry(A::Track, WA, 9),
    entry(A::Bash, WA, 12),
    // Hell raisers
    entry(A::MachineGun, HR, 1),
    entry(A::Shotgun, HR, 1),
    entry(A::Pistol, HR, 1),
    entry(A::Rifle, HR, 1),
    entry(A::HealPack, HR, 1),
    entry(A::Evasion, HR, 1),
    entry(A::DualPistol, HR, 1),
    entry(A::QuickReload, HR, 1),
    entry(A::Masochism, HR, 1),
    entry(A::Toughness, HR, 1),
    entry(A::Accuracy, HR, 1),
    entry(A::Critical, HR, 1),
    entry(A::Adrenaline, HR, 1),
    entry(A::CounterAttack, HR, 1),
    entry(A::BleedCrit, HR, 1),
    entry(A::HealCrit, HR, 1),
    entry(A::RapidFire, HR, 1),
    entry(A::Berserk, HR, 1),
    entry(A::PierceShot, HR, 1),
    entry(A::Turret, HR, 1),
    entry(A::Headshot, HR, 1),
    entry(A::ExtendMag, HR, 1),
    entry(A::PierceShot, HR, 1),
    entry(A::SlowShot, HR, 1),
];

/// Lookup of minimum levels by (ability, class).
#[derive(Debug, Clone, Default)]
pub struct SpellTable {
    levels: HashMap<(Ability, ClassId), u8>,
}

impl SpellTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard assignments.
    pub fn standard() -> Self {
        let mut table = Self::new();
        for e in STANDARD {
            table.register(e.ability, e.class, e.min_level);
        }
        table
    }

    /// Open `ability` to `class` from `min_level`. Registering the same pair
    /// twice keeps the lower level.
    pub fn register(&mut self, ability: Ability, class: ClassId, min_level: u8) {
        self.levels
            .entry((ability, class))
            .and_modify(|level| *level = (*level).min(min_level))
            .or_insert(min_level);
    }

    /// First level at which `class` may use `ability`, if ever.
    pub fn min_level(&self, ability: Ability, class: ClassId) -> Option<u8> {
        self.levels.get(&(ability, class)).copied()
    }

    /// Returns true if a member of `class` at `level` may use `ability`.
    pub fn can_use(&self, class: ClassId, ability: Ability, level: u8) -> bool {
        self.min_level(ability, class)
            .is_some_and(|min| min <= level)
    }

    /// Everything `class` can use at `level`, ordered by level then name.
    pub fn available(&self, class: ClassId, level: u8) -> Vec<SpellAvailability> {
        let mut list: Vec<_> = self
            .levels
            .iter()
            .filter(|((_, c), min)| *c == class && **min <= level)
            .map(|(&(ability, class), &min_level)| entry(ability, class, min_level))
            .collect();
        list.sort_by(|a, b| {
            a.min_level
                .cmp(&b.min_level)
                .then_with(|| a.ability.name().cmp(b.ability.name()))
        });
        list
    }

    /// Number of (ability, class) pairs.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
