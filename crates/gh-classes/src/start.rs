//! Turning a blank record into a playable level-1 character.

use gh_core::{Ability, Character, ClassId};

use crate::progression::Progression;
use crate::roller::roll_abilities;

/// Skills and evasion a class starts with.
fn starting_kit(class: ClassId) -> (u8, &'static [(Ability, u8)]) {
    match class {
        ClassId::BountyHunter => (
            5,
            &[
                (Ability::Sneak, 10),
                (Ability::Hide, 5),
                (Ability::Steal, 15),
                (Ability::Backstab, 10),
                (Ability::PickLock, 10),
                (Ability::Track, 10),
                (Ability::Rifle, 1),
                (Ability::Pistol, 1),
            ],
        ),
        ClassId::HellRaiser => (0, &[(Ability::MachineGun, 1), (Ability::Shotgun, 1)]),
        ClassId::MagicUser | ClassId::Cleric | ClassId::Warrior => (0, &[]),
    }
}

/// Roll, equip and level a freshly created character to level 1.
pub fn start_character(progression: &mut Progression<'_>, character: &mut Character) {
    let rules = progression.rules;
    let config = progression.config;

    character.level = 0;
    character.experience = 1;
    character.attacks = 1;

    character.real_abilities =
        roll_abilities(&rules.registry, character.class, &mut *progression.dice);
    character.affected_abilities = character.real_abilities;

    character.points.max_hit = config.starting_max_hit;
    character.points.max_mana = config.starting_max_mana;

    let (evasion, skills) = starting_kit(character.class);
    character.evasion = evasion;
    for &(ability, percent) in skills {
        character.set_skill(ability, percent);
    }

    progression.advance_level(character);
    progression.refresh_title(character);
    tracing::info!(name = %character.name, "advanced to level {}", character.level);

    character.points.hit = character.points.max_hit;
    character.points.mana = character.points.max_mana;
    character.conditions.drunk = Some(0);
    if config.all_sites_ok {
        character.site_ok = true;
    }
    character.olc_zone = None;
}
