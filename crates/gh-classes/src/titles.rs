//! Display titles per class, level and gender.
//!
//! Each entry is a `(masculine, feminine)` pair; the two forms name the same
//! rank. Mortal levels a class has no title for fall back to the class
//! default, and classes with no titles at all are "the Classless".

use gh_core::{ClassId, Gender};

use crate::level::{IMMORTAL_LEVEL, MAX_LEVEL};

type Pair = (&'static str, &'static str);

/// Title shown for level 0 and out-of-range levels.
pub const UNRANKED: Pair = ("the Man", "the Woman");
/// Title shown at the top administrative level, whatever the class.
pub const IMPLEMENTOR: Pair = ("the Implementor", "the Implementress");
/// Title for classes that define no titles.
pub const CLASSLESS: &str = "the Classless";

/// The titles of one class.
#[derive(Debug, Clone, Copy)]
pub struct ClassTitles {
    /// Titles for levels 1, 2, 3, ... in order. May stop short of the mortal cap.
    pub mortal: &'static [Pair],
    /// Titles for immortal, god and greater god.
    pub administrative: [Pair; 3],
    /// Used for mortal levels past the end of `mortal`.
    pub fallback: Pair,
}

const MAGIC_USER: ClassTitles = ClassTitles {
    mortal: &[
        ("the Apprentice of Magic", "the Apprentice of Magic"),
        ("the Spell Student", "the Spell Student"),
        ("the Scholar of Magic", "the Scholar of Magic"),
        ("the Delver in Spells", "the Delveress in Spells"),
        ("the Medium of Magic", "the Medium of Magic"),
        ("the Scribe of Magic", "the Scribess of Magic"),
        ("the Seer", "the Seeress"),
        ("the Sage", "the Sage"),
        ("the Illusionist", "the Illusionist"),
        ("the Abjurer", "the Abjuress"),
        ("the Invoker", "the Invoker"),
        ("the Enchanter", "the Enchantress"),
        ("the Conjurer", "the Conjuress"),
        ("the Magician", "the Witch"),
        ("the Creator", "the Creator"),
        ("the Savant", "the Savant"),
        ("the Magus", "the Craftess"),
        ("the Wizard", "the Wizard"),
        ("the Warlock", "the War Witch"),
        ("the Sorcerer", "the Sorceress"),
        ("the Necromancer", "the Necromancress"),
        ("the Thaumaturge", "the Thaumaturgess"),
        ("the Student of the Occult", "the Student of the Occult"),
        ("the Disciple of the Uncanny", "the Disciple of the Uncanny"),
        ("the Minor Elemental", "the Minor Elementress"),
        ("the Greater Elemental", "the Greater Elementress"),
        ("the Crafter of Magics", "the Crafter of Magics"),
        ("the Shaman", "Shaman"),
        ("the Keeper of Talismans", "the Keeper of Talismans"),
        ("the Archmage", "Archwitch"),
    ],
    administrative: [
        ("the Immortal Warlock", "the Immortal Enchantress"),
        ("the Avatar of Magic", "the Empress of Magic"),
        ("the God of Magic", "the Goddess of Magic"),
    ],
    fallback: ("the Mage", "the Witch"),
};

const CLERIC: ClassTitles = ClassTitles {
    mortal: &[
        ("the Believer", "the Believer"),
        ("the Attendant", "the Attendant"),
        ("the Acolyte", "the Acolyte"),
        ("the Novice", "the Novice"),
        ("the Missionary", "the Missionary"),
        ("the Adept", "the Adept"),
        ("the Deacon", "the Deaconess"),
        ("the Vicar", "the Vicaress"),
        ("the Priest", "the Priestess"),
        ("the Minister", "the Lady Minister"),
        ("the Canon", "the Canon"),
        ("the Levite", "the Levitess"),
        ("the Curate", "the Curess"),
        ("the Monk", "the Nunne"),
        ("the Healer", "the Healess"),
        ("the Chaplain", "the Chaplain"),
        ("the Expositor", "the Expositress"),
        ("the Bishop", "the Bishop"),
        ("the Arch Bishop", "the Arch Lady of the Church"),
        ("the Patriarch", "the Matriarch"),
    ],
    administrative: [
        ("the Immortal Cardinal", "the Immortal Priestess"),
        ("the Inquisitor", "the Inquisitress"),
        ("the God of good and evil", "the Goddess of good and evil"),
    ],
    fallback: ("the Cleric", "the Cleric"),
};

const BOUNTY_HUNTER: ClassTitles = ClassTitles {
    mortal: &[
        ("the Pilferer", "the Pilferess"),
        ("the Footpad", "the Footpad"),
        ("the Filcher", "the Filcheress"),
        ("the Pick-Pocket", "the Pick-Pocket"),
        ("the Sneak", "the Sneak"),
        ("the Pincher", "the Pincheress"),
        ("the Cut-Purse", "the Cut-Purse"),
        ("the Snatcher", "the Snatcheress"),
        ("the Sharper", "the Sharpress"),
        ("the Rogue", "the Rogue"),
        ("the Robber", "the Robber"),
        ("the Magsman", "the Magswoman"),
        ("the Highwayman", "the Highwaywoman"),
        ("the Burglar", "the Burglaress"),
        ("the Thief", "the Thief"),
        ("the Knifer", "the Knifer"),
        ("the Quick-Blade", "the Quick-Blade"),
        ("the Killer", "the Murderess"),
        ("the Brigand", "the Brigand"),
        ("the Cut-Throat", "the Cut-Throat"),
    ],
    administrative: [
        ("the Immortal Assassin", "the Immortal Assassin"),
        ("the Demi God of thieves", "the Demi Goddess of thieves"),
        ("the God of thieves and tradesmen", "the Goddess of thieves and tradesmen"),
    ],
    fallback: ("the Thief", "the Thief"),
};

const WARRIOR: ClassTitles = ClassTitles {
    mortal: &[
        ("the Swordpupil", "the Swordpupil"),
        ("the Recruit", "the Recruit"),
        ("the Sentry", "the Sentress"),
        ("the Fighter", "the Fighter"),
        ("the Soldier", "the Soldier"),
        ("the Warrior", "the Warrior"),
        ("the Veteran", "the Veteran"),
        ("the Swordsman", "the Swordswoman"),
        ("the Fencer", "the Fenceress"),
        ("the Combatant", "the Combatess"),
        ("the Hero", "the Heroine"),
        ("the Myrmidon", "the Myrmidon"),
        ("the Swashbuckler", "the Swashbuckleress"),
        ("the Mercenary", "the Mercenaress"),
        ("the Swordmaster", "the Swordmistress"),
        ("the Lieutenant", "the Lieutenant"),
        ("the Champion", "the Lady Champion"),
        ("the Dragoon", "the Lady Dragoon"),
        ("the Cavalier", "the Cavalier"),
        ("the Knight", "the Lady Knight"),
    ],
    administrative: [
        ("the Immortal Warlord", "the Immortal Lady of War"),
        ("the Extirpator", "the Queen of Destruction"),
        ("the God of war", "the Goddess of war"),
    ],
    fallback: ("the Warrior", "the Warrior"),
};

/// Titles, class × level × gender.
#[derive(Debug, Clone)]
pub struct TitleTable {
    classes: Vec<Option<ClassTitles>>,
}

impl TitleTable {
    /// The standard titles. Hell raisers have none.
    pub fn standard() -> Self {
        Self::from_classes([
            (ClassId::MagicUser, MAGIC_USER),
            (ClassId::Cleric, CLERIC),
            (ClassId::BountyHunter, BOUNTY_HUNTER),
            (ClassId::Warrior, WARRIOR),
        ])
    }

    /// Build a table from per-class title sets. Unlisted classes are classless.
    pub fn from_classes(entries: impl IntoIterator<Item = (ClassId, ClassTitles)>) -> Self {
        let mut classes = vec![None; ClassId::COUNT];
        for (class, titles) in entries {
            classes[class.index()] = Some(titles);
        }
        Self { classes }
    }

    /// The title for a class, level and gender.
    pub fn for_level(&self, class: ClassId, level: u8, gender: Gender) -> &'static str {
        if level == 0 || level > MAX_LEVEL {
            return pick(UNRANKED, gender);
        }
        if level == MAX_LEVEL {
            return pick(IMPLEMENTOR, gender);
        }

        let Some(titles) = &self.classes[class.index()] else {
            return CLASSLESS;
        };

        let pair = if level >= IMMORTAL_LEVEL {
            titles.administrative[usize::from(level - IMMORTAL_LEVEL)]
        } else {
            titles
                .mortal
                .get(usize::from(level - 1))
                .copied()
                .unwrap_or(titles.fallback)
        };
        pick(pair, gender)
    }

    /// Masculine title.
    pub fn male(&self, class: ClassId, level: u8) -> &'static str {
        self.for_level(class, level, Gender::Male)
    }

    /// Feminine title.
    pub fn female(&self, class: ClassId, level: u8) -> &'static str {
        self.for_level(class, level, Gender::Female)
    }
}

impl Default for TitleTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn pick(pair: Pair, gender: Gender) -> &'static str {
    match gender {
        Gender::Female => pair.1,
        Gender::Male | Gender::Neutral => pair.0,
    }
}
