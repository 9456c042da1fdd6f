//! Guild gates: guarded exits that only some classes may take.

use std::fmt;

use gh_core::ClassId;

/// An exit direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// North.
    North,
    /// East.
    East,
    /// South.
    South,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
        };
        f.write_str(name)
    }
}

/// Which classes a gate lets through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateClass {
    /// Every class.
    Any,
    /// Only this class.
    Only(ClassId),
}

impl GateClass {
    /// Returns true if `class` satisfies this requirement.
    pub fn admits(self, class: ClassId) -> bool {
        match self {
            Self::Any => true,
            Self::Only(required) => required == class,
        }
    }
}

/// One guarded transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuildGateRule {
    /// Classes allowed through.
    pub class: GateClass,
    /// Room the gate stands in.
    pub room: u32,
    /// Exit it blocks.
    pub direction: Direction,
}

const STANDARD: [GuildGateRule; 5] = [
    GuildGateRule {
        class: GateClass::Any,
        room: 15,
        direction: Direction::South,
    },
    GuildGateRule {
        class: GateClass::Any,
        room: 3004,
        direction: Direction::North,
    },
    GuildGateRule {
        class: GateClass::Any,
        room: 3027,
        direction: Direction::East,
    },
    GuildGateRule {
        class: GateClass::Any,
        room: 3021,
        direction: Direction::East,
    },
    GuildGateRule {
        class: GateClass::Any,
        room: 5065,
        direction: Direction::West,
    },
];

/// Every guild gate in the world.
#[derive(Debug, Clone, Default)]
pub struct GuildGates {
    rules: Vec<GuildGateRule>,
}

impl GuildGates {
    /// The standard gates.
    pub fn standard() -> Self {
        Self::new(STANDARD)
    }

    /// Gates from an explicit rule list.
    pub fn new(rules: impl IntoIterator<Item = GuildGateRule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// The rule guarding `direction` out of `room`, if any.
    pub fn guarding(&self, room: u32, direction: Direction) -> Option<&GuildGateRule> {
        self.rules
            .iter()
            .find(|r| r.room == room && r.direction == direction)
    }

    /// May a member of `class` leave `room` heading `direction`?
    pub fn may_pass(&self, class: ClassId, room: u32, direction: Direction) -> bool {
        self.guarding(room, direction)
            .is_none_or(|rule| crate::eligibility::can_pass_gate(class, rule))
    }

    /// All rules.
    pub fn rules(&self) -> &[GuildGateRule] {
        &self.rules
    }
}
