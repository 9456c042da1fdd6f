//! Attribute rolling for new characters.
//!
//! Rolling and assignment are separate steps: [`roll_scores`] produces six
//! scores sorted best first, [`assign_scores`] lays them onto attributes in
//! the class's priority order.

use gh_core::{Attribute, AttributeSet, ClassId, MAX_ROLLED_ATTRIBUTE};

use crate::dice::RandomSource;
use crate::registry::{ClassDefinition, ClassRegistry};

/// Roll six scores, each the best three of four six-sided dice, sorted
/// from highest to lowest.
pub fn roll_scores(dice: &mut dyn RandomSource) -> [u8; 6] {
    let mut table = [0u8; 6];
    for _ in 0..6 {
        let rolls: [i32; 4] = std::array::from_fn(|_| dice.range(1, 6));
        let lowest = rolls.iter().copied().min().unwrap_or(0);
        let mut score = (rolls.iter().sum::<i32>() - lowest) as u8;

        // Insert in descending order, carrying displaced scores down.
        for slot in table.iter_mut() {
            if *slot < score {
                std::mem::swap(slot, &mut score);
            }
        }
    }
    table
}

/// Assign descending `scores` to attributes in `class`'s priority order.
///
/// A class that puts its best roll into strength gets a percentile strength
/// bonus when that roll is a perfect 18.
pub fn assign_scores(
    class: &ClassDefinition,
    scores: [u8; 6],
    dice: &mut dyn RandomSource,
) -> AttributeSet {
    let mut set = AttributeSet::default();
    for (attribute, score) in class.priority.into_iter().zip(scores) {
        set.set(attribute, score);
    }
    if class.priority[0] == Attribute::Strength && scores[0] == MAX_ROLLED_ATTRIBUTE {
        set.strength_bonus = dice.range(0, 100) as u8;
    }
    set
}

/// Roll and assign attributes for a new member of `class`.
pub fn roll_abilities(
    registry: &ClassRegistry,
    class: ClassId,
    dice: &mut dyn RandomSource,
) -> AttributeSet {
    let scores = roll_scores(dice);
    assign_scores(registry.get(class), scores, dice)
}
