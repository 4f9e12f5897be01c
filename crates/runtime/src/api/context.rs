//! Read-only view a hero decides on.
//!
//! The [`DecisionContext`] is the blackboard every candidate evaluator reads
//! from. It borrows the turn's world and the pools as they stand when the
//! hero's turn comes up; heroes earlier in the slot order may already have
//! claimed entities out of `monsters` and `opponents`.

use arena_core::{ArenaConfig, Hero, Monster, Opponent, Point, Structure, Threat};

/// Context for one hero's decision.
///
/// # Lifetime
///
/// The `'a` lifetime ties the context to the coordinator's pools. Decisions
/// are made synchronously, one hero at a time.
#[derive(Clone, Copy, Debug)]
pub struct DecisionContext<'a> {
    /// The hero making the decision.
    pub hero: &'a Hero,
    /// Full squad in slot order, including `hero`.
    pub squad: &'a [Hero],
    /// Monsters not yet claimed this turn.
    pub monsters: &'a [Monster],
    /// Opponents not yet claimed this turn.
    pub opponents: &'a [Opponent],
    /// Enemy base; pushes and charms aim here.
    pub op_base: &'a Structure,
    /// Mana left in the shared pool.
    pub mana: i32,
    /// Turn counter, starting at 1.
    pub turn: u32,
}

impl<'a> DecisionContext<'a> {
    /// Returns true if the shared pool covers one spell.
    pub fn can_cast(&self) -> bool {
        self.mana >= ArenaConfig::SPELL_COST
    }

    pub fn turn_factor(&self) -> f64 {
        f64::from(self.turn)
    }

    pub fn mana_factor(&self) -> f64 {
        f64::from(self.mana)
    }

    /// Unshielded monsters within `range` of the hero.
    pub fn vulnerable_monsters(&self, range: f64) -> impl Iterator<Item = &'a Monster> + 'a {
        self.hero
            .monsters_in_range(self.monsters, range)
            .filter(|monster| !monster.is_shielded())
    }

    /// Unshielded opponents within `range` of the hero, allowing for a step away.
    pub fn vulnerable_opponents(&self, range: f64) -> impl Iterator<Item = &'a Opponent> + 'a {
        self.hero
            .opponents_in_range(self.opponents, range)
            .filter(|opponent| !opponent.is_shielded())
    }

    /// Returns true if any hero, ours or theirs, can hit `target` in melee next turn.
    pub fn is_about_to_be_meleed(&self, target: Point) -> bool {
        self.squad.iter().any(|hero| hero.threatens_melee(target))
            || self.opponents.iter().any(|opponent| opponent.threatens_melee(target))
    }

    /// Returns true if `monster` is closer to the enemy base than every hero
    /// of our squad.
    pub fn is_ahead_of_squad(&self, monster: &Monster) -> bool {
        let base = self.op_base.position;
        self.squad
            .iter()
            .all(|hero| monster.distance_from_op_base < base.distance(hero.position))
    }

    /// Returns true if some monster is not already heading for the enemy base.
    pub fn has_open_threat(&self) -> bool {
        self.monsters
            .iter()
            .any(|monster| monster.threat != Threat::Enemy)
    }
}
