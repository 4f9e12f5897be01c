//! Stable slot assignment for our heroes.

use arena_core::{ArenaConfig, EntityId};

/// Binds each hero to the slot it was first seen in.
///
/// Slots decide a hero's profile and guard point, so they must not change
/// for the rest of the game even if the host reorders entities.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SquadRoster {
    heroes: Vec<EntityId>,
}

impl SquadRoster {
    pub fn new() -> Self {
        Self {
            heroes: Vec::with_capacity(ArenaConfig::MAX_HEROES),
        }
    }

    /// Returns the slot of `hero`, assigning the next free one on first sight.
    pub fn slot_for(&mut self, hero: EntityId) -> usize {
        if let Some(slot) = self.heroes.iter().position(|known| *known == hero) {
            return slot;
        }
        self.heroes.push(hero);
        tracing::debug!("Hero {} takes slot {}", hero, self.heroes.len() - 1);
        self.heroes.len() - 1
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sighting_order_sticks() {
        let mut roster = SquadRoster::new();
        assert_eq!(roster.slot_for(EntityId(4)), 0);
        assert_eq!(roster.slot_for(EntityId(2)), 1);
        assert_eq!(roster.slot_for(EntityId(9)), 2);

        // Later turns may report them in any order.
        assert_eq!(roster.slot_for(EntityId(9)), 2);
        assert_eq!(roster.slot_for(EntityId(4)), 0);
        assert_eq!(roster.slot_for(EntityId(2)), 1);
        // A newcomer never displaces a known hero.
        assert_eq!(roster.slot_for(EntityId(7)), 3);
        assert_eq!(roster.slot_for(EntityId(4)), 0);
    }
}
