//! Sequential per-turn coordination of the squad.
//!
//! Heroes decide one at a time in slot order. Between two heroes the
//! coordinator pays the chosen action's mana and strikes every claimed
//! entity from the monster and opponent pools, so later heroes never spend
//! a second spell on the same target.

use arena_core::{EntityId, Monster, Opponent, World};

use crate::api::{DecisionContext, HeroStrategy, Result, RuntimeError, Verdict};

/// One hero's committed decision for the turn.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroTurn {
    pub hero: EntityId,
    pub name: &'static str,
    pub slot: usize,
    pub verdict: Verdict,
    /// Mana in the pool when this hero decided.
    pub mana_available: i32,
}

/// Everything decided in one turn, in slot order.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnOutcome {
    pub turn: u32,
    pub mana_before: i32,
    pub mana_after: i32,
    pub heroes: Vec<HeroTurn>,
}

/// Drives a [`HeroStrategy`] over the squad, one turn at a time.
#[derive(Debug, Clone, Default)]
pub struct TurnCoordinator<S> {
    strategy: S,
}

impl<S: HeroStrategy> TurnCoordinator<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Decides every hero's action for `world`.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Overspent`] if the strategy picks an action
    /// the remaining mana cannot pay for.
    pub fn run_turn(&self, world: &World) -> Result<TurnOutcome> {
        let mut monsters: Vec<Monster> = world.monsters.clone();
        let mut opponents: Vec<Opponent> = world.opponents.clone();
        let mut mana = world.mana;
        let mut heroes = Vec::with_capacity(world.squad.len());

        tracing::debug!(
            "Turn {}: {} heroes, {} monsters ({} engaged), {} opponents, mana {}/{}, bases {}/{}",
            world.turn,
            world.squad.len(),
            monsters.len(),
            world.engaged_monsters,
            opponents.len(),
            mana,
            world.opponent_mana,
            world.my_base.health,
            world.op_base.health
        );

        for hero in &world.squad {
            let ctx = DecisionContext {
                hero,
                squad: &world.squad,
                monsters: &monsters,
                opponents: &opponents,
                op_base: &world.op_base,
                mana,
                turn: world.turn,
            };
            let verdict = self.strategy.decide(&ctx);

            let cost = verdict.decision.mana_cost();
            if cost > mana {
                return Err(RuntimeError::Overspent {
                    hero: hero.id,
                    cost,
                    available: mana,
                });
            }

            let claims = verdict.decision.claims();
            if !claims.is_empty() {
                monsters.retain(|monster| !claims.contains(&monster.id));
                opponents.retain(|opponent| !claims.contains(&opponent.id));
                tracing::debug!("{} {} claims {:?}", hero.name, hero.id, claims);
            }

            heroes.push(HeroTurn {
                hero: hero.id,
                name: hero.name,
                slot: hero.slot,
                verdict,
                mana_available: mana,
            });
            mana -= cost;
        }

        Ok(TurnOutcome {
            turn: world.turn,
            mana_before: world.mana,
            mana_after: mana,
            heroes,
        })
    }
}
