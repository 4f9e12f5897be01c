//! Decision-making and coordination for the arena bot.
//!
//! This crate turns a validated [`arena_core::World`] into one command per
//! hero. Consumers read turns with [`ProtocolReader`], let a
//! [`TurnCoordinator`] drive a [`HeroStrategy`] over the squad, and write the
//! result back with [`ProtocolWriter`].
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the strategy abstraction, decision context and errors
//! - [`providers`] hosts the utility-scored strategy
//! - [`coordinator`] sequences heroes and settles mana and claims
//! - [`roster`] keeps hero slots stable across turns
//! - [`protocol`] and [`trace`] handle host I/O and the decision log
pub mod api;
pub mod coordinator;
pub mod protocol;
pub mod providers;
pub mod roster;
pub mod trace;

pub use api::{DecisionContext, HeroStrategy, Result, RuntimeError, Verdict, WaitStrategy};
pub use coordinator::{HeroTurn, TurnCoordinator, TurnOutcome};
pub use protocol::{ProtocolError, ProtocolReader, ProtocolWriter, render_action};
pub use providers::ai::{Accumulator, Candidate, UtilityStrategy, weigh};
pub use roster::SquadRoster;
pub use trace::{HeroTrace, TraceWriter, TurnTrace};
