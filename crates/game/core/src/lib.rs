//! Pure rules and data types for the arena bot.
//!
//! `arena-core` describes the arena (geometry, bases, heroes, monsters,
//! opponents), predicts how monsters move, and defines the action record a
//! hero commits to each turn. It performs no I/O and keeps no state between
//! turns; the runtime crate builds a [`World`] per turn and decides on it.
pub mod action;
pub mod config;
pub mod error;
pub mod geometry;
pub mod motion;
pub mod state;
pub mod world;

pub use action::{Action, Command, Decision};
pub use config::ArenaConfig;
pub use error::SnapshotError;
pub use geometry::{MapTriangle, Point};
pub use state::{
    EntityId, Hero, Monster, MonsterSighting, Opponent, Profile, SlotProfile, Structure, Threat,
    profile_for,
};
pub use world::{ArenaLayout, EntityKind, EntityRecord, Squad, TurnSnapshot, World};
