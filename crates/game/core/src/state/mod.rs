//! Per-turn view of every entity on the arena.
//!
//! Entities are rebuilt from the host's observation each turn. Derived
//! fields (distances, arrival times, guard points) are computed on
//! construction and never updated afterwards.
pub mod entities;
pub mod hero;
pub mod monster;
pub mod profile;

pub use entities::{EntityId, Opponent, SHIELD_THRESHOLD, Structure, Threat, is_shielded};
pub use hero::Hero;
pub use monster::{Monster, MonsterSighting, time_to_impact};
pub use profile::{Profile, SlotProfile, guard_point, profile_for};
