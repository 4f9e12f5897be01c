//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the line protocol, snapshot validation, and turn
//! coordination so the bot binary can bubble them up with consistent context.
use arena_core::{EntityId, SnapshotError};
use thiserror::Error;

pub use crate::protocol::ProtocolError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("invalid turn snapshot")]
    Snapshot(#[from] SnapshotError),

    #[error("hero {hero} chose an action costing {cost} mana with only {available} left")]
    Overspent {
        hero: EntityId,
        cost: i32,
        available: i32,
    },

    #[error("failed to write decision trace")]
    Trace(#[source] std::io::Error),

    #[error("failed to encode decision trace")]
    TraceEncoding(#[source] serde_json::Error),
}
