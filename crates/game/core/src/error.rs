//! Errors raised while turning a host observation into a [`crate::World`].
//!
//! The protocol layer only checks that records are well formed. Semantic
//! checks (known codes, squad capacity) live here so every consumer of
//! `arena-core` gets them.

use crate::state::EntityId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("entity {id} has unknown type code {code}")]
    UnknownEntityKind { id: EntityId, code: i32 },

    #[error("monster {id} has unknown threat code {code}")]
    UnknownThreat { id: EntityId, code: i32 },

    #[error("hero {id} exceeds squad capacity of {capacity}")]
    SquadOverflow { id: EntityId, capacity: usize },

    #[error("entity {id} reported more than once")]
    DuplicateEntity { id: EntityId },
}

impl SnapshotError {
    /// The entity the error refers to.
    pub const fn entity(&self) -> EntityId {
        match self {
            Self::UnknownEntityKind { id, .. }
            | Self::UnknownThreat { id, .. }
            | Self::SquadOverflow { id, .. }
            | Self::DuplicateEntity { id } => *id,
        }
    }
}
