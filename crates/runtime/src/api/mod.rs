//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on coordination and I/O.

pub mod context;
pub mod errors;
pub mod providers;

pub use context::DecisionContext;
pub use errors::{Result, RuntimeError};
pub use providers::{HeroStrategy, Verdict, WaitStrategy};
