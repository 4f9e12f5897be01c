//! Hero strategy implementations.

pub mod ai;

pub use ai::UtilityStrategy;
