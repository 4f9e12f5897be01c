//! Utility weighting for candidate actions.
//!
//! Every candidate reduces to a pair of positive products: what it gains
//! (`benefit`) and what it costs or risks (`cost`). Each product mixes the
//! turn counter, the mana pool, profile weights and domain quantities like
//! monster health or distance. [`weigh`] maps the ratio of the two onto
//! `(0, 1)` so heterogeneous candidates become comparable.
//!
//! # Formula
//!
//! ```text
//! weight = 1 - 1 / ((benefit / cost)^2 + 1)
//! ```
//!
//! - `benefit == cost` gives exactly `0.5`
//! - the weight saturates towards `1` as the ratio grows and towards `0`
//!   as it shrinks
//!
//! Magnitudes of the factors only matter relative to each other within a
//! single hero's candidate set.

pub mod selector;

pub use selector::Accumulator;

/// Maps a benefit/cost pair onto a bounded preference in `[0, 1]`.
///
/// Degenerate inputs are pinned to the ends of the range: a non-positive
/// benefit weighs `0` and a non-positive cost weighs `1`.
pub fn weigh(benefit: f64, cost: f64) -> f64 {
    if benefit <= 0.0 {
        return 0.0;
    }
    if cost <= 0.0 {
        return 1.0;
    }
    let squared = (benefit / cost).powi(2);
    // Equal to 1 - 1 / (r^2 + 1) but keeps precision for tiny ratios.
    squared / (squared + 1.0)
}
