//! Utility AI for the squad.
//!
//! Each hero weighs a fixed list of candidate actions:
//!
//! 1. **Emergencies**: monsters our melee cannot stop before they reach our
//!    base are pushed or charmed away at once, skipping all scoring
//! 2. **Spells**: charm enemy heroes, shield or charm monsters towards the
//!    enemy base
//! 3. **Movement**: intercept monsters or fall back to the guard point
//! 4. **Idle support**: shield a squad member if the turn would be wasted
//!
//! Scored candidates compete through [`scoring::weigh`]; the highest weight
//! wins and ties go to the earlier candidate.
//!
//! # Core Components
//!
//! - [`UtilityStrategy`]: Main strategy implementing [`crate::HeroStrategy`]
//! - [`Candidate`]: Candidate rules in evaluation order
//! - [`Accumulator`]: Running best decision for one hero

pub mod candidates;
pub mod provider;
pub mod scoring;

pub use candidates::{Candidate, charm_aim};
pub use provider::UtilityStrategy;
pub use scoring::{Accumulator, weigh};
