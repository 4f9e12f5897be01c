//! Abstraction for sourcing a hero's decision.
//!
//! The turn coordinator asks a [`HeroStrategy`] for each hero in slot order,
//! so the bot can run with the utility engine, scripted fixtures, or a
//! trivial fallback.
use arena_core::Decision;

use super::context::DecisionContext;

/// A decision plus what produced it, for logs and traces.
#[derive(Clone, Debug, PartialEq)]
pub struct Verdict {
    pub decision: Decision,
    /// Name of the rule that produced the decision, if any.
    pub rationale: Option<&'static str>,
    /// Utility score of the decision. `None` for emergencies and fallbacks,
    /// which bypass scoring.
    pub score: Option<f64>,
}

impl Verdict {
    pub fn new(decision: Decision, rationale: Option<&'static str>, score: Option<f64>) -> Self {
        Self {
            decision,
            rationale,
            score,
        }
    }

    /// A decision taken without scoring.
    pub fn unscored(decision: Decision, rationale: &'static str) -> Self {
        Self::new(decision, Some(rationale), None)
    }
}

/// Trait for choosing one hero's action for the turn.
///
/// Implementations must be pure with respect to the context: all side
/// effects (mana, claims, output) belong to the coordinator. They must also
/// never return a spell the context's mana cannot pay for.
///
/// Different implementations can handle:
/// - Utility-scored decisions
/// - Scripted/replayed actions
/// - Testing fixtures
pub trait HeroStrategy {
    /// Decide what the hero in `ctx` does this turn.
    fn decide(&self, ctx: &DecisionContext<'_>) -> Verdict;
}

/// A simple strategy that always waits.
/// Useful for testing or as a fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaitStrategy;

impl HeroStrategy for WaitStrategy {
    fn decide(&self, ctx: &DecisionContext<'_>) -> Verdict {
        Verdict::unscored(Decision::wait(ctx.hero.id), "wait")
    }
}

impl<S: HeroStrategy + ?Sized> HeroStrategy for &S {
    fn decide(&self, ctx: &DecisionContext<'_>) -> Verdict {
        (**self).decide(ctx)
    }
}
