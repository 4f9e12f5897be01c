//! Utility-scored hero strategy.

use std::ops::ControlFlow;

use strum::IntoEnumIterator;

use super::candidates::Candidate;
use super::scoring::Accumulator;
use crate::api::{DecisionContext, HeroStrategy, Verdict};

/// Picks the best-weighted candidate for each hero.
///
/// The provider:
/// 1. Starts an [`Accumulator`] at "wait, weight zero"
/// 2. Runs every [`Candidate`] in declaration order
/// 3. Commits an emergency immediately, without scoring
/// 4. Otherwise returns the highest weight, earliest candidate on ties
///
/// Evaluation reads the context only; claims and mana are settled by the
/// turn coordinator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtilityStrategy;

impl UtilityStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl HeroStrategy for UtilityStrategy {
    fn decide(&self, ctx: &DecisionContext<'_>) -> Verdict {
        let hero = ctx.hero;
        let mut acc = Accumulator::new(hero.id);

        for candidate in Candidate::iter() {
            if let ControlFlow::Break(decision) = candidate.evaluate(ctx, &mut acc) {
                tracing::info!(
                    "{} {} commits emergency {}: {:?}",
                    hero.name,
                    hero.id,
                    candidate,
                    decision.action
                );
                return Verdict::unscored(decision, candidate.name());
            }
        }

        let verdict = acc.into_verdict();
        tracing::debug!(
            "{} {} chose {:?} via {} (weight {:?})",
            hero.name,
            hero.id,
            verdict.decision.action,
            verdict.rationale.unwrap_or("wait"),
            verdict.score
        );
        verdict
    }
}
