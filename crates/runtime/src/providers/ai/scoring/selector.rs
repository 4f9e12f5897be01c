//! Running maximum over a hero's candidate actions.
//!
//! Candidates are offered in a fixed order. A candidate only replaces the
//! current best if its weight is strictly greater, so on ties the earlier
//! candidate wins (stable ordering).

use arena_core::{Decision, EntityId};

use crate::api::Verdict;
use crate::providers::ai::candidates::Candidate;

/// Best decision found so far for one hero.
#[derive(Clone, Debug, PartialEq)]
pub struct Accumulator {
    best_score: f64,
    best: Decision,
    source: Option<Candidate>,
}

impl Accumulator {
    /// Starts from waiting, weighted zero.
    pub fn new(hero: EntityId) -> Self {
        Self {
            best_score: 0.0,
            best: Decision::wait(hero),
            source: None,
        }
    }

    /// Offers a scored decision. `decision` is only built if it wins.
    ///
    /// Returns true if the offer became the new best.
    pub fn offer(
        &mut self,
        candidate: Candidate,
        score: f64,
        decision: impl FnOnce() -> Decision,
    ) -> bool {
        tracing::debug!(
            "  {} weight = {:e} for hero {} (best so far {:e})",
            candidate,
            score,
            self.best.hero,
            self.best_score
        );

        if score > self.best_score {
            self.best_score = score;
            self.best = decision();
            self.source = Some(candidate);
            true
        } else {
            false
        }
    }

    /// Takes `decision` only if nothing has been chosen yet. Unscored.
    pub fn fill_idle(&mut self, candidate: Candidate, decision: Decision) {
        if self.is_idle() {
            tracing::debug!("  {} fills idle turn for hero {}", candidate, self.best.hero);
            self.best = decision;
            self.source = Some(candidate);
        }
    }

    /// Returns true while the best decision is still to wait.
    pub fn is_idle(&self) -> bool {
        self.best.is_wait()
    }

    pub fn best(&self) -> &Decision {
        &self.best
    }

    pub fn source(&self) -> Option<Candidate> {
        self.source
    }

    pub fn into_verdict(self) -> Verdict {
        let score = self
            .source
            .filter(|candidate| candidate.is_scored())
            .map(|_| self.best_score);
        Verdict::new(self.best, self.source.map(Candidate::name), score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{Action, Point};

    fn walk(to: Point) -> Decision {
        Decision::walk(EntityId(1), to)
    }

    #[test]
    fn strictly_greater_score_replaces_best() {
        let mut acc = Accumulator::new(EntityId(1));
        assert!(acc.offer(Candidate::Intercept, 0.3, || walk(Point::ORIGIN)));
        assert!(!acc.offer(Candidate::ReturnToGuard, 0.3, || walk(Point::center())));
        assert_eq!(acc.best().action, Action::Move { destination: Point::ORIGIN });
        assert_eq!(acc.source(), Some(Candidate::Intercept));
        assert_eq!(acc.into_verdict().score, Some(0.3));
    }

    #[test]
    fn zero_score_never_beats_waiting() {
        let mut acc = Accumulator::new(EntityId(1));
        assert!(!acc.offer(Candidate::ReturnToGuard, 0.0, || walk(Point::ORIGIN)));
        assert!(acc.is_idle());
        assert!(!acc.offer(Candidate::Intercept, f64::NAN, || walk(Point::ORIGIN)));
        assert!(acc.is_idle());
    }

    #[test]
    fn fill_idle_respects_prior_choice() {
        let mut acc = Accumulator::new(EntityId(1));
        acc.offer(Candidate::ReturnToGuard, 0.1, || walk(Point::ORIGIN));
        acc.fill_idle(Candidate::SupportShield, Decision::wait(EntityId(1)));
        assert_eq!(acc.source(), Some(Candidate::ReturnToGuard));
    }

    #[test]
    fn idle_verdict_is_unscored() {
        let verdict = Accumulator::new(EntityId(2)).into_verdict();
        assert!(verdict.decision.is_wait());
        assert_eq!(verdict.rationale, None);
        assert_eq!(verdict.score, None);
    }
}
