//! JSON-lines record of every turn's decisions.
//!
//! Each line is one [`TurnTrace`]; the file can be replayed with any JSON
//! tooling to see why a hero did what it did.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use arena_core::{Action, EntityId};
use serde::Serialize;

use crate::api::{Result, RuntimeError};
use crate::coordinator::{HeroTurn, TurnOutcome};

/// One hero's line in the trace.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeroTrace {
    pub hero: EntityId,
    pub name: &'static str,
    pub slot: usize,
    pub action: Action,
    pub claims: Vec<EntityId>,
    pub cost: i32,
    /// Candidate that produced the action; absent when the hero waited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl From<&HeroTurn> for HeroTrace {
    fn from(turn: &HeroTurn) -> Self {
        let decision = &turn.verdict.decision;
        Self {
            hero: turn.hero,
            name: turn.name,
            slot: turn.slot,
            action: decision.action,
            claims: decision.claims().to_vec(),
            cost: decision.mana_cost(),
            candidate: turn.verdict.rationale,
            score: turn.verdict.score,
        }
    }
}

/// One turn of the trace.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TurnTrace {
    pub turn: u32,
    pub mana_before: i32,
    pub mana_after: i32,
    pub heroes: Vec<HeroTrace>,
}

impl From<&TurnOutcome> for TurnTrace {
    fn from(outcome: &TurnOutcome) -> Self {
        Self {
            turn: outcome.turn,
            mana_before: outcome.mana_before,
            mana_after: outcome.mana_after,
            heroes: outcome.heroes.iter().map(HeroTrace::from).collect(),
        }
    }
}

/// Appends [`TurnTrace`] lines to a writer.
pub struct TraceWriter<W: Write> {
    writer: W,
}

impl TraceWriter<BufWriter<File>> {
    /// Creates (or truncates) the trace file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(RuntimeError::Trace)?;
        tracing::info!("Writing decision trace to {}", path.display());
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TraceWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes one line for `outcome` and flushes it.
    pub fn record(&mut self, outcome: &TurnOutcome) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &TurnTrace::from(outcome))
            .map_err(RuntimeError::TraceEncoding)?;
        self.writer.write_all(b"\n").map_err(RuntimeError::Trace)?;
        self.writer.flush().map_err(RuntimeError::Trace)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Verdict;
    use arena_core::{Decision, Point};

    fn outcome() -> TurnOutcome {
        TurnOutcome {
            turn: 4,
            mana_before: 30,
            mana_after: 20,
            heroes: vec![
                HeroTurn {
                    hero: EntityId(1),
                    name: "REX",
                    slot: 0,
                    verdict: Verdict::new(
                        Decision::cast(
                            EntityId(1),
                            Action::Shield { target: EntityId(9) },
                            vec![EntityId(9)],
                        ),
                        Some("shield_monster"),
                        Some(0.25),
                    ),
                    mana_available: 30,
                },
                HeroTurn {
                    hero: EntityId(2),
                    name: "TEX",
                    slot: 1,
                    verdict: Verdict::new(
                        Decision::walk(EntityId(2), Point::new(1.0, 2.0)),
                        None,
                        None,
                    ),
                    mana_available: 20,
                },
            ],
        }
    }

    #[test]
    fn writes_one_json_line_per_turn() {
        let mut trace = TraceWriter::new(Vec::new());
        trace.record(&outcome()).expect("record");
        trace.record(&outcome()).expect("record");

        let text = String::from_utf8(trace.into_inner()).expect("utf8");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let value: serde_json::Value = serde_json::from_str(lines[0]).expect("json");
        assert_eq!(value["turn"], 4);
        assert_eq!(value["mana_after"], 20);
        assert_eq!(value["heroes"][0]["action"]["kind"], "shield");
        assert_eq!(value["heroes"][0]["claims"][0], 9);
        assert_eq!(value["heroes"][0]["candidate"], "shield_monster");
        assert_eq!(value["heroes"][1]["cost"], 0);
        assert!(value["heroes"][1].get("score").is_none());
    }

    #[test]
    fn creates_trace_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("trace.jsonl");

        let mut trace = TraceWriter::create(&path).expect("create");
        trace.record(&outcome()).expect("record");
        drop(trace);

        let text = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(text.lines().count(), 1);
    }
}
