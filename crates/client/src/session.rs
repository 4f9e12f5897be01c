//! Read, decide, emit: one game against the host.

use std::io::{self, BufRead, Write};

use arena_core::{ArenaConfig, World};
use arena_runtime::{
    ProtocolReader, ProtocolWriter, Result, SquadRoster, TraceWriter, TurnCoordinator,
    UtilityStrategy,
};

/// A game session over any buffered input and writable output.
///
/// Each turn is read in full, decided by the squad, and answered with one
/// line per hero before the next turn is read.
pub struct Session<R, W, T: Write = io::Sink> {
    reader: ProtocolReader<R>,
    writer: ProtocolWriter<W>,
    trace: Option<TraceWriter<T>>,
    coordinator: TurnCoordinator<UtilityStrategy>,
    roster: SquadRoster,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            reader: ProtocolReader::new(input),
            writer: ProtocolWriter::new(output),
            trace: None,
            coordinator: TurnCoordinator::new(UtilityStrategy::new()),
            roster: SquadRoster::new(),
        }
    }
}

impl<R: BufRead, W: Write, T: Write> Session<R, W, T> {
    /// Records every turn's decisions to `trace`.
    pub fn with_trace<U: Write>(self, trace: TraceWriter<U>) -> Session<R, W, U> {
        Session {
            reader: self.reader,
            writer: self.writer,
            trace: Some(trace),
            coordinator: self.coordinator,
            roster: self.roster,
        }
    }

    /// Plays until the host closes the input. Returns the number of turns played.
    ///
    /// # Errors
    ///
    /// Protocol, snapshot and coordination errors end the session.
    pub fn play(mut self) -> Result<u32> {
        let (layout, config) = self.reader.read_header()?;
        if config.heroes_per_player > ArenaConfig::MAX_HEROES {
            tracing::warn!(
                "Host announced {} heroes per side; only {} fit in a squad",
                config.heroes_per_player,
                ArenaConfig::MAX_HEROES
            );
        }

        let mut turn = 0;
        while let Some(snapshot) = self.reader.read_turn()? {
            turn += 1;
            let roster = &mut self.roster;
            let world = World::from_snapshot(&layout, &snapshot, turn, |id| roster.slot_for(id))?;

            let outcome = self.coordinator.run_turn(&world)?;
            if outcome.heroes.len() != config.heroes_per_player {
                tracing::warn!(
                    "Turn {}: answering for {} heroes, host expects {}",
                    turn,
                    outcome.heroes.len(),
                    config.heroes_per_player
                );
            }

            for hero in &outcome.heroes {
                self.writer.write_action(&hero.verdict.decision.action, hero.name)?;
            }
            self.writer.flush()?;

            if let Some(trace) = self.trace.as_mut() {
                trace.record(&outcome)?;
            }

            tracing::info!(
                "Turn {} done: mana {} -> {}",
                turn,
                outcome.mana_before,
                outcome.mana_after
            );
        }

        tracing::info!("Session over after {} turns", turn);
        Ok(turn)
    }
}
