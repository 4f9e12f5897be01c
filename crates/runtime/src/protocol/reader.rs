//! Buffered reader for host input.

use std::io::BufRead;

use arena_core::{ArenaConfig, ArenaLayout, EntityId, EntityRecord, Point, TurnSnapshot};
use tracing::{debug, trace};

use super::error::{ProtocolError, Result};

/// The host never reports more entities than this in practice; larger
/// counts still parse, they just grow the buffer as lines arrive.
const PREALLOCATED_ENTITIES: usize = 64;

const ENTITY_FIELDS: [&str; 11] = [
    "id",
    "type",
    "x",
    "y",
    "shieldLife",
    "isControlled",
    "health",
    "vx",
    "vy",
    "nearBase",
    "threatFor",
];

/// Decodes the game header and turn blocks from any buffered input.
///
/// Blank lines are skipped. A clean end of input is only accepted where a
/// new turn would start; anywhere else it is an error.
pub struct ProtocolReader<R> {
    input: R,
    buffer: String,
    /// 1-based number of the last line read, for error messages.
    line: usize,
    turns_read: u64,
}

impl<R: BufRead> ProtocolReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            buffer: String::new(),
            line: 0,
            turns_read: 0,
        }
    }

    /// Reads the game header: our base position, then the squad size.
    pub fn read_header(&mut self) -> Result<(ArenaLayout, ArenaConfig)> {
        let [x, y] = self.require("base position", ["baseX", "baseY"])?;
        let [heroes] = self.require("squad size", ["heroesPerPlayer"])?;
        let heroes = self.non_negative("heroesPerPlayer", heroes)?;

        let layout = ArenaLayout::from_home_corner(Point::new(f64::from(x), f64::from(y)));
        debug!(
            "Game header: home base {}, enemy base {}, {} heroes per side",
            layout.my_base, layout.op_base, heroes
        );

        Ok((layout, ArenaConfig::with_heroes_per_player(heroes)))
    }

    /// Reads the next turn block.
    ///
    /// Returns `None` when the input ends before a new turn starts.
    pub fn read_turn(&mut self) -> Result<Option<TurnSnapshot>> {
        let Some([my_health, my_mana]) = self.record("own base", ["health", "mana"])? else {
            debug!("Input closed after {} turns", self.turns_read);
            return Ok(None);
        };
        let [op_health, op_mana] = self.require("enemy base", ["health", "mana"])?;
        let [count] = self.require("entity count", ["entityCount"])?;
        let count = self.non_negative("entityCount", count)?;

        let mut entities = Vec::with_capacity(count.min(PREALLOCATED_ENTITIES));
        for _ in 0..count {
            let [id, kind, x, y, shield_life, is_controlled, health, vx, vy, near_base, threat] =
                self.require("entity", ENTITY_FIELDS)?;
            let id = u32::try_from(id).map_err(|_| ProtocolError::OutOfRange {
                line: self.line,
                field: "id",
                value: id,
            })?;

            entities.push(EntityRecord {
                id: EntityId(id),
                kind,
                position: Point::new(f64::from(x), f64::from(y)),
                shield_life,
                is_controlled: is_controlled != 0,
                health,
                heading: Point::new(f64::from(vx), f64::from(vy)),
                near_base: near_base != 0,
                threat,
            });
        }

        self.turns_read += 1;
        trace!(
            "Read turn block {} with {} entities",
            self.turns_read,
            entities.len()
        );

        Ok(Some(TurnSnapshot {
            my_health,
            my_mana,
            op_health,
            op_mana,
            entities,
        }))
    }

    /// Number of complete turn blocks read so far.
    pub fn turns_read(&self) -> u64 {
        self.turns_read
    }

    fn require<const N: usize>(
        &mut self,
        record: &'static str,
        fields: [&'static str; N],
    ) -> Result<[i32; N]> {
        self.record(record, fields)?
            .ok_or(ProtocolError::UnexpectedEof { expected: record })
    }

    /// Reads one line of exactly `N` integers, or `None` at end of input.
    fn record<const N: usize>(
        &mut self,
        record: &'static str,
        fields: [&'static str; N],
    ) -> Result<Option<[i32; N]>> {
        if !self.next_line()? {
            return Ok(None);
        }

        let found = self.buffer.split_whitespace().count();
        if found != N {
            return Err(ProtocolError::FieldCount {
                line: self.line,
                record,
                expected: N,
                found,
            });
        }

        let mut values = [0; N];
        for ((slot, token), field) in values
            .iter_mut()
            .zip(self.buffer.split_whitespace())
            .zip(fields)
        {
            *slot = token.parse().map_err(|_| ProtocolError::InvalidInteger {
                line: self.line,
                field,
                value: token.to_owned(),
            })?;
        }

        Ok(Some(values))
    }

    /// Loads the next non-blank line into the buffer. Returns false at end of input.
    fn next_line(&mut self) -> Result<bool> {
        loop {
            self.buffer.clear();
            if self.input.read_line(&mut self.buffer)? == 0 {
                return Ok(false);
            }
            self.line += 1;
            if !self.buffer.trim().is_empty() {
                return Ok(true);
            }
        }
    }

    fn non_negative(&self, field: &'static str, value: i32) -> Result<usize> {
        usize::try_from(value).map_err(|_| ProtocolError::OutOfRange {
            line: self.line,
            field,
            value,
        })
    }
}
