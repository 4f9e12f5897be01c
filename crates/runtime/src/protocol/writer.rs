//! Command output for the game host.

use std::io::Write;

use arena_core::{Action, Point};
use strum::EnumMessage;

use super::error::Result;

/// Renders one hero's command line, without the trailing newline.
///
/// The line carries the protocol keyword and parameters, then the hero's
/// name and the incantation of the command as a speech bubble. Coordinates
/// are rounded half to even.
pub fn render_action(action: &Action, hero_name: &str) -> String {
    let command = action.command();
    let mut line = String::from(<&'static str>::from(command));

    match action {
        Action::Wait => {}
        Action::Move { destination } => push_point(&mut line, *destination),
        Action::Wind { direction } => push_point(&mut line, *direction),
        Action::Shield { target } => line.push_str(&format!(" {}", target.0)),
        Action::Control {
            target,
            destination,
        } => {
            line.push_str(&format!(" {}", target.0));
            push_point(&mut line, *destination);
        }
    }

    line.push(' ');
    line.push_str(hero_name);
    if let Some(incantation) = command.get_message() {
        line.push(' ');
        line.push_str(incantation);
    }
    line
}

fn push_point(line: &mut String, point: Point) {
    line.push_str(&format!(
        " {} {}",
        point.x.round_ties_even() as i64,
        point.y.round_ties_even() as i64
    ));
}

/// Writes command lines to the host.
pub struct ProtocolWriter<W> {
    output: W,
    lines_written: u64,
}

impl<W: Write> ProtocolWriter<W> {
    pub fn new(output: W) -> Self {
        Self {
            output,
            lines_written: 0,
        }
    }

    pub fn write_action(&mut self, action: &Action, hero_name: &str) -> Result<()> {
        writeln!(self.output, "{}", render_action(action, hero_name))?;
        self.lines_written += 1;
        Ok(())
    }

    /// Flushes buffered lines; the host waits for every hero's line each turn.
    pub fn flush(&mut self) -> Result<()> {
        self.output.flush()?;
        Ok(())
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}
