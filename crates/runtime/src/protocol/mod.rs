//! Line protocol spoken with the game host.
//!
//! The host writes a game header once, then one block per turn on the bot's
//! stdin; the bot answers with one command line per hero on stdout. Every
//! field is a whitespace-separated integer.
//!
//! ```text
//! baseX baseY                      game header
//! heroesPerPlayer
//! health mana                      own base, every turn
//! health mana                      enemy base
//! entityCount
//! id type x y shieldLife isControlled health vx vy nearBase threatFor
//! ```

mod error;
mod reader;
mod writer;

pub use error::{ProtocolError, Result};
pub use reader::ProtocolReader;
pub use writer::{ProtocolWriter, render_action};
