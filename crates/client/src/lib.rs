//! Arena bot client: wires host I/O to the decision runtime.
//!
//! # Architecture
//!
//! ```text
//! stdin → ProtocolReader → World → TurnCoordinator → ProtocolWriter → stdout
//!                                          │
//!                                          └─→ TraceWriter (optional)
//! ```
//!
//! The binary only loads [`BotConfig`], installs logging and runs a
//! [`Session`] on the process streams.

pub mod config;
pub mod logging;
pub mod session;

pub use config::BotConfig;
pub use logging::setup_logging;
pub use session::Session;
