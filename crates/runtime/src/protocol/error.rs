//! Error types raised while decoding or emitting the line protocol.

use thiserror::Error;

/// Errors surfaced by the protocol reader and writer.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended while expecting {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("line {line}: expected {expected} fields for {record}, found {found}")]
    FieldCount {
        line: usize,
        record: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: field `{field}` is not an integer: {value:?}")]
    InvalidInteger {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: field `{field}` is out of range: {value}")]
    OutOfRange {
        line: usize,
        field: &'static str,
        value: i32,
    },
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
