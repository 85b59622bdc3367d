//! Error types shared by the numerics and protocol modules.

use crate::numerics::types::frozen::Singleton;

/// Errors that can occur while building, mutating or decoding vectors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VectorError {
    #[error("Invalid component: {axis} = {value} is not an accepted number")]
    InvalidComponent { axis: Axis, value: f64 },

    #[error("Frozen mutation: the shared {singleton} vector is read-only")]
    FrozenMutation { singleton: Singleton },

    #[error("Buffer too short: expected {expected} bytes, got {actual} bytes")]
    BufferTooShort { expected: usize, actual: usize },

    #[error("Encode failed: {0}")]
    Encode(String),

    #[error("Decode failed: {0}")]
    Decode(String),
}

/// Errors raised when parsing protocol identifiers received from a peer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("Unknown entity type id: {0}")]
    UnknownEntityType(u8),

    #[error("Unknown {table} event: '{name}'")]
    UnknownEvent { table: &'static str, name: String },
}

/// Vector axis, used to point at the offending component in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}
