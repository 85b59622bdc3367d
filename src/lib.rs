//! # warp-common
//!
//! Utility layer shared by the Warp game client and server: the `Vector2` /
//! `Vector3` value types used for positions, velocities and orientations,
//! their f32 wire layout, and the identifier tables for entity kinds and
//! event names.
//!
//! ```rust
//! use warp_common::numerics::{Vector3, VECTOR3_ZERO};
//!
//! let mut velocity = Vector3::new(1.0, 0.0, 0.0);
//! velocity.add_mut(&Vector3::new(0.0, 1.0, 0.0)).scale_mut(2.0);
//! assert_eq!(velocity.to_buffer(), [2.0f32, 2.0, 0.0]);
//!
//! // The shared constants are read-only.
//! assert!(VECTOR3_ZERO.try_set(&velocity).is_err());
//! ```

pub mod error;
pub mod numerics;
pub mod protocol;

pub use error::{Axis, ProtocolError, VectorError};
pub use numerics::{Vector2, Vector3};
pub use protocol::{EntityType, GameEvent, IoEvent, MatchEvent};

/// Version information for the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
