//! Protocol identifiers shared by client and server.
//!
//! Public submodules:
//! - entity (EntityType)
//! - events (IoEvent, MatchEvent, GameEvent)

pub mod entity;
pub mod events;

pub use entity::EntityType;
pub use events::{GameEvent, IoEvent, MatchEvent};
