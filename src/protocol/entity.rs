//! Entity kinds carried in network sync messages.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Kind of a synchronized network entity.
///
/// The discriminant is the stable id sent on the wire; never reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum EntityType {
    Room = 0,
    Match = 1,
    Ship = 2,
    Client = 3,
    Simulation = 4,
    Player = 5,
    WarpField = 6,
    WarpDrive = 7,
    Avatar = 8,
    Song = 9,
}

impl EntityType {
    /// Every entity type, in id order.
    pub const ALL: [EntityType; 10] = [
        EntityType::Room,
        EntityType::Match,
        EntityType::Ship,
        EntityType::Client,
        EntityType::Simulation,
        EntityType::Player,
        EntityType::WarpField,
        EntityType::WarpDrive,
        EntityType::Avatar,
        EntityType::Song,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            EntityType::Room => "Room",
            EntityType::Match => "Match",
            EntityType::Ship => "Ship",
            EntityType::Client => "Client",
            EntityType::Simulation => "Simulation",
            EntityType::Player => "Player",
            EntityType::WarpField => "WarpField",
            EntityType::WarpDrive => "WarpDrive",
            EntityType::Avatar => "Avatar",
            EntityType::Song => "Song",
        }
    }
}

impl TryFrom<u8> for EntityType {
    type Error = ProtocolError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        EntityType::ALL
            .get(usize::from(id))
            .copied()
            .ok_or(ProtocolError::UnknownEntityType(id))
    }
}

impl From<EntityType> for u8 {
    fn from(kind: EntityType) -> Self {
        kind.id()
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
