//! Event names exchanged between client and server.
//!
//! Each table is a closed set of camelCase names. The names are the wire
//! identifiers, so variants may be added but existing names must not change.

use core::fmt;
use core::str::FromStr;

use crate::error::ProtocolError;

macro_rules! event_table {
    (
        $(#[$meta:meta])*
        $name:ident, $table:literal {
            $($variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every event in the table, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Name of the table, used in error messages.
            pub const TABLE: &'static str = $table;

            /// The wire name of this event.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ProtocolError;

            fn from_str(name: &str) -> Result<Self, Self::Err> {
                match name {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(ProtocolError::UnknownEvent {
                        table: $table,
                        name: name.to_owned(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

event_table! {
    /// Connection and room lifecycle events.
    IoEvent, "io" {
        Connect => "connect",
        JoinServer => "joinServer",
        Disconnect => "disconnect",
        Reconnect => "reconnect",
        ServerError => "serverError",
        RoomCreated => "roomCreated",
        JoinedRoom => "joinedRoom",
        LeftRoom => "leftRoom",
        UserDetailsUpdate => "userDetailsUpdate",
        RequestUserDetails => "requestUserDetails",
        SyncNetworkEntity => "syncNetworkEntity",
        ServerPing => "serverPing",
        ServerPong => "serverPong",
        ClientPing => "clientPing",
        ClientPong => "clientPong",
        RequestRooms => "requestRooms",
    }
}

event_table! {
    /// Match setup and teardown events.
    MatchEvent, "match" {
        RequestMatch => "requestMatch",
        RequestJoin => "requestJoin",
        MatchListUpdate => "matchListUpdate",
        MatchCreated => "matchCreated",
        JoinedMatch => "joinedMatch",
        RequestStart => "requestStart",
        RequestLeave => "requestLeave",
        MatchStarted => "matchStarted",
        RequestEnd => "requestEnd",
        MatchEnded => "matchEnded",
        SetSong => "setSong",
        UploadLevel => "uploadLevel",
    }
}

event_table! {
    /// In-play events.
    GameEvent, "game" {
        ClientLoaded => "clientLoaded",
        ClientsReady => "clientsReady",
        PlayStarted => "playStarted",
        Command => "command",
        Pause => "pause",
        Resume => "resume",
        PlayEnded => "playEnded",
    }
}
