//! Team roster: compiled-in player catalog.
//!
//! Names are the identity key for every stat and lineup operation, so the
//! catalog must never contain two players with the same name.

use serde::Serialize;

/// Maximum number of players on court at once.
pub const LINEUP_CAPACITY: usize = 5;

/// A roster entry: jersey number + display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Player {
    pub number: u8,
    pub name: &'static str,
}

/// The fixed team roster, in display order.
pub static ROSTER: [Player; 13] = [
    Player { number: 4, name: "Timéo" },
    Player { number: 5, name: "Yehya" },
    Player { number: 6, name: "Yannis" },
    Player { number: 7, name: "Ronice" },
    Player { number: 8, name: "Keran" },
    Player { number: 9, name: "M'Baye" },
    Player { number: 10, name: "Jobin" },
    Player { number: 11, name: "Klérance" },
    Player { number: 12, name: "Franck" },
    Player { number: 13, name: "Johan" },
    Player { number: 14, name: "Lucas" },
    Player { number: 15, name: "Mehdi" },
    Player { number: 16, name: "Antoine" },
];

/// Look up a player by name.
pub fn find_player(name: &str) -> Option<&'static Player> {
    ROSTER.iter().find(|p| p.name == name)
}
