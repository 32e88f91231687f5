//! On-court lineup: up to five players in slot (insertion) order.

use serde::Serialize;

use crate::roster::LINEUP_CAPACITY;

/// Result of toggling a player's court presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineupChange {
    /// Player took the given slot (0-based).
    Entered { slot: usize },
    /// Player went back to the bench.
    Left,
    /// Lineup already full; nothing changed.
    Full,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Lineup {
    players: Vec<String>,
}

impl Lineup {
    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p == name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= LINEUP_CAPACITY
    }

    /// Names in slot order.
    pub fn names(&self) -> &[String] {
        &self.players
    }

    /// Remove the player if on court, otherwise append them when a slot is free.
    pub fn toggle(&mut self, name: &str) -> LineupChange {
        if let Some(pos) = self.players.iter().position(|p| p == name) {
            self.players.remove(pos);
            return LineupChange::Left;
        }
        if self.is_full() {
            return LineupChange::Full;
        }
        self.players.push(name.to_string());
        LineupChange::Entered {
            slot: self.players.len() - 1,
        }
    }
}
