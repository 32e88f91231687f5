//! Game state store and the per-session holder.
//!
//! `GameState` is a plain value: one `StatLine` per roster player plus the
//! on-court lineup. Score, percentages and box score rows are derived from
//! the counters on every read.
//!
//! The WASM worker serves exactly one user session, so the live state sits in
//! a `thread_local!` + `RefCell` for the lifetime of the worker.

use std::cell::RefCell;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::game::box_score::BoxScoreRow;
use crate::game::error::GameError;
use crate::game::lineup::{Lineup, LineupChange};
use crate::game::stats::{Category, Outcome, StatEvent, StatLine};
use crate::roster::{find_player, Player, ROSTER};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    /// Counters keyed by player name. Always holds every roster player.
    stats: BTreeMap<String, StatLine>,
    lineup: Lineup,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: every counter at zero, nobody on court.
    pub fn new() -> Self {
        Self {
            stats: ROSTER
                .iter()
                .map(|p| (p.name.to_string(), StatLine::default()))
                .collect(),
            lineup: Lineup::default(),
        }
    }

    /// Record a shot or simple counter event for a player.
    pub fn record(
        &mut self,
        player: &str,
        category: Category,
        outcome: Outcome,
    ) -> Result<(), GameError> {
        let line = self
            .stats
            .get_mut(player)
            .ok_or_else(|| GameError::UnknownPlayer(player.to_string()))?;
        line.apply(category, outcome)?;
        log::debug!("recorded {} {} for {}", category, outcome, player);
        Ok(())
    }

    pub fn record_event(&mut self, event: &StatEvent) -> Result<(), GameError> {
        self.record(&event.player, event.category, event.outcome)
    }

    /// Move a player on or off the court. A full lineup is a silent no-op.
    pub fn toggle_court(&mut self, player: &str) -> Result<LineupChange, GameError> {
        if find_player(player).is_none() {
            return Err(GameError::UnknownPlayer(player.to_string()));
        }
        let change = self.lineup.toggle(player);
        match change {
            LineupChange::Entered { slot } => log::debug!("{} enters slot {}", player, slot),
            LineupChange::Left => log::debug!("{} leaves the court", player),
            LineupChange::Full => log::debug!("lineup full, {} stays on the bench", player),
        }
        Ok(change)
    }

    /// Team points, summed over every player's made shots.
    pub fn team_score(&self) -> u32 {
        self.stats.values().map(StatLine::points).sum()
    }

    pub fn stat_line(&self, player: &str) -> Option<&StatLine> {
        self.stats.get(player)
    }

    pub fn box_score_row(&self, player: &str) -> Result<BoxScoreRow, GameError> {
        let entry = find_player(player).ok_or_else(|| GameError::UnknownPlayer(player.to_string()))?;
        let line = self.stats.get(player).copied().unwrap_or_default();
        Ok(BoxScoreRow::derive(entry, &line))
    }

    /// One row per roster player, in roster order.
    pub fn box_score(&self) -> Vec<BoxScoreRow> {
        ROSTER
            .iter()
            .map(|p| {
                let line = self.stats.get(p.name).copied().unwrap_or_default();
                BoxScoreRow::derive(p, &line)
            })
            .collect()
    }

    /// On-court players in slot order.
    pub fn lineup(&self) -> Vec<&'static Player> {
        self.lineup
            .names()
            .iter()
            .filter_map(|name| find_player(name))
            .collect()
    }

    /// Roster players not on court, in roster order.
    pub fn bench(&self) -> Vec<&'static Player> {
        ROSTER
            .iter()
            .filter(|p| !self.lineup.contains(p.name))
            .collect()
    }

    pub fn is_on_court(&self, player: &str) -> bool {
        self.lineup.contains(player)
    }

    pub fn lineup_is_full(&self) -> bool {
        self.lineup.is_full()
    }

    /// Discard everything and start a new game.
    pub fn reset(&mut self) {
        *self = GameState::new();
        log::info!("match reset");
    }
}

thread_local! {
    static STATE: RefCell<GameState> = RefCell::new(GameState::new());
}

/// Execute a closure with read access to the session's game state.
pub fn with_state<F, R>(f: F) -> R
where
    F: FnOnce(&GameState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Execute a closure with mutable access to the session's game state.
pub fn with_state_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut GameState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

/// Reset the session to a fresh game.
pub fn reset_state() {
    with_state_mut(GameState::reset);
}

/// Snapshot of the current counters and lineup as JSON.
pub fn export_state_json() -> String {
    with_state(|state| serde_json::to_string(state).unwrap_or_else(|_| "{}".to_string()))
}
