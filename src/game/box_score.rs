//! Box score rows: derived per-player summaries, recomputed on every read.

use serde::Serialize;

use crate::game::stats::StatLine;
use crate::roster::Player;

/// One box score row. Never stored; always built from the current `StatLine`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxScoreRow {
    pub number: u8,
    pub name: &'static str,
    pub points: u32,
    pub fg_made: u32,
    pub fg_attempt: u32,
    /// Field-goal percentage at one decimal, 0.0 without attempts. Always
    /// the value shown by `fg_pct_display`.
    pub fg_pct: f64,
    pub two_pt_made: u32,
    pub two_pt_attempt: u32,
    pub three_pt_made: u32,
    pub three_pt_attempt: u32,
    pub ft_made: u32,
    pub ft_attempt: u32,
    pub reb_off: u32,
    pub reb_def: u32,
    pub reb_total: u32,
    pub assists: u32,
    pub turnovers: u32,
    pub fouls: u32,
}

impl BoxScoreRow {
    pub fn derive(player: &'static Player, line: &StatLine) -> Self {
        let (fg_made, fg_attempt) = line.field_goals();
        Self {
            number: player.number,
            name: player.name,
            points: line.points(),
            fg_made,
            fg_attempt,
            fg_pct: percentage_text(fg_made, fg_attempt).parse().unwrap_or(0.0),
            two_pt_made: line.two_pt_made,
            two_pt_attempt: line.two_pt_attempt,
            three_pt_made: line.three_pt_made,
            three_pt_attempt: line.three_pt_attempt,
            ft_made: line.ft_made,
            ft_attempt: line.ft_attempt,
            reb_off: line.rebounds_off,
            reb_def: line.rebounds_def,
            reb_total: line.rebounds_total(),
            assists: line.assists,
            turnovers: line.turnovers,
            fouls: line.fouls,
        }
    }

    /// "M/A" for field goals.
    pub fn fg_display(&self) -> String {
        made_attempt(self.fg_made, self.fg_attempt)
    }

    /// e.g. "50.0%".
    pub fn fg_pct_display(&self) -> String {
        format!("{:.1}%", self.fg_pct)
    }

    pub fn two_pt_display(&self) -> String {
        made_attempt(self.two_pt_made, self.two_pt_attempt)
    }

    pub fn three_pt_display(&self) -> String {
        made_attempt(self.three_pt_made, self.three_pt_attempt)
    }

    pub fn ft_display(&self) -> String {
        made_attempt(self.ft_made, self.ft_attempt)
    }
}

fn made_attempt(made: u32, attempt: u32) -> String {
    format!("{}/{}", made, attempt)
}

/// One-decimal percentage, formatted once from the unrounded ratio so exact
/// ties round to even ("6.2" for 1/16).
fn percentage_text(made: u32, attempt: u32) -> String {
    if attempt == 0 {
        return "0.0".to_string();
    }
    let pct = f64::from(made) / f64::from(attempt) * 100.0;
    format!("{:.1}", pct)
}
