//! `/api/stat` route: one button tap, one recorded event.

use crate::game::state::{with_state, with_state_mut};
use crate::game::stats::StatEvent;
use crate::routes::game::{render_current_tracker, render_tracker_with_notice};
use crate::routes::util::{get_param, parse_form_body};

// ── POST /api/stat ─────────────────────────────────────────────────

/// Handle POST /api/stat
/// Body params:
///   - player={name}&stat={two_pt|three_pt|free_throw}&outcome={made|missed}
///   - player={name}&stat={reb_off|reb_def|assist|turnover|foul}
///
/// Returns the re-rendered tracker. Rejected events leave the state as is
/// and show a notice above the tracker.
pub fn handle_stat_post(body: &str) -> String {
    let params = parse_form_body(body);
    let player = get_param(&params, "player").unwrap_or("");
    let stat = get_param(&params, "stat").unwrap_or("");
    let outcome = get_param(&params, "outcome").unwrap_or("");

    if player.is_empty() || stat.is_empty() {
        log::warn!("stat event without player or stat");
        return with_state(|s| {
            render_tracker_with_notice(s, Some("Missing player or stat parameter"))
        });
    }

    let result = StatEvent::parse(player, stat, outcome)
        .and_then(|event| with_state_mut(|s| s.record_event(&event)));

    match result {
        Ok(()) => render_current_tracker(),
        Err(e) => {
            log::warn!("stat event rejected: {}", e);
            with_state(|s| render_tracker_with_notice(s, Some(&e.to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::{reset_state, GameState};

    fn line(player: &str) -> crate::game::stats::StatLine {
        with_state(|s| s.stat_line(player).copied()).unwrap()
    }

    #[test]
    fn made_and_missed_shots() {
        reset_state();
        handle_stat_post("player=Lucas&stat=two_pt&outcome=made");
        handle_stat_post("player=Lucas&stat=two_pt&outcome=missed");
        handle_stat_post("player=Lucas&stat=free_throw&outcome=made");
        let l = line("Lucas");
        assert_eq!((l.two_pt_made, l.two_pt_attempt), (1, 2));
        assert_eq!((l.ft_made, l.ft_attempt), (1, 1));
        assert_eq!(with_state(GameState::team_score), 3);
        reset_state();
    }

    #[test]
    fn counter_without_outcome() {
        reset_state();
        handle_stat_post("player=Johan&stat=assist");
        handle_stat_post("player=Johan&stat=reb_off");
        let l = line("Johan");
        assert_eq!(l.assists, 1);
        assert_eq!(l.rebounds_off, 1);
        assert_eq!(l.rebounds_def, 0);
        reset_state();
    }

    #[test]
    fn response_contains_updated_score() {
        reset_state();
        let html = handle_stat_post("player=Mehdi&stat=three_pt&outcome=made");
        assert!(html.contains("SCORE ÉQUIPE : 3"));
        reset_state();
    }

    #[test]
    fn invalid_outcome_shows_notice_and_changes_nothing() {
        reset_state();
        let html = handle_stat_post("player=Mehdi&stat=foul&outcome=made");
        assert!(html.contains("not valid"));
        assert_eq!(with_state(|s| s.clone()), GameState::new());
        reset_state();
    }

    #[test]
    fn unknown_player_and_stat() {
        reset_state();
        assert!(handle_stat_post("player=Ghost&stat=foul").contains("Unknown player: Ghost"));
        assert!(handle_stat_post("player=Mehdi&stat=dunk").contains("Unknown stat category"));
        let html = handle_stat_post("stat=foul");
        assert!(html.contains("Missing player or stat"));
        assert!(html.contains("id=\"box-score\""));
        assert_eq!(with_state(|s| s.clone()), GameState::new());
        reset_state();
    }

    #[test]
    fn encoded_apostrophe_name() {
        reset_state();
        handle_stat_post("player=M%27Baye&stat=turnover");
        assert_eq!(line("M'Baye").turnovers, 1);
        reset_state();
    }
}
