//! `/api/tracker`, `/api/score` and `/api/game/*` routes: the full tracker
//! view, the team score header, the JSON snapshot and the match reset.
//!
//! Every mutation re-renders the whole tracker from the current state, so
//! the page never shows a stale score or counter.

use crate::game::state::{export_state_json, reset_state, with_state, GameState};
use crate::routes::box_score::render_box_score;
use crate::routes::court::{render_bench, render_court_panel};
use crate::routes::util::escape_html;

// ── GET /api/tracker ───────────────────────────────────────────────

/// Handle GET /api/tracker
/// Returns the full tracker: score, court, bench, box score and reset button.
pub fn handle_tracker_get(_query: &str) -> String {
    render_current_tracker()
}

// ── GET /api/score ─────────────────────────────────────────────────

/// Handle GET /api/score
pub fn handle_score_get(_query: &str) -> String {
    with_state(render_score)
}

// ── GET /api/game/state ────────────────────────────────────────────

/// Handle GET /api/game/state
/// Returns counters and lineup as JSON. Read only: nothing is ever imported.
pub fn handle_state_get(_query: &str) -> String {
    export_state_json()
}

// ── POST /api/game/reset ───────────────────────────────────────────

/// Handle POST /api/game/reset
/// Zeroes every counter, empties the court and returns the fresh tracker.
pub fn handle_reset_post(_body: &str) -> String {
    reset_state();
    render_current_tracker()
}

// ── Rendering ──────────────────────────────────────────────────────

/// Render the tracker for the session's current state.
pub fn render_current_tracker() -> String {
    with_state(render_tracker)
}

pub fn render_tracker(state: &GameState) -> String {
    render_tracker_with_notice(state, None)
}

/// Render the tracker, optionally topped with a notice for a rejected request.
pub fn render_tracker_with_notice(state: &GameState, notice: Option<&str>) -> String {
    let mut html = String::with_capacity(32768);

    if let Some(msg) = notice {
        html.push_str(&format!(
            r#"<div class="text-center text-sm text-red-700 mb-2">{}</div>"#,
            escape_html(msg)
        ));
    }

    html.push_str(&render_score(state));
    html.push_str(&render_court_panel(state));
    html.push_str(r#"<hr class="my-4">"#);
    html.push_str(&render_bench(state));
    html.push_str(r#"<hr class="my-4">"#);
    html.push_str(&render_box_score(state));
    html.push_str(&render_reset_button());
    html
}

/// Render the title and team score header.
pub fn render_score(state: &GameState) -> String {
    format!(
        r#"<div id="score"><h1 class="text-3xl font-bold">&#x1F3C0; Basket Pro Tracker</h1><h2 class="text-xl font-bold">SCORE ÉQUIPE : {}</h2></div>"#,
        state.team_score()
    )
}

fn render_reset_button() -> String {
    r##"<button type="button" class="mt-4 bg-white border border-red-400 text-red-700 hover:bg-red-50 rounded py-2 px-4" hx-post="/api/game/reset" hx-target="#tracker" hx-swap="innerHTML">&#x1F5D1;&#xFE0F; Réinitialiser le match</button>"##
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::with_state_mut;
    use crate::game::stats::{Category, Outcome};

    #[test]
    fn score_header_reflects_counters() {
        let mut state = GameState::new();
        state.record("Yehya", Category::ThreePoint, Outcome::Made).unwrap();
        state.record("Keran", Category::ThreePoint, Outcome::Made).unwrap();
        state.record("Lucas", Category::TwoPoint, Outcome::Made).unwrap();
        assert!(render_score(&state).contains("SCORE ÉQUIPE : 8"));
    }

    #[test]
    fn tracker_contains_every_section() {
        let html = render_tracker(&GameState::new());
        assert!(html.contains("SCORE ÉQUIPE : 0"));
        assert!(html.contains("id=\"court\""));
        assert!(html.contains("id=\"bench\""));
        assert!(html.contains("id=\"box-score\""));
        assert!(html.contains("Réinitialiser le match"));
        assert!(!html.contains("text-red-700 mb-2"));
    }

    #[test]
    fn notice_is_escaped() {
        let html = render_tracker_with_notice(&GameState::new(), Some("Unknown player: <x>"));
        assert!(html.contains("Unknown player: &lt;x&gt;"));
    }

    #[test]
    fn reset_post_clears_state() {
        reset_state();
        with_state_mut(|s| {
            s.toggle_court("Franck").unwrap();
            s.record("Franck", Category::TwoPoint, Outcome::Made).unwrap();
            s.record("Antoine", Category::Foul, Outcome::Occurred).unwrap();
        });
        let html = handle_reset_post("");
        assert!(html.contains("SCORE ÉQUIPE : 0"));
        assert_eq!(html.matches("Emplacement vide").count(), 5);
        with_state(|s| {
            assert_eq!(*s, GameState::new());
            assert!(s.box_score().iter().all(|r| r.points == 0));
        });
        reset_state();
    }

    #[test]
    fn state_json_snapshot() {
        reset_state();
        with_state_mut(|s| s.toggle_court("Ronice")).unwrap();
        let json = handle_state_get("");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["lineup"][0], "Ronice");
        assert_eq!(value["stats"]["Ronice"]["fouls"], 0);
        assert_eq!(value["stats"].as_object().map(|m| m.len()), Some(13));
        reset_state();
    }

    #[test]
    fn score_get_reads_session() {
        reset_state();
        with_state_mut(|s| s.record("Jobin", Category::FreeThrow, Outcome::Made)).unwrap();
        assert!(handle_score_get("").contains("SCORE ÉQUIPE : 1"));
        reset_state();
    }
}
