//! `/api/court` and `/api/bench` routes: the five on-court slots with their
//! stat buttons, and the bench players waiting to enter.

use crate::game::state::{with_state, with_state_mut, GameState};
use crate::game::stats::{Category, Outcome, StatLine};
use crate::roster::{Player, LINEUP_CAPACITY};
use crate::routes::game::{render_current_tracker, render_tracker_with_notice};
use crate::routes::util::{
    escape_html, get_param, hx_button, hx_vals, parse_form_body,
};

const MADE_CLASS: &str = "bg-green-100 text-green-800 border border-green-300 rounded px-2 py-1 text-sm";
const MISS_CLASS: &str = "bg-red-100 text-red-800 border border-red-300 rounded px-2 py-1 text-sm";
const COUNTER_CLASS: &str = "bg-slate-100 text-slate-800 border border-slate-300 rounded px-2 py-1 text-sm";
const EXIT_CLASS: &str = "w-full bg-blue-700 hover:bg-blue-800 text-white font-bold rounded py-1 mt-2";
const BENCH_CLASS: &str = "w-full bg-white border border-slate-300 hover:bg-slate-100 rounded py-1 text-sm";

// ── GET /api/court ─────────────────────────────────────────────────

/// Handle GET /api/court
pub fn handle_court_get(_query: &str) -> String {
    with_state(render_court_panel)
}

// ── GET /api/bench ─────────────────────────────────────────────────

/// Handle GET /api/bench
pub fn handle_bench_get(_query: &str) -> String {
    with_state(render_bench)
}

// ── POST /api/court/toggle ─────────────────────────────────────────

/// Handle POST /api/court/toggle
/// Body: player={name}
/// Sends the player to the bench if on court, otherwise onto the court when
/// a slot is free. Returns the re-rendered tracker.
pub fn handle_toggle_post(body: &str) -> String {
    let params = parse_form_body(body);
    let player = match get_param(&params, "player") {
        Some(p) if !p.is_empty() => p,
        _ => {
            log::warn!("court toggle without player");
            return with_state(|s| render_tracker_with_notice(s, Some("Missing player parameter")));
        }
    };

    match with_state_mut(|s| s.toggle_court(player)) {
        Ok(_) => render_current_tracker(),
        Err(e) => {
            log::warn!("court toggle rejected: {}", e);
            with_state(|s| render_tracker_with_notice(s, Some(&e.to_string())))
        }
    }
}

// ── Rendering ──────────────────────────────────────────────────────

/// Render the five court slots. Filled slots follow lineup order; the rest
/// show an empty placeholder.
pub fn render_court_panel(state: &GameState) -> String {
    let lineup = state.lineup();
    let mut html = String::with_capacity(8192);
    html.push_str(r#"<div id="court" class="grid grid-cols-5 gap-3">"#);
    for slot in 0..LINEUP_CAPACITY {
        html.push_str(
            r#"<div class="bg-white p-4 border-4 border-slate-100 rounded-2xl shadow-sm">"#,
        );
        match lineup.get(slot) {
            Some(player) => {
                let line = state.stat_line(player.name).copied().unwrap_or_default();
                html.push_str(&render_player_slot(player, &line));
            }
            None => {
                html.push_str(
                    r#"<div class="text-center text-sm text-blue-800 bg-blue-50 rounded p-3">Emplacement vide</div>"#,
                );
            }
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

fn render_player_slot(player: &Player, line: &StatLine) -> String {
    let name = player.name;
    let mut html = String::with_capacity(2048);

    html.push_str(&format!(
        r#"<div class="text-center text-lg text-slate-800 mb-2 border-b-2 border-slate-800"><b>#{} {}</b></div>"#,
        player.number,
        escape_html(name)
    ));

    // Shooting: make / miss pairs
    for category in Category::SHOOTING {
        html.push_str(r#"<div class="grid grid-cols-3 gap-1 mb-1">"#);
        html.push_str(&hx_button(
            &format!("&#x2705; {}", category.label()),
            "/api/stat",
            &[
                ("player", name),
                ("stat", category.as_str()),
                ("outcome", Outcome::Made.as_str()),
            ],
            &format!("col-span-2 {}", MADE_CLASS),
        ));
        html.push_str(&hx_button(
            "&#x274C;",
            "/api/stat",
            &[
                ("player", name),
                ("stat", category.as_str()),
                ("outcome", Outcome::Missed.as_str()),
            ],
            MISS_CLASS,
        ));
        html.push_str("</div>");
    }

    // Rebounds, labelled with live counts
    html.push_str(r#"<p class="font-bold text-sm mt-2">Rebonds</p>"#);
    html.push_str(r#"<div class="grid grid-cols-2 gap-1">"#);
    for category in [Category::ReboundOff, Category::ReboundDef] {
        let count = line.count(category).unwrap_or(0);
        html.push_str(&counter_button(
            name,
            category,
            &format!("{}:{}", category.label(), count),
            None,
        ));
    }
    html.push_str("</div>");

    html.push_str(r#"<p class="font-bold text-sm mt-2">Jeu</p>"#);
    html.push_str(r#"<div class="grid grid-cols-3 gap-1">"#);
    for (category, help) in [
        (Category::Assist, "Assists"),
        (Category::Turnover, "Balles Perdues"),
        (Category::Foul, "Fautes"),
    ] {
        html.push_str(&counter_button(name, category, category.label(), Some(help)));
    }
    html.push_str("</div>");

    html.push_str(&hx_button(
        "&#x1F504; SORTIR",
        "/api/court/toggle",
        &[("player", name)],
        EXIT_CLASS,
    ));

    html
}

fn counter_button(player: &str, category: Category, label: &str, help: Option<&str>) -> String {
    let title = help
        .map(|t| format!(r#" title="{}""#, t))
        .unwrap_or_default();
    format!(
        r##"<button type="button"{} class="{}" hx-post="/api/stat" hx-vals="{}" hx-target="#tracker" hx-swap="innerHTML">{}</button>"##,
        title,
        COUNTER_CLASS,
        hx_vals(&[("player", player), ("stat", category.as_str())]),
        label
    )
}

/// Render the bench: every roster player not on court, in roster order.
pub fn render_bench(state: &GameState) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str(r#"<div id="bench">"#);
    html.push_str(r#"<p class="text-xl font-bold mb-2">&#x1FA91; Banc (Entrée)</p>"#);
    if state.lineup_is_full() {
        html.push_str(
            r#"<p class="text-xs text-slate-500 mb-2">Terrain complet : faites sortir un joueur pour en faire entrer un autre.</p>"#,
        );
    }
    html.push_str(r#"<div class="grid grid-cols-7 gap-2">"#);
    for player in state.bench() {
        html.push_str(&hx_button(
            &format!("{} {}", player.number, escape_html(player.name)),
            "/api/court/toggle",
            &[("player", player.name)],
            BENCH_CLASS,
        ));
    }
    html.push_str("</div></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::reset_state;

    #[test]
    fn empty_court_shows_five_placeholders() {
        let html = render_court_panel(&GameState::new());
        assert_eq!(html.matches("Emplacement vide").count(), 5);
    }

    #[test]
    fn filled_slot_has_stat_buttons() {
        let mut state = GameState::new();
        state.toggle_court("Timéo").unwrap();
        let html = render_court_panel(&state);
        assert!(html.contains("#4 Timéo"));
        assert!(html.contains("2pts"));
        assert!(html.contains("3pts"));
        assert!(html.contains("LF"));
        assert!(html.contains("SORTIR"));
        assert!(html.contains("Balles Perdues"));
        assert_eq!(html.matches("Emplacement vide").count(), 4);
    }

    #[test]
    fn rebound_buttons_show_live_counts() {
        let mut state = GameState::new();
        state.toggle_court("Keran").unwrap();
        state.record("Keran", Category::ReboundDef, Outcome::Occurred).unwrap();
        state.record("Keran", Category::ReboundDef, Outcome::Occurred).unwrap();
        let html = render_court_panel(&state);
        assert!(html.contains("OFF:0"));
        assert!(html.contains("DEF:2"));
    }

    #[test]
    fn apostrophe_names_are_escaped_in_controls() {
        let mut state = GameState::new();
        state.toggle_court("M'Baye").unwrap();
        let html = render_court_panel(&state);
        assert!(html.contains("M&#39;Baye"));
        assert!(!html.contains("M'Baye"));
    }

    #[test]
    fn bench_lists_players_not_on_court() {
        let mut state = GameState::new();
        state.toggle_court("Yehya").unwrap();
        let html = render_bench(&state);
        assert!(!html.contains("5 Yehya"));
        assert!(html.contains("4 Timéo"));
        assert!(html.contains("16 Antoine"));
        assert_eq!(html.matches("<button").count(), 12);
    }

    #[test]
    fn toggle_post_moves_player_on_and_off() {
        reset_state();
        let html = handle_toggle_post("player=Tim%C3%A9o");
        assert!(html.contains("#4 Timéo"));
        assert!(with_state(|s| s.is_on_court("Timéo")));

        handle_toggle_post("player=Tim%C3%A9o");
        assert!(!with_state(|s| s.is_on_court("Timéo")));
        reset_state();
    }

    #[test]
    fn toggle_post_unknown_player_shows_notice() {
        reset_state();
        let html = handle_toggle_post("player=Ghost");
        assert!(html.contains("Unknown player: Ghost"));
        assert!(with_state(|s| s.lineup().is_empty()));
        reset_state();
    }

    #[test]
    fn toggle_post_missing_player() {
        reset_state();
        let html = handle_toggle_post("");
        assert!(html.contains("Missing player parameter"));
        assert!(html.contains("id=\"court\""));
        assert!(html.contains("SCORE ÉQUIPE : 0"));
        reset_state();
    }

    #[test]
    fn sixth_entrant_via_route_is_ignored() {
        reset_state();
        for name in ["Yehya", "Yannis", "Ronice", "Keran", "Jobin", "Lucas"] {
            handle_toggle_post(&format!("player={}", name));
        }
        assert_eq!(with_state(|s| s.lineup().len()), 5);
        assert!(!with_state(|s| s.is_on_court("Lucas")));
        reset_state();
    }
}
