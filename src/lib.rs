//! Courtside in-browser WASM server: live basketball stat tracking.
//!
//! Exports `handle_request(method, path, query, body)` for the Service Worker
//! bridge to call. Uses `matchit` for URL routing. Each request is applied to
//! the session's game state before the next one is read, and every mutation
//! answers with a full re-render of the tracker.

use wasm_bindgen::prelude::*;

pub mod game;
pub mod roster;
pub mod routes;

/// Process an HTTP-like request and return an HTML fragment.
///
/// Called from JavaScript (Web Worker) via wasm-bindgen.
///
/// # Arguments
/// * `method`: HTTP method ("GET" or "POST")
/// * `path`: URL path (e.g., "/api/stat")
/// * `query`: Query string (e.g., "?format=json")
/// * `body`: Request body (POST form data). Empty string for GET requests.
///
/// # Returns
/// An HTML string fragment suitable for HTMX to swap into the DOM, or JSON
/// for the snapshot endpoints.
#[wasm_bindgen]
pub fn handle_request(method: &str, path: &str, query: &str, body: &str) -> String {
    let mut router = matchit::Router::new();

    router.insert("/api/tracker", "tracker").ok();
    router.insert("/api/score", "score").ok();
    router.insert("/api/court", "court").ok();
    router.insert("/api/court/toggle", "court_toggle").ok();
    router.insert("/api/bench", "bench").ok();
    router.insert("/api/boxscore", "box_score").ok();
    router.insert("/api/stat", "stat").ok();
    router.insert("/api/game/state", "game_state").ok();
    router.insert("/api/game/reset", "game_reset").ok();

    match router.at(path) {
        Ok(matched) => match (*matched.value, method) {
            ("tracker", "GET") => routes::game::handle_tracker_get(query),
            ("score", "GET") => routes::game::handle_score_get(query),
            ("court", "GET") => routes::court::handle_court_get(query),
            ("bench", "GET") => routes::court::handle_bench_get(query),
            ("box_score", "GET") => routes::box_score::handle_box_score_get(query),
            ("game_state", "GET") => routes::game::handle_state_get(query),

            ("stat", "POST") => routes::stats::handle_stat_post(body),
            ("court_toggle", "POST") => routes::court::handle_toggle_post(body),
            ("game_reset", "POST") => routes::game::handle_reset_post(body),

            _ => {
                log::warn!("{} {} not allowed", method, path);
                method_not_allowed()
            }
        },
        Err(_) => {
            log::warn!("no route for {}", path);
            not_found()
        }
    }
}

fn not_found() -> String {
    r#"<span class="text-red-700">404 — route not found</span>"#.to_string()
}

fn method_not_allowed() -> String {
    r#"<span class="text-red-700">405 — method not allowed</span>"#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::{reset_state, with_state};

    #[test]
    fn returns_404_for_unknown_route() {
        let html = handle_request("GET", "/api/nonexistent", "", "");
        assert!(html.contains("404"));
    }

    #[test]
    fn returns_405_for_wrong_method() {
        assert!(handle_request("POST", "/api/boxscore", "", "").contains("405"));
        assert!(handle_request("GET", "/api/stat", "", "").contains("405"));
        assert!(handle_request("GET", "/api/game/reset", "", "").contains("405"));
    }

    #[test]
    fn routes_tracker() {
        reset_state();
        let html = handle_request("GET", "/api/tracker", "", "");
        assert!(html.contains("Basket Pro Tracker"));
        assert!(html.contains("Box Score Complet"));
    }

    #[test]
    fn full_game_flow() {
        reset_state();
        for name in ["Tim%C3%A9o", "Yehya", "Keran"] {
            handle_request("POST", "/api/court/toggle", "", &format!("player={}", name));
        }
        handle_request("POST", "/api/stat", "", "player=Tim%C3%A9o&stat=two_pt&outcome=made");
        handle_request("POST", "/api/stat", "", "player=Tim%C3%A9o&stat=three_pt&outcome=missed");
        handle_request("POST", "/api/stat", "", "player=Tim%C3%A9o&stat=free_throw&outcome=made");
        handle_request("POST", "/api/stat", "", "player=Yehya&stat=three_pt&outcome=made");
        handle_request("POST", "/api/stat", "", "player=Keran&stat=reb_def");

        let score = handle_request("GET", "/api/score", "", "");
        assert!(score.contains("SCORE ÉQUIPE : 6"));

        let court = handle_request("GET", "/api/court", "", "");
        assert!(court.contains("DEF:1"));
        assert_eq!(court.matches("Emplacement vide").count(), 2);

        let bench = handle_request("GET", "/api/bench", "", "");
        assert!(!bench.contains("4 Timéo"));

        let json = handle_request("GET", "/api/boxscore", "?format=json", "");
        let rows: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(rows[0]["points"], 3);
        assert_eq!(rows[0]["fg_pct"], 50.0);

        let html = handle_request("POST", "/api/game/reset", "", "");
        assert!(html.contains("SCORE ÉQUIPE : 0"));
        assert!(with_state(|s| s.lineup().is_empty()));
        reset_state();
    }

    #[test]
    fn routes_game_state_get() {
        reset_state();
        let json = handle_request("GET", "/api/game/state", "", "");
        assert!(json.contains("stats"));
        assert!(json.contains("lineup"));
    }
}
