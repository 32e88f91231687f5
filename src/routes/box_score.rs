//! `/api/boxscore` route: the full per-player table, every roster player in
//! roster order whether on court or not.

use crate::game::box_score::BoxScoreRow;
use crate::game::state::{with_state, GameState};
use crate::routes::util::{escape_html, get_param, parse_query};

const COLUMNS: [&str; 14] = [
    "N°", "Joueur", "Pts", "FG (M/A)", "FG%", "2P (M/A)", "3P (M/A)", "LF (M/A)", "REB OFF",
    "REB DEF", "REB TOT", "AST", "TO", "FTS",
];

// ── GET /api/boxscore ──────────────────────────────────────────────

/// Handle GET /api/boxscore
/// Returns the HTML table, or the rows as JSON with `?format=json`.
pub fn handle_box_score_get(query: &str) -> String {
    let params = parse_query(query);
    if get_param(&params, "format") == Some("json") {
        return with_state(|s| {
            serde_json::to_string(&s.box_score()).unwrap_or_else(|_| "[]".to_string())
        });
    }
    with_state(render_box_score)
}

/// Render the box score table.
pub fn render_box_score(state: &GameState) -> String {
    let mut html = String::with_capacity(8192);
    html.push_str(r#"<div id="box-score">"#);
    html.push_str(r#"<p class="text-xl font-bold mb-2">&#x1F4CA; Box Score Complet</p>"#);
    html.push_str(r#"<table class="w-full text-sm text-center border-collapse">"#);

    html.push_str(r#"<thead><tr class="border-b-2 border-slate-800">"#);
    for col in COLUMNS {
        html.push_str(&format!(r#"<th class="px-2 py-1">{}</th>"#, col));
    }
    html.push_str("</tr></thead><tbody>");

    for row in state.box_score() {
        html.push_str(&render_row(&row));
    }

    html.push_str("</tbody></table></div>");
    html
}

fn render_row(row: &BoxScoreRow) -> String {
    let cells = [
        row.number.to_string(),
        escape_html(row.name),
        row.points.to_string(),
        row.fg_display(),
        row.fg_pct_display(),
        row.two_pt_display(),
        row.three_pt_display(),
        row.ft_display(),
        row.reb_off.to_string(),
        row.reb_def.to_string(),
        row.reb_total.to_string(),
        row.assists.to_string(),
        row.turnovers.to_string(),
        row.fouls.to_string(),
    ];
    let mut html = String::from(r#"<tr class="border-b border-slate-200">"#);
    for cell in cells {
        html.push_str(&format!(r#"<td class="px-2 py-1">{}</td>"#, cell));
    }
    html.push_str("</tr>");
    html
}
