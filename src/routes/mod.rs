//! Route handlers. Each returns an HTML fragment (or JSON for the snapshot
//! endpoints) for the UI host to swap into the page.

pub mod box_score;
pub mod court;
pub mod game;
pub mod stats;
pub mod util;
