//! Game state module: stat counters, on-court lineup and the derived box
//! score. State lives in WASM memory (thread_local) for the lifetime of the
//! Web Worker, i.e. one browser session.

pub mod box_score;
pub mod error;
pub mod lineup;
pub mod state;
pub mod stats;

pub use error::GameError;
