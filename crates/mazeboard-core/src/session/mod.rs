//! Level run bookkeeping.
//!
//! Tracks which level is being played, times it, and hands the elapsed time
//! to the [`ScoreStore`](crate::score::ScoreStore) when the exit is reached.
//! Rendering, maze loading and exit detection stay with the caller.

mod run;
mod state;

pub use run::*;
pub use state::*;
