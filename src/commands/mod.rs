//! Command implementations

mod leaderboard;
mod serve;
mod status;

pub use leaderboard::leaderboard;
pub use serve::serve;
pub use status::status;
