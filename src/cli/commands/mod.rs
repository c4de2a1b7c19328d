//! Command implementations

mod challenges;
mod context;
mod leaderboard;
mod status;
mod submit;
mod tasks;

pub use challenges::challenges;
pub use leaderboard::leaderboard;
pub use status::status;
pub use submit::submit;
pub use tasks::tasks;
