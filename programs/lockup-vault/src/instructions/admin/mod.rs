pub mod configure_vault;
pub mod initialize;
pub mod penalty_pool;
pub mod reward_budget;

pub use configure_vault::*;
pub use initialize::*;
pub use penalty_pool::*;
pub use reward_budget::*;
