pub mod staker_account;
pub mod vault_state;

pub use staker_account::*;
pub use vault_state::*;
