pub mod deposit;
pub mod early_withdraw;
pub mod extend_lock;
pub mod withdraw;

pub use deposit::*;
pub use early_withdraw::*;
pub use extend_lock::*;
pub use withdraw::*;
