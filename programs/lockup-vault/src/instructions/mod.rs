pub mod admin;
pub mod users;

pub use admin::*;
pub use users::*;
