mod account_error;
mod register_user;
mod verify_email;

pub use register_user::*;
pub use verify_email::*;
