pub mod register_user;
pub mod verify_user_email;
