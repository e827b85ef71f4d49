pub mod forgot_password;
pub mod home;
pub mod login;
pub mod register;
