pub mod contact;
pub mod request;
