pub mod api;
pub mod identity;
pub mod session;
pub mod sync;
