pub mod browse;
pub mod search;
pub mod submit;

pub use browse::BrowseRequestsPage;
pub use submit::SubmitRequestPage;
