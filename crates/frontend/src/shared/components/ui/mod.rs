pub mod badge;
pub mod button;
pub mod input;
pub mod select;
pub mod spinner;
pub mod textarea;

pub use badge::StatusBadge;
pub use button::SubmitButton;
pub use input::Input;
pub use select::Select;
pub use spinner::Spinner;
pub use textarea::Textarea;
