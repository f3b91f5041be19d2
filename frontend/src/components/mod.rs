mod error_message;
mod header;
mod loading_spinner;

pub use error_message::ErrorMessage;
pub use header::Header;
pub use loading_spinner::{LoadingSpinner, SpinnerSize};
