pub mod login_flow;
mod types;

pub use login_flow::{
    AuthError, AuthProvider, Destination, KeyValueStore, LoginFlow, Navigator, Outcome, UiState,
    DEFAULT_LOGIN_ERROR, FIRST_LOGIN_KEY,
};
pub use types::*;
