//! Sign-in controller for the storefront login page.
//!
//! [`LoginFlow`] owns the page's transient UI state, calls the identity
//! provider once per attempt and decides where the user lands afterwards.
//! Everything it touches outside itself comes in through the
//! [`AuthProvider`], [`Navigator`] and [`KeyValueStore`] capabilities, so the
//! browser pieces can be swapped for scripted doubles in tests.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::types::LoginResult;

/// Storage key written by the signup flow and consumed on the first sign-in.
pub const FIRST_LOGIN_KEY: &str = "first_login";

/// Shown whenever the provider gives no usable message.
pub const DEFAULT_LOGIN_ERROR: &str = "Error al iniciar sesión con Google";

const FIRST_LOGIN_MARKER: &str = "true";

/// The provider call itself failed; the detail never reaches the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("auth request failed: {0}")]
    Transport(String),
    #[error("unreadable auth response: {0}")]
    Decode(String),
}

/// Performs the Google sign-in handshake.
#[allow(async_fn_in_trait)]
pub trait AuthProvider {
    async fn login_with_google(&self) -> Result<LoginResult, AuthError>;
}

/// Client-side page transitions. Fire-and-forget.
pub trait Navigator {
    fn go_to(&self, path: &str);
}

/// Device-scoped persistent string storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn delete(&self, key: &str);
}

impl<T: AuthProvider + ?Sized> AuthProvider for Rc<T> {
    async fn login_with_google(&self) -> Result<LoginResult, AuthError> {
        (**self).login_with_google().await
    }
}

impl<T: Navigator + ?Sized> Navigator for Rc<T> {
    fn go_to(&self, path: &str) {
        (**self).go_to(path);
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn delete(&self, key: &str) {
        (**self).delete(key);
    }
}

/// Where a successful sign-in lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Profile,
    Home,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Profile => "/profile",
            Destination::Home => "/",
        }
    }
}

/// What the login page renders: spinner and disabled button, or an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub loading: bool,
    pub error_message: String,
}

/// How a single attempt ended. Informational; failures are already on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Navigated(Destination),
    Failed(String),
}

type Observer = Box<dyn Fn(&UiState)>;

/// Drives sign-in attempts for one mounted login page.
pub struct LoginFlow<A, N, S> {
    auth: A,
    navigator: N,
    store: S,
    state: RefCell<UiState>,
    observer: Option<Observer>,
}

impl<A, N, S> LoginFlow<A, N, S>
where
    A: AuthProvider,
    N: Navigator,
    S: KeyValueStore,
{
    pub fn new(auth: A, navigator: N, store: S) -> Self {
        Self {
            auth,
            navigator,
            store,
            state: RefCell::new(UiState::default()),
            observer: None,
        }
    }

    /// Registers the single observer that receives every state snapshot.
    pub fn with_observer(mut self, observer: impl Fn(&UiState) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// Runs one sign-in attempt to completion. Never fails: provider
    /// rejections and raised errors end up in `error_message`.
    pub async fn attempt_login(&self) -> Outcome {
        self.update(|state| {
            state.loading = true;
            state.error_message.clear();
        });
        log::debug!("starting Google sign-in");

        let outcome = match self.auth.login_with_google().await {
            Ok(result) if result.success => {
                let destination = self.destination_after_login();
                log::info!("sign-in succeeded, redirecting to {}", destination.path());
                self.navigator.go_to(destination.path());
                Outcome::Navigated(destination)
            }
            Ok(result) => Outcome::Failed(
                result
                    .error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| DEFAULT_LOGIN_ERROR.to_string()),
            ),
            Err(e) => {
                log::warn!("sign-in raised: {e}");
                Outcome::Failed(DEFAULT_LOGIN_ERROR.to_string())
            }
        };

        self.update(|state| {
            if let Outcome::Failed(message) = &outcome {
                state.error_message.clone_from(message);
            }
            state.loading = false;
        });
        outcome
    }

    // The first-login marker is single use.
    fn destination_after_login(&self) -> Destination {
        match self.store.get(FIRST_LOGIN_KEY) {
            Some(value) if value == FIRST_LOGIN_MARKER => {
                self.store.delete(FIRST_LOGIN_KEY);
                Destination::Profile
            }
            _ => Destination::Home,
        }
    }

    fn update(&self, f: impl FnOnce(&mut UiState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            f(&mut state);
            state.clone()
        };
        if let Some(observer) = &self.observer {
            observer(&snapshot);
        }
    }
}
