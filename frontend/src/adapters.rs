//! Browser-backed implementations of the login flow's capabilities.

use gloo_net::http::Request;
use gloo_storage::{LocalStorage, Storage};
use shared::{AuthError, AuthProvider, KeyValueStore, LoginResult, Navigator};
use yew_router::navigator::Navigator as RouterHandle;
use yew_router::Routable;

use crate::Route;

/// Asks the storefront API to run the Google handshake.
pub struct HttpAuthProvider {
    endpoint: String,
}

impl HttpAuthProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl AuthProvider for HttpAuthProvider {
    async fn login_with_google(&self) -> Result<LoginResult, AuthError> {
        let resp = Request::post(&self.endpoint)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !resp.ok() {
            log::debug!("{} answered {}", self.endpoint, resp.status());
        }
        // An unreadable body on an error status still counts as a rejection.
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) if resp.ok() => return Err(AuthError::Decode(e.to_string())),
            Err(_) => String::new(),
        };
        LoginResult::from_response(resp.ok(), &body)
    }
}

/// `window.localStorage`, read as raw strings (not JSON).
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::error!("localStorage read of {key} failed: {e:?}");
                None
            }
        }
    }

    fn delete(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

pub struct RouterNavigator {
    handle: Option<RouterHandle>,
}

impl RouterNavigator {
    pub fn new(handle: Option<RouterHandle>) -> Self {
        Self { handle }
    }
}

impl Navigator for RouterNavigator {
    fn go_to(&self, path: &str) {
        let Some(handle) = &self.handle else {
            log::error!("no router in scope, dropping navigation to {path}");
            return;
        };
        handle.push(&Route::recognize(path).unwrap_or(Route::NotFound));
    }
}
