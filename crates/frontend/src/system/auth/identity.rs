//! Google sign-in through the Firebase web SDK.

use async_trait::async_trait;
use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::shared::config::FirebaseConfig;

#[wasm_bindgen(module = "/js/identity.js")]
extern "C" {
    #[wasm_bindgen(js_name = initIdentity, catch)]
    fn init_identity(config: JsValue, on_change: &Closure<dyn FnMut(JsValue)>) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = signInWithGoogle)]
    fn sign_in_with_google() -> js_sys::Promise;

    #[wasm_bindgen(js_name = signOutIdentity)]
    fn sign_out_identity() -> js_sys::Promise;
}

/// Identity-provider session as seen by the app
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdentityStatus {
    Unauthenticated,
    /// Provider has not reported yet (page load).
    Pending,
    Authenticated { email: String },
}

impl IdentityStatus {
    fn from_email(email: Option<String>) -> Self {
        match email.filter(|e| !e.is_empty()) {
            Some(email) => IdentityStatus::Authenticated { email },
            None => IdentityStatus::Unauthenticated,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Sign-in was cancelled")]
    Cancelled,

    #[error("Identity provider error: {0}")]
    Provider(String),
}

impl IdentityError {
    fn from_js(err: JsValue) -> Self {
        let field = |name: &str| {
            js_sys::Reflect::get(&err, &JsValue::from_str(name))
                .ok()
                .and_then(|v| v.as_string())
        };
        match field("code").as_deref() {
            Some("auth/popup-closed-by-user") | Some("auth/cancelled-popup-request") => {
                IdentityError::Cancelled
            }
            code => IdentityError::Provider(
                field("message")
                    .or_else(|| code.map(str::to_string))
                    .unwrap_or_else(|| format!("{:?}", err)),
            ),
        }
    }
}

/// Identity provider operations used by the app
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Open the sign-in popup; resolves to the provider's ID token.
    async fn sign_in(&self) -> Result<String, IdentityError>;

    /// End the provider session. Never redirects.
    async fn sign_out(&self) -> Result<(), IdentityError>;
}

/// Firebase-backed provider. `status` follows the SDK's auth-state
/// listener.
#[derive(Clone, Copy)]
pub struct FirebaseIdentity {
    pub status: ReadSignal<IdentityStatus>,
}

impl FirebaseIdentity {
    pub fn init(config: &FirebaseConfig) -> Self {
        let (status, set_status) = signal(IdentityStatus::Pending);

        let listener = Closure::<dyn FnMut(JsValue)>::new(move |email: JsValue| {
            let next = IdentityStatus::from_email(email.as_string());
            log::debug!("Identity status changed: authenticated={}", matches!(next, IdentityStatus::Authenticated { .. }));
            set_status.try_set(next);
        });

        let started = serde_wasm_bindgen::to_value(config)
            .map_err(|e| format!("{}", e))
            .and_then(|cfg| init_identity(cfg, &listener).map_err(|e| format!("{:?}", e)));
        match started {
            // The SDK keeps calling the listener for the lifetime of the page.
            Ok(()) => listener.forget(),
            Err(e) => {
                log::error!("Identity provider failed to initialise: {}", e);
                set_status.set(IdentityStatus::Unauthenticated);
            }
        }

        Self { status }
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FirebaseIdentity {
    async fn sign_in(&self) -> Result<String, IdentityError> {
        let token = JsFuture::from(sign_in_with_google())
            .await
            .map_err(IdentityError::from_js)?;
        token
            .as_string()
            .ok_or_else(|| IdentityError::Provider("ID token is not a string".into()))
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        JsFuture::from(sign_out_identity())
            .await
            .map(|_| ())
            .map_err(IdentityError::from_js)
    }
}

pub fn use_identity() -> FirebaseIdentity {
    use_context::<FirebaseIdentity>().expect("FirebaseIdentity not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_listener_value() {
        assert_eq!(
            IdentityStatus::from_email(Some("ada@example.com".into())),
            IdentityStatus::Authenticated {
                email: "ada@example.com".into()
            }
        );
        assert_eq!(IdentityStatus::from_email(None), IdentityStatus::Unauthenticated);
        assert_eq!(
            IdentityStatus::from_email(Some(String::new())),
            IdentityStatus::Unauthenticated
        );
    }
}
