//! Identity → backend session synchronisation.
//!
//! Watches the identity provider and, once per authenticated identity,
//! trades the provider email for a backend `{user, token}` pair. A failed
//! exchange signs the provider out again; there is no retry.

use std::rc::Rc;

use async_trait::async_trait;
use contracts::system::auth::LoginResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::identity::{use_identity, IdentityProvider, IdentityStatus};
use super::session::{Session, SessionCell, SessionWriter};
use crate::layout::toast_service::use_toasts;
use crate::shared::api_utils::ApiError;

pub const SYNC_FAILURE: &str = "Could not sign you in. Please try again.";

/// Backend side of the exchange
#[async_trait(?Send)]
pub trait AuthGateway {
    async fn exchange(&self, email: &str) -> Result<LoginResponse, ApiError>;
}

/// `POST /auth/login`
pub struct HttpAuthGateway;

#[async_trait(?Send)]
impl AuthGateway for HttpAuthGateway {
    async fn exchange(&self, email: &str) -> Result<LoginResponse, ApiError> {
        api::login(email).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Nothing to do for this observation.
    Skipped,
    /// Provider signed out; store emptied.
    Cleared,
    Synced,
    /// Exchange failed; text for the user.
    Failed(String),
}

pub struct SyncController<G, P> {
    gateway: G,
    provider: P,
}

impl<G: AuthGateway, P: IdentityProvider> SyncController<G, P> {
    pub fn new(gateway: G, provider: P) -> Self {
        Self { gateway, provider }
    }

    /// React to one observation of the provider status.
    pub async fn observe<C: SessionCell>(&self, store: &C, status: &IdentityStatus) -> SyncOutcome {
        let email = match status {
            IdentityStatus::Pending => return SyncOutcome::Skipped,
            IdentityStatus::Unauthenticated => {
                return match store.update_session(|s| s.reset()) {
                    Some(true) => {
                        log::info!("Identity signed out, session cleared");
                        SyncOutcome::Cleared
                    }
                    _ => SyncOutcome::Skipped,
                };
            }
            IdentityStatus::Authenticated { email } => email,
        };

        let Some(attempt) = store.update_session(|s| s.begin_sync(email)).flatten() else {
            return SyncOutcome::Skipped;
        };

        log::info!("Exchanging identity for application session");
        match self.gateway.exchange(email).await {
            Ok(LoginResponse { user, token }) => {
                if store.update_session(|s| s.complete(attempt, Session { user, token })) != Some(true) {
                    log::info!("Discarding session for an identity that is no longer signed in");
                    return SyncOutcome::Skipped;
                }
                log::info!("Session established");
                SyncOutcome::Synced
            }
            Err(e) => {
                log::error!("Sync error: {}", e);
                if store.update_session(|s| s.fail(attempt)) != Some(true) {
                    return SyncOutcome::Skipped;
                }
                if let Err(e) = self.provider.sign_out().await {
                    log::warn!("Sign-out after failed sync did not complete: {}", e);
                }
                SyncOutcome::Failed(e.user_message(SYNC_FAILURE))
            }
        }
    }
}

/// Mount once near the root. Holds the only [`SessionWriter`].
#[component]
pub fn AuthSync(writer: SessionWriter) -> impl IntoView {
    let identity = use_identity();
    let toasts = use_toasts();
    let controller = Rc::new(SyncController::new(HttpAuthGateway, identity));

    Effect::new(move |_| {
        let status = identity.status.get();
        let controller = Rc::clone(&controller);
        spawn_local(async move {
            if let SyncOutcome::Failed(message) = controller.observe(&writer, &status).await {
                toasts.error(message);
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::bearer;
    use crate::system::auth::identity::IdentityError;
    use crate::system::auth::session::{SessionState, SyncPhase};
    use contracts::system::auth::UserProfile;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    impl SessionCell for RefCell<SessionState> {
        fn update_session<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
            Some(f(&mut self.borrow_mut()))
        }
    }

    struct FakeGateway {
        calls: Cell<u32>,
        reply: RefCell<Result<LoginResponse, ApiError>>,
    }

    impl FakeGateway {
        fn ok(id: &str, token: &str) -> Self {
            Self {
                calls: Cell::new(0),
                reply: RefCell::new(Ok(LoginResponse {
                    user: UserProfile {
                        id: id.into(),
                        ..Default::default()
                    },
                    token: token.into(),
                })),
            }
        }

        fn err(e: ApiError) -> Self {
            Self {
                calls: Cell::new(0),
                reply: RefCell::new(Err(e)),
            }
        }
    }

    #[async_trait(?Send)]
    impl AuthGateway for &FakeGateway {
        async fn exchange(&self, _email: &str) -> Result<LoginResponse, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.reply.borrow().clone()
        }
    }

    /// Gateway whose answer arrives only when the test sends it.
    struct HeldGateway {
        pending: RefCell<Option<oneshot::Receiver<Result<LoginResponse, ApiError>>>>,
    }

    impl HeldGateway {
        fn new() -> (Self, oneshot::Sender<Result<LoginResponse, ApiError>>) {
            let (tx, rx) = oneshot::channel();
            let gateway = Self {
                pending: RefCell::new(Some(rx)),
            };
            (gateway, tx)
        }
    }

    #[async_trait(?Send)]
    impl AuthGateway for &HeldGateway {
        async fn exchange(&self, _email: &str) -> Result<LoginResponse, ApiError> {
            let pending = self.pending.borrow_mut().take();
            match pending {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(ApiError::Network("reply dropped".into()))),
                None => Err(ApiError::Network("no reply queued".into())),
            }
        }
    }

    fn login_response(id: &str, token: &str) -> LoginResponse {
        LoginResponse {
            user: UserProfile {
                id: id.into(),
                ..Default::default()
            },
            token: token.into(),
        }
    }

    #[derive(Default)]
    struct FakeProvider {
        sign_outs: Cell<u32>,
    }

    #[async_trait(?Send)]
    impl IdentityProvider for &FakeProvider {
        async fn sign_in(&self) -> Result<String, IdentityError> {
            Ok("id-token".into())
        }

        async fn sign_out(&self) -> Result<(), IdentityError> {
            self.sign_outs.set(self.sign_outs.get() + 1);
            Ok(())
        }
    }

    fn authed(email: &str) -> IdentityStatus {
        IdentityStatus::Authenticated {
            email: email.into(),
        }
    }

    #[test]
    fn repeated_observations_exchange_once() {
        let gateway = FakeGateway::ok("u1", "t1");
        let provider = FakeProvider::default();
        let sync = SyncController::new(&gateway, &provider);
        let store = RefCell::new(SessionState::default());

        let first = block_on(sync.observe(&store, &authed("ada@example.com")));
        assert_eq!(first, SyncOutcome::Synced);
        for _ in 0..5 {
            let again = block_on(sync.observe(&store, &authed("ada@example.com")));
            assert_eq!(again, SyncOutcome::Skipped);
        }
        assert_eq!(gateway.calls.get(), 1);
    }

    #[test]
    fn observation_while_syncing_is_ignored() {
        let gateway = FakeGateway::ok("u1", "t1");
        let provider = FakeProvider::default();
        let sync = SyncController::new(&gateway, &provider);
        let store = RefCell::new(SessionState::default());
        assert!(store.borrow_mut().begin_sync("ada@example.com").is_some());

        let outcome = block_on(sync.observe(&store, &authed("ada@example.com")));
        assert_eq!(outcome, SyncOutcome::Skipped);
        assert_eq!(gateway.calls.get(), 0);
        assert_eq!(store.borrow().phase(), SyncPhase::Syncing);
    }

    #[test]
    fn successful_exchange_fills_store_and_bearer() {
        let gateway = FakeGateway::ok("u1", "t1");
        let provider = FakeProvider::default();
        let sync = SyncController::new(&gateway, &provider);
        let store = RefCell::new(SessionState::default());

        block_on(sync.observe(&store, &authed("ada@example.com")));

        let state = store.borrow();
        let session = state.session().expect("session stored");
        assert_eq!(session.user.id, "u1");
        assert_eq!(session.token, "t1");
        assert_eq!(state.phase(), SyncPhase::Synced);
        assert_eq!(bearer(state.token()), "Bearer t1");
        assert_eq!(provider.sign_outs.get(), 0);
    }

    #[test]
    fn failed_exchange_clears_store_and_signs_out() {
        let gateway = FakeGateway::err(ApiError::Status {
            status: 404,
            message: Some("No account for this email".into()),
        });
        let provider = FakeProvider::default();
        let sync = SyncController::new(&gateway, &provider);
        let store = RefCell::new(SessionState::default());

        let outcome = block_on(sync.observe(&store, &authed("ada@example.com")));

        assert_eq!(
            outcome,
            SyncOutcome::Failed("No account for this email".into())
        );
        assert!(store.borrow().session().is_none());
        assert_eq!(store.borrow().phase(), SyncPhase::Failed);
        assert_eq!(provider.sign_outs.get(), 1);

        // no retry on later renders
        block_on(sync.observe(&store, &authed("ada@example.com")));
        assert_eq!(gateway.calls.get(), 1);
    }

    #[test]
    fn failure_without_message_uses_fallback() {
        let gateway = FakeGateway::err(ApiError::Network("offline".into()));
        let provider = FakeProvider::default();
        let sync = SyncController::new(&gateway, &provider);
        let store = RefCell::new(SessionState::default());

        let outcome = block_on(sync.observe(&store, &authed("ada@example.com")));
        assert_eq!(outcome, SyncOutcome::Failed(SYNC_FAILURE.into()));
    }

    #[test]
    fn sign_out_then_sign_in_exchanges_again() {
        let gateway = FakeGateway::ok("u1", "t1");
        let provider = FakeProvider::default();
        let sync = SyncController::new(&gateway, &provider);
        let store = RefCell::new(SessionState::default());

        block_on(sync.observe(&store, &authed("ada@example.com")));
        let cleared = block_on(sync.observe(&store, &IdentityStatus::Unauthenticated));
        assert_eq!(cleared, SyncOutcome::Cleared);
        assert!(store.borrow().session().is_none());
        assert_eq!(store.borrow().phase(), SyncPhase::Idle);

        *gateway.reply.borrow_mut() = Ok(LoginResponse {
            user: UserProfile {
                id: "u2".into(),
                ..Default::default()
            },
            token: "t2".into(),
        });
        block_on(sync.observe(&store, &authed("ada@example.com")));
        assert_eq!(gateway.calls.get(), 2);
        assert_eq!(store.borrow().token(), Some("t2"));
    }

    #[test]
    fn pending_and_idle_signout_do_nothing() {
        let gateway = FakeGateway::ok("u1", "t1");
        let provider = FakeProvider::default();
        let sync = SyncController::new(&gateway, &provider);
        let store = RefCell::new(SessionState::default());

        assert_eq!(
            block_on(sync.observe(&store, &IdentityStatus::Pending)),
            SyncOutcome::Skipped
        );
        assert_eq!(
            block_on(sync.observe(&store, &IdentityStatus::Unauthenticated)),
            SyncOutcome::Skipped
        );
        assert_eq!(gateway.calls.get(), 0);
    }

    #[test]
    fn late_success_after_sign_out_is_discarded() {
        let (gateway, reply) = HeldGateway::new();
        let provider = FakeProvider::default();
        let sync = SyncController::new(&gateway, &provider);
        let store = RefCell::new(SessionState::default());

        let (late, cleared) = block_on(async {
            let identity = authed("ada@example.com");
            let exchange = sync.observe(&store, &identity);
            let sign_out = async {
                let cleared = sync.observe(&store, &IdentityStatus::Unauthenticated).await;
                let _ = reply.send(Ok(login_response("u1", "t1")));
                cleared
            };
            futures::join!(exchange, sign_out)
        });

        assert_eq!(cleared, SyncOutcome::Cleared);
        assert_eq!(late, SyncOutcome::Skipped);
        assert!(store.borrow().session().is_none());
        assert_eq!(store.borrow().token(), None);
        assert_eq!(store.borrow().phase(), SyncPhase::Idle);
    }

    #[test]
    fn late_failure_does_not_touch_next_identity() {
        let (gateway, reply) = HeldGateway::new();
        let provider = FakeProvider::default();
        let sync = SyncController::new(&gateway, &provider);
        let store = RefCell::new(SessionState::default());

        let (late, _) = block_on(async {
            let identity = authed("a@x.io");
            let exchange = sync.observe(&store, &identity);
            let switch = async {
                sync.observe(&store, &IdentityStatus::Unauthenticated).await;
                assert!(store.borrow_mut().begin_sync("b@x.io").is_some());
                let _ = reply.send(Err(ApiError::Network("offline".into())));
            };
            futures::join!(exchange, switch)
        });

        assert_eq!(late, SyncOutcome::Skipped);
        assert_eq!(provider.sign_outs.get(), 0);
        assert_eq!(store.borrow().phase(), SyncPhase::Syncing);
    }
}
