use contracts::system::auth::UserProfile;
use leptos::prelude::*;

/// Application session issued by the backend
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: UserProfile,
    pub token: String,
}

/// Progress of the identity → backend token exchange
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncPhase {
    #[default]
    Idle,
    Syncing,
    Synced,
    Failed,
}

/// Contents of the session store. Readable everywhere; the transitions are
/// visible only to the auth module.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    session: Option<Session>,
    phase: SyncPhase,
    /// Identity email the current phase belongs to.
    identity: Option<String>,
    /// Ticket of the latest exchange; survives `reset` so a late result
    /// from before a sign-out never matches again.
    attempt: u64,
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    /// Latch: a ticket exactly once per identity. Further calls for the
    /// same identity are refused until [`reset`](Self::reset).
    pub(super) fn begin_sync(&mut self, email: &str) -> Option<u64> {
        let start = match self.phase {
            SyncPhase::Idle => true,
            SyncPhase::Syncing => false,
            SyncPhase::Synced | SyncPhase::Failed => self.identity.as_deref() != Some(email),
        };
        if !start {
            return None;
        }
        self.attempt += 1;
        self.phase = SyncPhase::Syncing;
        self.identity = Some(email.to_string());
        Some(self.attempt)
    }

    fn owns(&self, attempt: u64) -> bool {
        self.phase == SyncPhase::Syncing && self.attempt == attempt
    }

    /// Replaces any previous session. Returns `false` (and changes
    /// nothing) when `attempt` is no longer the running exchange.
    pub(super) fn complete(&mut self, attempt: u64, session: Session) -> bool {
        if !self.owns(attempt) {
            return false;
        }
        self.session = Some(session);
        self.phase = SyncPhase::Synced;
        true
    }

    /// Same ownership rule as [`complete`](Self::complete).
    pub(super) fn fail(&mut self, attempt: u64) -> bool {
        if !self.owns(attempt) {
            return false;
        }
        self.session = None;
        self.phase = SyncPhase::Failed;
        true
    }

    /// Back to the initial state. Returns `false` if it already was.
    pub(super) fn reset(&mut self) -> bool {
        let changed =
            self.session.is_some() || self.phase != SyncPhase::Idle || self.identity.is_some();
        self.session = None;
        self.phase = SyncPhase::Idle;
        self.identity = None;
        changed
    }
}

/// Read-only handle provided through context
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: ReadSignal<SessionState>,
}

impl SessionContext {
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state
    }

    /// Bearer token for the next request (untracked: read at call time).
    pub fn token(&self) -> Option<String> {
        self.state
            .with_untracked(|s| s.token().map(str::to_string))
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.with(|s| s.session().is_some())
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.with(|s| s.user().cloned())
    }

    pub fn phase(&self) -> SyncPhase {
        self.state.with(|s| s.phase())
    }
}

/// The only write access to the store. Created together with the store
/// and handed to the sync controller; never put into context.
#[derive(Clone, Copy)]
pub struct SessionWriter {
    state: WriteSignal<SessionState>,
}

/// Something holding a [`SessionState`] that the sync controller can
/// mutate. `None` means the store is gone (component tree disposed).
pub trait SessionCell {
    fn update_session<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R>;
}

impl SessionCell for SessionWriter {
    fn update_session<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        self.state.try_update(f)
    }
}

/// Create the tab-lifetime session store.
pub fn create_session_store() -> (SessionContext, SessionWriter) {
    let (state, set_state) = signal(SessionState::default());
    (
        SessionContext { state },
        SessionWriter { state: set_state },
    )
}

/// Hook to access the session store
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(id: &str, token: &str) -> Session {
        Session {
            user: UserProfile {
                id: id.into(),
                ..Default::default()
            },
            token: token.into(),
        }
    }

    #[test]
    fn latch_opens_once_per_identity() {
        let mut s = SessionState::default();
        let attempt = s.begin_sync("a@x.io").expect("first sync starts");
        assert_eq!(s.begin_sync("a@x.io"), None);
        assert!(s.complete(attempt, session("u1", "t1")));
        assert_eq!(s.begin_sync("a@x.io"), None);
        assert_eq!(s.phase(), SyncPhase::Synced);
    }

    #[test]
    fn different_identity_restarts_and_replaces() {
        let mut s = SessionState::default();
        let first = s.begin_sync("a@x.io").unwrap();
        s.complete(first, session("u1", "t1"));
        let second = s.begin_sync("b@x.io").unwrap();
        assert!(s.complete(second, session("u2", "t2")));
        assert_eq!(s.token(), Some("t2"));
        assert_eq!(s.user().map(|u| u.id.as_str()), Some("u2"));
    }

    #[test]
    fn fail_clears_session() {
        let mut s = SessionState::default();
        let attempt = s.begin_sync("a@x.io").unwrap();
        assert!(s.fail(attempt));
        assert!(s.session().is_none());
        assert_eq!(s.phase(), SyncPhase::Failed);
    }

    #[test]
    fn reset_reports_change() {
        let mut s = SessionState::default();
        assert!(!s.reset());
        s.begin_sync("a@x.io");
        assert!(s.reset());
        assert_eq!(s.phase(), SyncPhase::Idle);
        assert!(!s.reset());
    }

    #[test]
    fn result_after_reset_is_dropped() {
        let mut s = SessionState::default();
        let stale = s.begin_sync("a@x.io").unwrap();
        s.reset();
        assert!(!s.complete(stale, session("u1", "t1")));
        assert!(!s.fail(stale));
        assert!(s.session().is_none());
        assert_eq!(s.phase(), SyncPhase::Idle);

        // same email signs in again: only the new ticket counts
        let fresh = s.begin_sync("a@x.io").unwrap();
        assert_ne!(stale, fresh);
        assert!(!s.complete(stale, session("u1", "t1")));
        assert!(s.complete(fresh, session("u1", "t2")));
        assert_eq!(s.token(), Some("t2"));
    }
}
