use lectern_types::{
    BackendError, BackendResult, NoLatency, Operation, SharedClock, SharedLatency,
    SystemClock,
};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::listeners::{Listeners, SessionEvent, Subscription};
use crate::persistence::{MemoryPersistence, SessionPersistence};
use crate::session::{AuthData, DemoIdentity, Session, SignedOut, User};

/// Emulated auth service holding exactly one active session.
pub struct SessionStore {
    identity: DemoIdentity,
    persistence: Arc<dyn SessionPersistence>,
    latency: SharedLatency,
    clock: SharedClock,
    listeners: Arc<Listeners>,
}

impl SessionStore {
    pub fn new(
        persistence: Arc<dyn SessionPersistence>,
        latency: SharedLatency,
        clock: SharedClock,
    ) -> Self {
        Self {
            identity: DemoIdentity::default(),
            persistence,
            latency,
            clock,
            listeners: Arc::new(Listeners::default()),
        }
    }

    /// In-memory persistence, no latency, system clock.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryPersistence::new()),
            Arc::new(NoLatency),
            Arc::new(SystemClock),
        )
    }

    /// Replaces the accepted credential pair.
    #[must_use]
    pub fn with_identity(mut self, identity: DemoIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// Signs in the demo identity and persists the new session.
    ///
    /// Any other credential pair fails with `InvalidCredentials` and leaves
    /// the stored session as it was.
    pub async fn sign_in(&self, email: &str, password: &str) -> BackendResult<AuthData> {
        self.latency.pause(Operation::SignIn).await;

        if !self.identity.matches(email, password) {
            warn!(email = %email, "Rejected sign-in");
            return Err(BackendError::invalid_credentials());
        }

        let session = Session {
            user: self.identity.user.clone(),
            access_token: format!("local-{}", Uuid::new_v4().simple()),
            signed_in_at: self.clock.now(),
        };
        self.persistence.save(&session)?;
        info!(user_id = %session.user.id, "Signed in");

        self.listeners.notify(SessionEvent::SignedIn, Some(&session));
        Ok(AuthData {
            user: session.user.clone(),
            session,
        })
    }

    /// Clears the persisted session. Succeeds with or without one.
    pub async fn sign_out(&self) -> BackendResult<SignedOut> {
        self.latency.pause(Operation::SignOut).await;
        self.persistence.clear()?;
        debug!("Signed out");
        self.listeners.notify(SessionEvent::SignedOut, None);
        Ok(SignedOut { success: true })
    }

    /// Reads the persisted session. An unreadable entry reads as signed out.
    pub fn get_session(&self) -> Option<Session> {
        match self.persistence.load() {
            Ok(session) => session,
            Err(e) => {
                warn!("Discarding unreadable session: {}", e);
                None
            }
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.get_session().map(|session| session.user)
    }

    /// Registers `callback` for sign-in and sign-out transitions.
    pub fn on_session_change<F>(&self, callback: F) -> Subscription
    where
        F: Fn(SessionEvent, Option<&Session>) + Send + Sync + 'static,
    {
        self.listeners.register(Arc::new(callback))
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
