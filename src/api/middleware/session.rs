//! Browser sessions
//!
//! Each browser session is identified by a cookie without `Max-Age`, so the
//! browser forgets it when the session ends. The id maps to a private memory
//! key-value store (the session-scoped storage the admin flag lives in) and a
//! single notification slot.

use std::future::{Ready, ready};
use std::sync::Arc;
use std::time::{Duration, Instant};

use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::{Payload, ServiceRequest, ServiceResponse};
use actix_web::error::ErrorInternalServerError;
use actix_web::middleware::Next;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest, web};
use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::api::constants::{SESSION_COOKIE_NAME, SESSION_IDLE_SECS};
use crate::services::Notifier;
use crate::storage::{KvStore, MemoryKvStore};

pub struct SessionState {
    store: Arc<MemoryKvStore>,
    notifier: Mutex<Notifier>,
    last_seen: Mutex<Instant>,
}

impl SessionState {
    fn new(notification_ttl: Duration, now: Instant) -> Self {
        Self {
            store: Arc::new(MemoryKvStore::new()),
            notifier: Mutex::new(Notifier::new(notification_ttl)),
            last_seen: Mutex::new(now),
        }
    }

    /// Session-scoped key-value storage
    pub fn store(&self) -> Arc<dyn KvStore> {
        self.store.clone()
    }

    pub fn notifier(&self) -> &Mutex<Notifier> {
        &self.notifier
    }

    fn touch(&self, now: Instant) {
        *self.last_seen.lock() = now;
    }

    fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(*self.last_seen.lock())
    }
}

pub struct SessionTable {
    sessions: DashMap<String, Arc<SessionState>>,
    notification_ttl: Duration,
    idle_timeout: Duration,
}

impl SessionTable {
    pub fn new(notification_ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            notification_ttl,
            idle_timeout: Duration::from_secs(SESSION_IDLE_SECS),
        }
    }

    pub fn get(&self, id: &str, now: Instant) -> Option<Arc<SessionState>> {
        let session = self.sessions.get(id)?.value().clone();
        session.touch(now);
        Some(session)
    }

    pub fn create(&self, now: Instant) -> (String, Arc<SessionState>) {
        self.prune(now);

        let id = uuid::Uuid::new_v4().simple().to_string();
        let session = Arc::new(SessionState::new(self.notification_ttl, now));
        self.sessions.insert(id.clone(), session.clone());
        debug!("Created session ({} active)", self.sessions.len());
        (id, session)
    }

    fn prune(&self, now: Instant) {
        self.sessions
            .retain(|_, session| session.idle_for(now) < self.idle_timeout);
    }
}

fn session_cookie(id: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE_NAME, id);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie
}

/// Attach the caller's [`SessionState`] to the request, creating a session
/// (and its cookie) when the request carries no known id.
pub async fn session_middleware(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let table = req
        .app_data::<web::Data<SessionTable>>()
        .cloned()
        .ok_or_else(|| ErrorInternalServerError("session table not configured"))?;

    let now = Instant::now();
    let existing = req
        .cookie(SESSION_COOKIE_NAME)
        .and_then(|cookie| table.get(cookie.value(), now));

    let (session, new_id) = match existing {
        Some(session) => {
            trace!("Reusing existing session");
            (session, None)
        }
        None => {
            let (id, session) = table.create(now);
            (session, Some(id))
        }
    };

    req.extensions_mut().insert(session);
    let mut res = next.call(req).await?;

    if let Some(id) = new_id {
        res.response_mut()
            .add_cookie(&session_cookie(id))
            .map_err(ErrorInternalServerError)?;
    }

    Ok(res)
}

/// Extractor for the session attached by [`session_middleware`]
pub struct Session(pub Arc<SessionState>);

impl FromRequest for Session {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Arc<SessionState>>()
                .cloned()
                .map(Session)
                .ok_or_else(|| ErrorInternalServerError("session middleware not installed")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_are_isolated() {
        let table = SessionTable::new(Duration::from_secs(3));
        let now = Instant::now();
        let (a, session_a) = table.create(now);
        let (b, _) = table.create(now);
        assert_ne!(a, b);

        session_a.store().set("termitoon-auth", "true").unwrap();
        let session_b = table.get(&b, now).unwrap();
        assert_eq!(session_b.store().get("termitoon-auth").unwrap(), None);
        assert_eq!(
            table.get(&a, now).unwrap().store().get("termitoon-auth").unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn test_idle_sessions_are_pruned() {
        let table = SessionTable::new(Duration::from_secs(3));
        let start = Instant::now();
        let (stale, _) = table.create(start);

        let later = start + Duration::from_secs(SESSION_IDLE_SECS + 1);
        table.create(later);

        assert!(table.get(&stale, later).is_none());
        assert_eq!(table.sessions.len(), 1);
    }

    #[test]
    fn test_session_cookie_has_no_max_age() {
        let cookie = session_cookie("abc".into());
        assert_eq!(cookie.max_age(), None);
        assert_eq!(cookie.expires(), None);
        assert_eq!(cookie.http_only(), Some(true));
    }
}
