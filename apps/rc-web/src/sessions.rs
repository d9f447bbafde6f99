//! Cookie-keyed session registry.
//!
//! Each session sits behind its own lock; the registry lock only covers
//! lookup, insertion and eviction. Sessions idle past the configured limit
//! are dropped, and once the registry is full the least recently used one
//! makes room for a new browser.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use parking_lot::Mutex;
use rc_app::{AppConfig, Notice, PhChart, PropertyOracle, Session, WebConfig};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "rc_session";

/// A browser's session plus the notice to show on its next page view.
pub struct WebSession {
    pub session: Session,
    pub flash: Option<Notice>,
}

/// When sessions are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub idle: Duration,
    pub max_sessions: usize,
}

impl From<&WebConfig> for SessionLimits {
    fn from(web: &WebConfig) -> Self {
        Self {
            idle: Duration::from_secs(web.session_idle_secs),
            max_sessions: web.max_sessions.max(1),
        }
    }
}

struct Entry {
    session: Arc<Mutex<WebSession>>,
    last_seen: Instant,
}

/// All live sessions. Sessions share the property oracle and the sampled
/// dome and nothing else.
#[derive(Clone)]
pub struct SessionRegistry {
    config: Arc<AppConfig>,
    oracle: Arc<dyn PropertyOracle>,
    base_chart: Arc<PhChart>,
    limits: SessionLimits,
    sessions: Arc<Mutex<HashMap<Uuid, Entry>>>,
}

impl SessionRegistry {
    pub fn new(
        config: Arc<AppConfig>,
        oracle: Arc<dyn PropertyOracle>,
        base_chart: Arc<PhChart>,
    ) -> Self {
        let limits = SessionLimits::from(&config.web);
        Self {
            config,
            oracle,
            base_chart,
            limits,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn with_limits(mut self, limits: SessionLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }

    fn cookie_id(jar: &CookieJar) -> Option<Uuid> {
        jar.get(SESSION_COOKIE)
            .and_then(|c| Uuid::parse_str(c.value()).ok())
    }

    /// A session that is never stored, for browsers without one.
    pub fn detached(&self) -> WebSession {
        WebSession {
            session: Session::new(self.oracle.clone(), &self.config)
                .with_base_chart(self.base_chart.clone()),
            flash: None,
        }
    }

    /// Live session for `id`, refreshing its idle clock.
    fn lookup(&self, id: Uuid) -> Option<Arc<Mutex<WebSession>>> {
        let now = Instant::now();
        let mut sessions = self.sessions.lock();
        match sessions.get_mut(&id) {
            Some(entry) if now.duration_since(entry.last_seen) < self.limits.idle => {
                entry.last_seen = now;
                return Some(entry.session.clone());
            }
            Some(_) => {}
            None => return None,
        }
        sessions.remove(&id);
        tracing::debug!(session = %id, "session expired");
        None
    }

    fn insert(&self) -> (Uuid, Arc<Mutex<WebSession>>) {
        let now = Instant::now();
        let mut sessions = self.sessions.lock();

        let idle = self.limits.idle;
        let before = sessions.len();
        sessions.retain(|_, e| now.duration_since(e.last_seen) < idle);
        if sessions.len() < before {
            tracing::debug!(dropped = before - sessions.len(), "idle sessions dropped");
        }
        while sessions.len() >= self.limits.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, e)| e.last_seen)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                    tracing::debug!(session = %id, "session evicted");
                }
                None => break,
            }
        }

        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(self.detached()));
        sessions.insert(
            id,
            Entry {
                session: session.clone(),
                last_seen: now,
            },
        );
        tracing::info!(session = %id, live = sessions.len(), "session created");
        (id, session)
    }

    /// Run `f` on the caller's session, creating one when the cookie is
    /// missing or stale. The returned jar carries the session cookie.
    pub fn with_session<R>(
        &self,
        jar: CookieJar,
        f: impl FnOnce(&mut WebSession) -> R,
    ) -> (CookieJar, R) {
        let (id, session) = match Self::cookie_id(&jar)
            .and_then(|id| self.lookup(id).map(|s| (id, s)))
        {
            Some(found) => found,
            None => self.insert(),
        };
        let out = {
            let mut guard = session.lock();
            f(&mut *guard)
        };

        let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);
        (jar.add(cookie), out)
    }

    /// Run `f` on the caller's session if it exists; never creates one.
    pub fn with_existing<R>(
        &self,
        jar: &CookieJar,
        f: impl FnOnce(&mut WebSession) -> R,
    ) -> Option<R> {
        let session = self.lookup(Self::cookie_id(jar)?)?;
        let mut guard = session.lock();
        Some(f(&mut *guard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rc_app::ChartConfig;
    use rc_fluids::CorrelationOracle;

    fn registry() -> SessionRegistry {
        let oracle = Arc::new(CorrelationOracle::default());
        let chart = PhChart::build(oracle.as_ref(), &ChartConfig::default()).unwrap();
        SessionRegistry::new(Arc::new(AppConfig::default()), oracle, Arc::new(chart))
    }

    fn cookie_of(jar: &CookieJar) -> String {
        jar.get(SESSION_COOKIE).unwrap().value().to_string()
    }

    fn jar_for(id: &str) -> CookieJar {
        CookieJar::new().add(Cookie::new(SESSION_COOKIE, id.to_string()))
    }

    #[test]
    fn missing_cookie_creates_session() {
        let reg = registry();
        let (jar, ()) = reg.with_session(CookieJar::new(), |_| ());
        assert_eq!(reg.len(), 1);
        assert!(jar.get(SESSION_COOKIE).is_some());
    }

    #[test]
    fn cookie_reuses_session() {
        let reg = registry();
        let (jar, ()) = reg.with_session(CookieJar::new(), |ws| {
            ws.session.calculate().unwrap();
        });
        let (_, has_cycle) = reg.with_session(jar, |ws| ws.session.current().is_some());
        assert!(has_cycle);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn stale_cookie_gets_fresh_session() {
        let reg = registry();
        let stale = jar_for(&Uuid::new_v4().to_string());
        let (jar, ()) = reg.with_session(stale.clone(), |_| ());
        assert_ne!(cookie_of(&jar), cookie_of(&stale));
        assert!(reg.with_existing(&stale, |_| ()).is_none());
    }

    #[test]
    fn with_existing_never_creates() {
        let reg = registry();
        assert!(reg.with_existing(&CookieJar::new(), |_| ()).is_none());
        assert!(reg.with_existing(&jar_for("not-a-uuid"), |_| ()).is_none());
        assert!(reg.is_empty());
    }

    #[test]
    fn detached_session_uses_shared_dome_and_is_not_stored() {
        let reg = registry();
        let mut ws = reg.detached();
        let chart = ws.session.chart().unwrap();
        assert_eq!(chart.dome, reg.base_chart.dome);
        assert!(reg.is_empty());
    }

    #[test]
    fn idle_sessions_expire() {
        let reg = registry().with_limits(SessionLimits {
            idle: Duration::ZERO,
            max_sessions: 16,
        });
        let (jar, ()) = reg.with_session(CookieJar::new(), |_| ());
        assert!(reg.with_existing(&jar, |_| ()).is_none());
        assert!(reg.is_empty());

        let (again, ()) = reg.with_session(jar.clone(), |_| ());
        assert_ne!(cookie_of(&again), cookie_of(&jar));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn full_registry_evicts_least_recently_used() {
        let reg = registry().with_limits(SessionLimits {
            idle: Duration::from_secs(3600),
            max_sessions: 2,
        });
        let (a, ()) = reg.with_session(CookieJar::new(), |_| ());
        let (b, ()) = reg.with_session(CookieJar::new(), |_| ());
        // touch a so that b is the oldest
        assert!(reg.with_existing(&a, |_| ()).is_some());
        let (c, ()) = reg.with_session(CookieJar::new(), |_| ());

        assert_eq!(reg.len(), 2);
        assert!(reg.with_existing(&a, |_| ()).is_some());
        assert!(reg.with_existing(&b, |_| ()).is_none());
        assert!(reg.with_existing(&c, |_| ()).is_some());
    }

    #[test]
    fn limits_follow_web_config() {
        let web = WebConfig {
            session_idle_secs: 60,
            max_sessions: 3,
            ..WebConfig::default()
        };
        let limits = SessionLimits::from(&web);
        assert_eq!(limits.idle, Duration::from_secs(60));
        assert_eq!(limits.max_sessions, 3);
    }
}
