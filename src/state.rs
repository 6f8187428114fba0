use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::models::Conversation;
use crate::services::ai::LlmProvider;
use crate::services::flights::FlightDataProvider;
use crate::services::weather::WeatherProvider;

/// A conversation guarded so that its turns are processed one at a time.
pub type SharedConversation = Arc<tokio::sync::Mutex<Conversation>>;

struct Session {
    conversation: SharedConversation,
    last_seen: Instant,
}

pub struct AppState {
    pub config: AppConfig,
    pub llm: Box<dyn LlmProvider>,
    pub flights: Box<dyn FlightDataProvider>,
    pub weather: Box<dyn WeatherProvider>,
    sessions: Mutex<HashMap<String, Session>>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        llm: Box<dyn LlmProvider>,
        flights: Box<dyn FlightDataProvider>,
        weather: Box<dyn WeatherProvider>,
    ) -> Self {
        Self {
            config,
            llm,
            flights,
            weather,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<String, Session>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the session with `id`, or starts a fresh one when the id is
    /// missing, unknown or expired.
    pub fn session_or_new(&self, id: Option<&str>) -> (String, SharedConversation) {
        self.session_or_new_at(id, Instant::now())
    }

    pub(crate) fn session_or_new_at(
        &self,
        id: Option<&str>,
        now: Instant,
    ) -> (String, SharedConversation) {
        let mut sessions = self.sessions();
        self.expire_idle(&mut sessions, now);

        if let Some(id) = id {
            if let Some(session) = sessions.get_mut(id) {
                session.last_seen = now;
                return (id.to_string(), Arc::clone(&session.conversation));
            }
        }

        self.make_room(&mut sessions);

        let conv = Conversation::new();
        let id = conv.id.clone();
        tracing::info!(session = %id, "starting conversation");
        let shared = Arc::new(tokio::sync::Mutex::new(conv));
        sessions.insert(
            id.clone(),
            Session {
                conversation: Arc::clone(&shared),
                last_seen: now,
            },
        );
        (id, shared)
    }

    pub fn session(&self, id: &str) -> Option<SharedConversation> {
        self.sessions()
            .get(id)
            .map(|session| Arc::clone(&session.conversation))
    }

    pub fn remove_session(&self, id: &str) -> bool {
        self.sessions().remove(id).is_some()
    }

    pub fn session_count(&self) -> usize {
        self.sessions().len()
    }

    /// Drops sessions untouched for longer than the idle limit. A session
    /// whose turn is still running is kept.
    fn expire_idle(&self, sessions: &mut HashMap<String, Session>, now: Instant) {
        let idle = Duration::from_secs(self.config.session_idle_secs);
        sessions.retain(|id, session| {
            let keep = now.saturating_duration_since(session.last_seen) <= idle
                || Arc::strong_count(&session.conversation) > 1;
            if !keep {
                tracing::info!(session = %id, "conversation expired");
            }
            keep
        });
    }

    /// Evicts least recently used sessions until a new one fits.
    fn make_room(&self, sessions: &mut HashMap<String, Session>) {
        while !sessions.is_empty() && sessions.len() >= self.config.max_sessions {
            let Some(oldest) = sessions
                .iter()
                .min_by_key(|(_, session)| session.last_seen)
                .map(|(id, _)| id.clone())
            else {
                break;
            };
            tracing::info!(session = %oldest, "conversation evicted");
            sessions.remove(&oldest);
        }
    }
}
