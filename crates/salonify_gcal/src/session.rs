// --- File: crates/salonify_gcal/src/session.rs ---
//! Server-side sessions for signed-in customers.
//!
//! The browser only holds a random session id in a cookie; tokens stay here.

use chrono::{DateTime, Duration, Utc};
use salonify_common::services::TokenPair;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionData {
    pub tokens: Option<TokenPair>,
    pub user_id: Option<u64>,
    /// State handed to the consent screen, checked on callback.
    pub csrf_state: Option<String>,
}

#[derive(Debug)]
struct SessionEntry {
    data: SessionData,
    expires_at: DateTime<Utc>,
}

pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionEntry>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Store `data` under a fresh id and return the id.
    pub async fn create(&self, data: SessionData) -> String {
        let id = Uuid::new_v4().to_string();
        self.sessions.write().await.insert(
            id.clone(),
            SessionEntry {
                data,
                expires_at: Utc::now() + self.ttl,
            },
        );
        debug!("Created session {}", id);
        id
    }

    /// Session data for `id`, unless unknown or expired.
    pub async fn get(&self, id: &str) -> Option<SessionData> {
        let now = Utc::now();
        self.sessions
            .read()
            .await
            .get(id)
            .filter(|entry| entry.expires_at > now)
            .map(|entry| entry.data.clone())
    }

    /// Overwrite a live session and extend its lifetime.
    ///
    /// Returns the id the data ended up under: `id` itself, or a new one when
    /// `id` is missing or expired.
    pub async fn save(&self, id: Option<&str>, data: SessionData) -> String {
        let now = Utc::now();
        if let Some(id) = id {
            let mut sessions = self.sessions.write().await;
            if let Some(entry) = sessions.get_mut(id).filter(|e| e.expires_at > now) {
                entry.data = data;
                entry.expires_at = now + self.ttl;
                return id.to_string();
            }
        }
        self.create(data).await
    }

    pub async fn remove(&self, id: &str) {
        self.sessions.write().await.remove(id);
    }

    /// Drop expired sessions; returns how many were removed.
    pub async fn prune_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.expires_at > now);
        before - sessions.len()
    }

    /// Run `prune_expired` every `every` on the runtime.
    pub fn spawn_pruner(self: &Arc<Self>, every: std::time::Duration) -> JoinHandle<()> {
        let store = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            // first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                let pruned = store.prune_expired().await;
                if pruned > 0 {
                    info!("Pruned {} expired sessions", pruned);
                }
            }
        })
    }
}
