use crate::domain::{models::session::SessionState, ports::SessionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

pub struct MemorySessionRepo {
    sessions: RwLock<HashMap<String, SessionState>>,
}

impl MemorySessionRepo {
    pub fn new() -> Self {
        Self { sessions: RwLock::new(HashMap::new()) }
    }
}

impl Default for MemorySessionRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for MemorySessionRepo {
    async fn find_by_id(&self, id: &str) -> Result<Option<SessionState>, AppError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn save(&self, session: &SessionState) -> Result<(), AppError> {
        self.sessions.write().await.insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn delete_idle_before(&self, cutoff: DateTime<Utc>) -> Result<usize, AppError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.updated_at >= cutoff);
        Ok(before - sessions.len())
    }
}
