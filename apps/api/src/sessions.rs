use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::listing::board::JobBoard;

struct Session {
    board: JobBoard,
    created_at: DateTime<Utc>,
}

/// In-memory listing sessions, one per mounted job-browsing page.
/// Bounded: inserting into a full store evicts the oldest session.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    capacity: usize,
}

impl SessionStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            capacity: capacity.max(1),
        }
    }

    pub async fn insert(&self, board: JobBoard) -> Uuid {
        let mut sessions = self.sessions.write().await;

        while sessions.len() >= self.capacity {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, s)| s.created_at)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                    info!(session = %id, "Evicted oldest listing session");
                }
                None => break,
            }
        }

        let id = Uuid::new_v4();
        sessions.insert(
            id,
            Session {
                board,
                created_at: Utc::now(),
            },
        );
        id
    }

    pub async fn read<R>(&self, id: Uuid, f: impl FnOnce(&JobBoard) -> R) -> Option<R> {
        let sessions = self.sessions.read().await;
        sessions.get(&id).map(|s| f(&s.board))
    }

    pub async fn update<R>(&self, id: Uuid, f: impl FnOnce(&mut JobBoard) -> R) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(&id).map(|s| f(&mut s.board))
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
