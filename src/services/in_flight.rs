use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use crate::errors::{AppError, AppResult};

/// Tracks sessions with a quiz generation in progress so each session has
/// at most one.
#[derive(Debug, Default)]
pub struct InFlightRegistry {
    sessions: Mutex<HashSet<String>>,
}

impl InFlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `session_id` until the returned guard is dropped.
    pub fn acquire(self: &Arc<Self>, session_id: &str) -> AppResult<InFlightGuard> {
        let mut sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        if !sessions.insert(session_id.to_string()) {
            return Err(AppError::Conflict(format!(
                "A quiz is already being generated for session '{}'",
                session_id
            )));
        }

        Ok(InFlightGuard {
            registry: Arc::clone(self),
            session_id: session_id.to_string(),
        })
    }

    pub fn is_in_flight(&self, session_id: &str) -> bool {
        self.sessions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(session_id)
    }
}

#[derive(Debug)]
pub struct InFlightGuard {
    registry: Arc<InFlightRegistry>,
    session_id: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.registry
            .sessions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.session_id);
    }
}
