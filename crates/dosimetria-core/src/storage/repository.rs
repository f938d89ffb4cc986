//! Saved calculation sessions and the repository seam they are stored behind.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, Result, SessionError, ValidationError};
use crate::sentence::{CalculationResult, SentenceInputs};

/// Request to persist a calculation under a title.
#[derive(Debug, Clone, PartialEq)]
pub struct SentencingSessionInput {
    pub user_id: String,
    pub title: String,
    pub inputs: SentenceInputs,
}

impl SentencingSessionInput {
    pub fn new(user_id: impl Into<String>, title: impl Into<String>, inputs: SentenceInputs) -> Self {
        Self {
            user_id: user_id.into(),
            title: title.into(),
            inputs,
        }
    }

    /// Turn the request into a new session with a fresh id.
    ///
    /// The final result is recomputed from the inputs so a stored session can
    /// never disagree with the engine.
    ///
    /// # Errors
    /// Returns a validation error if the title or user id is blank.
    pub fn into_session(self, created_at: DateTime<Utc>) -> Result<SentencingSession> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::Empty("session title".into()).into());
        }
        if self.user_id.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "user_id".into(),
                message: "must not be blank".into(),
            }
            .into());
        }

        let final_result_months = self.inputs.compute().final_months;
        Ok(SentencingSession {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            title: title.to_string(),
            inputs: self.inputs,
            final_result_months,
            created_at,
        })
    }
}

/// A persisted calculation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentencingSession {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    #[serde(flatten)]
    pub inputs: SentenceInputs,
    pub final_result_months: f64,
    pub created_at: DateTime<Utc>,
}

impl SentencingSession {
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    /// Rerun the engine over the stored inputs.
    pub fn recompute(&self) -> CalculationResult {
        self.inputs.compute()
    }
}

/// Storage for saved sessions.
///
/// Every operation is independent; no transaction spans two calls. Failures
/// never touch an in-memory [`CalculationResult`].
pub trait SessionRepository {
    /// Store a new session. Always creates a fresh record.
    fn save(&self, input: SentencingSessionInput) -> Result<SentencingSession>;

    /// Sessions owned by `user_id`, newest first.
    fn list(&self, user_id: &str) -> Result<Vec<SentencingSession>>;

    /// Fetch one session, checking ownership.
    fn get(&self, id: Uuid, user_id: &str) -> Result<SentencingSession>;

    /// Delete a session, checking ownership.
    ///
    /// A missing id is [`SessionError::NotFound`]; another user's id is
    /// [`SessionError::NotOwner`] and leaves the record untouched.
    fn delete(&self, id: Uuid, user_id: &str) -> Result<()>;

    /// Rehydrate the engine inputs of a session.
    fn load(&self, session: &SentencingSession) -> SentenceInputs {
        session.inputs.clone()
    }
}

/// Check that `session` belongs to `user_id`.
pub(crate) fn ensure_owner(session: &SentencingSession, user_id: &str) -> Result<()> {
    if session.is_owned_by(user_id) {
        Ok(())
    } else {
        tracing::warn!(id = %session.id, user_id, "rejected access to another user's session");
        Err(SessionError::NotOwner {
            id: session.id,
            user_id: user_id.to_string(),
        }
        .into())
    }
}

/// Process-local repository, for tests and embedding without a database.
#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    sessions: Mutex<Vec<SentencingSession>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save with an explicit creation time.
    pub fn save_at(
        &self,
        input: SentencingSessionInput,
        created_at: DateTime<Utc>,
    ) -> Result<SentencingSession> {
        let session = input.into_session(created_at)?;
        self.lock()?.push(session.clone());
        tracing::debug!(id = %session.id, user_id = %session.user_id, "session saved");
        Ok(session)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<SentencingSession>>> {
        self.sessions
            .lock()
            .map_err(|_| CoreError::Custom("session store poisoned".into()))
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn save(&self, input: SentencingSessionInput) -> Result<SentencingSession> {
        self.save_at(input, Utc::now())
    }

    fn list(&self, user_id: &str) -> Result<Vec<SentencingSession>> {
        let sessions = self.lock()?;
        // Reverse insertion order first so equal timestamps list latest-saved first.
        let mut owned: Vec<SentencingSession> = sessions
            .iter()
            .rev()
            .filter(|s| s.is_owned_by(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    fn get(&self, id: Uuid, user_id: &str) -> Result<SentencingSession> {
        let sessions = self.lock()?;
        let session = sessions
            .iter()
            .find(|s| s.id == id)
            .ok_or(SessionError::NotFound { id })?;
        ensure_owner(session, user_id)?;
        Ok(session.clone())
    }

    fn delete(&self, id: Uuid, user_id: &str) -> Result<()> {
        let mut sessions = self.lock()?;
        let index = sessions
            .iter()
            .position(|s| s.id == id)
            .ok_or(SessionError::NotFound { id })?;
        ensure_owner(&sessions[index], user_id)?;
        sessions.remove(index);
        tracing::debug!(%id, user_id, "session deleted");
        Ok(())
    }
}
