//! SQLite-based storage for saved sentencing sessions.
//!
//! One row per saved calculation. Columns mirror the persisted record shape:
//! raw (years, months) bounds, the circumstance map as JSON text, the
//! agravante/atenuante counts, fraction labels and the final result.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use super::repository::{ensure_owner, SentencingSession, SentencingSessionInput, SessionRepository};
use crate::error::{DatabaseError, Result, SessionError};
use crate::sentence::{Fraction, JudicialCircumstances, SentenceInputs};
use crate::storage::Config;

const SESSION_COLUMNS: &str = "id, user_id, title, min_years, min_months, max_years, max_months,
     circumstances, agravantes, atenuantes, increase_fraction, decrease_fraction,
     final_result_months, created_at";

fn corrupt(column: usize, message: impl Into<String>) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        column,
        Type::Text,
        Box::new(DatabaseError::CorruptRow {
            table: "sentencing_sessions".into(),
            message: message.into(),
        }),
    )
}

/// Build a SentencingSession from a database row
fn row_to_session(row: &rusqlite::Row) -> Result<SentencingSession, rusqlite::Error> {
    let id_str: String = row.get(0)?;
    let id = Uuid::parse_str(&id_str).map_err(|e| corrupt(0, format!("bad id '{id_str}': {e}")))?;

    let circumstances_json: String = row.get(7)?;
    let circumstances: JudicialCircumstances = serde_json::from_str(&circumstances_json)
        .map_err(|e| corrupt(7, format!("bad circumstances for {id}: {e}")))?;

    let increase: String = row.get(10)?;
    let decrease: String = row.get(11)?;

    let created_at_str: String = row.get(13)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| corrupt(13, format!("bad created_at for {id}: {e}")))?;

    Ok(SentencingSession {
        id,
        user_id: row.get(1)?,
        title: row.get(2)?,
        inputs: SentenceInputs {
            min_years: row.get(3)?,
            min_months: row.get(4)?,
            max_years: row.get(5)?,
            max_months: row.get(6)?,
            circumstances,
            aggravating: row.get(8)?,
            mitigating: row.get(9)?,
            increase_fraction: Fraction::from_label(&increase),
            decrease_fraction: Fraction::from_label(&decrease),
        },
        final_result_months: row.get(12)?,
        created_at,
    })
}

/// SQLite database for session storage.
pub struct SessionDb {
    conn: Connection,
}

impl SessionDb {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database configured in `config.toml`, under the data directory.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open(config: &Config) -> Result<Self> {
        Self::open_at(&config.database_path()?)
    }

    /// Open (or create) the database at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        tracing::debug!(path = %path.display(), "session database opened");
        Ok(db)
    }

    /// Open an in-memory database.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS sentencing_sessions (
                    seq                 INTEGER PRIMARY KEY AUTOINCREMENT,
                    id                  TEXT NOT NULL UNIQUE,
                    user_id             TEXT NOT NULL,
                    title               TEXT NOT NULL,
                    min_years           INTEGER NOT NULL DEFAULT 0,
                    min_months          INTEGER NOT NULL DEFAULT 0,
                    max_years           INTEGER NOT NULL DEFAULT 0,
                    max_months          INTEGER NOT NULL DEFAULT 0,
                    circumstances       TEXT NOT NULL DEFAULT '{}',
                    agravantes          INTEGER NOT NULL DEFAULT 0,
                    atenuantes          INTEGER NOT NULL DEFAULT 0,
                    increase_fraction   TEXT NOT NULL DEFAULT '0',
                    decrease_fraction   TEXT NOT NULL DEFAULT '0',
                    final_result_months REAL NOT NULL DEFAULT 0,
                    created_at          TEXT NOT NULL
                );

                CREATE INDEX IF NOT EXISTS idx_sentencing_sessions_user_created
                    ON sentencing_sessions(user_id, created_at);",
            )
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))
    }

    fn find(&self, id: Uuid) -> Result<Option<SentencingSession>> {
        let sql = format!("SELECT {SESSION_COLUMNS} FROM sentencing_sessions WHERE id = ?1");
        let session = self
            .conn
            .query_row(&sql, params![id.to_string()], row_to_session)
            .optional()?;
        Ok(session)
    }
}

impl SessionRepository for SessionDb {
    fn save(&self, input: SentencingSessionInput) -> Result<SentencingSession> {
        let session = input.into_session(Utc::now())?;
        let circumstances = serde_json::to_string(&session.inputs.circumstances)?;
        self.conn.execute(
            "INSERT INTO sentencing_sessions (
                id, user_id, title, min_years, min_months, max_years, max_months,
                circumstances, agravantes, atenuantes, increase_fraction, decrease_fraction,
                final_result_months, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            params![
                session.id.to_string(),
                session.user_id,
                session.title,
                session.inputs.min_years,
                session.inputs.min_months,
                session.inputs.max_years,
                session.inputs.max_months,
                circumstances,
                session.inputs.aggravating,
                session.inputs.mitigating,
                session.inputs.increase_fraction.label(),
                session.inputs.decrease_fraction.label(),
                session.final_result_months,
                // Fixed-width so lexical order in ORDER BY matches time order.
                session.created_at.to_rfc3339_opts(SecondsFormat::Nanos, true),
            ],
        )?;
        tracing::debug!(id = %session.id, user_id = %session.user_id, "session saved");
        Ok(session)
    }

    fn list(&self, user_id: &str) -> Result<Vec<SentencingSession>> {
        let sql = format!(
            "SELECT {SESSION_COLUMNS} FROM sentencing_sessions
             WHERE user_id = ?1
             ORDER BY created_at DESC, seq DESC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![user_id], row_to_session)?;
        let sessions = rows.collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(user_id, count = sessions.len(), "sessions listed");
        Ok(sessions)
    }

    fn get(&self, id: Uuid, user_id: &str) -> Result<SentencingSession> {
        let session = self.find(id)?.ok_or(SessionError::NotFound { id })?;
        ensure_owner(&session, user_id)?;
        Ok(session)
    }

    fn delete(&self, id: Uuid, user_id: &str) -> Result<()> {
        let session = self.find(id)?.ok_or(SessionError::NotFound { id })?;
        ensure_owner(&session, user_id)?;
        self.conn.execute(
            "DELETE FROM sentencing_sessions WHERE id = ?1 AND user_id = ?2",
            params![id.to_string(), user_id],
        )?;
        tracing::debug!(%id, user_id, "session deleted");
        Ok(())
    }
}
