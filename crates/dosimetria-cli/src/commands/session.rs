//! Saved session commands for CLI.

use clap::Subcommand;
use dosimetria_core::{Config, SentencingSessionInput, SessionDb, SessionRepository};
use uuid::Uuid;

use super::compute::ComputeReport;
use super::input::SentenceArgs;

#[derive(Subcommand)]
pub enum SessionAction {
    /// Compute and save a calculation under a title
    Save {
        /// Session title
        #[arg(long)]
        title: String,
        #[command(flatten)]
        sentence: SentenceArgs,
    },
    /// List saved sessions, newest first
    List,
    /// Show one saved session
    Show {
        /// Session ID
        id: Uuid,
    },
    /// Delete a saved session
    Delete {
        /// Session ID
        id: Uuid,
    },
    /// Load a saved session and run the engine over it again
    Recompute {
        /// Session ID
        id: Uuid,
    },
}

pub fn run(action: SessionAction, user: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let user_id = user.unwrap_or_else(|| config.user.id.clone());
    let db = SessionDb::open(&config)?;

    match action {
        SessionAction::Save { title, sentence } => {
            let session =
                db.save(SentencingSessionInput::new(user_id, title, sentence.to_inputs()))?;
            eprintln!("Session saved: {}", session.id);
            println!("{}", serde_json::to_string_pretty(&session)?);
        }
        SessionAction::List => {
            let sessions = db.list(&user_id)?;
            println!("{}", serde_json::to_string_pretty(&sessions)?);
        }
        SessionAction::Show { id } => {
            let session = db.get(id, &user_id)?;
            println!("{}", serde_json::to_string_pretty(&session)?);
        }
        SessionAction::Delete { id } => {
            db.delete(id, &user_id)?;
            println!("Session deleted: {id}");
        }
        SessionAction::Recompute { id } => {
            let session = db.get(id, &user_id)?;
            let report = ComputeReport::build(db.load(&session), &config);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
