//! Integration tests for the saved-session repository contract.
//!
//! The same checks run against the in-memory repository and an on-disk
//! SQLite database.

use dosimetria_core::{
    Circumstance, CoreError, Fraction, InMemorySessionRepository, JudicialCircumstances,
    SentenceInputs, SentencingSessionInput, SessionDb, SessionError, SessionRepository,
};
use uuid::Uuid;

fn inputs() -> SentenceInputs {
    SentenceInputs {
        min_years: 4,
        max_years: 10,
        circumstances: JudicialCircumstances::from_negative([
            Circumstance::Personality,
            Circumstance::VictimBehavior,
        ]),
        aggravating: 1,
        increase_fraction: Fraction::OneThird,
        ..Default::default()
    }
}

fn exercise_contract(repo: &dyn SessionRepository) {
    let first = repo
        .save(SentencingSessionInput::new("ana", "Roubo", inputs()))
        .unwrap();
    let second = repo
        .save(SentencingSessionInput::new("ana", "Roubo (revisto)", inputs()))
        .unwrap();
    let foreign = repo
        .save(SentencingSessionInput::new("bia", "Furto", inputs()))
        .unwrap();

    assert_ne!(first.id, second.id);
    assert!((first.final_result_months - 77.0 * 4.0 / 3.0).abs() < 1e-9);

    let listed = repo.list("ana").unwrap();
    assert_eq!(
        listed.iter().map(|s| s.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );

    // Load and recompute reproduces the stored result.
    let loaded = repo.load(&listed[0]);
    assert_eq!(loaded, inputs());
    assert_eq!(loaded.compute().final_months, second.final_result_months);

    match repo.delete(foreign.id, "ana") {
        Err(CoreError::Session(SessionError::NotOwner { id, .. })) => assert_eq!(id, foreign.id),
        other => panic!("expected ownership failure, got {other:?}"),
    }
    assert_eq!(repo.list("bia").unwrap().len(), 1);

    match repo.delete(Uuid::new_v4(), "ana") {
        Err(CoreError::Session(SessionError::NotFound { .. })) => {}
        other => panic!("expected not-found failure, got {other:?}"),
    }

    repo.delete(first.id, "ana").unwrap();
    assert_eq!(repo.list("ana").unwrap().len(), 1);
    assert!(repo.get(first.id, "ana").is_err());
    assert_eq!(repo.get(second.id, "ana").unwrap().title, "Roubo (revisto)");
}

#[test]
fn test_in_memory_repository_contract() {
    exercise_contract(&InMemorySessionRepository::new());
}

#[test]
fn test_sqlite_repository_contract() {
    let dir = tempfile::tempdir().unwrap();
    let db = SessionDb::open_at(&dir.path().join("sessions.db")).unwrap();
    exercise_contract(&db);
}

#[test]
fn test_sqlite_sessions_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sessions.db");

    let saved = {
        let db = SessionDb::open_at(&path).unwrap();
        db.save(SentencingSessionInput::new("ana", "Roubo", inputs()))
            .unwrap()
    };

    let db = SessionDb::open_at(&path).unwrap();
    let listed = db.list("ana").unwrap();
    assert_eq!(listed, vec![saved]);
}

#[test]
fn test_repository_failure_leaves_result_usable() {
    let repo = InMemorySessionRepository::new();
    let result = inputs().compute();
    let err = repo
        .save(SentencingSessionInput::new("ana", "", inputs()))
        .unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));
    assert!((result.final_months - 77.0 * 4.0 / 3.0).abs() < 1e-9);
}
