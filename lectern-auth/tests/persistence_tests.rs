use chrono::{TimeZone, Utc};
use lectern_auth::{
    FilePersistence, MemoryPersistence, Role, SESSION_FILE_NAME, Session, SessionPersistence, User,
};
use lectern_types::UserId;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn session() -> Session {
    Session {
        user: User {
            id: UserId::new("mock-user-id"),
            email: "admin@example.com".into(),
            role: Role::Admin,
            name: Some("Admin User".into()),
        },
        access_token: "local-token".into(),
        signed_in_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    }
}

// ── MemoryPersistence ────────────────────────────────────────────

#[test]
fn memory_save_load_clear() {
    let p = MemoryPersistence::new();
    assert!(p.load().unwrap().is_none());

    p.save(&session()).unwrap();
    assert_eq!(p.load().unwrap(), Some(session()));

    p.clear().unwrap();
    assert!(p.load().unwrap().is_none());
}

// ── FilePersistence ──────────────────────────────────────────────

#[test]
fn file_in_dir_uses_well_known_name() {
    let dir = TempDir::new().unwrap();
    let p = FilePersistence::in_dir(dir.path());
    assert_eq!(p.path().to_path_buf(), dir.path().join(SESSION_FILE_NAME));
}

#[test]
fn file_missing_reads_as_none() {
    let dir = TempDir::new().unwrap();
    let p = FilePersistence::in_dir(dir.path());
    assert!(p.load().unwrap().is_none());
}

#[test]
fn file_save_then_load() {
    let dir = TempDir::new().unwrap();
    let p = FilePersistence::in_dir(dir.path());
    p.save(&session()).unwrap();

    let reopened = FilePersistence::in_dir(dir.path());
    assert_eq!(reopened.load().unwrap(), Some(session()));
}

#[test]
fn file_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let p = FilePersistence::new(dir.path().join("nested/state/session.json"));
    p.save(&session()).unwrap();
    assert!(p.path().exists());
}

#[test]
fn file_save_overwrites_previous_session() {
    let dir = TempDir::new().unwrap();
    let p = FilePersistence::in_dir(dir.path());
    p.save(&session()).unwrap();

    let mut newer = session();
    newer.access_token = "second".into();
    p.save(&newer).unwrap();

    assert_eq!(p.load().unwrap().unwrap().access_token, "second");
}

#[test]
fn file_clear_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let p = FilePersistence::in_dir(dir.path());
    p.clear().unwrap();

    p.save(&session()).unwrap();
    p.clear().unwrap();
    p.clear().unwrap();
    assert!(!p.path().exists());
}

#[test]
fn file_corrupt_contents_is_an_error() {
    let dir = TempDir::new().unwrap();
    let p = FilePersistence::in_dir(dir.path());
    std::fs::write(p.path(), "garbage").unwrap();

    let err = p.load().unwrap_err();
    assert!(err.to_string().contains("serialization error"));
}
