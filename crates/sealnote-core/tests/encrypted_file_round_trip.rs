use std::fs;

use sealnote_core::crypto::EncryptionService;
use sealnote_core::note::{Session, View};
use sealnote_core::storage::{FileGateway, PersistenceGateway};
use tempfile::tempdir;

#[test]
fn test_file_note_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("Secret Plans.encrypted");

    let mut session = Session::new(EncryptionService::new(), FileGateway::new(&path), "Secret Plans");
    session.load().expect("load should succeed");
    assert_eq!(session.view(), View::NewNote);
    assert!(!path.exists());

    session
        .submit_new("correct-password", "correct-password", "the usual")
        .expect("new note should be written");
    session
        .edit("journal entry: hello world")
        .expect("edit should be written");
    drop(session);

    let on_disk = fs::read_to_string(&path).expect("read should succeed");
    assert!(on_disk.contains("\"hint\": \"the usual\""));
    assert!(!on_disk.contains("hello world"));

    let mut reopened =
        Session::new(EncryptionService::new(), FileGateway::new(&path), "Secret Plans");
    reopened.load().expect("load should succeed");
    assert_eq!(reopened.view(), View::DecryptNote);

    reopened.submit_unlock("correct-password").unwrap();
    assert_eq!(reopened.plaintext(), Some("journal entry: hello world"));
}

#[test]
fn test_file_note_wrong_password_leaves_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("note.encrypted");

    let mut session = Session::new(EncryptionService::new(), FileGateway::new(&path), "note");
    session.load().unwrap();
    session.submit_new("right", "right", "").unwrap();
    let before = fs::read(&path).unwrap();

    let mut reopened = Session::new(EncryptionService::new(), FileGateway::new(&path), "note");
    reopened.load().unwrap();
    reopened.submit_unlock("wrong").unwrap();

    assert_eq!(reopened.view(), View::DecryptNote);
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_corrupted_file_is_format_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.encrypted");
    fs::write(&path, "{\"version\": \"9.9\", \"hint\": \"\", \"encodedData\": \"\"}").unwrap();

    let mut session = Session::new(EncryptionService::new(), FileGateway::new(&path), "broken");
    let err = session.load().unwrap_err();
    assert!(err.is_format_error());
    assert_eq!(session.view(), View::Init);
}

#[test]
fn test_gateway_loads_what_session_saved() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("n.encrypted");

    let mut session = Session::new(EncryptionService::new(), FileGateway::new(&path), "n");
    session.load().unwrap();
    session.submit_new("pw", "pw", "h").unwrap();

    let mut gateway = FileGateway::new(&path);
    let raw = gateway.load().unwrap();
    assert_eq!(
        sealnote_core::storage::decode(&raw).unwrap(),
        *session.envelope()
    );
}
