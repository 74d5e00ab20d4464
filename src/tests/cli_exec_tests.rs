use seclab::remote::NotesApi;

use super::*;

struct ServiceDown;

impl NotesApi for ServiceDown {
    fn list_notes(&self, _token: &str) -> Result<Vec<Note>, ApiError> {
        Err(ApiError::Transport("connection refused".to_string()))
    }

    fn add_note(&self, _token: &str, _text: &str) -> Result<Note, ApiError> {
        Err(ApiError::Transport("connection refused".to_string()))
    }
}

struct ServiceUp;

impl NotesApi for ServiceUp {
    fn list_notes(&self, _token: &str) -> Result<Vec<Note>, ApiError> {
        Ok(Vec::new())
    }

    fn add_note(&self, _token: &str, text: &str) -> Result<Note, ApiError> {
        Ok(Note {
            id: 7,
            text: text.to_string(),
            timestamp: "2026-01-01T00:00:00Z".to_string(),
        })
    }
}

#[test]
fn offline_add_message_omits_placeholder_id() {
    let mut feed = NotesFeed::new();
    let note = feed
        .add(&ServiceDown, Some("token"), "draft")
        .expect("kept locally");

    assert_eq!(feed.source(), FeedSource::Offline);
    assert_eq!(
        describe_added(&feed, &note),
        "Service unavailable; note was not saved"
    );
}

#[test]
fn live_add_message_reports_service_id() {
    let mut feed = NotesFeed::new();
    let note = feed.add(&ServiceUp, Some("token"), "draft").expect("added");

    assert_eq!(describe_added(&feed, &note), "Added note 7");
}

#[test]
fn config_changes_update_only_given_fields() {
    let mut cfg = ClientConfig::default();

    apply_config_changes(
        &mut cfg,
        ConfigChanges {
            url: Some("https://notes.example.com".to_string()),
            store: Some("memory".to_string()),
            offline_demo: Some(true),
            ..ConfigChanges::default()
        },
    )
    .expect("apply");

    assert_eq!(cfg.base_url, "https://notes.example.com");
    assert_eq!(cfg.store, StoreKind::Memory);
    assert!(cfg.offline_demo);
    assert!(cfg.pinned_cert.is_none());
}

#[test]
fn config_changes_reject_bad_values() {
    let mut cfg = ClientConfig::default();

    let err = apply_config_changes(
        &mut cfg,
        ConfigChanges {
            store: Some("plaintext".to_string()),
            ..ConfigChanges::default()
        },
    )
    .expect_err("unknown store");
    assert!(err.to_string().contains("unknown store"));

    assert!(
        apply_config_changes(
            &mut cfg,
            ConfigChanges {
                url: Some("not a url".to_string()),
                ..ConfigChanges::default()
            },
        )
        .is_err()
    );

    assert!(
        apply_config_changes(
            &mut cfg,
            ConfigChanges {
                pinned_cert: Some(PathBuf::from("/definitely/missing.pem")),
                ..ConfigChanges::default()
            },
        )
        .is_err()
    );

    assert_eq!(cfg.store, StoreKind::Keychain);
}

#[test]
fn pinned_cert_can_be_set_and_cleared() {
    let dir = tempfile::tempdir().expect("tempdir");
    let pem = dir.path().join("server.pem");
    std::fs::write(&pem, "-----BEGIN CERTIFICATE-----\n").expect("write pem");

    let mut cfg = ClientConfig::default();
    apply_config_changes(
        &mut cfg,
        ConfigChanges {
            pinned_cert: Some(pem.clone()),
            ..ConfigChanges::default()
        },
    )
    .expect("set");
    assert_eq!(cfg.pinned_cert.as_deref(), Some(pem.as_path()));

    apply_config_changes(
        &mut cfg,
        ConfigChanges {
            clear_pinned_cert: true,
            ..ConfigChanges::default()
        },
    )
    .expect("clear");
    assert!(cfg.pinned_cert.is_none());
}
