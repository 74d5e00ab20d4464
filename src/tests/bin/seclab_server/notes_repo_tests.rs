use super::*;

#[tokio::test]
async fn seeded_repository_lists_three_notes_in_order() {
    let repo = MemoryNoteRepository::seeded();

    let notes = repo.list().await.expect("list");
    let texts: Vec<&str> = notes.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["Business plan draft", "Meeting notes", "Project requirements"]
    );
    assert_eq!(notes.iter().map(|n| n.id).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[tokio::test]
async fn create_rejects_empty_and_whitespace_text_without_mutation() {
    let repo = MemoryNoteRepository::seeded();
    let before = repo.list().await.expect("list").len();

    for text in ["", "   ", "\n\t"] {
        let err = create_note(&repo, text.to_string())
            .await
            .expect_err("blank text must be rejected");
        assert!(matches!(err, CreateNoteError::EmptyText));
        assert_eq!(err.to_string(), "Note text is required");
    }

    assert_eq!(repo.list().await.expect("list").len(), before);
}

#[tokio::test]
async fn create_appends_with_next_id() {
    let repo = MemoryNoteRepository::seeded();
    let before = repo.list().await.expect("list").len() as u64;

    let note = create_note(&repo, "hello".to_string()).await.expect("create");
    assert_eq!(note.id, before + 1);
    assert!(!note.timestamp.is_empty());

    let notes = repo.list().await.expect("list");
    let last = notes.last().expect("last note");
    assert_eq!(last.text, "hello");
    assert_eq!(last.id, before + 1);
}

#[tokio::test]
async fn text_is_stored_as_given() {
    let repo = MemoryNoteRepository::new(Vec::new());

    let note = create_note(&repo, "  padded  ".to_string())
        .await
        .expect("create");
    assert_eq!(note.id, 1);
    assert_eq!(note.text, "  padded  ");
}

#[tokio::test]
async fn concurrent_appends_get_distinct_ids() {
    let repo = std::sync::Arc::new(MemoryNoteRepository::new(Vec::new()));

    let mut handles = Vec::new();
    for i in 0..16 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.append(format!("note {}", i)).await.expect("append").id
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.expect("join"));
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=16).collect::<Vec<u64>>());
}
