// Unit tests for the transcript log and its serialized form.

use live_describer::session::{Status, TranscriptKind, TranscriptLog};

#[test]
fn push_appends_in_order() {
    let mut log = TranscriptLog::new();
    log.push(TranscriptKind::Transcript, "hello world");
    log.push(TranscriptKind::Description, "A speaker waves.");

    let items = log.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].kind, TranscriptKind::Transcript);
    assert_eq!(items[0].text, "hello world");
    assert_eq!(items[1].kind, TranscriptKind::Description);
}

#[test]
fn interim_is_upserted_in_place() {
    let mut log = TranscriptLog::new();
    log.set_interim("hel");
    log.set_interim("hello");

    assert_eq!(log.len(), 1);
    assert_eq!(log.items()[0].kind, TranscriptKind::Interim);
    assert_eq!(log.items()[0].text, "hello");
}

#[test]
fn clear_interim_removes_only_the_interim_entry() {
    let mut log = TranscriptLog::new();
    log.push(TranscriptKind::Transcript, "first sentence");
    log.set_interim("partial tex");
    log.clear_interim();

    assert_eq!(log.len(), 1);
    assert_eq!(log.items()[0].kind, TranscriptKind::Transcript);

    // A second clear is a no-op.
    log.clear_interim();
    assert_eq!(log.len(), 1);
}

#[test]
fn interim_can_be_recreated_after_removal() {
    let mut log = TranscriptLog::new();
    log.set_interim("one");
    log.clear_interim();
    log.set_interim("two");

    assert_eq!(log.len(), 1);
    assert_eq!(log.items()[0].text, "two");
}

#[test]
fn clear_resets_everything() {
    let mut log = TranscriptLog::new();
    log.push(TranscriptKind::Transcript, "words");
    log.set_interim("more");
    log.clear();

    assert!(log.is_empty());
    log.set_interim("fresh");
    assert_eq!(log.len(), 1);
}

#[test]
fn snapshot_is_independent_of_later_mutation() {
    let mut log = TranscriptLog::new();
    log.push(TranscriptKind::Transcript, "first");
    let snapshot = log.snapshot();
    log.push(TranscriptKind::Transcript, "second");

    assert_eq!(snapshot.len(), 1);
    assert_eq!(log.len(), 2);
}

#[test]
fn transcript_kind_serializes_lowercase() {
    let mut log = TranscriptLog::new();
    log.push(TranscriptKind::Description, "A chart appears.");

    let json = serde_json::to_string(&log.items()[0]).unwrap();
    assert!(json.contains("\"kind\":\"description\""));
    assert!(json.contains("\"text\":\"A chart appears.\""));
}

#[test]
fn status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Status::Idle).unwrap(), "\"idle\"");
    assert_eq!(
        serde_json::to_string(&Status::Analyzing).unwrap(),
        "\"analyzing\""
    );

    let parsed: Status = serde_json::from_str("\"speaking\"").unwrap();
    assert_eq!(parsed, Status::Speaking);
}

#[test]
fn status_default_is_idle() {
    assert_eq!(Status::default(), Status::Idle);
}
