//! Background write sequencing and event reporting.

mod common;

use common::{write_mp3, write_opus, COVER_A};
use songtag_core::{CoverImage, MetadataRecord};
use songtag_tags::{
    TagCodec, TagPersistenceWorker, WriteEvent, WriteOutcome, WriteRequest, WriteStage,
};
use tempfile::TempDir;
use tokio::sync::mpsc;

async fn collect(mut rx: mpsc::UnboundedReceiver<WriteEvent>) -> Vec<WriteEvent> {
    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    events
}

fn record() -> MetadataRecord {
    MetadataRecord::new("Queen", "Bohemian Rhapsody").with_year("1975")
}

#[tokio::test]
async fn test_write_with_cover_reports_every_stage() {
    common::init_tracing();
    let dir = TempDir::new().unwrap();
    let path = write_mp3(dir.path(), "song.mp3");

    let rx = TagPersistenceWorker::new().spawn(WriteRequest {
        path: path.clone(),
        record: record(),
        cover: Some(CoverImage::jpeg(COVER_A.to_vec())),
    });
    let events = collect(rx).await;

    assert_eq!(
        events,
        vec![
            WriteEvent::Progress(WriteStage::Starting),
            WriteEvent::Progress(WriteStage::ProcessingCover),
            WriteEvent::Progress(WriteStage::Saving),
            WriteEvent::Finished(WriteOutcome {
                success: true,
                message: "Tags updated successfully!".to_string(),
            }),
        ]
    );

    let snapshot = TagCodec::new().read(&path).unwrap();
    assert_eq!(snapshot.record.title, "Bohemian Rhapsody");
    assert_eq!(snapshot.cover.unwrap().data, COVER_A);
}

#[tokio::test]
async fn test_write_without_cover_skips_cover_stage() {
    let dir = TempDir::new().unwrap();
    let path = write_opus(dir.path(), "song.opus", &[]);

    let rx = TagPersistenceWorker::new().spawn(WriteRequest {
        path: path.clone(),
        record: record(),
        cover: None,
    });
    let events = collect(rx).await;

    assert_eq!(events.len(), 3);
    assert_eq!(events[0], WriteEvent::Progress(WriteStage::Starting));
    assert_eq!(events[1], WriteEvent::Progress(WriteStage::Saving));
    assert!(matches!(
        &events[2],
        WriteEvent::Finished(WriteOutcome { success: true, .. })
    ));

    assert_eq!(TagCodec::new().read(&path).unwrap().record.year, "1975");
}

#[tokio::test]
async fn test_failure_emits_single_terminal_event() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, b"not audio").unwrap();

    let (tx, rx) = mpsc::unbounded_channel();
    let outcome = TagPersistenceWorker::new()
        .run(
            WriteRequest {
                path,
                record: record(),
                cover: None,
            },
            tx,
        )
        .await;

    assert!(!outcome.success);
    assert!(outcome.message.starts_with("Failed to apply tags: "));
    assert!(outcome.message.contains("Unsupported format"));

    let events = collect(rx).await;
    let finished: Vec<_> = events
        .iter()
        .filter(|event| matches!(event, WriteEvent::Finished(_)))
        .collect();
    assert_eq!(finished.len(), 1);
    assert_eq!(events.last(), Some(&WriteEvent::Finished(outcome)));
    assert!(!events.contains(&WriteEvent::Progress(WriteStage::Saving)));
}

#[tokio::test]
async fn test_closed_receiver_does_not_stop_write() {
    let dir = TempDir::new().unwrap();
    let path = write_mp3(dir.path(), "song.mp3");

    let (tx, rx) = mpsc::unbounded_channel();
    drop(rx);

    let outcome = TagPersistenceWorker::new()
        .run(
            WriteRequest {
                path: path.clone(),
                record: record(),
                cover: None,
            },
            tx,
        )
        .await;

    assert!(outcome.success);
    assert_eq!(TagCodec::new().read(&path).unwrap().record.artist, "Queen");
}
