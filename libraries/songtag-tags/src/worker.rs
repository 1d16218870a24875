//! Background tag writes with progress reporting.

use crate::codec::TagCodec;
use crate::error::Result;
use songtag_core::{CoverImage, MetadataRecord};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Message reported when a write completes
pub const SUCCESS_MESSAGE: &str = "Tags updated successfully!";

/// Checkpoints reached during a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStage {
    Starting,
    /// Only reached when a cover was supplied
    ProcessingCover,
    Saving,
}

impl WriteStage {
    /// Human-readable status line
    pub fn message(self) -> &'static str {
        match self {
            Self::Starting => "Starting tag update...",
            Self::ProcessingCover => "Processing cover art...",
            Self::Saving => "Saving file...",
        }
    }
}

/// Terminal result of a write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub success: bool,
    pub message: String,
}

impl WriteOutcome {
    fn from_result(result: &Result<()>) -> Self {
        match result {
            Ok(()) => Self {
                success: true,
                message: SUCCESS_MESSAGE.to_string(),
            },
            Err(e) => Self {
                success: false,
                message: format!("Failed to apply tags: {e}"),
            },
        }
    }
}

/// Events emitted by a write: zero or more progress stages, then exactly one
/// `Finished`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteEvent {
    Progress(WriteStage),
    Finished(WriteOutcome),
}

/// A single tag write request
#[derive(Debug, Clone)]
pub struct WriteRequest {
    pub path: PathBuf,
    pub record: MetadataRecord,
    pub cover: Option<CoverImage>,
}

/// Runs tag writes on the blocking thread pool.
///
/// There is no partial success: the outcome is either a full write of tags
/// and cover, or a failure with the file left as the save left it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TagPersistenceWorker;

impl TagPersistenceWorker {
    pub fn new() -> Self {
        Self
    }

    /// Start a write in the background and return its event stream.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(&self, request: WriteRequest) -> mpsc::UnboundedReceiver<WriteEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = *self;
        tokio::spawn(async move {
            worker.run(request, tx).await;
        });
        rx
    }

    /// Perform a write, sending every event to `events`.
    ///
    /// The outcome is also returned; a closed receiver does not stop the write.
    pub async fn run(
        &self,
        request: WriteRequest,
        events: mpsc::UnboundedSender<WriteEvent>,
    ) -> WriteOutcome {
        let path = request.path.clone();
        let progress = events.clone();

        let outcome = match tokio::task::spawn_blocking(move || write_blocking(&request, &progress))
            .await
        {
            Ok(result) => WriteOutcome::from_result(&result),
            Err(e) => WriteOutcome {
                success: false,
                message: format!("Failed to apply tags: {e}"),
            },
        };

        if outcome.success {
            info!(path = %path.display(), "Tag write finished");
        } else {
            error!(path = %path.display(), message = %outcome.message, "Tag write failed");
        }

        let _ = events.send(WriteEvent::Finished(outcome.clone()));
        outcome
    }
}

fn write_blocking(request: &WriteRequest, events: &mpsc::UnboundedSender<WriteEvent>) -> Result<()> {
    TagCodec::new().write_with(
        &request.path,
        &request.record,
        request.cover.as_ref(),
        |stage| {
            let _ = events.send(WriteEvent::Progress(stage));
        },
    )
}
