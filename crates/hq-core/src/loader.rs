//! Content loading from the embedded document, a file, or a URL.
//!
//! Fetching is the only suspension point of the quiz. [`spawn_load`] runs a
//! fetch on a background thread and hands back a [`PendingLoad`] that the UI
//! loop polls. There is no retry, timeout, or cancellation: dropping the
//! handle simply discards the result when it arrives.

use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::content::ContentDocument;
use crate::error::{ContentError, ContentResult};

/// Content shipped with the binary.
pub const EMBEDDED_CONTENT: &str = include_str!("data/default_content.json");

/// Where a content document comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContentSource {
    /// The document compiled into the binary.
    #[default]
    Embedded,
    /// A JSON file on disk.
    File(PathBuf),
    /// A JSON document served over HTTP(S).
    Url(String),
}

impl FromStr for ContentSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("embedded") {
            Ok(ContentSource::Embedded)
        } else if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(ContentSource::Url(trimmed.to_string()))
        } else {
            Ok(ContentSource::File(PathBuf::from(trimmed)))
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::Embedded => write!(f, "embedded"),
            ContentSource::File(path) => write!(f, "{}", path.display()),
            ContentSource::Url(url) => write!(f, "{url}"),
        }
    }
}

impl ContentSource {
    /// Fetch and parse the document, blocking the calling thread.
    pub fn fetch(&self) -> ContentResult<ContentDocument> {
        let json = match self {
            ContentSource::Embedded => EMBEDDED_CONTENT.to_string(),
            ContentSource::File(path) => std::fs::read_to_string(path)?,
            ContentSource::Url(url) => reqwest::blocking::get(url)?
                .error_for_status()?
                .text()?,
        };
        Ok(ContentDocument::from_json(&json)?)
    }
}

/// A content fetch running in the background.
pub struct PendingLoad {
    source: ContentSource,
    rx: Receiver<ContentResult<ContentDocument>>,
}

impl PendingLoad {
    /// The source being fetched.
    pub fn source(&self) -> &ContentSource {
        &self.source
    }

    /// Take the result if the fetch has finished. Never blocks.
    pub fn try_take(&self) -> Option<ContentResult<ContentDocument>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(ContentError::Disconnected)),
        }
    }

    /// Block until the fetch finishes.
    pub fn wait(self) -> ContentResult<ContentDocument> {
        self.rx.recv().unwrap_or(Err(ContentError::Disconnected))
    }
}

/// Start fetching `source` on a background thread.
pub fn spawn_load(source: ContentSource) -> PendingLoad {
    let (tx, rx) = mpsc::channel();
    let worker_source = source.clone();
    thread::spawn(move || {
        tracing::debug!(source = %worker_source, "fetching content");
        // The receiver may be gone if the UI was torn down mid-fetch.
        let _ = tx.send(worker_source.fetch());
    });
    PendingLoad { source, rx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_source_kinds() {
        assert_eq!(
            "embedded".parse::<ContentSource>().unwrap(),
            ContentSource::Embedded
        );
        assert_eq!(
            "https://example.com/q.json".parse::<ContentSource>().unwrap(),
            ContentSource::Url("https://example.com/q.json".to_string())
        );
        assert_eq!(
            "assets/questions.json".parse::<ContentSource>().unwrap(),
            ContentSource::File(PathBuf::from("assets/questions.json"))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for raw in ["embedded", "http://localhost/q.json", "quiz.json"] {
            let source: ContentSource = raw.parse().unwrap();
            assert_eq!(source.to_string(), raw);
        }
    }

    #[test]
    fn embedded_content_is_playable() {
        let doc = ContentSource::Embedded.fetch().unwrap();
        assert!(!doc.questions.is_empty());
        assert!(doc.questions.iter().all(|q| !q.options.is_empty()));
        assert!(!doc.zodiacs.is_empty());
        assert!(!doc.ascendants.is_empty());
        assert!(!doc.start_blocks.is_empty());
        assert!(!doc.end_blocks.is_empty());
    }

    #[test]
    fn fetch_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "questions": [{{ "id": 7, "text": "Why?", "options": [] }}] }}"#
        )
        .unwrap();

        let doc = ContentSource::File(file.path().to_path_buf())
            .fetch()
            .unwrap();
        assert_eq!(doc.questions[0].id, 7);
    }

    #[test]
    fn fetch_missing_file_is_io_error() {
        let err = ContentSource::File(PathBuf::from("/definitely/not/here.json"))
            .fetch()
            .unwrap_err();
        assert!(matches!(err, ContentError::Io(_)));
    }

    #[test]
    fn fetch_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = ContentSource::File(file.path().to_path_buf())
            .fetch()
            .unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn spawned_load_delivers_once() {
        let pending = spawn_load(ContentSource::Embedded);
        assert_eq!(pending.source(), &ContentSource::Embedded);
        let doc = pending.wait().unwrap();
        assert!(!doc.questions.is_empty());
    }

    #[test]
    fn try_take_eventually_yields() {
        let pending = spawn_load(ContentSource::Embedded);
        let result = loop {
            if let Some(result) = pending.try_take() {
                break result;
            }
            std::thread::yield_now();
        };
        assert!(result.is_ok());
    }
}
