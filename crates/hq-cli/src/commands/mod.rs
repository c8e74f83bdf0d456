pub mod check;
pub mod compose;
pub mod hash;
pub mod init;
pub mod play;
pub mod tui;

use hq_core::{ContentDocument, ContentSource, QuizConfig, QuizSession};

/// Fetch a content document, mapping errors to a printable message.
fn fetch(source: &ContentSource) -> Result<ContentDocument, String> {
    source
        .fetch()
        .map_err(|e| format!("cannot load content from {source}: {e}"))
}

/// Fetch content and start a session on it.
fn start_session(source: &ContentSource, seed: Option<u64>) -> Result<QuizSession, String> {
    let doc = fetch(source)?;
    let mut config = QuizConfig::default().with_source(source.clone());
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let session = QuizSession::with_content(&config, doc);
    tracing::debug!(
        %source,
        questions = session.content().question_count(),
        "session ready"
    );
    if session.content().is_empty() {
        return Err(format!("content from {source} has no questions"));
    }
    Ok(session)
}

/// Name of a drawn sign, or a placeholder.
fn sign_name(sign: Option<&hq_core::Sign>) -> &str {
    sign.map(|s| s.name.as_str()).unwrap_or("(none)")
}
