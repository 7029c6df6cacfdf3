//! Incremental assembly of streamed assistant replies.

use std::fmt;

use common::error::AppError;
use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Text chunks of one reply, kept in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    chunks: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_chunk(&mut self, chunk: impl Into<String>) {
        self.chunks.push(chunk.into());
    }

    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.iter().all(String::is_empty)
    }

    /// Everything received so far, concatenated.
    pub fn text(&self) -> String {
        self.chunks.concat()
    }
}

/// Drain `stream` into `transcript`.
///
/// Chunks received before a failure stay in the transcript.
pub async fn collect_stream<S, E>(mut stream: S, transcript: &mut Transcript) -> Result<(), AppError>
where
    S: Stream<Item = Result<String, E>> + Unpin,
    E: fmt::Display,
{
    while let Some(item) = stream.next().await {
        match item {
            Ok(chunk) => transcript.push_chunk(chunk),
            Err(err) => {
                error!(
                    received = transcript.chunks().len(),
                    "Reply stream failed: {}", err
                );
                return Err(AppError::Stream(err.to_string()));
            }
        }
    }
    debug!(chunks = transcript.chunks().len(), "Reply stream finished");
    Ok(())
}

#[derive(Deserialize, Debug, Clone, Serialize, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "User"),
            MessageRole::Assistant => write!(f, "Assistant"),
            MessageRole::System => write!(f, "System"),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl fmt::Display for ChatMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.role, self.content)
    }
}

/// Chat history sent along with every request for the next reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push(&mut self, role: MessageRole, content: impl Into<String>) {
        self.messages.push(ChatMessage {
            role,
            content: content.into(),
        });
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(MessageRole::User, content);
    }

    /// Stream the next assistant reply into the history.
    ///
    /// Whatever arrived is recorded even when the stream fails part way, so
    /// the partial answer stays visible; the error is still returned.
    pub async fn stream_reply<S, E>(&mut self, stream: S) -> Result<&ChatMessage, AppError>
    where
        S: Stream<Item = Result<String, E>> + Unpin,
        E: fmt::Display,
    {
        let mut transcript = Transcript::new();
        let outcome = collect_stream(stream, &mut transcript).await;

        if transcript.is_empty() {
            outcome?;
            return Err(AppError::Stream(
                "reply stream produced no text".to_string(),
            ));
        }

        self.push(MessageRole::Assistant, transcript.text());
        outcome?;

        self.messages
            .last()
            .ok_or_else(|| AppError::Stream("reply missing from history".to_string()))
    }

    /// One line per message, oldest first.
    pub fn format_history(&self) -> String {
        self.messages
            .iter()
            .map(|msg| format!("{msg}"))
            .collect::<Vec<String>>()
            .join("\n")
    }
}
