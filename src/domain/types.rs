//! # Domain Types
//!
//! Common data structures and enums used across the application logic.

use thiserror::Error;

/// A message that matched the `!group.command params` grammar.
///
/// Lives for the duration of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInvocation {
    pub group: String,
    pub command: String,
    pub parameters: Vec<String>,
}

/// A titled listing, rendered by the chat provider (embed, markdown table, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpDocument {
    pub title: String,
    pub description: String,
    pub entries: Vec<HelpEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub name: String,
    /// Empty when there is no shorthand
    pub alias: String,
    pub description: String,
}

/// What the dispatcher wants sent back for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Silence,
    Reply(String),
    Help(HelpDocument),
    /// The parameters were rejected; carries the user-facing explanation
    Usage(String),
    /// The backend could not answer
    Unavailable,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("not found")]
    NotFound,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("beacon node returned status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Usage(String),
    #[error("backend query failed: {0}")]
    Backend(#[from] ChainError),
}
