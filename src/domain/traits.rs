//! # Domain Traits
//!
//! Abstract interfaces for core system components (Chat, Beacon backend, Command handlers).
//! Allows for pluggable implementations in the Infrastructure layer.

use crate::domain::chain::{BlockInfo, Committee, FinalityInfo, HeadInfo, ValidatorInfo};
use crate::domain::types::{ChainError, CommandError, HelpDocument};
use async_trait::async_trait;

/// Abstract interface for a Chat Provider (e.g., Matrix, Discord, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a message to the room
    async fn send_message(&self, content: &str) -> Result<String, String>;

    /// Send a structured document (help listings)
    async fn send_structured(&self, doc: &HelpDocument) -> Result<(), String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}

/// Abstract interface for the beacon chain query service.
///
/// `ChainError::NotFound` is reserved for "the node has no such object",
/// every other variant means the node could not answer.
#[async_trait]
pub trait ChainProvider: Send + Sync {
    async fn head(&self) -> Result<HeadInfo, ChainError>;

    /// Finality checkpoints of a state (`"head"` or a decimal slot)
    async fn finality(&self, state_id: &str) -> Result<FinalityInfo, ChainError>;

    async fn block(&self, slot: u64) -> Result<BlockInfo, ChainError>;

    /// Genesis time in seconds since the unix epoch
    async fn genesis_time(&self) -> Result<u64, ChainError>;

    async fn committees(&self, slot: u64) -> Result<Vec<Committee>, ChainError>;

    async fn validator(&self, index: u64) -> Result<ValidatorInfo, ChainError>;
}

/// A handler bound to the commands of a group.
///
/// Receives the canonical command name and the parsed parameters.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, command: &str, parameters: &[String]) -> Result<String, CommandError>;
}
