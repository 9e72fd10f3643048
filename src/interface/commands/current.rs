//! # Current Commands
//!
//! `!current.<cmd>`: what the beacon node considers the head of the chain.
//! Parameters are ignored.

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::registry::{CommandGroup, CommandSpec, RegistryError};
use crate::domain::chain::epoch_of;
use crate::domain::traits::{ChainProvider, CommandHandler};
use crate::domain::types::CommandError;
use crate::strings::templates::fill;

pub const NAME: &str = "current";
pub const ALIAS: &str = "c";
pub const DESCRIPTION: &str = "Head of the chain: slot, epoch and checkpoints";

const HEAD_STATE: &str = "head";

pub const SLOT: CommandSpec = CommandSpec {
    name: "slot",
    alias: "s",
    description: "Slot of the current head block",
    response: "The current head slot is {}",
};

pub const EPOCH: CommandSpec = CommandSpec {
    name: "epoch",
    alias: "e",
    description: "Epoch of the current head block",
    response: "The current head epoch is {}",
};

pub const JUSTIFIED: CommandSpec = CommandSpec {
    name: "justified",
    alias: "j",
    description: "Latest justified epoch",
    response: "The current justified epoch is {}",
};

pub const FINALIZED: CommandSpec = CommandSpec {
    name: "finalized",
    alias: "f",
    description: "Latest finalized epoch",
    response: "The current finalized epoch is {}",
};

pub struct CurrentCommands {
    chain: Arc<dyn ChainProvider>,
}

pub fn group(chain: Arc<dyn ChainProvider>) -> Result<CommandGroup, RegistryError> {
    let handler = Arc::new(CurrentCommands { chain });
    CommandGroup::new(
        NAME,
        ALIAS,
        DESCRIPTION,
        super::bind(&[SLOT, EPOCH, JUSTIFIED, FINALIZED], handler),
    )
}

#[async_trait]
impl CommandHandler for CurrentCommands {
    async fn handle(&self, command: &str, _parameters: &[String]) -> Result<String, CommandError> {
        match command {
            c if c == SLOT.name => {
                let head = self.chain.head().await?;
                Ok(fill(SLOT.response, &[&head.slot]))
            }
            c if c == EPOCH.name => {
                let head = self.chain.head().await?;
                Ok(fill(EPOCH.response, &[&epoch_of(head.slot)]))
            }
            c if c == JUSTIFIED.name => {
                let finality = self.chain.finality(HEAD_STATE).await?;
                Ok(fill(JUSTIFIED.response, &[&finality.justified_epoch]))
            }
            c if c == FINALIZED.name => {
                let finality = self.chain.finality(HEAD_STATE).await?;
                Ok(fill(FINALIZED.response, &[&finality.finalized_epoch]))
            }
            _ => Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chain::{FinalityInfo, HeadInfo};
    use crate::domain::types::ChainError;
    use crate::interface::commands::tests::{FakeChain, params};

    fn chain() -> FakeChain {
        let mut chain = FakeChain {
            head: Some(HeadInfo {
                slot: 12345,
                root: "0xabc".to_string(),
            }),
            ..Default::default()
        };
        chain.finality.insert(
            "head".to_string(),
            FinalityInfo {
                justified_epoch: 384,
                finalized_epoch: 383,
            },
        );
        chain
    }

    fn handler(chain: FakeChain) -> CurrentCommands {
        CurrentCommands {
            chain: Arc::new(chain),
        }
    }

    #[tokio::test]
    async fn test_head_commands() {
        let h = handler(chain());
        assert_eq!(h.handle("slot", &[]).await.unwrap(), "The current head slot is 12345");
        assert_eq!(h.handle("epoch", &[]).await.unwrap(), "The current head epoch is 385");
        assert_eq!(
            h.handle("justified", &[]).await.unwrap(),
            "The current justified epoch is 384"
        );
        assert_eq!(
            h.handle("finalized", &[]).await.unwrap(),
            "The current finalized epoch is 383"
        );
    }

    #[tokio::test]
    async fn test_parameters_ignored() {
        let h = handler(chain());
        assert_eq!(
            h.handle("slot", &params(&["1", "x"])).await.unwrap(),
            "The current head slot is 12345"
        );
    }

    #[tokio::test]
    async fn test_backend_down() {
        let h = handler(FakeChain {
            down: true,
            ..Default::default()
        });
        assert!(matches!(
            h.handle("slot", &[]).await,
            Err(CommandError::Backend(ChainError::Transport(_)))
        ));
    }

    #[tokio::test]
    async fn test_unknown_command_is_empty() {
        let h = handler(chain());
        assert_eq!(h.handle("gas", &[]).await.unwrap(), "");
    }
}
