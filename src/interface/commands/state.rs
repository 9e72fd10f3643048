//! # State Commands
//!
//! `!state.<cmd> <slot>`: facts about the beacon state at a slot.

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::registry::{CommandGroup, CommandSpec, RegistryError};
use crate::domain::traits::{ChainProvider, CommandHandler};
use crate::domain::types::{ChainError, CommandError};
use crate::strings::messages;
use crate::strings::templates::fill;

pub const NAME: &str = "state";
pub const ALIAS: &str = "s";
pub const DESCRIPTION: &str = "Beacon state at a slot: committees and finality";

pub const COMMITTEES: CommandSpec = CommandSpec {
    name: "committees",
    alias: "c",
    description: "Committees assigned to a slot",
    response: "Slot {} has {} committees covering {} validators",
};

pub const FINALITY: CommandSpec = CommandSpec {
    name: "finality",
    alias: "f",
    description: "Justified and finalized epochs as seen at a slot",
    response: "At slot {}: justified epoch {}, finalized epoch {}",
};

pub struct StateCommands {
    chain: Arc<dyn ChainProvider>,
}

pub fn group(chain: Arc<dyn ChainProvider>) -> Result<CommandGroup, RegistryError> {
    let handler = Arc::new(StateCommands { chain });
    CommandGroup::new(
        NAME,
        ALIAS,
        DESCRIPTION,
        super::bind(&[COMMITTEES, FINALITY], handler),
    )
}

#[async_trait]
impl CommandHandler for StateCommands {
    async fn handle(&self, command: &str, parameters: &[String]) -> Result<String, CommandError> {
        let slot = super::single_number(parameters, "slot")?;

        match command {
            c if c == COMMITTEES.name => match self.chain.committees(slot).await {
                Ok(committees) if !committees.is_empty() => {
                    let validators: usize = committees.iter().map(|c| c.validators.len()).sum();
                    Ok(fill(
                        COMMITTEES.response,
                        &[&slot, &committees.len(), &validators],
                    ))
                }
                Ok(_) | Err(ChainError::NotFound) => Ok(messages::no_state(slot)),
                Err(e) => Err(e.into()),
            },
            c if c == FINALITY.name => match self.chain.finality(&slot.to_string()).await {
                Ok(finality) => Ok(fill(
                    FINALITY.response,
                    &[&slot, &finality.justified_epoch, &finality.finalized_epoch],
                )),
                Err(ChainError::NotFound) => Ok(messages::no_state(slot)),
                Err(e) => Err(e.into()),
            },
            _ => Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chain::{Committee, FinalityInfo};
    use crate::interface::commands::tests::{FakeChain, params, usage};

    fn chain() -> FakeChain {
        let mut chain = FakeChain::default();
        chain.committees.insert(
            64,
            vec![
                Committee {
                    index: 0,
                    slot: 64,
                    validators: vec![1, 2, 3],
                },
                Committee {
                    index: 1,
                    slot: 64,
                    validators: vec![4, 5],
                },
            ],
        );
        chain.committees.insert(65, Vec::new());
        chain.finality.insert(
            "64".to_string(),
            FinalityInfo {
                justified_epoch: 1,
                finalized_epoch: 0,
            },
        );
        chain
    }

    fn handler(chain: FakeChain) -> StateCommands {
        StateCommands {
            chain: Arc::new(chain),
        }
    }

    #[tokio::test]
    async fn test_committees() {
        let h = handler(chain());
        assert_eq!(
            h.handle("committees", &params(&["64"])).await.unwrap(),
            "Slot 64 has 2 committees covering 5 validators"
        );
    }

    #[tokio::test]
    async fn test_committees_missing() {
        let h = handler(chain());
        assert_eq!(
            h.handle("committees", &params(&["65"])).await.unwrap(),
            "No state found for slot 65"
        );
        assert_eq!(
            h.handle("committees", &params(&["1000"])).await.unwrap(),
            "No state found for slot 1000"
        );
    }

    #[tokio::test]
    async fn test_finality() {
        let h = handler(chain());
        assert_eq!(
            h.handle("finality", &params(&["64"])).await.unwrap(),
            "At slot 64: justified epoch 1, finalized epoch 0"
        );
        assert_eq!(
            h.handle("finality", &params(&["65"])).await.unwrap(),
            "No state found for slot 65"
        );
    }

    #[tokio::test]
    async fn test_usage() {
        let h = handler(chain());
        assert_eq!(
            usage(h.handle("finality", &params(&["64", ""])).await),
            "Expected 1 numeric parameter (slot), got 2"
        );
    }

    #[tokio::test]
    async fn test_backend_down() {
        let h = handler(FakeChain {
            down: true,
            ..Default::default()
        });
        assert!(matches!(
            h.handle("committees", &params(&["64"])).await,
            Err(CommandError::Backend(_))
        ));
    }
}
