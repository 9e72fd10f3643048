//! # Block Commands
//!
//! `!block.<cmd> <slot>`: contents and timing of the block at a slot.

use async_trait::async_trait;
use chrono::DateTime;
use std::sync::Arc;

use crate::application::registry::{CommandGroup, CommandSpec, RegistryError};
use crate::domain::chain::SECONDS_PER_SLOT;
use crate::domain::traits::{ChainProvider, CommandHandler};
use crate::domain::types::{ChainError, CommandError};
use crate::strings::messages;
use crate::strings::templates::fill;

pub const NAME: &str = "block";
pub const ALIAS: &str = "b";
pub const DESCRIPTION: &str = "Block at a slot: graffiti, proposer and time";

pub const GRAFFITI: CommandSpec = CommandSpec {
    name: "graffiti",
    alias: "g",
    description: "Graffiti of the block at a slot",
    response: "Graffiti for block {}: {}",
};

pub const PROPOSER: CommandSpec = CommandSpec {
    name: "proposer",
    alias: "p",
    description: "Validator that proposed the block at a slot",
    response: "Block {} was proposed by validator {}",
};

pub const TIME: CommandSpec = CommandSpec {
    name: "time",
    alias: "t",
    description: "Wall-clock start of a slot",
    response: "Slot {} starts at {}",
};

pub struct BlockCommands {
    chain: Arc<dyn ChainProvider>,
}

pub fn group(chain: Arc<dyn ChainProvider>) -> Result<CommandGroup, RegistryError> {
    let handler = Arc::new(BlockCommands { chain });
    CommandGroup::new(
        NAME,
        ALIAS,
        DESCRIPTION,
        super::bind(&[GRAFFITI, PROPOSER, TIME], handler),
    )
}

impl BlockCommands {
    async fn slot_time(&self, slot: u64) -> Result<String, CommandError> {
        let genesis = self.chain.genesis_time().await?;
        let start = slot
            .checked_mul(SECONDS_PER_SLOT)
            .and_then(|offset| offset.checked_add(genesis))
            .and_then(|secs| i64::try_from(secs).ok())
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .ok_or_else(|| CommandError::Usage(messages::slot_out_of_range(slot)))?;
        Ok(fill(
            TIME.response,
            &[&slot, &start.format("%Y-%m-%d %H:%M:%S UTC")],
        ))
    }
}

#[async_trait]
impl CommandHandler for BlockCommands {
    async fn handle(&self, command: &str, parameters: &[String]) -> Result<String, CommandError> {
        let slot = super::single_number(parameters, "slot")?;

        if command == TIME.name {
            return self.slot_time(slot).await;
        }

        let block = match self.chain.block(slot).await {
            Ok(block) => block,
            Err(ChainError::NotFound) => return Ok(messages::no_block(slot)),
            Err(e) => return Err(e.into()),
        };

        match command {
            c if c == GRAFFITI.name => match block.graffiti_text() {
                Some(text) => Ok(fill(GRAFFITI.response, &[&slot, &text])),
                None => Ok(messages::empty_graffiti(slot)),
            },
            c if c == PROPOSER.name => Ok(fill(PROPOSER.response, &[&slot, &block.proposer_index])),
            _ => Ok(String::new()),
        }
    }
}
