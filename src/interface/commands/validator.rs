//! # Validator Commands
//!
//! `!val.<cmd> <index>`: a validator's current balance and status.

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::registry::{CommandGroup, CommandSpec, RegistryError};
use crate::domain::traits::{ChainProvider, CommandHandler};
use crate::domain::types::{ChainError, CommandError};
use crate::strings::messages;
use crate::strings::templates::fill;

pub const NAME: &str = "val";
pub const ALIAS: &str = "v";
pub const DESCRIPTION: &str = "Validator by index: balance and status";

pub const BALANCE: CommandSpec = CommandSpec {
    name: "balance",
    alias: "b",
    description: "Current balance of a validator",
    response: "Validator {} has a balance of {} ETH",
};

pub const STATUS: CommandSpec = CommandSpec {
    name: "status",
    alias: "s",
    description: "Current status of a validator",
    response: "Validator {} is {}",
};

pub struct ValidatorCommands {
    chain: Arc<dyn ChainProvider>,
}

pub fn group(chain: Arc<dyn ChainProvider>) -> Result<CommandGroup, RegistryError> {
    let handler = Arc::new(ValidatorCommands { chain });
    CommandGroup::new(
        NAME,
        ALIAS,
        DESCRIPTION,
        super::bind(&[BALANCE, STATUS], handler),
    )
}

#[async_trait]
impl CommandHandler for ValidatorCommands {
    async fn handle(&self, command: &str, parameters: &[String]) -> Result<String, CommandError> {
        let index = super::single_number(parameters, "validator index")?;

        let validator = match self.chain.validator(index).await {
            Ok(validator) => validator,
            Err(ChainError::NotFound) => return Ok(messages::no_validator(index)),
            Err(e) => return Err(e.into()),
        };

        match command {
            c if c == BALANCE.name => Ok(fill(BALANCE.response, &[&index, &validator.balance_eth()])),
            c if c == STATUS.name => Ok(fill(STATUS.response, &[&index, &validator.status])),
            _ => Ok(String::new()),
        }
    }
}
