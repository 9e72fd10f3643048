//! # Command Handlers
//!
//! One module per command group (`current`, `state`, `val`, `block`), plus the
//! help listings. Each group binds its commands to a handler holding the
//! beacon backend; [`registry`] assembles them into the bot's registry.

pub mod block;
pub mod current;
pub mod help;
pub mod state;
pub mod validator;

use std::sync::Arc;

use crate::application::registry::{Command, CommandSpec, Registry, RegistryError};
use crate::domain::traits::{ChainProvider, CommandHandler};
use crate::domain::types::CommandError;
use crate::strings::messages;

/// The full command registry, in help-listing order.
pub fn registry(chain: Arc<dyn ChainProvider>) -> Result<Registry, RegistryError> {
    Registry::new(vec![
        current::group(chain.clone())?,
        state::group(chain.clone())?,
        validator::group(chain.clone())?,
        block::group(chain)?,
    ])
}

fn bind(specs: &[CommandSpec], handler: Arc<dyn CommandHandler>) -> Vec<Command> {
    specs
        .iter()
        .map(|spec| Command::new(*spec, handler.clone()))
        .collect()
}

/// Exactly one unsigned decimal parameter.
fn single_number(parameters: &[String], what: &str) -> Result<u64, CommandError> {
    match parameters {
        [value] => value
            .parse::<u64>()
            .map_err(|_| CommandError::Usage(messages::not_a_number(what, value))),
        _ => Err(CommandError::Usage(messages::expected_numeric(
            what,
            parameters.len(),
        ))),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::application::registry::CommandMatch;
    use crate::domain::chain::{BlockInfo, Committee, FinalityInfo, HeadInfo, ValidatorInfo};
    use crate::domain::types::ChainError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory beacon node. Missing entries answer `NotFound`,
    /// `down` makes every call fail at the transport level.
    #[derive(Default)]
    pub(crate) struct FakeChain {
        pub(crate) head: Option<HeadInfo>,
        pub(crate) finality: HashMap<String, FinalityInfo>,
        pub(crate) blocks: HashMap<u64, BlockInfo>,
        pub(crate) genesis_time: u64,
        pub(crate) committees: HashMap<u64, Vec<Committee>>,
        pub(crate) validators: HashMap<u64, ValidatorInfo>,
        pub(crate) down: bool,
        pub(crate) calls: AtomicUsize,
    }

    impl FakeChain {
        fn check(&self) -> Result<(), ChainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.down {
                return Err(ChainError::Transport("connection refused".to_string()));
            }
            Ok(())
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChainProvider for FakeChain {
        async fn head(&self) -> Result<HeadInfo, ChainError> {
            self.check()?;
            self.head.clone().ok_or(ChainError::NotFound)
        }

        async fn finality(&self, state_id: &str) -> Result<FinalityInfo, ChainError> {
            self.check()?;
            self.finality.get(state_id).cloned().ok_or(ChainError::NotFound)
        }

        async fn block(&self, slot: u64) -> Result<BlockInfo, ChainError> {
            self.check()?;
            self.blocks.get(&slot).cloned().ok_or(ChainError::NotFound)
        }

        async fn genesis_time(&self) -> Result<u64, ChainError> {
            self.check()?;
            Ok(self.genesis_time)
        }

        async fn committees(&self, slot: u64) -> Result<Vec<Committee>, ChainError> {
            self.check()?;
            self.committees.get(&slot).cloned().ok_or(ChainError::NotFound)
        }

        async fn validator(&self, index: u64) -> Result<ValidatorInfo, ChainError> {
            self.check()?;
            self.validators.get(&index).cloned().ok_or(ChainError::NotFound)
        }
    }

    pub(crate) fn params(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    pub(crate) fn usage(result: Result<String, CommandError>) -> String {
        match result {
            Err(CommandError::Usage(msg)) => msg,
            other => panic!("expected usage error, got {other:?}"),
        }
    }

    #[test]
    fn test_single_number() {
        assert_eq!(single_number(&params(&["12345"]), "slot").unwrap(), 12345);
        assert_eq!(
            usage(single_number(&params(&[]), "slot").map(|n| n.to_string())),
            "Expected 1 numeric parameter (slot), got 0"
        );
        assert_eq!(
            usage(single_number(&params(&["1", "2"]), "slot").map(|n| n.to_string())),
            "Expected 1 numeric parameter (slot), got 2"
        );
        assert_eq!(
            usage(single_number(&params(&["abc"]), "slot").map(|n| n.to_string())),
            "Expected a numeric slot, got `abc`"
        );
        assert!(single_number(&params(&["-1"]), "slot").is_err());
        assert!(single_number(&params(&[""]), "slot").is_err());
    }

    #[test]
    fn test_registry_builds() {
        let registry = registry(Arc::new(FakeChain::default())).unwrap();
        let names: Vec<_> = registry.groups().iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["current", "state", "val", "block"]);
        assert_eq!(registry.command_count(), 11);
    }

    #[test]
    fn test_every_alias_pair_matches_canonical() {
        let registry = registry(Arc::new(FakeChain::default())).unwrap();
        for group in registry.groups() {
            for command in group.commands() {
                let by_alias = registry
                    .lookup_group(group.alias)
                    .and_then(|g| g.lookup_command(command.alias()));
                let by_name = registry
                    .lookup_group(group.name)
                    .and_then(|g| g.lookup_command(command.name()));
                match (by_alias, by_name) {
                    (Some(CommandMatch::Command(a)), Some(CommandMatch::Command(b))) => {
                        assert!(std::ptr::eq(a, b), "{}.{}", group.name, command.name())
                    }
                    _ => panic!("{}.{} did not resolve", group.name, command.name()),
                }
            }
        }
    }
}
