//! # Command Registry
//!
//! The static table of command groups the bot answers to.
//! Built once at startup and shared read-only afterwards; every name and alias
//! is indexed so lookups never scan.

use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::traits::CommandHandler;

/// Every group answers to this command with its own listing.
pub const HELP_COMMAND: &str = "help";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("command group has an empty name")]
    EmptyGroupName,
    #[error("group '{0}' has a command with an empty name")]
    EmptyCommandName(String),
    #[error("group name or alias '{0}' is registered twice")]
    DuplicateGroup(String),
    #[error("command name or alias '{token}' is registered twice in group '{group}'")]
    DuplicateCommand { group: String, token: String },
    #[error("group '{0}' defines a command shadowing the built-in help")]
    ReservedHelp(String),
}

/// Static description of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    /// Empty means no shorthand
    pub alias: &'static str,
    pub description: &'static str,
    /// Reply template with positional `{}` placeholders
    pub response: &'static str,
}

pub struct Command {
    pub spec: CommandSpec,
    handler: Arc<dyn CommandHandler>,
}

impl Command {
    pub fn new(spec: CommandSpec, handler: Arc<dyn CommandHandler>) -> Self {
        Self { spec, handler }
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn alias(&self) -> &'static str {
        self.spec.alias
    }

    pub fn handler(&self) -> &Arc<dyn CommandHandler> {
        &self.handler
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command").field("spec", &self.spec).finish()
    }
}

/// Result of a command lookup inside a group
#[derive(Debug)]
pub enum CommandMatch<'a> {
    Command(&'a Command),
    Help,
}

#[derive(Debug)]
pub struct CommandGroup {
    pub name: &'static str,
    pub alias: &'static str,
    pub description: &'static str,
    commands: Vec<Command>,
    index: HashMap<&'static str, usize>,
}

impl CommandGroup {
    pub fn new(
        name: &'static str,
        alias: &'static str,
        description: &'static str,
        commands: Vec<Command>,
    ) -> Result<Self, RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::EmptyGroupName);
        }

        let mut index = HashMap::new();
        for (pos, command) in commands.iter().enumerate() {
            if command.name().is_empty() {
                return Err(RegistryError::EmptyCommandName(name.to_string()));
            }
            for token in [command.name(), command.alias()] {
                if token.is_empty() {
                    continue;
                }
                if token == HELP_COMMAND {
                    return Err(RegistryError::ReservedHelp(name.to_string()));
                }
                if index.insert(token, pos).is_some() {
                    return Err(RegistryError::DuplicateCommand {
                        group: name.to_string(),
                        token: token.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            name,
            alias,
            description,
            commands,
            index,
        })
    }

    /// Commands in registration order
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Exact match on name or alias; `help` always resolves.
    pub fn lookup_command(&self, token: &str) -> Option<CommandMatch<'_>> {
        if token == HELP_COMMAND {
            return Some(CommandMatch::Help);
        }
        self.index
            .get(token)
            .map(|pos| CommandMatch::Command(&self.commands[*pos]))
    }
}

#[derive(Debug)]
pub struct Registry {
    groups: Vec<CommandGroup>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    pub fn new(groups: Vec<CommandGroup>) -> Result<Self, RegistryError> {
        let mut index = HashMap::new();
        for (pos, group) in groups.iter().enumerate() {
            for token in [group.name, group.alias] {
                if token.is_empty() {
                    continue;
                }
                if index.insert(token, pos).is_some() {
                    return Err(RegistryError::DuplicateGroup(token.to_string()));
                }
            }
        }
        Ok(Self { groups, index })
    }

    /// Exact, case-sensitive match on group name or alias.
    pub fn lookup_group(&self, token: &str) -> Option<&CommandGroup> {
        self.index.get(token).map(|pos| &self.groups[*pos])
    }

    pub fn groups(&self) -> &[CommandGroup] {
        &self.groups
    }

    pub fn command_count(&self) -> usize {
        self.groups.iter().map(|g| g.commands.len()).sum()
    }
}
