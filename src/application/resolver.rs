//! # Resolver
//!
//! Matches a tokenized invocation against the registry.

use crate::application::registry::{Command, CommandGroup, CommandMatch, Registry};
use crate::domain::types::ParsedInvocation;

#[derive(Debug)]
pub enum Resolution<'a> {
    GroupNotFound,
    CommandNotFound(&'a CommandGroup),
    CommandFound(&'a CommandGroup, &'a Command),
    HelpRequested(&'a CommandGroup),
}

/// Group lookup happens first; an unknown group never reaches command lookup.
pub fn resolve<'a>(registry: &'a Registry, invocation: &ParsedInvocation) -> Resolution<'a> {
    let Some(group) = registry.lookup_group(&invocation.group) else {
        return Resolution::GroupNotFound;
    };

    match group.lookup_command(&invocation.command) {
        Some(CommandMatch::Command(command)) => Resolution::CommandFound(group, command),
        Some(CommandMatch::Help) => Resolution::HelpRequested(group),
        None => Resolution::CommandNotFound(group),
    }
}
