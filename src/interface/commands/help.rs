//! # Help Command
//!
//! Builds the listings for `!help` (every group) and `!<group>.help`
//! (the commands of one group).

use crate::application::registry::{CommandGroup, Registry};
use crate::domain::types::{HelpDocument, HelpEntry};
use crate::strings::help;

pub fn group_help(group: &CommandGroup) -> HelpDocument {
    HelpDocument {
        title: help::group_title(group.name),
        description: help::group_description(group.name, group.alias),
        entries: group
            .commands()
            .iter()
            .map(|command| HelpEntry {
                name: command.name().to_string(),
                alias: command.alias().to_string(),
                description: command.spec.description.to_string(),
            })
            .collect(),
    }
}

pub fn full_help(registry: &Registry) -> HelpDocument {
    HelpDocument {
        title: help::FULL_TITLE.to_string(),
        description: help::FULL_DESCRIPTION.to_string(),
        entries: registry
            .groups()
            .iter()
            .map(|group| HelpEntry {
                name: group.name.to_string(),
                alias: group.alias.to_string(),
                description: group.description.to_string(),
            })
            .collect(),
    }
}
