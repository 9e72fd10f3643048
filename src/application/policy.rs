//! # Channel Policy
//!
//! Which rooms the bot listens in, and which of them may receive help listings.

use std::collections::HashSet;

use crate::domain::config::ChannelsConfig;

#[derive(Debug, Clone, Default)]
pub struct ChannelPolicy {
    allowed: HashSet<String>,
    help: HashSet<String>,
}

impl ChannelPolicy {
    pub fn new(config: &ChannelsConfig) -> Self {
        Self {
            allowed: config.allowed.iter().cloned().collect(),
            help: config.help.iter().cloned().collect(),
        }
    }

    /// Help rooms are always allowed.
    pub fn is_allowed(&self, room_id: &str) -> bool {
        self.allowed.contains(room_id) || self.help.contains(room_id)
    }

    pub fn help_allowed(&self, room_id: &str) -> bool {
        self.help.contains(room_id)
    }
}
