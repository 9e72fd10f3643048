//! # Application Layer
//!
//! Contains the command pipeline of the bot: tokenizing, the command registry,
//! resolution, dispatch, channel policy and the router tying them together.

pub mod dispatch;
pub mod logging;
pub mod parsing;
pub mod policy;
pub mod registry;
pub mod resolver;
pub mod router;
