//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (ChatProvider, ChainProvider).

pub mod beacon;
pub mod matrix;
