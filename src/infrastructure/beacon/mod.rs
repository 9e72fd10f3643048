//! # Beacon Backend
//!
//! HTTP client for the Ethereum Beacon Node API and its wire types.

mod client;
mod types;

pub use client::BeaconClient;
