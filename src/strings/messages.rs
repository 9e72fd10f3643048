//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.
//! Includes usage errors and backend failure notices.

pub const PONG: &str = "Pong!";
pub const BACKEND_UNAVAILABLE: &str = "⚠️ Beacon node is temporarily unavailable, try again later.";

pub fn expected_numeric(what: &str, got: usize) -> String {
    format!("Expected 1 numeric parameter ({what}), got {got}")
}

pub fn not_a_number(what: &str, value: &str) -> String {
    format!("Expected a numeric {what}, got `{value}`")
}

pub fn no_block(slot: u64) -> String {
    format!("No block found for slot {slot}")
}

pub fn no_state(slot: u64) -> String {
    format!("No state found for slot {slot}")
}

pub fn no_validator(index: u64) -> String {
    format!("No validator found with index {index}")
}

pub fn empty_graffiti(slot: u64) -> String {
    format!("Graffiti for block {slot} is empty")
}

pub fn slot_out_of_range(slot: u64) -> String {
    format!("Slot {slot} is out of range")
}
