//! # Interface Layer
//!
//! The commands users can invoke, grouped the way they are typed (`!group.command`).

pub mod commands;
