//! # Command Tokenizer
//!
//! Splits a raw chat message of the form `!group.command p1, p2` into its
//! group token, command token and parameter list.

use crate::domain::types::ParsedInvocation;

pub const SENTINEL: char = '!';
pub const GROUP_SEPARATOR: char = '.';
pub const PARAM_SEPARATOR: char = ',';

/// The message body after the sentinel, if the message starts with one.
pub fn strip_sentinel(text: &str) -> Option<&str> {
    text.strip_prefix(SENTINEL)
}

/// Returns `None` for anything that is not a `group.command` invocation.
///
/// The first whitespace character ends the command token. Parameters are
/// trimmed individually and empty slots are kept (`"a,,b"` is three
/// parameters), but a blank parameter list is zero parameters.
pub fn tokenize(text: &str) -> Option<ParsedInvocation> {
    let body = strip_sentinel(text)?;
    let (group, segment) = body.split_once(GROUP_SEPARATOR)?;
    if segment.trim().is_empty() {
        return None;
    }

    let (command, params) = match segment.find(char::is_whitespace) {
        Some(idx) => segment.split_at(idx),
        None => (segment, ""),
    };

    let parameters = if params.trim().is_empty() {
        Vec::new()
    } else {
        params
            .split(PARAM_SEPARATOR)
            .map(|p| p.trim().to_string())
            .collect()
    };

    Some(ParsedInvocation {
        group: group.to_string(),
        command: command.to_string(),
        parameters,
    })
}
