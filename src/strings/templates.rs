//! # Templates
//!
//! Fills the positional `{}` placeholders of command response templates.

use std::fmt::Display;

/// Replaces each `{}` in `template` with the next argument, in order.
/// Placeholders without a matching argument are left as they are.
pub fn fill(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;

    while let Some(idx) = rest.find("{}") {
        out.push_str(&rest[..idx]);
        match args.next() {
            Some(arg) => out.push_str(&arg.to_string()),
            None => out.push_str("{}"),
        }
        rest = &rest[idx + 2..];
    }
    out.push_str(rest);
    out
}
