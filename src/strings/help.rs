//! # Help Text
//!
//! Titles for the help listings and their markdown rendering.
//! Displayed to the user via `!help` and `!<group>.help`.

use crate::domain::types::HelpDocument;

pub const FULL_TITLE: &str = "🔭 Beacon Bot Help";
pub const FULL_DESCRIPTION: &str =
    "Use: `!group.command param1,param2`. Each group lists its commands with `!group.help`.";

pub fn group_title(name: &str) -> String {
    format!("Help for `{name}` commands")
}

pub fn group_description(name: &str, alias: &str) -> String {
    if alias.is_empty() {
        format!("Use: `!{name}.command`")
    } else {
        format!("Use: `!{name}.command` or `!{alias}.command`")
    }
}

/// Markdown rendering of a help listing
pub fn render(doc: &HelpDocument) -> String {
    let mut out = format!("**{}**\n{}\n", doc.title, doc.description);
    for entry in &doc.entries {
        if entry.alias.is_empty() {
            out.push_str(&format!("\n* `{}`: {}", entry.name, entry.description));
        } else {
            out.push_str(&format!(
                "\n* `{}` (`{}`): {}",
                entry.name, entry.alias, entry.description
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::HelpEntry;

    #[test]
    fn test_render_with_and_without_alias() {
        let doc = HelpDocument {
            title: "Title".to_string(),
            description: "Desc".to_string(),
            entries: vec![
                HelpEntry {
                    name: "graffiti".to_string(),
                    alias: "g".to_string(),
                    description: "Block graffiti".to_string(),
                },
                HelpEntry {
                    name: "time".to_string(),
                    alias: String::new(),
                    description: "Slot time".to_string(),
                },
            ],
        };
        assert_eq!(
            render(&doc),
            "**Title**\nDesc\n\n* `graffiti` (`g`): Block graffiti\n* `time`: Slot time"
        );
    }

    #[test]
    fn test_group_description() {
        assert_eq!(group_description("block", "b"), "Use: `!block.command` or `!b.command`");
        assert_eq!(group_description("block", ""), "Use: `!block.command`");
    }
}
