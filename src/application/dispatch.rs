//! # Dispatcher
//!
//! Turns a resolution into an [`Outcome`]: runs the bound handler, builds
//! help listings, and folds handler errors into user-facing outcomes.

use crate::application::resolver::Resolution;
use crate::domain::types::{CommandError, Outcome, ParsedInvocation};
use crate::interface::commands::help;

pub async fn dispatch(
    resolution: Resolution<'_>,
    invocation: &ParsedInvocation,
    help_allowed: bool,
) -> Outcome {
    match resolution {
        Resolution::GroupNotFound | Resolution::CommandNotFound(_) => Outcome::Silence,
        Resolution::HelpRequested(group) => {
            if help_allowed {
                Outcome::Help(help::group_help(group))
            } else {
                Outcome::Silence
            }
        }
        Resolution::CommandFound(_, command) => {
            let result = command
                .handler()
                .handle(command.name(), &invocation.parameters)
                .await;
            match result {
                Ok(reply) if reply.is_empty() => Outcome::Silence,
                Ok(reply) => Outcome::Reply(reply),
                Err(CommandError::Usage(msg)) => Outcome::Usage(msg),
                Err(CommandError::Backend(err)) => {
                    tracing::error!(
                        "{}",
                        crate::strings::logs::backend_failure(command.name(), &err.to_string())
                    );
                    Outcome::Unavailable
                }
            }
        }
    }
}
