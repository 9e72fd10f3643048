//! # Command Router
//!
//! Entry point for every incoming chat message. Filters out the bot's own
//! messages and rooms outside the allow-list, answers the `ping` and `help`
//! literals, and runs everything else through tokenize → resolve → dispatch
//! before sending the outcome back to the room.

use anyhow::Result;
use std::sync::Arc;

use crate::application::dispatch::dispatch;
use crate::application::parsing::{strip_sentinel, tokenize};
use crate::application::policy::ChannelPolicy;
use crate::application::registry::Registry;
use crate::application::resolver::resolve;
use crate::domain::traits::ChatProvider;
use crate::domain::types::Outcome;
use crate::interface::commands::help;
use crate::strings::{logs, messages};

pub const PING: &str = "ping";
pub const HELP: &str = "help";

pub struct CommandRouter {
    registry: Arc<Registry>,
    policy: Arc<ChannelPolicy>,
    own_user_id: String,
}

impl CommandRouter {
    pub fn new(registry: Arc<Registry>, policy: Arc<ChannelPolicy>, own_user_id: String) -> Self {
        Self {
            registry,
            policy,
            own_user_id,
        }
    }

    pub async fn route<C>(&self, chat: &C, message: &str, sender: &str) -> Result<()>
    where
        C: ChatProvider + ?Sized,
    {
        if sender == self.own_user_id {
            return Ok(());
        }
        let room_id = chat.room_id();
        if !self.policy.is_allowed(&room_id) {
            return Ok(());
        }
        let Some(body) = strip_sentinel(message) else {
            return Ok(());
        };
        let help_allowed = self.policy.help_allowed(&room_id);

        match body {
            PING => {
                return self
                    .deliver(chat, body, Outcome::Reply(messages::PONG.to_string()))
                    .await;
            }
            HELP => {
                if help_allowed {
                    let doc = help::full_help(&self.registry);
                    return self.deliver(chat, body, Outcome::Help(doc)).await;
                }
                return Ok(());
            }
            _ => {}
        }

        let Some(invocation) = tokenize(message) else {
            tracing::debug!("{}", logs::not_a_command(message));
            return Ok(());
        };

        tracing::info!(
            "{}",
            logs::dispatching(
                &invocation.group,
                &invocation.command,
                &invocation.parameters,
                sender
            )
        );

        let resolution = resolve(&self.registry, &invocation);
        let outcome = dispatch(resolution, &invocation, help_allowed).await;
        self.deliver(chat, body, outcome).await
    }

    async fn deliver<C>(&self, chat: &C, command: &str, outcome: Outcome) -> Result<()>
    where
        C: ChatProvider + ?Sized,
    {
        let sent = match outcome {
            Outcome::Silence => return Ok(()),
            Outcome::Reply(text) | Outcome::Usage(text) => {
                chat.send_message(&text).await.map(|_| ())
            }
            Outcome::Unavailable => chat
                .send_message(messages::BACKEND_UNAVAILABLE)
                .await
                .map(|_| ()),
            Outcome::Help(doc) => chat.send_structured(&doc).await,
        };
        sent.map_err(|e| anyhow::anyhow!(logs::send_failed(command, &e)))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::application::registry::tests::sample_registry;
    use crate::domain::config::ChannelsConfig;
    use crate::domain::types::HelpDocument;
    use async_trait::async_trait;
    use std::sync::Mutex;

    pub(crate) const GENERAL: &str = "!general:example.org";
    pub(crate) const BOTS: &str = "!bots:example.org";
    const OTHER: &str = "!other:example.org";
    const BOT_USER: &str = "@beaconbot:example.org";
    const USER: &str = "@alice:example.org";

    /// Records everything sent to it.
    pub(crate) struct MockChat {
        room: String,
        pub(crate) sent: Mutex<Vec<String>>,
        pub(crate) docs: Mutex<Vec<HelpDocument>>,
        fail: bool,
    }

    impl MockChat {
        pub(crate) fn new(room: &str) -> Self {
            Self {
                room: room.to_string(),
                sent: Mutex::new(Vec::new()),
                docs: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing(room: &str) -> Self {
            Self {
                fail: true,
                ..Self::new(room)
            }
        }

        pub(crate) fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }

        pub(crate) fn docs(&self) -> Vec<HelpDocument> {
            self.docs.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatProvider for MockChat {
        async fn send_message(&self, content: &str) -> Result<String, String> {
            if self.fail {
                return Err("rate limited".to_string());
            }
            self.sent.lock().unwrap().push(content.to_string());
            Ok("$event".to_string())
        }

        async fn send_structured(&self, doc: &HelpDocument) -> Result<(), String> {
            if self.fail {
                return Err("rate limited".to_string());
            }
            self.docs.lock().unwrap().push(doc.clone());
            Ok(())
        }

        fn room_id(&self) -> String {
            self.room.clone()
        }
    }

    pub(crate) fn policy() -> Arc<ChannelPolicy> {
        Arc::new(ChannelPolicy::new(&ChannelsConfig {
            allowed: vec![GENERAL.to_string()],
            help: vec![BOTS.to_string()],
        }))
    }

    fn router() -> CommandRouter {
        CommandRouter::new(Arc::new(sample_registry()), policy(), BOT_USER.to_string())
    }

    #[tokio::test]
    async fn test_command_reply() {
        let chat = MockChat::new(GENERAL);
        router().route(&chat, "!b.g 12345", USER).await.unwrap();
        assert_eq!(chat.sent(), vec!["graffiti:12345"]);
    }

    #[tokio::test]
    async fn test_ignores_own_messages() {
        let chat = MockChat::new(GENERAL);
        router().route(&chat, "!ping", BOT_USER).await.unwrap();
        assert!(chat.sent().is_empty());
    }

    #[tokio::test]
    async fn test_ignores_other_rooms() {
        let chat = MockChat::new(OTHER);
        router().route(&chat, "!ping", USER).await.unwrap();
        router().route(&chat, "!b.g 1", USER).await.unwrap();
        assert!(chat.sent().is_empty());
    }

    #[tokio::test]
    async fn test_ignores_non_commands() {
        let chat = MockChat::new(GENERAL);
        let router = router();
        for text in ["ping", "hello", "!hello", "!block", "!b.", "!block.unknown 1", "!x.g 1"] {
            router.route(&chat, text, USER).await.unwrap();
        }
        assert!(chat.sent().is_empty());
        assert!(chat.docs().is_empty());
    }

    #[tokio::test]
    async fn test_ping() {
        for room in [GENERAL, BOTS] {
            let chat = MockChat::new(room);
            router().route(&chat, "!ping", USER).await.unwrap();
            assert_eq!(chat.sent(), vec!["Pong!"]);
        }
    }

    #[tokio::test]
    async fn test_ping_must_be_exact() {
        let chat = MockChat::new(GENERAL);
        router().route(&chat, "!ping now", USER).await.unwrap();
        router().route(&chat, "!PING", USER).await.unwrap();
        assert!(chat.sent().is_empty());
    }

    #[tokio::test]
    async fn test_full_help_only_in_help_rooms() {
        let chat = MockChat::new(GENERAL);
        router().route(&chat, "!help", USER).await.unwrap();
        assert!(chat.docs().is_empty());

        let chat = MockChat::new(BOTS);
        router().route(&chat, "!help", USER).await.unwrap();
        let docs = chat.docs();
        assert_eq!(docs.len(), 1);
        let names: Vec<_> = docs[0].entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["block", "current"]);
    }

    #[tokio::test]
    async fn test_group_help_only_in_help_rooms() {
        let chat = MockChat::new(GENERAL);
        router().route(&chat, "!block.help", USER).await.unwrap();
        assert!(chat.docs().is_empty());

        let chat = MockChat::new(BOTS);
        router().route(&chat, "!b.help", USER).await.unwrap();
        assert_eq!(chat.docs().len(), 1);
    }

    #[tokio::test]
    async fn test_send_failure_is_reported() {
        let chat = MockChat::failing(GENERAL);
        let err = router().route(&chat, "!ping", USER).await.unwrap_err();
        assert!(err.to_string().contains("rate limited"));
    }
}
