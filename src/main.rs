//! # Main Entry Point
//!
//! Wires the bot together:
//! - Domain: Configuration, Types and Traits
//! - Infrastructure: Matrix, Beacon node client
//! - Application: Tokenizer, Registry, Resolver, Dispatcher, Router
//! - Interface: Command groups
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{
    Client, SessionMeta, SessionTokens,
    authentication::matrix::MatrixSession,
    config::SyncSettings,
    room::Room,
    ruma::{
        UserId,
        events::room::{
            member::{MembershipState, StrippedRoomMemberEvent},
            message::{MessageType, SyncRoomMessageEvent},
        },
    },
};
use std::sync::Arc;
use std::time::Duration;

use crate::application::policy::ChannelPolicy;
use crate::application::router::CommandRouter;
use crate::domain::config::{AppConfig, CONFIG_PATH};
use crate::domain::traits::ChainProvider;
use crate::infrastructure::beacon::BeaconClient;
use crate::infrastructure::matrix::MatrixService;
use crate::strings::logs;

#[derive(Debug, Parser)]
#[command(name = "beaconbot", about = "Matrix bot answering beacon chain queries")]
struct Cli {
    /// Access token of the bot account
    #[arg(long)]
    token: String,

    /// Base URL of the beacon node API
    #[arg(long)]
    api_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let config = AppConfig::load(CONFIG_PATH)?;

    // 2. Logging Setup
    let _guard = application::logging::init()?;
    tracing::info!("{}", logs::config_loaded(&config.services.matrix.user_id));

    // 3. Backend and Command Registry
    let chain: Arc<dyn ChainProvider> = Arc::new(
        BeaconClient::new(
            &cli.api_url,
            Duration::from_secs(config.backend.timeout_secs),
        )
        .context("Failed to create beacon client")?,
    );
    let registry = interface::commands::registry(chain).context("Invalid command registry")?;
    tracing::info!(
        "{}",
        logs::registry_loaded(registry.groups().len(), registry.command_count())
    );
    let registry = Arc::new(registry);
    let policy = Arc::new(ChannelPolicy::new(&config.channels));

    // 4. Matrix Setup
    let matrix = &config.services.matrix;
    let client = Client::builder()
        .homeserver_url(&matrix.homeserver)
        .build()
        .await?;

    let session = MatrixSession {
        meta: SessionMeta {
            user_id: UserId::parse(&matrix.user_id).context("Invalid Matrix user id")?,
            device_id: matrix.device_id.as_str().into(),
        },
        tokens: SessionTokens {
            access_token: cli.token.clone(),
            refresh_token: None,
        },
    };
    client
        .restore_session(session)
        .await
        .context("Failed to restore Matrix session")?;
    tracing::info!("{}", logs::LOGIN_SUCCESS);

    if let Some(name) = &matrix.display_name {
        tracing::info!("{}", logs::setting_display_name(name));
        if let Err(e) = client.account().set_display_name(Some(name.as_str())).await {
            tracing::warn!("{}", logs::set_display_name_fail(&e.to_string()));
        }
    }

    let own_user_id = client
        .user_id()
        .map(|id| id.to_string())
        .unwrap_or_else(|| matrix.user_id.clone());
    let router = Arc::new(CommandRouter::new(registry, policy.clone(), own_user_id));

    // 5. Event Handlers
    let start_time = std::time::SystemTime::now();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = router.clone();

        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            // Ignore events older than start_time
            let ts = ev.origin_server_ts();
            let event_time =
                std::time::UNIX_EPOCH + std::time::Duration::from_millis(ts.get().into());
            if event_time < start_time {
                return;
            }

            if let MessageType::Text(text_content) = &original_msg.content.msgtype {
                let chat = MatrixService::new(room);
                if let Err(e) = router
                    .route(&chat, &text_content.body, original_msg.sender.as_str())
                    .await
                {
                    tracing::error!("{}", e);
                }
            }
        }
    });

    // Handle Invites
    let invite_policy = policy.clone();
    client.add_event_handler(move |ev: StrippedRoomMemberEvent, room: Room| {
        let policy = invite_policy.clone();

        async move {
            if ev.content.membership != MembershipState::Invite {
                return;
            }
            let room_id = room.room_id().as_str().to_string();
            if !policy.is_allowed(&room_id) {
                tracing::info!("{}", logs::invite_ignored(&room_id));
                return;
            }
            tracing::info!("{}", logs::invite_received(&room_id));
            if let Err(e) = room.join().await {
                tracing::error!("{}", logs::join_invite_fail(&e.to_string()));
            }
        }
    });

    // 6. Sync until interrupted
    tracing::info!("{}", logs::SYNC_LOOP_START);
    tokio::select! {
        res = client.sync(SyncSettings::default()) => {
            if let Err(e) = res {
                tracing::error!("{}", logs::sync_loop_fail(&e.to_string()));
            }
        }
        res = tokio::signal::ctrl_c() => {
            if let Err(e) = res {
                tracing::error!("{}", logs::shutdown_fail(&e.to_string()));
            }
            tracing::info!("{}", logs::SHUTDOWN);
        }
    }

    Ok(())
}
