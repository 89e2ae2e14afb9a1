//! Autopost gateway binary.
//!
//! Startup sequence: logging, configuration from the environment, the
//! file-backed store, the Telegram sender, then the serve loop. Missing
//! credentials are warned about and degrade the matching routes instead of
//! refusing to boot.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use autopost_broadcast::TelegramSender;
use autopost_gateway::{GatewayConfig, GatewayService};
use autopost_store::FileKvStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GatewayConfig::from_env().context("load gateway configuration")?;
    if config.bot_token.is_none() {
        warn!("TELEGRAM_BOT_TOKEN not set; broadcast and verification routes will answer 500");
    }
    if config.admin_key.is_none() {
        warn!("ADMIN_KEY not set; administrative routes are disabled");
    }

    let store = FileKvStore::open(&config.store_path);
    let sender = TelegramSender::new(config.bot_token.clone().unwrap_or_default())
        .context("build telegram client")?;

    let mut service = GatewayService::new(config, Box::new(store), Arc::new(sender))
        .context("build gateway service")?;
    service.start().await.context("run gateway")?;

    Ok(())
}
