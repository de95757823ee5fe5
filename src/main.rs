mod config;
mod helpers;
mod interactions;
mod roles;
mod types;
mod verify;

use crate::config::Config;
use crate::helpers::handle_error;
use crate::types::Data;
use crate::verify::verify;
use anyhow::{Context as _, Result};
use poise::serenity_prelude as serenity;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(error) = dotenvy::dotenv() {
        warn!(%error, "could not load .env, using the process environment as-is");
    }
    let config = Config::from_env()?;
    let token = config.token.clone();
    let guild_id = config.guild_id;

    // MESSAGE_CONTENT is needed to see the "!verify" prefix command.
    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            on_error: |err| Box::pin(handle_error(err)),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config::COMMAND_PREFIX.into()),
                case_insensitive_commands: true,
                ..Default::default()
            },
            commands: vec![verify()],
            event_handler: |ctx, event, framework, data| {
                Box::pin(interactions::handle_event(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                poise::builtins::register_in_guild(ctx, &framework.options().commands, guild_id)
                    .await?;
                info!(bot = %ready.user.name, "bot is now running");
                Ok(Data { config })
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await
        .context("could not build the Discord client")?;
    client
        .start()
        .await
        .context("the Discord client stopped with an error")
}
