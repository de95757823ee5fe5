use crate::helpers::handle_error;
use crate::interactions::{UNVERIFY_BUTTON_ID, VERIFY_BUTTON_ID};
use crate::types::Context;
use anyhow::Result;
use serenity::all::{ButtonStyle, CreateActionRow, CreateButton, CreateMessage};
use tracing::info;

const WELCOME_MESSAGE: &str = "スーパーマリオワールドRTA日本Discordサーバーへようこそ！\n\
    走者の方はボタンをクリックしてください。特定チャンネルの閲覧が可能になります。";

/// Post the runner verification prompt into the verification channel.
#[poise::command(
    prefix_command,
    slash_command,
    guild_only,
    hide_in_help,
    required_permissions = "ADMINISTRATOR",
    on_error = "handle_error"
)]
pub async fn verify(ctx: Context<'_>) -> Result<()> {
    let config = &ctx.data().config;

    let buttons = CreateActionRow::Buttons(vec![
        CreateButton::new(VERIFY_BUTTON_ID)
            .label("Verify!")
            .style(ButtonStyle::Primary),
        CreateButton::new(UNVERIFY_BUTTON_ID)
            .label("Unverify")
            .style(ButtonStyle::Secondary),
    ]);
    let prompt = CreateMessage::new()
        .content(WELCOME_MESSAGE)
        .components(vec![buttons]);

    config.channel_id.send_message(&ctx, prompt).await?;
    info!(
        user = %ctx.author().name,
        channel_id = %config.channel_id,
        "posted the verification prompt"
    );

    ctx.send(
        poise::CreateReply::default()
            .ephemeral(true)
            .content(format!("<#{}> に検証メッセージを送信しました。", config.channel_id)),
    )
    .await?;
    Ok(())
}
