use crate::roles;
use crate::types::{Data, Error};
use anyhow::{Context as _, Result};
use poise::serenity_prelude::{
    self as serenity, ComponentInteraction, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use tracing::info;

pub const VERIFY_BUTTON_ID: &str = "verify";
pub const UNVERIFY_BUTTON_ID: &str = "unverify";

const GRANTED_REPLY: &str = "走者ロールを付与しました。";
const REVOKED_REPLY: &str = "走者ロールを解除しました。";
const NOT_HELD_REPLY: &str = "走者ロールは付与されていません。";

/// What a component interaction asks the bot to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Verify,
    Unverify,
}

impl ButtonAction {
    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        match custom_id {
            VERIFY_BUTTON_ID => Some(ButtonAction::Verify),
            UNVERIFY_BUTTON_ID => Some(ButtonAction::Unverify),
            _ => None,
        }
    }
}

/// Gateway event hook: routes clicks on the verification prompt's buttons.
/// Interactions from other components (unknown custom ids) are ignored.
pub async fn handle_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::InteractionCreate {
        interaction: serenity::Interaction::Component(component),
    } = event
    {
        match ButtonAction::from_custom_id(&component.data.custom_id) {
            Some(ButtonAction::Verify) => handle_verify_click(ctx, component, data).await?,
            Some(ButtonAction::Unverify) => handle_unverify_click(ctx, component, data).await?,
            None => {}
        }
    }
    Ok(())
}

async fn handle_verify_click(
    ctx: &serenity::Context,
    component: &ComponentInteraction,
    data: &Data,
) -> Result<()> {
    roles::grant_runner_role(&ctx.http, &data.config, component.user.id).await?;
    info!(
        user = %component.user.name,
        user_id = %component.user.id,
        "granted the runner role"
    );
    respond_ephemeral(ctx, component, GRANTED_REPLY).await
}

async fn handle_unverify_click(
    ctx: &serenity::Context,
    component: &ComponentInteraction,
    data: &Data,
) -> Result<()> {
    // No member data means no guild context, so the role cannot be held.
    let held = component
        .member
        .as_ref()
        .is_some_and(|m| roles::holds_role(&m.roles, data.config.role_id));

    let reply = if held {
        roles::revoke_runner_role(&ctx.http, &data.config, component.user.id).await?;
        info!(
            user = %component.user.name,
            user_id = %component.user.id,
            "revoked the runner role"
        );
        REVOKED_REPLY
    } else {
        NOT_HELD_REPLY
    };
    respond_ephemeral(ctx, component, reply).await
}

async fn respond_ephemeral(
    ctx: &serenity::Context,
    component: &ComponentInteraction,
    content: &str,
) -> Result<()> {
    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .ephemeral(true)
                    .content(content),
            ),
        )
        .await
        .context("error responding to the button interaction")
}

#[cfg(test)]
mod tests {
    use super::{ButtonAction, UNVERIFY_BUTTON_ID, VERIFY_BUTTON_ID};

    #[test]
    fn verify_id_maps_to_verify() {
        assert_eq!(
            ButtonAction::from_custom_id(VERIFY_BUTTON_ID),
            Some(ButtonAction::Verify)
        );
    }

    #[test]
    fn unverify_id_maps_to_unverify() {
        assert_eq!(
            ButtonAction::from_custom_id(UNVERIFY_BUTTON_ID),
            Some(ButtonAction::Unverify)
        );
    }

    #[test]
    fn unknown_ids_are_ignored() {
        assert_eq!(ButtonAction::from_custom_id("some_other_button"), None);
        assert_eq!(ButtonAction::from_custom_id(""), None);
    }
}
