use crate::types::{Data, Error};
use serenity::all::Mentionable;
use tracing::{error, warn};

const ADMIN_ONLY_REPLY: &str = "このコマンドは管理者のみ使用できます。";

/// Shared poise error hook. A permission failure on the verify command sends
/// the public refusal instead of the prompt; everything else is logged.
pub async fn handle_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::MissingUserPermissions { ctx, .. } => {
            warn!(
                user = %ctx.author().name,
                user_id = %ctx.author().id,
                "verify command attempted by an unprivileged user"
            );
            let refusal = format!("{} {ADMIN_ONLY_REPLY}", ctx.author().mention());
            if let Err(error) = ctx.say(refusal).await {
                error!(%error, "could not send the permission refusal");
            }
        }
        other => {
            error!(error = ?other, "framework error");
            if let Err(error) = poise::builtins::on_error(other).await {
                error!(%error, "could not report the framework error");
            }
        }
    }
}
