use crate::config::Config;
use anyhow::{Context as _, Result};
use serenity::all::{Http, RoleId, UserId};

/// Returns whether the runner role appears in a member's role list.
pub fn holds_role(roles: &[RoleId], role_id: RoleId) -> bool {
    roles.iter().any(|r| *r == role_id)
}

pub async fn grant_runner_role(http: &Http, config: &Config, user_id: UserId) -> Result<()> {
    http.add_member_role(
        config.guild_id,
        user_id,
        config.role_id,
        Some("verified via the runner verification button"),
    )
    .await
    .with_context(|| format!("could not grant role <@&{}> to <@{user_id}>", config.role_id))
}

pub async fn revoke_runner_role(http: &Http, config: &Config, user_id: UserId) -> Result<()> {
    http.remove_member_role(
        config.guild_id,
        user_id,
        config.role_id,
        Some("unverified via the runner verification button"),
    )
    .await
    .with_context(|| {
        format!(
            "could not revoke role <@&{}> from <@{user_id}>",
            config.role_id
        )
    })
}

#[cfg(test)]
mod tests {
    use super::holds_role;
    use serenity::all::RoleId;

    #[test]
    fn finds_the_role_when_present() {
        let roles = [RoleId::new(1), RoleId::new(2), RoleId::new(3)];
        assert!(holds_role(&roles, RoleId::new(2)));
    }

    #[test]
    fn misses_the_role_when_absent() {
        let roles = [RoleId::new(1), RoleId::new(3)];
        assert!(!holds_role(&roles, RoleId::new(2)));
    }

    #[test]
    fn empty_role_list_never_holds() {
        assert!(!holds_role(&[], RoleId::new(2)));
    }
}
