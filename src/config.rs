use anyhow::{Context as _, Result};
use serenity::all::{ChannelId, GuildId, RoleId};

pub const COMMAND_PREFIX: &str = "!";

/// Everything the bot needs from the environment, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    pub role_id: RoleId,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            token: require("DISCORD_TOKEN")?,
            guild_id: GuildId::new(parse_snowflake("GUILD_ID", &require("GUILD_ID")?)?),
            channel_id: ChannelId::new(parse_snowflake("CHANNEL_ID", &require("CHANNEL_ID")?)?),
            role_id: RoleId::new(parse_snowflake(
                "RUNNER_ROLE_ID",
                &require("RUNNER_ROLE_ID")?,
            )?),
        })
    }
}

fn require(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("missing environment variable `{name}`"))
}

/// Parses a Discord snowflake id, rejecting zero (serenity ids panic on 0).
fn parse_snowflake(name: &str, value: &str) -> Result<u64> {
    let id: u64 = value
        .parse()
        .with_context(|| format!("`{name}` is not a valid id: `{value}`"))?;
    anyhow::ensure!(id != 0, "`{name}` must be a nonzero id");
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::parse_snowflake;

    #[test]
    fn parses_a_valid_snowflake() {
        assert_eq!(
            parse_snowflake("GUILD_ID", "760915616793755669").unwrap(),
            760915616793755669
        );
    }

    #[test]
    fn rejects_non_numeric_values() {
        let err = parse_snowflake("GUILD_ID", "not-a-number").unwrap_err();
        assert!(err.to_string().contains("GUILD_ID"));
    }

    #[test]
    fn rejects_zero() {
        assert!(parse_snowflake("RUNNER_ROLE_ID", "0").is_err());
    }

    #[test]
    fn rejects_empty_values() {
        assert!(parse_snowflake("CHANNEL_ID", "").is_err());
    }
}
