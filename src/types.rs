use crate::config::Config;

#[derive(Debug)]
pub struct Data {
    pub config: Config,
}

pub type Error = anyhow::Error;
pub type Context<'a> = poise::Context<'a, Data, Error>;
