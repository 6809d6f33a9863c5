use crate::error::Error;
use std::path::PathBuf;

const WEBHOOK_VAR: &str = "GOOGLE_CHAT_WEBHOOK";
const USER_ID_VAR: &str = "USER_ID";
const PHRASES_FILE: &str = "phrases.txt";

#[derive(Debug, Clone)]
pub struct Config {
    pub webhook_url: String,
    pub user_id: String,
    pub phrases_file: PathBuf,
}

pub fn get_config() -> Result<Config, Error> {
    config_from(|key| std::env::var(key).ok())
}

/// Builds a [`Config`] from an arbitrary variable lookup. Empty values are
/// treated the same as unset ones.
pub fn config_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, Error> {
    let required = |key: &'static str| {
        lookup(key)
            .filter(|value| !value.is_empty())
            .ok_or(Error::MissingConfig(key))
    };

    let webhook_url = required(WEBHOOK_VAR)?;
    let user_id = required(USER_ID_VAR)?;

    Ok(Config {
        webhook_url,
        user_id,
        phrases_file: PathBuf::from(PHRASES_FILE),
    })
}
