use crate::utils::{env_var_or, optional_env_var};
use once_cell::sync::Lazy;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const LOG4RS_CONF_FILE_VAR: &str = "LOG4RS_CONFIG_FILE";

const DEFAULT_DATABASE_URL: &str = "tournament.db";

/// Built on first access, so call `dotenv::dotenv()` before touching it.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::new_from_env);

#[derive(Debug)]
pub struct Config {
    /// a sqlite path, or `:memory:`
    pub database_url: String,
    pub log4rs_config_file: Option<String>,
}

impl Config {
    fn new_from_env() -> Self {
        Self {
            database_url: env_var_or(DATABASE_URL_VAR, DEFAULT_DATABASE_URL),
            log4rs_config_file: optional_env_var(LOG4RS_CONF_FILE_VAR),
        }
    }
}
