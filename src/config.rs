use crate::error::{BadEnvVarSnafu, ParseMaxConnectionsSnafu, RosterResult};
use dotenvy::var;
use secrecy::{ExposeSecret, SecretString};
use snafu::ResultExt;
use std::{env::VarError, sync::Arc};

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/myapp_db";
pub const DEFAULT_SERVER_IP: &str = "0.0.0.0:5000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 15;

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    db_config: Arc<DbConfig>,
    server_ip: String,
}

impl RuntimeConfiguration {
    pub fn new() -> RosterResult<Self> {
        Ok(Self {
            db_config: Arc::new(DbConfig::new()?),
            server_ip: var_or_default("ROSTER_SERVER_IP", DEFAULT_SERVER_IP)?,
        })
    }

    pub fn db_config(&self) -> Arc<DbConfig> {
        self.db_config.clone()
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }
}

#[derive(Debug)]
pub struct DbConfig {
    url: SecretString,
    max_connections: u32,
}

impl DbConfig {
    pub fn new() -> RosterResult<Self> {
        let url = SecretString::from(var_or_default("DATABASE_URL", DEFAULT_DATABASE_URL)?);

        let max_connections = match optional_var("ROSTER_DB_MAX_CONNECTIONS")? {
            None => DEFAULT_MAX_CONNECTIONS,
            Some(raw) => raw
                .parse()
                .context(ParseMaxConnectionsSnafu { original: raw })?,
        };

        Ok(Self {
            url,
            max_connections,
        })
    }

    pub fn get_db_url(&self) -> &str {
        self.url.expose_secret()
    }

    pub const fn max_connections(&self) -> u32 {
        self.max_connections
    }
}

/// `Ok(None)` only when `name` is unset; anything else unreadable is an error.
fn optional_var(name: &'static str) -> RosterResult<Option<String>> {
    match var(name) {
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        other => other.map(Some).context(BadEnvVarSnafu { name }),
    }
}

fn var_or_default(name: &'static str, default: &str) -> RosterResult<String> {
    Ok(optional_var(name)?.unwrap_or_else(|| default.to_string()))
}
