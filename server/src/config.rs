use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::error::ConfigError;

/// Name of the feed file inside the user configuration directory
pub const APPLICATION_NAME: &str = "pseudofeed";

/// Command line flags
#[derive(Debug, Parser)]
#[command(name = "pseudofeed", version, about = "Save shared links to a JSON feed")]
pub struct Cli {
    /// Port to run the server on, with or without a leading colon
    #[arg(long, env = "PORT", default_value = "8081")]
    pub port: String,

    /// Feed document location [default: <user config dir>/pseudofeed]
    #[arg(long, env = "PSEUDOFEED_FILE")]
    pub feed_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Always starts with `:`
    pub port: String,
    pub feed_path: PathBuf,
}

impl Config {
    /// Read `.env`, then the command line and environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_cli(Cli::parse())
    }

    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let feed_path = match cli.feed_file {
            Some(path) => path,
            None => user_config_dir(|key| std::env::var_os(key))?.join(APPLICATION_NAME),
        };

        Ok(Self {
            port: normalize_port(&cli.port)?,
            feed_path,
        })
    }

    /// Address to bind, on all interfaces
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0{}", self.port)
    }
}

/// Ensure the port carries a leading colon
pub fn normalize_port(port: &str) -> Result<String, ConfigError> {
    let port = port.trim();
    if port.is_empty() || port == ":" {
        return Err(ConfigError::EmptyPort);
    }
    if port.starts_with(':') {
        Ok(port.to_string())
    } else {
        Ok(format!(":{}", port))
    }
}

/// The per-user configuration directory, following platform convention
pub fn user_config_dir(var: impl Fn(&str) -> Option<OsString>) -> Result<PathBuf, ConfigError> {
    let non_empty = |key: &str| var(key).filter(|v| !v.is_empty()).map(PathBuf::from);

    let dir = if cfg!(windows) {
        non_empty("APPDATA")
    } else if cfg!(target_os = "macos") {
        non_empty("HOME").map(|home| home.join("Library").join("Application Support"))
    } else {
        non_empty("XDG_CONFIG_HOME")
            .or_else(|| non_empty("HOME").map(|home| home.join(".config")))
    };

    dir.ok_or(ConfigError::NoConfigDir)
}
