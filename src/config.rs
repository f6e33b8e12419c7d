use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides `server_url`
pub const SERVER_ENV: &str = "IEM_RECO_SERVER";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend origin, e.g. `http://localhost:5000`
    pub server_url: String,
    /// Prefix for image paths; relative roots are joined to `server_url`
    pub static_root: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:5000".into(),
            static_root: "/static/".into(),
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("iem-reco").join("config.json"))
    }

    /// Server to talk to: command line, then environment, then file
    pub fn resolve_server(&self, cli_server: Option<&str>) -> String {
        if let Some(s) = cli_server {
            return s.to_string();
        }
        // Environment before file
        if let Ok(s) = std::env::var(SERVER_ENV) {
            if !s.trim().is_empty() {
                return s;
            }
        }
        self.server_url.clone()
    }

    pub fn set_server_url(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CliError::InvalidServerUrl(url));
        }
        self.server_url = url.trim_end_matches('/').to_string();
        Ok(())
    }

    /// Static root as an absolute URL on `server`
    pub fn static_root_on(&self, server: &str) -> String {
        if self.static_root.starts_with("http://") || self.static_root.starts_with("https://") {
            self.static_root.clone()
        } else {
            format!(
                "{}/{}",
                server.trim_end_matches('/'),
                self.static_root.trim_start_matches('/')
            )
        }
    }
}
