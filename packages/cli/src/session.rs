//! Session file storage
//!
//! File-backed session storage so credentials survive between command
//! invocations. Implements the client crate's `SessionStorage` over a
//! TOML file at ~/.agentdeck/session.toml.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::warn;

use agentdeck_client::SessionStorage;

use crate::config::Config;

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionData {
    #[serde(flatten)]
    values: BTreeMap<String, String>,
}

pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Session file under the CLI state directory.
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(Config::dir()?.join("session.toml")))
    }

    fn read(&self) -> SessionData {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return SessionData::default();
        };
        toml::from_str(&content).unwrap_or_default()
    }

    fn write(&self, data: &SessionData) {
        if let Err(err) = self.try_write(data) {
            warn!(error = %err, path = %self.path.display(), "failed to persist session");
        }
    }

    fn try_write(&self, data: &SessionData) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(data)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl SessionStorage for SessionFile {
    fn get(&self, key: &str) -> Option<String> {
        self.read().values.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut data = self.read();
        data.values.insert(key.to_string(), value.to_string());
        self.write(&data);
    }

    fn remove(&self, key: &str) {
        let mut data = self.read();
        if data.values.remove(key).is_some() {
            self.write(&data);
        }
    }
}
