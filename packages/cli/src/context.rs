//! Command context
//!
//! Wires the client crate against the saved CLI configuration and the
//! on-disk session. Commands receive explicit handles; there is no
//! ambient global client.

use anyhow::{bail, Result};
use std::sync::Arc;

use agentdeck_client::{
    AgentApi, ApiClient, AuthApi, AuthSession, DeployApi, RouteAccess, RouteGuard, TokenStore,
};

use crate::config::Config;
use crate::session::SessionFile;

pub struct Context {
    pub config: Config,
    pub tokens: TokenStore,
    client: ApiClient,
}

impl Context {
    /// Build from the saved config and session files.
    pub fn load() -> Result<Self> {
        let config = Config::load()?;
        let tokens = TokenStore::new(Arc::new(SessionFile::open_default()?));
        let client = ApiClient::new(config.api_url(), tokens.clone());
        Ok(Self {
            config,
            tokens,
            client,
        })
    }

    /// Gate a protected command behind the route guard.
    pub fn require_auth(&self, command: &str) -> Result<()> {
        match RouteGuard::new(self.tokens.clone()).check(command) {
            RouteAccess::Allow => Ok(()),
            RouteAccess::Redirect { .. } => {
                bail!("Not logged in. Run `agentdeck login` first.")
            }
        }
    }

    pub fn auth_session(&self) -> AuthSession {
        AuthSession::new(self.auth(), self.tokens.clone())
    }

    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.client.clone())
    }

    pub fn agents(&self) -> AgentApi {
        AgentApi::new(self.client.clone())
    }

    pub fn deployments(&self) -> DeployApi {
        DeployApi::new(self.client.clone())
    }
}
