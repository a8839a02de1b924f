use std::net::SocketAddr;

use pixapi_core::error::{PixApiError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PixApiError::UnsupportedVersion);
        }
        self.server.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    /// Application listener (informational routes + `/metrics`).
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Dedicated metrics listener.
    #[serde(default = "default_metrics_listen")]
    pub metrics_listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            metrics_listen: default_metrics_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        let listen = self.parse_listen()?;
        let metrics_listen = self.parse_metrics_listen()?;
        if listen == metrics_listen {
            return Err(PixApiError::Config(
                "server.listen and server.metrics_listen must differ".into(),
            ));
        }
        Ok(())
    }

    /// Application listener as a socket address.
    pub fn parse_listen(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            PixApiError::Config(format!(
                "server.listen is not a valid socket address: {}",
                self.listen
            ))
        })
    }

    /// Metrics listener as a socket address.
    pub fn parse_metrics_listen(&self) -> Result<SocketAddr> {
        self.metrics_listen.parse().map_err(|_| {
            PixApiError::Config(format!(
                "server.metrics_listen is not a valid socket address: {}",
                self.metrics_listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:5000".into()
}
fn default_metrics_listen() -> String {
    "0.0.0.0:8000".into()
}
