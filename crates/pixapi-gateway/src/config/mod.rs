//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use pixapi_core::error::{PixApiError, Result};

pub use schema::{GatewayConfig, ServerSection};

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| PixApiError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

/// Load `path` if it exists, otherwise fall back to the built-in defaults.
///
/// The service runs with zero setup; only an unreadable or invalid file is
/// an error.
pub fn load_or_default(path: &str) -> Result<GatewayConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(GatewayConfig::default()),
        Err(e) => Err(PixApiError::Internal(format!("read config failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| PixApiError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
