//! Environment overrides.
//!
//! `PORT` is only read by the development overlay, after template discovery,
//! so a production build never looks at it.

use figment::providers::Env;
use figment::Figment;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Port the development server uses when nothing overrides it.
pub const DEFAULT_DEV_PORT: u16 = 8080;

/// Where environment overrides come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DevEnvironment {
    /// Read the process environment on demand
    Process,
    /// Fixed values; the process environment is never consulted
    Fixed { port: Option<u16> },
}

impl Default for DevEnvironment {
    /// No overrides.
    fn default() -> Self {
        Self::Fixed { port: None }
    }
}

impl DevEnvironment {
    /// The `PORT` override. Unset or empty means no override; anything else
    /// must be a port number.
    pub fn port(&self) -> Result<Option<u16>> {
        match self {
            Self::Process => read_port(),
            Self::Fixed { port } => Ok(*port),
        }
    }

    /// Environment override first, then the settings file, then the default.
    pub fn resolve_port(&self, configured: Option<u16>) -> Result<u16> {
        Ok(self.port()?.or(configured).unwrap_or(DEFAULT_DEV_PORT))
    }
}

#[derive(Deserialize)]
struct PortVar {
    #[serde(default)]
    port: Option<Value>,
}

fn read_port() -> Result<Option<u16>> {
    let vars: PortVar = Figment::from(Env::raw().only(&["port"]))
        .extract()
        .map_err(|e| ConfigError::InvalidEnvironment(e.to_string()))?;
    parse_port(vars.port)
}

fn parse_port(raw: Option<Value>) -> Result<Option<u16>> {
    let invalid = |shown: String| {
        ConfigError::InvalidEnvironment(format!("PORT must be a port number, got '{shown}'"))
    };

    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s.trim().parse().map(Some).map_err(|_| invalid(s)),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|n| u16::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| invalid(n.to_string())),
        Some(other) => Err(invalid(other.to_string())),
    }
}
