//! Development server settings carried by a fragment.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Serve the index page for unknown routes (single-page navigation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_api_fallback: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_reload: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientOptions>,

    /// Hot module replacement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hot: Option<bool>,
}

/// Browser-side client behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOptions {
    /// Show build errors and warnings as a full-screen overlay
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<bool>,
}
