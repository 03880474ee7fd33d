//! Configuration model loaded from external sources.

use serde::Deserialize;

/// Basic configuration shared by the CLI and the HTTP backend.
#[derive(Clone, Debug, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the REST backend, including its `/api` prefix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Bearer credential obtained at login; requests go out unauthenticated
    /// when absent.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Directory downloads are written into; defaults to the working
    /// directory.
    #[serde(default)]
    pub download_dir: Option<String>,
}

fn default_api_base_url() -> String {
    "http://localhost:5000/api".to_string()
}
