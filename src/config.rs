//! Client configuration types

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Base of the API endpoints
pub const BASE_URL: &str = "https://go.urbanairship.com";

/// Configuration for an [`AirshipClient`](crate::AirshipClient)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub auth: AuthConfig,
}

impl ClientConfig {
    /// Config using HTTP Basic auth with an app key and master secret
    pub fn basic(app_key: &str, master_secret: &str) -> Self {
        Self {
            base_url: default_base_url(),
            auth: AuthConfig::Basic {
                app_key: app_key.to_string(),
                master_secret: master_secret.to_string(),
            },
        }
    }

    /// Config using a bearer token
    pub fn bearer(token: &str) -> Self {
        Self {
            base_url: default_base_url(),
            auth: AuthConfig::Bearer {
                token: token.to_string(),
            },
        }
    }
}

/// Authentication scheme with tagged enum for extensibility
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthConfig {
    #[serde(rename = "basic")]
    Basic {
        app_key: String,
        master_secret: String,
    },
    #[serde(rename = "bearer")]
    Bearer { token: String },
}

impl AuthConfig {
    /// The Authorization header value for this scheme
    pub fn header_value(&self) -> String {
        match self {
            AuthConfig::Basic {
                app_key,
                master_secret,
            } => format!(
                "Basic {}",
                STANDARD.encode(format!("{app_key}:{master_secret}"))
            ),
            AuthConfig::Bearer { token } => format!("Bearer {token}"),
        }
    }
}

fn default_base_url() -> String {
    BASE_URL.to_string()
}
