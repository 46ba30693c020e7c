//! Client library for the Airship (Urban Airship) push notification REST API
//!
//! Builds the JSON request bodies for template pushes, ad-hoc pushes with
//! per-platform overrides, and create-and-send SMS delivery, and posts them
//! with the vendor's authentication and content negotiation headers.

pub mod builders;
pub mod client;
pub mod config;
pub mod create_and_send;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod model;

pub use client::AirshipClient;
pub use config::{AuthConfig, ClientConfig, BASE_URL};
pub use error::{AirshipError, Result};
