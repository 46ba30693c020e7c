//! API endpoint paths and the convenience calls wiring the payload
//! builders to the transport

use std::collections::HashMap;

use crate::builders::{self, PushOption};
use crate::client::AirshipClient;
use crate::create_and_send::CreateAndSendSmsTarget;
use crate::http::Method;

/// Path of the "Push to Template" POST endpoint
pub const ENDPOINT_PUSH_TO_TEMPLATE: &str = "/api/templates/push";
/// Path of the "Send a Push" POST endpoint
pub const ENDPOINT_SEND_PUSH: &str = "/api/push";
/// Path of the "Create and Send" POST endpoint
pub const ENDPOINT_CREATE_AND_SEND: &str = "/api/create-and-send";

impl AirshipClient {
    /// Pushes a stored template to the given channels with the given
    /// substitutions
    pub async fn push_to_template(
        &self,
        template_id: &str,
        channels: Vec<String>,
        substitutions: HashMap<String, String>,
    ) -> crate::Result<()> {
        let payload = builders::push_template_payload(template_id, channels, substitutions);
        self.invoke_endpoint(Method::Post, ENDPOINT_PUSH_TO_TEMPLATE, &payload)
            .await
    }

    /// Sends an ad-hoc push referencing a stored template, with the options
    /// applied to the notification in order
    pub async fn send_push(
        &self,
        template_id: &str,
        channels: Vec<String>,
        substitutions: HashMap<String, String>,
        options: &[PushOption],
    ) -> crate::Result<()> {
        let payload = builders::send_push_payload(template_id, channels, substitutions, options);
        self.invoke_endpoint(Method::Post, ENDPOINT_SEND_PUSH, &payload)
            .await
    }

    /// Sends a templated SMS message to recipients that have no channel yet,
    /// creating their audience records in the same request
    pub async fn create_and_send_sms(
        &self,
        template_id: &str,
        substitutions: HashMap<String, String>,
        shorten_links: bool,
        targets: Vec<CreateAndSendSmsTarget>,
    ) -> crate::Result<()> {
        let payload =
            builders::create_and_send_sms_payload(template_id, substitutions, shorten_links, targets)?;
        self.invoke_endpoint(Method::Post, ENDPOINT_CREATE_AND_SEND, &payload)
            .await
    }
}
