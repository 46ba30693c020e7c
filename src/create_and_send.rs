//! Create-and-send request bodies
//!
//! Create-and-send registers a one-off audience record (here: an SMS
//! recipient) and sends to it in the same request. The API wants each
//! audience entry's substitution variables as sibling keys of the fixed
//! `ua_*` target fields in one flat JSON object, so the entry serializes
//! through a hand-rolled object merge.

use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::model::{DeviceType, Notification};

/// JSON keys owned by [`CreateAndSendSmsTarget`]. Substitution keys must not
/// collide with these; the builder rejects payloads where they do.
pub const RESERVED_TARGET_KEYS: [&str; 3] = ["ua_msisdn", "ua_opted_in", "ua_sender"];

/// An SMS recipient that has not been registered as a channel yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateAndSendSmsTarget {
    /// The phone number of the mobile device
    #[serde(rename = "ua_msisdn")]
    pub msisdn: String,
    /// When the user opted in to messages from the sender
    #[serde(rename = "ua_opted_in", serialize_with = "serialize_opted_in")]
    pub opted_in: DateTime<Utc>,
    /// The long or short code the SMS messages are sent from
    #[serde(rename = "ua_sender")]
    pub sender: String,
}

// The API wants opt-in times as RFC 3339 UTC, whole seconds, trailing "Z".
fn serialize_opted_in<S>(
    opted_in: &DateTime<Utc>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&opted_in.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// One create-and-send audience entry: a target plus the substitutions
/// rendered into its template. Serializes as a single flat object holding
/// the union of the target's fields and the substitution keys; with no
/// substitutions it is exactly the target's own serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAndSendAudienceEntry {
    target: CreateAndSendSmsTarget,
    substitutions: HashMap<String, String>,
}

impl CreateAndSendAudienceEntry {
    pub fn new(target: CreateAndSendSmsTarget, substitutions: HashMap<String, String>) -> Self {
        Self {
            target,
            substitutions,
        }
    }
}

impl Serialize for CreateAndSendAudienceEntry {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Both sides are known-flat objects, so the merge is their key union.
        let mut object = match serde_json::to_value(&self.target).map_err(S::Error::custom)? {
            Value::Object(object) => object,
            other => {
                return Err(S::Error::custom(format!(
                    "SMS target serialized to {other} instead of an object"
                )))
            }
        };
        for (key, value) in &self.substitutions {
            object.insert(key.clone(), Value::String(value.clone()));
        }
        object.serialize(serializer)
    }
}

/// Wrapper producing the `{"create_and_send": [...]}` audience object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateAndSendAudience {
    pub create_and_send: Vec<CreateAndSendAudienceEntry>,
}

/// Request body of the "Create and Send" endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateAndSend {
    pub audience: CreateAndSendAudience,
    pub notification: Notification,
    pub device_types: Vec<DeviceType>,
}
