//! Request payload model for the Airship API
//!
//! All types here are plain values: built once, serialized, discarded.
//! Unset optional fields and empty collections are omitted from the
//! serialized form entirely, never emitted as null or as an empty array.

use std::collections::HashMap;

use serde::Serialize;

/// Audience selector holding the atomic selector variants the client uses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AudienceSelector {
    #[serde(rename = "channel", skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<String>,
    #[serde(rename = "named_user", skip_serializing_if = "Vec::is_empty")]
    pub named_users: Vec<String>,
}

impl AudienceSelector {
    /// Selector addressing the given channel ids
    pub fn channels(channels: Vec<String>) -> Self {
        Self {
            channels,
            ..Self::default()
        }
    }

    /// Selector addressing the given named users
    pub fn named_users(named_users: Vec<String>) -> Self {
        Self {
            named_users,
            ..Self::default()
        }
    }
}

/// A platform the API can deliver to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Ios,
    Android,
    Sms,
}

/// Device-type selector of an ad-hoc push: every platform, or an explicit
/// list. Serializes as the bare string `"all"` or as an array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceTypes {
    All,
    Devices(Vec<DeviceType>),
}

impl Serialize for DeviceTypes {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            DeviceTypes::All => serializer.serialize_str("all"),
            DeviceTypes::Devices(devices) => devices.serialize(serializer),
        }
    }
}

/// Reference to a message template: a stored template id, or the template
/// fields given inline. Serializes as `{"template_id": ...}` or
/// `{"fields": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TemplateRef {
    #[serde(rename = "template_id")]
    ById(String),
    #[serde(rename = "fields")]
    WithFields(TemplateFields),
}

impl TemplateRef {
    /// Reference to a template already stored in Airship
    pub fn by_id(template_id: &str) -> Self {
        TemplateRef::ById(template_id.to_string())
    }
}

/// Inline template content; every item is personalizable with handlebars
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Actions performed by the SDK when a user interacts with the notification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Actions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub add_tag: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remove_tag: Vec<String>,
    // The API takes the share text under the key "string".
    #[serde(rename = "string", skip_serializing_if = "Option::is_none")]
    pub share: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<OpenAction>,
}

/// The "open" action of a notification; a notification carries at most one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum OpenAction {
    #[serde(rename = "url")]
    Url { content: String },
    #[serde(rename = "deep_link")]
    DeepLink {
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        fallback_url: Option<String>,
    },
}

impl OpenAction {
    /// Open a web URL
    pub fn url(content: &str) -> Self {
        OpenAction::Url {
            content: content.to_string(),
        }
    }

    /// Open a deep link, optionally falling back to a URL
    pub fn deep_link(content: &str, fallback_url: Option<String>) -> Self {
        OpenAction::DeepLink {
            content: content.to_string(),
            fallback_url,
        }
    }
}

/// Android-specific notification content layered onto the shared shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AndroidOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Actions>,
    /// Key/value data passed through to the device SDK
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapse_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// iOS-specific notification content layered onto the shared shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IosOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Actions>,
    /// Key/value data passed through to the device SDK
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapse_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// SMS-specific notification content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SmsOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateRef>,
    #[serde(skip_serializing_if = "is_false")]
    pub shorten_links: bool,
}

/// Shared notification shape with up to one override per platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Notification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Actions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android: Option<AndroidOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios: Option<IosOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms: Option<SmsOverride>,
}

/// The merge_data field of a push template payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeData {
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub substitutions: HashMap<String, String>,
    pub template_id: String,
}

/// Request body of the "Push to Template" endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushTemplatePayload {
    pub audience: AudienceSelector,
    pub device_types: Vec<DeviceType>,
    pub merge_data: MergeData,
}

/// Request body of the "Send a Push" endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushObject {
    pub audience: AudienceSelector,
    pub device_types: DeviceTypes,
    /// Added to the global attributes rendering namespace for this push
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub global_attributes: HashMap<String, String>,
    pub notification: Notification,
}

fn is_false(value: &bool) -> bool {
    !*value
}
