//! Builders for the Airship request payloads

use std::collections::HashMap;

use crate::create_and_send::{
    CreateAndSend, CreateAndSendAudience, CreateAndSendAudienceEntry, CreateAndSendSmsTarget,
    RESERVED_TARGET_KEYS,
};
use crate::error::AirshipError;
use crate::model::{
    Actions, AndroidOverride, AudienceSelector, DeviceType, DeviceTypes, IosOverride, MergeData,
    Notification, OpenAction, PushObject, PushTemplatePayload, SmsOverride, TemplateRef,
};

/// One modification step applied to the notification while building an
/// ad-hoc push. Steps are applied in argument order, so the last step to
/// touch a field wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOption {
    /// Set the open action to a deep link, with an optional fallback URL
    DeepLinkAction {
        url: String,
        fallback_url: Option<String>,
    },
    /// Set the open action to a web URL
    OpenUrlAction(String),
    /// Attach extra key/value data to the Android and iOS overrides, where
    /// present; SMS is never touched
    Extra(HashMap<String, String>),
    /// Set the shorten-links flag on the SMS override, where present
    ShortenLinks(bool),
}

impl PushOption {
    /// Apply this step to a notification under construction
    pub fn apply(&self, notification: &mut Notification) {
        match self {
            PushOption::DeepLinkAction { url, fallback_url } => {
                let actions = notification.actions.get_or_insert_with(Actions::default);
                actions.open = Some(OpenAction::deep_link(url, fallback_url.clone()));
            }
            PushOption::OpenUrlAction(url) => {
                let actions = notification.actions.get_or_insert_with(Actions::default);
                actions.open = Some(OpenAction::url(url));
            }
            PushOption::Extra(extra) => {
                if let Some(android) = notification.android.as_mut() {
                    android.extra = extra.clone();
                }
                if let Some(ios) = notification.ios.as_mut() {
                    ios.extra = extra.clone();
                }
            }
            PushOption::ShortenLinks(value) => {
                if let Some(sms) = notification.sms.as_mut() {
                    sms.shorten_links = *value;
                }
            }
        }
    }
}

/// Builds a "push to template" request body addressing the given channels.
/// Device types are fixed to iOS and Android.
pub fn push_template_payload(
    template_id: &str,
    channels: Vec<String>,
    substitutions: HashMap<String, String>,
) -> PushTemplatePayload {
    PushTemplatePayload {
        audience: AudienceSelector::channels(channels),
        device_types: vec![DeviceType::Ios, DeviceType::Android],
        merge_data: MergeData {
            substitutions,
            template_id: template_id.to_string(),
        },
    }
}

/// Builds a "send a push" request body. The Android and iOS overrides both
/// reference `template_id`, the substitutions become global attributes, and
/// each option is applied to the notification in order.
pub fn send_push_payload(
    template_id: &str,
    channels: Vec<String>,
    substitutions: HashMap<String, String>,
    options: &[PushOption],
) -> PushObject {
    let mut notification = Notification {
        android: Some(AndroidOverride {
            template: Some(TemplateRef::by_id(template_id)),
            ..AndroidOverride::default()
        }),
        ios: Some(IosOverride {
            template: Some(TemplateRef::by_id(template_id)),
            ..IosOverride::default()
        }),
        ..Notification::default()
    };
    for option in options {
        option.apply(&mut notification);
    }
    PushObject {
        audience: AudienceSelector::channels(channels),
        device_types: DeviceTypes::Devices(vec![DeviceType::Ios, DeviceType::Android]),
        global_attributes: substitutions,
        notification,
    }
}

/// Builds a "create and send" request body delivering a templated SMS
/// message to recipients that have no channel yet.
///
/// Every target shares the same substitutions, template and shorten-links
/// flag. Fails when `targets` is empty, or when a substitution key collides
/// with one of the target's own `ua_*` fields.
pub fn create_and_send_sms_payload(
    template_id: &str,
    substitutions: HashMap<String, String>,
    shorten_links: bool,
    targets: Vec<CreateAndSendSmsTarget>,
) -> crate::Result<CreateAndSend> {
    if targets.is_empty() {
        return Err(AirshipError::Validation(
            "must specify at least one SMS destination".to_string(),
        ));
    }
    if let Some(key) = RESERVED_TARGET_KEYS
        .iter()
        .find(|key| substitutions.contains_key(**key))
    {
        return Err(AirshipError::Validation(format!(
            "substitution key {key} collides with an SMS target field"
        )));
    }

    let entries = targets
        .into_iter()
        .map(|target| CreateAndSendAudienceEntry::new(target, substitutions.clone()))
        .collect();

    Ok(CreateAndSend {
        audience: CreateAndSendAudience {
            create_and_send: entries,
        },
        device_types: vec![DeviceType::Sms],
        notification: Notification {
            sms: Some(SmsOverride {
                template: Some(TemplateRef::by_id(template_id)),
                shorten_links,
            }),
            ..Notification::default()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use serde_json::json;

    const TEMPLATE_ID_A: &str = "template-id-a";
    const CHANNEL_A: &str = "channel-a";

    fn subs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    fn test_target() -> CreateAndSendSmsTarget {
        CreateAndSendSmsTarget {
            msisdn: "19785551212".to_string(),
            opted_in: Utc.with_ymd_and_hms(2021, 3, 27, 20, 7, 43).unwrap(),
            sender: "12062071886".to_string(),
        }
    }

    #[test]
    fn push_template_payload_shape() {
        let payload = push_template_payload(
            TEMPLATE_ID_A,
            vec![CHANNEL_A.to_string()],
            subs(&[
                ("AuthorFirstName", "The"),
                ("AuthorLastName", "Beat"),
                ("ActivityID", "2342"),
            ]),
        );
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "audience": {"channel": ["channel-a"]},
                "device_types": ["ios", "android"],
                "merge_data": {
                    "substitutions": {
                        "AuthorFirstName": "The",
                        "AuthorLastName": "Beat",
                        "ActivityID": "2342"
                    },
                    "template_id": "template-id-a"
                }
            })
        );
    }

    #[test]
    fn send_push_payload_shape() {
        let payload = send_push_payload(
            TEMPLATE_ID_A,
            vec![CHANNEL_A.to_string()],
            subs(&[
                ("AuthorFirstName", "The"),
                ("AuthorLastName", "Beat"),
                ("ActivityID", "2402"),
            ]),
            &[],
        );
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "audience": {"channel": ["channel-a"]},
                "global_attributes": {
                    "AuthorFirstName": "The",
                    "AuthorLastName": "Beat",
                    "ActivityID": "2402"
                },
                "notification": {
                    "ios": {"template": {"template_id": "template-id-a"}},
                    "android": {"template": {"template_id": "template-id-a"}}
                },
                "device_types": ["ios", "android"]
            })
        );
    }

    #[test]
    fn send_push_payload_with_action_and_extra() {
        let payload = send_push_payload(
            TEMPLATE_ID_A,
            vec![CHANNEL_A.to_string()],
            subs(&[("ActivityID", "2402")]),
            &[
                PushOption::Extra(subs(&[("shift_id", "12345")])),
                PushOption::OpenUrlAction("https://xkcd.com/{{ActivityID}}".to_string()),
            ],
        );
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "audience": {"channel": ["channel-a"]},
                "global_attributes": {"ActivityID": "2402"},
                "notification": {
                    "ios": {
                        "template": {"template_id": "template-id-a"},
                        "extra": {"shift_id": "12345"}
                    },
                    "android": {
                        "template": {"template_id": "template-id-a"},
                        "extra": {"shift_id": "12345"}
                    },
                    "actions": {
                        "open": {"type": "url", "content": "https://xkcd.com/{{ActivityID}}"}
                    }
                },
                "device_types": ["ios", "android"]
            })
        );
    }

    #[test]
    fn send_push_payload_with_deep_link() {
        let payload = send_push_payload(
            TEMPLATE_ID_A,
            vec![CHANNEL_A.to_string()],
            subs(&[("ActivityID", "2402")]),
            &[PushOption::DeepLinkAction {
                url: "deep://link".to_string(),
                fallback_url: None,
            }],
        );
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "audience": {"channel": ["channel-a"]},
                "global_attributes": {"ActivityID": "2402"},
                "notification": {
                    "ios": {"template": {"template_id": "template-id-a"}},
                    "android": {"template": {"template_id": "template-id-a"}},
                    "actions": {
                        "open": {"type": "deep_link", "content": "deep://link"}
                    }
                },
                "device_types": ["ios", "android"]
            })
        );
    }

    #[test]
    fn later_open_action_option_wins() {
        let payload = send_push_payload(
            TEMPLATE_ID_A,
            vec![CHANNEL_A.to_string()],
            HashMap::new(),
            &[
                PushOption::OpenUrlAction("https://example.com".to_string()),
                PushOption::DeepLinkAction {
                    url: "deep://link".to_string(),
                    fallback_url: None,
                },
            ],
        );
        let actions = payload.notification.actions.unwrap();
        assert_eq!(actions.open, Some(OpenAction::deep_link("deep://link", None)));

        let payload = send_push_payload(
            TEMPLATE_ID_A,
            vec![CHANNEL_A.to_string()],
            HashMap::new(),
            &[
                PushOption::DeepLinkAction {
                    url: "deep://link".to_string(),
                    fallback_url: None,
                },
                PushOption::OpenUrlAction("https://example.com".to_string()),
            ],
        );
        let actions = payload.notification.actions.unwrap();
        assert_eq!(actions.open, Some(OpenAction::url("https://example.com")));
    }

    #[test]
    fn shorten_links_option_is_a_noop_without_sms_override() {
        let payload = send_push_payload(
            TEMPLATE_ID_A,
            vec![CHANNEL_A.to_string()],
            HashMap::new(),
            &[PushOption::ShortenLinks(true)],
        );
        assert_eq!(payload.notification.sms, None);
    }

    #[test]
    fn create_and_send_sms_payload_shape() {
        let payload = create_and_send_sms_payload(
            TEMPLATE_ID_A,
            subs(&[
                ("AuthorFirstName", "The"),
                ("AuthorLastName", "Beat"),
                ("ActivityID", "2342"),
            ]),
            true,
            vec![test_target()],
        )
        .unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "audience": {
                    "create_and_send": [{
                        "ua_msisdn": "19785551212",
                        "ua_opted_in": "2021-03-27T20:07:43Z",
                        "ua_sender": "12062071886",
                        "AuthorFirstName": "The",
                        "AuthorLastName": "Beat",
                        "ActivityID": "2342"
                    }]
                },
                "device_types": ["sms"],
                "notification": {
                    "sms": {
                        "template": {"template_id": "template-id-a"},
                        "shorten_links": true
                    }
                }
            })
        );
    }

    #[test]
    fn create_and_send_sms_payload_requires_a_target() {
        let err = create_and_send_sms_payload(TEMPLATE_ID_A, HashMap::new(), false, Vec::new())
            .unwrap_err();
        assert!(matches!(err, AirshipError::Validation(_)), "{err:?}");
    }

    #[test]
    fn create_and_send_sms_payload_rejects_reserved_substitution_keys() {
        let err = create_and_send_sms_payload(
            TEMPLATE_ID_A,
            subs(&[("ua_sender", "overridden")]),
            false,
            vec![test_target()],
        )
        .unwrap_err();
        match err {
            AirshipError::Validation(message) => assert!(message.contains("ua_sender"), "{message}"),
            other => panic!("expected AirshipError::Validation, got {other:?}"),
        }
    }
}
