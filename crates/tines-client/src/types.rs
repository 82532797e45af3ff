//! Typed request shaping for the Tines API.
//!
//! The remote entities (stories, actions, notes) are opaque JSON documents
//! owned by the platform; this module only types the *requests* we build:
//! a closed set of action kinds with per-type option structs, query builders
//! for the list endpoints, and the optional-field payloads for create/update
//! calls.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// API maximum for `per_page`; larger requests are clamped.
pub const MAX_PER_PAGE: u32 = 500;

/// Canvas coordinates for an action or note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    /// Default placement for newly created actions.
    pub const ACTION_DEFAULT: Position = Position { x: 100, y: 100 };
    /// Default placement for newly created notes.
    pub const NOTE_DEFAULT: Position = Position { x: 0, y: 0 };
}

// ── action kinds ──

/// Closed set of creatable action types.
///
/// Each variant carries its own strongly-typed options structure, validated
/// before serialization, and maps to a fixed Tines agent type string.
#[derive(Debug, Clone)]
pub enum ActionKind {
    Webhook(WebhookOptions),
    EventTransform(EventTransformOptions),
    Email(EmailOptions),
    Imap(ImapOptions),
    SendToStory(SendToStoryOptions),
    Trigger(TriggerOptions),
    Group(GroupOptions),
    Llm(LlmOptions),
}

impl ActionKind {
    /// The fixed `type` string the API expects for this action kind.
    pub fn api_type(&self) -> &'static str {
        match self {
            ActionKind::Webhook(_) => "Agents::WebhookAgent",
            ActionKind::EventTransform(_) => "Agents::EventTransformationAgent",
            ActionKind::Email(_) => "Agents::EmailAgent",
            ActionKind::Imap(_) => "Agents::IMAPAgent",
            ActionKind::SendToStory(_) => "Agents::SendToStoryAgent",
            ActionKind::Trigger(_) => "Agents::TriggerAgent",
            ActionKind::Group(_) => "Agents::GroupAgent",
            ActionKind::Llm(_) => "Agents::LLMAgent",
        }
    }

    /// Serialize the per-type options object for the create payload.
    pub fn options(&self) -> ClientResult<Value> {
        let value = match self {
            ActionKind::Webhook(o) => serde_json::to_value(o)?,
            ActionKind::EventTransform(o) => serde_json::to_value(o)?,
            ActionKind::Email(o) => serde_json::to_value(o)?,
            ActionKind::Imap(o) => serde_json::to_value(o)?,
            ActionKind::SendToStory(o) => serde_json::to_value(o)?,
            ActionKind::Trigger(o) => serde_json::to_value(o)?,
            ActionKind::Group(o) => serde_json::to_value(o)?,
            ActionKind::Llm(o) => serde_json::to_value(o)?,
        };
        Ok(value)
    }
}

/// Options for a webhook trigger action.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WebhookOptions {
    /// Optional shared secret for webhook verification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Transform mode for event transformation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    Message,
    Merge,
    Implode,
    Explode,
}

impl TransformMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransformMode::Message => "message",
            TransformMode::Merge => "merge",
            TransformMode::Implode => "implode",
            TransformMode::Explode => "explode",
        }
    }
}

impl FromStr for TransformMode {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "message" => Ok(TransformMode::Message),
            "merge" => Ok(TransformMode::Merge),
            "implode" => Ok(TransformMode::Implode),
            "explode" => Ok(TransformMode::Explode),
            other => Err(ClientError::validation_error(format!(
                "Unknown transform mode '{}' (expected message, merge, implode or explode)",
                other
            ))),
        }
    }
}

/// Options for an event transformation action.
#[derive(Debug, Clone, Serialize)]
pub struct EventTransformOptions {
    pub mode: TransformMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

/// Options for an outbound email action.
#[derive(Debug, Clone, Serialize)]
pub struct EmailOptions {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub content_type: String,
    #[serde(rename = "from", skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<String>,
}

impl EmailOptions {
    /// Default MIME type for email bodies.
    pub const DEFAULT_CONTENT_TYPE: &'static str = "text/html";
}

/// Options for an inbound IMAP polling action.
#[derive(Debug, Clone, Serialize)]
pub struct ImapOptions {
    pub host: String,
    pub username: String,
    pub password: String,
    pub port: u16,
    pub ssl: bool,
    pub folder: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Value>,
}

impl ImapOptions {
    pub const DEFAULT_PORT: u16 = 993;
    pub const DEFAULT_FOLDER: &'static str = "INBOX";
}

/// Options for a send-to-story action.
#[derive(Debug, Clone, Serialize)]
pub struct SendToStoryOptions {
    /// Target story that receives the events.
    pub story_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

/// Options for a trigger (rule filter) action.
#[derive(Debug, Clone, Serialize)]
pub struct TriggerOptions {
    pub rules: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Options for a group action embedding another story.
#[derive(Debug, Clone, Serialize)]
pub struct GroupOptions {
    pub group_story_id: i64,
}

/// Options for an AI/LLM action.
#[derive(Debug, Clone, Serialize)]
pub struct LlmOptions {
    pub prompt: String,
    pub json_mode: bool,
}

// ── story list filters ──

/// Server-side story list filters documented by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryFilter {
    SendToStoryEnabled,
    HighPriority,
    ApiEnabled,
    Published,
    Favorite,
    ChangeControlEnabled,
    Disabled,
    Locked,
}

impl StoryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryFilter::SendToStoryEnabled => "SEND_TO_STORY_ENABLED",
            StoryFilter::HighPriority => "HIGH_PRIORITY",
            StoryFilter::ApiEnabled => "API_ENABLED",
            StoryFilter::Published => "PUBLISHED",
            StoryFilter::Favorite => "FAVORITE",
            StoryFilter::ChangeControlEnabled => "CHANGE_CONTROL_ENABLED",
            StoryFilter::Disabled => "DISABLED",
            StoryFilter::Locked => "LOCKED",
        }
    }
}

impl FromStr for StoryFilter {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SEND_TO_STORY_ENABLED" => Ok(StoryFilter::SendToStoryEnabled),
            "HIGH_PRIORITY" => Ok(StoryFilter::HighPriority),
            "API_ENABLED" => Ok(StoryFilter::ApiEnabled),
            "PUBLISHED" => Ok(StoryFilter::Published),
            "FAVORITE" => Ok(StoryFilter::Favorite),
            "CHANGE_CONTROL_ENABLED" => Ok(StoryFilter::ChangeControlEnabled),
            "DISABLED" => Ok(StoryFilter::Disabled),
            "LOCKED" => Ok(StoryFilter::Locked),
            other => Err(ClientError::validation_error(format!(
                "Unknown story filter '{}'",
                other
            ))),
        }
    }
}

/// Server-side story list orderings documented by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryOrder {
    Name,
    NameDesc,
    RecentlyEdited,
    LeastRecentlyEdited,
    ActionCountAsc,
    ActionCountDesc,
}

impl StoryOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryOrder::Name => "NAME",
            StoryOrder::NameDesc => "NAME_DESC",
            StoryOrder::RecentlyEdited => "RECENTLY_EDITED",
            StoryOrder::LeastRecentlyEdited => "LEAST_RECENTLY_EDITED",
            StoryOrder::ActionCountAsc => "ACTION_COUNT_ASC",
            StoryOrder::ActionCountDesc => "ACTION_COUNT_DESC",
        }
    }
}

impl FromStr for StoryOrder {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NAME" => Ok(StoryOrder::Name),
            "NAME_DESC" => Ok(StoryOrder::NameDesc),
            "RECENTLY_EDITED" => Ok(StoryOrder::RecentlyEdited),
            "LEAST_RECENTLY_EDITED" => Ok(StoryOrder::LeastRecentlyEdited),
            "ACTION_COUNT_ASC" => Ok(StoryOrder::ActionCountAsc),
            "ACTION_COUNT_DESC" => Ok(StoryOrder::ActionCountDesc),
            other => Err(ClientError::validation_error(format!(
                "Unknown story order '{}'",
                other
            ))),
        }
    }
}

/// Story mode selector for reads against a test or live story.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryMode {
    Live,
    Test,
}

impl StoryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryMode::Live => "LIVE",
            StoryMode::Test => "TEST",
        }
    }
}

impl FromStr for StoryMode {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LIVE" => Ok(StoryMode::Live),
            "TEST" => Ok(StoryMode::Test),
            other => Err(ClientError::validation_error(format!(
                "Unknown story mode '{}' (expected LIVE or TEST)",
                other
            ))),
        }
    }
}

// ── list queries ──

/// Query parameters for `GET stories`.
#[derive(Debug, Clone, Default)]
pub struct ListStoriesQuery {
    pub team_id: Option<i64>,
    pub folder_id: Option<i64>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    /// Comma separated tag names.
    pub tags: Option<String>,
    /// Server-side name search.
    pub search: Option<String>,
    pub filter: Option<StoryFilter>,
    pub order: Option<StoryOrder>,
}

impl ListStoriesQuery {
    /// Render as query pairs, clamping `per_page` to the API maximum.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_pair(&mut pairs, "team_id", self.team_id);
        push_pair(&mut pairs, "folder_id", self.folder_id);
        push_pair(&mut pairs, "per_page", self.per_page.map(|p| p.min(MAX_PER_PAGE)));
        push_pair(&mut pairs, "page", self.page);
        if let Some(tags) = &self.tags {
            pairs.push(("tags".to_string(), tags.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(filter) = self.filter {
            pairs.push(("filter".to_string(), filter.as_str().to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("order".to_string(), order.as_str().to_string()));
        }
        pairs
    }
}

/// Query parameters for `GET notes`.
#[derive(Debug, Clone, Default)]
pub struct ListNotesQuery {
    pub story_id: Option<i64>,
    pub group_id: Option<i64>,
    pub team_id: Option<i64>,
    /// Story mode; only meaningful together with `story_id`.
    pub mode: Option<StoryMode>,
    pub draft_id: Option<i64>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl ListNotesQuery {
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        push_pair(&mut pairs, "story_id", self.story_id);
        push_pair(&mut pairs, "group_id", self.group_id);
        push_pair(&mut pairs, "team_id", self.team_id);
        if let Some(mode) = self.mode {
            pairs.push(("mode".to_string(), mode.as_str().to_string()));
        }
        push_pair(&mut pairs, "draft_id", self.draft_id);
        push_pair(&mut pairs, "per_page", self.per_page.map(|p| p.min(MAX_PER_PAGE)));
        push_pair(&mut pairs, "page", self.page);
        pairs
    }
}

fn push_pair<T: std::fmt::Display>(
    pairs: &mut Vec<(String, String)>,
    key: &str,
    value: Option<T>,
) {
    if let Some(value) = value {
        pairs.push((key.to_string(), value.to_string()));
    }
}

// ── create/update payloads ──

/// Payload for `POST stories`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateStoryRequest {
    pub team_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Event retention period in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_events_for: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<bool>,
}

impl CreateStoryRequest {
    pub fn new(team_id: i64) -> Self {
        Self {
            team_id,
            name: None,
            description: None,
            keep_events_for: None,
            folder_id: None,
            tags: None,
            disabled: None,
            priority: None,
        }
    }
}

/// Payload for `PATCH stories/{id}`. All fields optional; absent fields are
/// left untouched by the API.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateStoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_tag_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_tag_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_events_for: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_to_story_access_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_to_story_access: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_team_slugs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_to_story_skill_use_requires_confirmation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_api_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_control_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_failures: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_action_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_action_ids: Option<Vec<i64>>,
}

/// Payload for `PATCH actions/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateActionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_id: Option<i64>,
}

/// Payload for `POST notes`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateNoteRequest {
    /// Note content in Markdown.
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_id: Option<i64>,
}

/// Payload for `PATCH notes/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateNoteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl UpdateNoteRequest {
    /// True when the update would carry no fields at all.
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.position.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_kind_api_type_strings() {
        let cases = [
            (
                ActionKind::Webhook(WebhookOptions::default()),
                "Agents::WebhookAgent",
            ),
            (
                ActionKind::EventTransform(EventTransformOptions {
                    mode: TransformMode::Message,
                    message: None,
                    payload: None,
                }),
                "Agents::EventTransformationAgent",
            ),
            (
                ActionKind::SendToStory(SendToStoryOptions {
                    story_id: 7,
                    payload: None,
                }),
                "Agents::SendToStoryAgent",
            ),
            (
                ActionKind::Group(GroupOptions { group_story_id: 9 }),
                "Agents::GroupAgent",
            ),
            (
                ActionKind::Llm(LlmOptions {
                    prompt: "p".into(),
                    json_mode: false,
                }),
                "Agents::LLMAgent",
            ),
        ];
        for (kind, expected) in cases {
            assert_eq!(kind.api_type(), expected);
        }
    }

    #[test]
    fn test_webhook_options_omit_missing_secret() {
        let kind = ActionKind::Webhook(WebhookOptions::default());
        assert_eq!(kind.options().unwrap(), json!({}));

        let kind = ActionKind::Webhook(WebhookOptions {
            secret: Some("s3cret".into()),
        });
        assert_eq!(kind.options().unwrap(), json!({"secret": "s3cret"}));
    }

    #[test]
    fn test_event_transform_options_shape() {
        let kind = ActionKind::EventTransform(EventTransformOptions {
            mode: TransformMode::Merge,
            message: Some("hello".into()),
            payload: None,
        });
        assert_eq!(
            kind.options().unwrap(),
            json!({"mode": "merge", "message": "hello"})
        );
    }

    #[test]
    fn test_email_options_rename_from_field() {
        let kind = ActionKind::Email(EmailOptions {
            to: "ops@example.com".into(),
            subject: "Alert".into(),
            body: "<p>hi</p>".into(),
            content_type: EmailOptions::DEFAULT_CONTENT_TYPE.into(),
            from_email: Some("noreply@example.com".into()),
            cc: None,
            bcc: None,
        });
        let options = kind.options().unwrap();
        assert_eq!(options["from"], "noreply@example.com");
        assert_eq!(options["content_type"], "text/html");
        assert!(options.get("from_email").is_none());
        assert!(options.get("cc").is_none());
    }

    #[test]
    fn test_imap_options_defaults_serialized() {
        let kind = ActionKind::Imap(ImapOptions {
            host: "imap.example.com".into(),
            username: "user".into(),
            password: "pass".into(),
            port: ImapOptions::DEFAULT_PORT,
            ssl: true,
            folder: ImapOptions::DEFAULT_FOLDER.into(),
            conditions: None,
        });
        let options = kind.options().unwrap();
        assert_eq!(options["port"], 993);
        assert_eq!(options["ssl"], true);
        assert_eq!(options["folder"], "INBOX");
    }

    #[test]
    fn test_trigger_options_shape() {
        let kind = ActionKind::Trigger(TriggerOptions {
            rules: vec![json!({"type": "regex", "value": "a+"})],
            message: None,
        });
        assert_eq!(
            kind.options().unwrap(),
            json!({"rules": [{"type": "regex", "value": "a+"}]})
        );
    }

    #[test]
    fn test_transform_mode_round_trip() {
        for (s, mode) in [
            ("message", TransformMode::Message),
            ("MERGE", TransformMode::Merge),
            ("implode", TransformMode::Implode),
            ("Explode", TransformMode::Explode),
        ] {
            assert_eq!(s.parse::<TransformMode>().unwrap(), mode);
        }
        assert!("delete".parse::<TransformMode>().is_err());
    }

    #[test]
    fn test_story_filter_parse() {
        assert_eq!(
            "HIGH_PRIORITY".parse::<StoryFilter>().unwrap(),
            StoryFilter::HighPriority
        );
        assert_eq!(
            "disabled".parse::<StoryFilter>().unwrap(),
            StoryFilter::Disabled
        );
        assert!("FROBNICATED".parse::<StoryFilter>().is_err());
    }

    #[test]
    fn test_story_order_parse() {
        assert_eq!(
            "recently_edited".parse::<StoryOrder>().unwrap(),
            StoryOrder::RecentlyEdited
        );
        assert!("SIDEWAYS".parse::<StoryOrder>().is_err());
    }

    #[test]
    fn test_story_mode_parse() {
        assert_eq!("live".parse::<StoryMode>().unwrap(), StoryMode::Live);
        assert_eq!("TEST".parse::<StoryMode>().unwrap(), StoryMode::Test);
        assert!("DRAFT".parse::<StoryMode>().is_err());
    }

    #[test]
    fn test_list_stories_query_pairs() {
        let query = ListStoriesQuery {
            team_id: Some(5),
            search: Some("phishing".into()),
            filter: Some(StoryFilter::HighPriority),
            order: Some(StoryOrder::Name),
            ..Default::default()
        };
        let pairs = query.to_query_pairs();
        assert!(pairs.contains(&("team_id".to_string(), "5".to_string())));
        assert!(pairs.contains(&("search".to_string(), "phishing".to_string())));
        assert!(pairs.contains(&("filter".to_string(), "HIGH_PRIORITY".to_string())));
        assert!(pairs.contains(&("order".to_string(), "NAME".to_string())));
    }

    #[test]
    fn test_per_page_clamped_to_api_maximum() {
        let query = ListStoriesQuery {
            per_page: Some(2000),
            ..Default::default()
        };
        assert!(query
            .to_query_pairs()
            .contains(&("per_page".to_string(), "500".to_string())));

        let query = ListNotesQuery {
            per_page: Some(9999),
            ..Default::default()
        };
        assert!(query
            .to_query_pairs()
            .contains(&("per_page".to_string(), "500".to_string())));
    }

    #[test]
    fn test_empty_query_has_no_pairs() {
        assert!(ListStoriesQuery::default().to_query_pairs().is_empty());
        assert!(ListNotesQuery::default().to_query_pairs().is_empty());
    }

    #[test]
    fn test_create_story_request_skips_absent_fields() {
        let req = CreateStoryRequest::new(42);
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"team_id": 42}));
    }

    #[test]
    fn test_update_story_request_skips_absent_fields() {
        let req = UpdateStoryRequest {
            name: Some("Renamed".into()),
            add_tag_names: Some(vec!["triage".into()]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"name": "Renamed", "add_tag_names": ["triage"]})
        );
    }

    #[test]
    fn test_update_note_request_is_empty() {
        assert!(UpdateNoteRequest::default().is_empty());
        assert!(!UpdateNoteRequest {
            content: Some("x".into()),
            position: None,
        }
        .is_empty());
    }

    #[test]
    fn test_position_serialization() {
        assert_eq!(
            serde_json::to_value(Position::ACTION_DEFAULT).unwrap(),
            json!({"x": 100, "y": 100})
        );
        assert_eq!(
            serde_json::to_value(Position::NOTE_DEFAULT).unwrap(),
            json!({"x": 0, "y": 0})
        );
    }
}
