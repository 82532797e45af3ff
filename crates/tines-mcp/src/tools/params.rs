//! Parameter structs for all MCP tools.
//!
//! All parameter structs derive `Deserialize + JsonSchema` for MCP tool
//! registration. Enum-valued string fields (filters, modes) are validated in
//! the tool bodies before any network call is made.

use schemars::JsonSchema;
use serde::Deserialize;
use tines_client::types::Position;

/// Canvas coordinates accepted by the create/update tools.
#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
pub struct PositionParam {
    /// X coordinate on the storyboard canvas.
    #[schemars(description = "X coordinate on the storyboard canvas")]
    pub x: i64,
    /// Y coordinate on the storyboard canvas.
    #[schemars(description = "Y coordinate on the storyboard canvas")]
    pub y: i64,
}

impl From<PositionParam> for Position {
    fn from(p: PositionParam) -> Self {
        Position { x: p.x, y: p.y }
    }
}

// ── story tools ──

/// Parameters for the `tines_list_stories` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListStoriesParams {
    #[schemars(description = "Return stories belonging to this team")]
    pub team_id: Option<i64>,
    #[schemars(description = "Return stories in this folder")]
    pub folder_id: Option<i64>,
    #[schemars(description = "Number of results per page (max 500)")]
    pub per_page: Option<u32>,
    #[schemars(description = "Page number to return")]
    pub page: Option<u32>,
    #[schemars(description = "Comma separated list of tag names to filter by")]
    pub tags: Option<String>,
    #[schemars(description = "Search string against story name")]
    pub search: Option<String>,
    #[schemars(
        description = "Filter by: SEND_TO_STORY_ENABLED, HIGH_PRIORITY, API_ENABLED, PUBLISHED, FAVORITE, CHANGE_CONTROL_ENABLED, DISABLED, LOCKED"
    )]
    pub filter: Option<String>,
    #[schemars(
        description = "Order by: NAME, NAME_DESC, RECENTLY_EDITED, LEAST_RECENTLY_EDITED, ACTION_COUNT_ASC, ACTION_COUNT_DESC"
    )]
    pub order: Option<String>,
}

/// Parameters for the `tines_get_story` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetStoryParams {
    #[schemars(description = "ID of the story to retrieve")]
    pub story_id: i64,
    #[schemars(description = "Mode (TEST or LIVE) of the story to retrieve")]
    pub story_mode: Option<String>,
    #[schemars(description = "ID of the draft to retrieve")]
    pub draft_id: Option<i64>,
}

/// Parameters for the `tines_create_story` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateStoryParams {
    #[schemars(description = "ID of the team to which the story should be added")]
    pub team_id: i64,
    #[schemars(description = "The story name")]
    pub name: Option<String>,
    #[schemars(description = "A user-defined description of the story")]
    pub description: Option<String>,
    #[schemars(
        description = "Event retention period in seconds (e.g. 3600=1h, 86400=1d, 604800=7d, 31536000=365d)"
    )]
    pub keep_events_for: Option<i64>,
    #[schemars(description = "ID of the folder to add the story to")]
    pub folder_id: Option<i64>,
    #[schemars(description = "Array of tag names to classify the story")]
    pub tags: Option<Vec<String>>,
    #[schemars(description = "Whether the story is disabled (default: false)")]
    pub disabled: Option<bool>,
    #[schemars(description = "Whether this is a high priority story (default: false)")]
    pub priority: Option<bool>,
}

/// Parameters for the `tines_update_story` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateStoryParams {
    #[schemars(description = "ID of the story to update")]
    pub story_id: i64,
    #[schemars(description = "The story name")]
    pub name: Option<String>,
    #[schemars(description = "A user-defined description of the story")]
    pub description: Option<String>,
    #[schemars(description = "Tag names to add to the story")]
    pub add_tag_names: Option<Vec<String>>,
    #[schemars(description = "Tag names to remove from the story")]
    pub remove_tag_names: Option<Vec<String>>,
    #[schemars(description = "Event retention period in seconds")]
    pub keep_events_for: Option<i64>,
    #[schemars(description = "Whether the story is disabled from running")]
    pub disabled: Option<bool>,
    #[schemars(description = "Whether the story is locked, preventing edits")]
    pub locked: Option<bool>,
    #[schemars(description = "Whether the story runs with high priority")]
    pub priority: Option<bool>,
    #[schemars(description = "Send to story access source: STS, STS_AND_WORKBENCH, WORKBENCH or OFF")]
    pub send_to_story_access_source: Option<String>,
    #[schemars(description = "Send to story access: TEAM, GLOBAL or SPECIFIC_TEAMS")]
    pub send_to_story_access: Option<String>,
    #[schemars(description = "Slugs of teams that can send to this story")]
    pub shared_team_slugs: Option<Vec<String>>,
    #[schemars(description = "Whether workbench should ask for confirmation before running this story")]
    pub send_to_story_skill_use_requires_confirmation: Option<bool>,
    #[schemars(description = "Whether the Webhook API is enabled")]
    pub webhook_api_enabled: Option<bool>,
    #[schemars(description = "ID of the team to move the story to")]
    pub team_id: Option<i64>,
    #[schemars(description = "ID of the folder to move the story to")]
    pub folder_id: Option<i64>,
    #[schemars(description = "Whether change control is enabled")]
    pub change_control_enabled: Option<bool>,
    #[schemars(description = "ID of the draft to update")]
    pub draft_id: Option<i64>,
    #[schemars(description = "Whether failure monitoring is enabled on the story")]
    pub monitor_failures: Option<bool>,
    #[schemars(description = "ID of the entry action for send to story (webhook)")]
    pub entry_action_id: Option<i64>,
    #[schemars(description = "IDs of exit actions (event transforms)")]
    pub exit_action_ids: Option<Vec<i64>>,
}

/// Parameters for the `tines_search_stories` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchStoriesParams {
    #[schemars(description = "Search string matched against story names (case-insensitive)")]
    pub query: String,
    #[schemars(description = "Limit the search to a specific team")]
    pub team_id: Option<i64>,
    #[schemars(description = "Number of results per page (default 20)")]
    pub per_page: Option<u32>,
}

/// Parameters for the filtered story-page tools
/// (`tines_high_priority_stories`, `tines_disabled_stories`).
#[derive(Debug, Deserialize, JsonSchema)]
pub struct StoryPageParams {
    #[schemars(description = "Limit to a specific team")]
    pub team_id: Option<i64>,
    #[schemars(description = "Number of results per page (default 20)")]
    pub per_page: Option<u32>,
}

/// Parameters for the `tines_list_story_drafts` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListStoryDraftsParams {
    #[schemars(description = "ID of the story to list drafts for")]
    pub story_id: i64,
}

/// Parameters for the `tines_get_story_draft` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetStoryDraftParams {
    #[schemars(description = "ID of the story")]
    pub story_id: i64,
    #[schemars(description = "ID of the draft to retrieve")]
    pub draft_id: i64,
}

// ── action tools ──

/// Parameters for the `tines_list_story_actions` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListStoryActionsParams {
    #[schemars(description = "ID of the story to get actions from")]
    pub story_id: i64,
    #[schemars(description = "ID of the draft to get actions from")]
    pub draft_id: Option<i64>,
}

/// Parameters for the `tines_create_webhook_action` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateWebhookActionParams {
    #[schemars(description = "ID of the story to add the webhook to")]
    pub story_id: i64,
    #[schemars(description = "Name for the webhook action")]
    pub name: String,
    #[schemars(description = "Optional shared secret for webhook verification")]
    pub secret: Option<String>,
    #[schemars(description = "Position on the storyboard canvas (default x=100, y=100)")]
    pub position: Option<PositionParam>,
    #[schemars(description = "Draft to add the action to (required when change control is enabled)")]
    pub draft_id: Option<i64>,
}

/// Parameters for the `tines_create_event_transform_action` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateEventTransformActionParams {
    #[schemars(description = "ID of the story to add the action to")]
    pub story_id: i64,
    #[schemars(description = "Name for the action")]
    pub name: String,
    #[schemars(description = "Transform mode: message, merge, implode or explode (default: message)")]
    pub mode: Option<String>,
    #[schemars(description = "Message template for the transformation")]
    pub message: Option<String>,
    #[schemars(description = "Payload template for the transformation")]
    pub payload: Option<serde_json::Value>,
    #[schemars(description = "Position on the storyboard canvas (default x=100, y=100)")]
    pub position: Option<PositionParam>,
    #[schemars(description = "Draft to add the action to (required when change control is enabled)")]
    pub draft_id: Option<i64>,
}

/// Parameters for the `tines_create_email_action` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateEmailActionParams {
    #[schemars(description = "ID of the story to add the action to")]
    pub story_id: i64,
    #[schemars(description = "Name for the action")]
    pub name: String,
    #[schemars(description = "Email recipient(s)")]
    pub to: String,
    #[schemars(description = "Email subject")]
    pub subject: String,
    #[schemars(description = "Email body content")]
    pub body: String,
    #[schemars(description = "From email address")]
    pub from_email: Option<String>,
    #[schemars(description = "CC recipients")]
    pub cc: Option<String>,
    #[schemars(description = "BCC recipients")]
    pub bcc: Option<String>,
    #[schemars(description = "Content type: text/html or text/plain (default: text/html)")]
    pub content_type: Option<String>,
    #[schemars(description = "Position on the storyboard canvas (default x=100, y=100)")]
    pub position: Option<PositionParam>,
    #[schemars(description = "Draft to add the action to (required when change control is enabled)")]
    pub draft_id: Option<i64>,
}

/// Parameters for the `tines_create_imap_action` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateImapActionParams {
    #[schemars(description = "ID of the story to add the action to")]
    pub story_id: i64,
    #[schemars(description = "Name for the action")]
    pub name: String,
    #[schemars(description = "IMAP server hostname")]
    pub host: String,
    #[schemars(description = "IMAP username")]
    pub username: String,
    #[schemars(description = "IMAP password")]
    pub password: String,
    #[schemars(description = "IMAP port (default 993)")]
    pub port: Option<u16>,
    #[schemars(description = "Use an SSL connection (default true)")]
    pub ssl: Option<bool>,
    #[schemars(description = "Email folder to monitor (default INBOX)")]
    pub folder: Option<String>,
    #[schemars(description = "Email filtering conditions")]
    pub conditions: Option<serde_json::Value>,
    #[schemars(description = "Position on the storyboard canvas (default x=100, y=100)")]
    pub position: Option<PositionParam>,
    #[schemars(description = "Draft to add the action to (required when change control is enabled)")]
    pub draft_id: Option<i64>,
}

/// Parameters for the `tines_create_send_to_story_action` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateSendToStoryActionParams {
    #[schemars(description = "ID of the story to add the action to")]
    pub story_id: i64,
    #[schemars(description = "Name for the action")]
    pub name: String,
    #[schemars(description = "ID of the target story to send events to")]
    pub target_story_id: i64,
    #[schemars(description = "Data payload to send to the target story")]
    pub payload: Option<serde_json::Value>,
    #[schemars(description = "Position on the storyboard canvas (default x=100, y=100)")]
    pub position: Option<PositionParam>,
    #[schemars(description = "Draft to add the action to (required when change control is enabled)")]
    pub draft_id: Option<i64>,
}

/// Parameters for the `tines_create_trigger_action` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateTriggerActionParams {
    #[schemars(description = "ID of the story to add the action to")]
    pub story_id: i64,
    #[schemars(description = "Name for the action")]
    pub name: String,
    #[schemars(description = "List of trigger rules/conditions")]
    pub rules: Vec<serde_json::Value>,
    #[schemars(description = "Optional message to include with triggered events")]
    pub message: Option<String>,
    #[schemars(description = "Position on the storyboard canvas (default x=100, y=100)")]
    pub position: Option<PositionParam>,
    #[schemars(description = "Draft to add the action to (required when change control is enabled)")]
    pub draft_id: Option<i64>,
}

/// Parameters for the `tines_create_group_action` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateGroupActionParams {
    #[schemars(description = "ID of the story to add the action to")]
    pub story_id: i64,
    #[schemars(description = "Name for the action")]
    pub name: String,
    #[schemars(description = "ID of the story to embed as a group")]
    pub group_story_id: i64,
    #[schemars(description = "Position on the storyboard canvas (default x=100, y=100)")]
    pub position: Option<PositionParam>,
    #[schemars(description = "Draft to add the action to (required when change control is enabled)")]
    pub draft_id: Option<i64>,
}

/// Parameters for the `tines_create_llm_action` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateLlmActionParams {
    #[schemars(description = "ID of the story to add the AI action to")]
    pub story_id: i64,
    #[schemars(description = "Name for the AI action")]
    pub name: String,
    #[schemars(description = "The AI prompt to use")]
    pub prompt: String,
    #[schemars(description = "Whether to force JSON output (default: false)")]
    pub json_mode: Option<bool>,
    #[schemars(description = "Position on the storyboard canvas (default x=100, y=100)")]
    pub position: Option<PositionParam>,
    #[schemars(description = "Draft to add the action to (required when change control is enabled)")]
    pub draft_id: Option<i64>,
}

/// Parameters for the `tines_update_action` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateActionParams {
    #[schemars(description = "ID of the action to update")]
    pub action_id: i64,
    #[schemars(description = "New name for the action")]
    pub name: Option<String>,
    #[schemars(description = "New configuration options for the action")]
    pub options: Option<serde_json::Value>,
    #[schemars(description = "New position on the storyboard canvas")]
    pub position: Option<PositionParam>,
    #[schemars(description = "Draft to update the action in")]
    pub draft_id: Option<i64>,
}

/// Parameters for the `tines_delete_action` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteActionParams {
    #[schemars(description = "ID of the action to delete")]
    pub action_id: i64,
}

/// Parameters for the `tines_connect_actions` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ConnectActionsParams {
    #[schemars(description = "ID of the source action (event producer)")]
    pub source_action_id: i64,
    #[schemars(description = "ID of the target action (event receiver)")]
    pub target_action_id: i64,
    #[schemars(description = "Draft to perform the connection in")]
    pub draft_id: Option<i64>,
}

// ── note tools ──

/// Parameters for the `tines_create_note` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateNoteParams {
    #[schemars(description = "The note content in Markdown format")]
    pub content: String,
    #[schemars(description = "ID of the story to add the note to (either story_id or group_id is required)")]
    pub story_id: Option<i64>,
    #[schemars(description = "ID of the group to add the note to (either story_id or group_id is required)")]
    pub group_id: Option<i64>,
    #[schemars(description = "Position on the storyboard canvas (default x=0, y=0)")]
    pub position: Option<PositionParam>,
    #[schemars(description = "Draft to add the note to")]
    pub draft_id: Option<i64>,
}

/// Parameters for the `tines_get_note` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetNoteParams {
    #[schemars(description = "ID of the note to retrieve")]
    pub note_id: i64,
}

/// Parameters for the `tines_update_note` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateNoteParams {
    #[schemars(description = "ID of the note to update")]
    pub note_id: i64,
    #[schemars(description = "New content for the note in Markdown format")]
    pub content: Option<String>,
    #[schemars(description = "New position on the storyboard canvas")]
    pub position: Option<PositionParam>,
}

/// Parameters for the `tines_list_notes` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListNotesParams {
    #[schemars(description = "List notes for a specific story")]
    pub story_id: Option<i64>,
    #[schemars(description = "List notes for a specific group")]
    pub group_id: Option<i64>,
    #[schemars(description = "List notes for a specific team")]
    pub team_id: Option<i64>,
    #[schemars(description = "Story mode: LIVE or TEST (must be used with story_id)")]
    pub mode: Option<String>,
    #[schemars(description = "List notes for a specific draft")]
    pub draft_id: Option<i64>,
    #[schemars(description = "Number of results per page (max 500)")]
    pub per_page: Option<u32>,
    #[schemars(description = "Page number to return")]
    pub page: Option<u32>,
}

/// Parameters for the `tines_delete_note` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteNoteParams {
    #[schemars(description = "ID of the note to delete")]
    pub note_id: i64,
}
