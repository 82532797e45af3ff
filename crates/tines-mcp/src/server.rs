//! MCP ServerHandler implementation for Tines.
//!
//! Exposes the Tines automation platform to LLM agents as MCP tools:
//!
//! **Stories**
//! - `tines_list_stories` — List stories with filtering, ordering and pagination
//! - `tines_get_story` — Get a story, optionally a TEST/LIVE mode or draft
//! - `tines_create_story` — Create a story in a team
//! - `tines_update_story` — Update story metadata and settings
//! - `tines_search_stories` — Search stories by name
//! - `tines_high_priority_stories` — List high priority stories
//! - `tines_disabled_stories` — List disabled stories
//! - `tines_list_story_drafts` / `tines_get_story_draft` — Change control drafts
//!
//! **Actions**
//! - `tines_list_story_actions` — List the actions of a story
//! - `tines_create_*_action` — Create webhook, event transform, email, IMAP,
//!   send-to-story, trigger, group or AI actions with typed options
//! - `tines_update_action` / `tines_delete_action` — Modify or remove actions
//! - `tines_connect_actions` — Link two actions on the storyboard
//!
//! **Notes**
//! - `tines_create_note` / `tines_get_note` / `tines_update_note` /
//!   `tines_list_notes` / `tines_delete_note` — Storyboard annotations
//!
//! Every tool performs a single authenticated API call (connect_actions reads
//! the target before patching it) and returns the platform's JSON verbatim,
//! pretty-printed, or a structured error object.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ServerHandler};

use tines_client::TinesClient;

use crate::tools::{actions, notes, stories};
use crate::tools::params::*;

/// Tines MCP server handler.
///
/// Holds a shared [`TinesClient`]; all tool state lives on the Tines tenant.
#[derive(Debug, Clone)]
pub struct TinesMcpServer {
    tool_router: ToolRouter<Self>,
    client: Arc<TinesClient>,
}

impl TinesMcpServer {
    /// Create a server over a configured client.
    pub fn new(client: Arc<TinesClient>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            client,
        }
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TinesMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "tines-mcp".to_string(),
                title: Some("Tines MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP server for the Tines automation platform: story, action, \
                     connection and note management over the Tines REST API"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Tines is a no-code automation platform. Stories are workflows made of \
                 connected actions on a storyboard canvas; notes annotate the canvas.\n\
                 Discovery: tines_list_stories / tines_search_stories, then \
                 tines_get_story and tines_list_story_actions.\n\
                 Building: tines_create_story, then tines_create_*_action for each step, \
                 then tines_connect_actions to wire source → target. Actions default to \
                 position (100, 100); pass explicit positions to lay out the canvas.\n\
                 When a story has change control enabled, pass draft_id to the create and \
                 update tools (tines_list_story_drafts shows the drafts).\n\
                 All tools return the platform's JSON verbatim, or an error object with \
                 'error' and 'message' fields (API errors also carry the HTTP 'status')."
                    .to_string(),
            ),
        }
    }
}

#[tool_router(router = tool_router)]
impl TinesMcpServer {
    // ── stories ──

    #[tool(
        name = "tines_list_stories",
        description = "List Tines stories with optional team/folder scoping, tag and name filters, server-side filter (e.g. HIGH_PRIORITY, DISABLED) and ordering, and pagination."
    )]
    pub async fn tines_list_stories(
        &self,
        Parameters(params): Parameters<ListStoriesParams>,
    ) -> String {
        stories::list_stories(&self.client, params).await
    }

    #[tool(
        name = "tines_get_story",
        description = "Get a specific Tines story by ID. Optionally select the TEST or LIVE mode variant, or a change-control draft."
    )]
    pub async fn tines_get_story(&self, Parameters(params): Parameters<GetStoryParams>) -> String {
        stories::get_story(&self.client, params).await
    }

    #[tool(
        name = "tines_create_story",
        description = "Create a new Tines story in a team, with optional name, description, folder, tags, event retention, disabled and priority flags."
    )]
    pub async fn tines_create_story(
        &self,
        Parameters(params): Parameters<CreateStoryParams>,
    ) -> String {
        stories::create_story(&self.client, params).await
    }

    #[tool(
        name = "tines_update_story",
        description = "Update a Tines story's metadata and settings: name, description, tags, retention, disabled/locked/priority flags, send-to-story access, change control, team/folder moves and more. Only provided fields are changed."
    )]
    pub async fn tines_update_story(
        &self,
        Parameters(params): Parameters<UpdateStoryParams>,
    ) -> String {
        stories::update_story(&self.client, params).await
    }

    #[tool(
        name = "tines_search_stories",
        description = "Search Tines stories by name (case-insensitive substring match), optionally limited to a team."
    )]
    pub async fn tines_search_stories(
        &self,
        Parameters(params): Parameters<SearchStoriesParams>,
    ) -> String {
        stories::search_stories(&self.client, params).await
    }

    #[tool(
        name = "tines_high_priority_stories",
        description = "List stories flagged as high priority, optionally limited to a team."
    )]
    pub async fn tines_high_priority_stories(
        &self,
        Parameters(params): Parameters<StoryPageParams>,
    ) -> String {
        stories::high_priority_stories(&self.client, params).await
    }

    #[tool(
        name = "tines_disabled_stories",
        description = "List stories that are currently disabled from running, optionally limited to a team."
    )]
    pub async fn tines_disabled_stories(
        &self,
        Parameters(params): Parameters<StoryPageParams>,
    ) -> String {
        stories::disabled_stories(&self.client, params).await
    }

    #[tool(
        name = "tines_list_story_drafts",
        description = "List the change-control drafts of a story."
    )]
    pub async fn tines_list_story_drafts(
        &self,
        Parameters(params): Parameters<ListStoryDraftsParams>,
    ) -> String {
        stories::list_story_drafts(&self.client, params).await
    }

    #[tool(
        name = "tines_get_story_draft",
        description = "Get a specific change-control draft of a story."
    )]
    pub async fn tines_get_story_draft(
        &self,
        Parameters(params): Parameters<GetStoryDraftParams>,
    ) -> String {
        stories::get_story_draft(&self.client, params).await
    }

    // ── actions ──

    #[tool(
        name = "tines_list_story_actions",
        description = "List all actions (agents) of a story, optionally from a change-control draft."
    )]
    pub async fn tines_list_story_actions(
        &self,
        Parameters(params): Parameters<ListStoryActionsParams>,
    ) -> String {
        actions::list_story_actions(&self.client, params).await
    }

    #[tool(
        name = "tines_create_webhook_action",
        description = "Create a webhook action that receives events via HTTP, with an optional verification secret."
    )]
    pub async fn tines_create_webhook_action(
        &self,
        Parameters(params): Parameters<CreateWebhookActionParams>,
    ) -> String {
        actions::create_webhook_action(&self.client, params).await
    }

    #[tool(
        name = "tines_create_event_transform_action",
        description = "Create an event transform action that reshapes events. Modes: message, merge, implode, explode (default: message)."
    )]
    pub async fn tines_create_event_transform_action(
        &self,
        Parameters(params): Parameters<CreateEventTransformActionParams>,
    ) -> String {
        actions::create_event_transform_action(&self.client, params).await
    }

    #[tool(
        name = "tines_create_email_action",
        description = "Create an action that sends an email with the given recipients, subject and body."
    )]
    pub async fn tines_create_email_action(
        &self,
        Parameters(params): Parameters<CreateEmailActionParams>,
    ) -> String {
        actions::create_email_action(&self.client, params).await
    }

    #[tool(
        name = "tines_create_imap_action",
        description = "Create an IMAP action that monitors a mailbox for incoming email (defaults: port 993, SSL, INBOX)."
    )]
    pub async fn tines_create_imap_action(
        &self,
        Parameters(params): Parameters<CreateImapActionParams>,
    ) -> String {
        actions::create_imap_action(&self.client, params).await
    }

    #[tool(
        name = "tines_create_send_to_story_action",
        description = "Create a send-to-story action that forwards events to another story."
    )]
    pub async fn tines_create_send_to_story_action(
        &self,
        Parameters(params): Parameters<CreateSendToStoryActionParams>,
    ) -> String {
        actions::create_send_to_story_action(&self.client, params).await
    }

    #[tool(
        name = "tines_create_trigger_action",
        description = "Create a trigger action that filters events by a list of rules, passing only matching events onward."
    )]
    pub async fn tines_create_trigger_action(
        &self,
        Parameters(params): Parameters<CreateTriggerActionParams>,
    ) -> String {
        actions::create_trigger_action(&self.client, params).await
    }

    #[tool(
        name = "tines_create_group_action",
        description = "Create a group action that embeds another story as a reusable block."
    )]
    pub async fn tines_create_group_action(
        &self,
        Parameters(params): Parameters<CreateGroupActionParams>,
    ) -> String {
        actions::create_group_action(&self.client, params).await
    }

    #[tool(
        name = "tines_create_llm_action",
        description = "Create an AI action that runs an LLM prompt against incoming events, optionally forcing JSON output."
    )]
    pub async fn tines_create_llm_action(
        &self,
        Parameters(params): Parameters<CreateLlmActionParams>,
    ) -> String {
        actions::create_llm_action(&self.client, params).await
    }

    #[tool(
        name = "tines_update_action",
        description = "Update an action's name, options or canvas position. Only provided fields are changed."
    )]
    pub async fn tines_update_action(
        &self,
        Parameters(params): Parameters<UpdateActionParams>,
    ) -> String {
        actions::update_action(&self.client, params).await
    }

    #[tool(
        name = "tines_delete_action",
        description = "Delete an action from its story. Returns a deletion confirmation."
    )]
    pub async fn tines_delete_action(
        &self,
        Parameters(params): Parameters<DeleteActionParams>,
    ) -> String {
        actions::delete_action(&self.client, params).await
    }

    #[tool(
        name = "tines_connect_actions",
        description = "Connect two actions so events flow from the source action to the target action. Existing links on the target are preserved."
    )]
    pub async fn tines_connect_actions(
        &self,
        Parameters(params): Parameters<ConnectActionsParams>,
    ) -> String {
        actions::connect_actions(&self.client, params).await
    }

    // ── notes ──

    #[tool(
        name = "tines_create_note",
        description = "Create a Markdown note on a story or group storyboard. Either story_id or group_id is required."
    )]
    pub async fn tines_create_note(
        &self,
        Parameters(params): Parameters<CreateNoteParams>,
    ) -> String {
        notes::create_note(&self.client, params).await
    }

    #[tool(name = "tines_get_note", description = "Get a specific note by ID.")]
    pub async fn tines_get_note(&self, Parameters(params): Parameters<GetNoteParams>) -> String {
        notes::get_note(&self.client, params).await
    }

    #[tool(
        name = "tines_update_note",
        description = "Update a note's content or canvas position. At least one field is required."
    )]
    pub async fn tines_update_note(
        &self,
        Parameters(params): Parameters<UpdateNoteParams>,
    ) -> String {
        notes::update_note(&self.client, params).await
    }

    #[tool(
        name = "tines_list_notes",
        description = "List notes, optionally scoped to a story, group, team or draft, with pagination."
    )]
    pub async fn tines_list_notes(
        &self,
        Parameters(params): Parameters<ListNotesParams>,
    ) -> String {
        notes::list_notes(&self.client, params).await
    }

    #[tool(
        name = "tines_delete_note",
        description = "Delete a note. Returns a deletion confirmation."
    )]
    pub async fn tines_delete_note(
        &self,
        Parameters(params): Parameters<DeleteNoteParams>,
    ) -> String {
        notes::delete_note(&self.client, params).await
    }
}
