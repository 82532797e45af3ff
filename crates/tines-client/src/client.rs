//! The Tines API operation surface.
//!
//! `TinesClient` maps each remote operation to one transport call (the sole
//! exception is [`TinesClient::connect_actions`], which reads the target
//! action before patching its sources, as the platform API requires). The
//! client holds no state beyond the transport handle; responses are returned
//! as the raw JSON documents the platform owns.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{json, Value};

use crate::config::TinesConfig;
use crate::error::{ClientError, ClientResult};
use crate::transport::{ApiTransport, HttpTransport};
use crate::types::{
    ActionKind, CreateNoteRequest, CreateStoryRequest, ListNotesQuery, ListStoriesQuery,
    Position, StoryMode, UpdateActionRequest, UpdateNoteRequest, UpdateStoryRequest,
};

/// Default page size for story searches.
pub const DEFAULT_SEARCH_PER_PAGE: u32 = 20;

const NO_QUERY: &[(String, String)] = &[];

/// Stateless client over an [`ApiTransport`].
#[derive(Debug, Clone)]
pub struct TinesClient {
    transport: Arc<dyn ApiTransport>,
}

impl TinesClient {
    /// Wrap an existing transport (production or mock).
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Build a client with the reqwest transport from resolved configuration.
    pub fn from_config(config: Arc<TinesConfig>) -> ClientResult<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new(config)?)))
    }

    // ── stories ──

    /// `GET stories` with optional server-side filtering and pagination.
    pub async fn list_stories(&self, query: &ListStoriesQuery) -> ClientResult<Value> {
        self.transport
            .request(Method::GET, "stories", &query.to_query_pairs(), None)
            .await
    }

    /// `GET stories/{id}`, optionally selecting a mode or draft.
    pub async fn get_story(
        &self,
        story_id: i64,
        story_mode: Option<StoryMode>,
        draft_id: Option<i64>,
    ) -> ClientResult<Value> {
        let mut pairs = Vec::new();
        if let Some(mode) = story_mode {
            pairs.push(("story_mode".to_string(), mode.as_str().to_string()));
        }
        if let Some(draft_id) = draft_id {
            pairs.push(("draft_id".to_string(), draft_id.to_string()));
        }
        self.transport
            .request(Method::GET, &format!("stories/{story_id}"), &pairs, None)
            .await
    }

    /// `POST stories`.
    pub async fn create_story(&self, request: &CreateStoryRequest) -> ClientResult<Value> {
        let body = serde_json::to_value(request)?;
        self.transport
            .request(Method::POST, "stories", NO_QUERY, Some(&body))
            .await
    }

    /// `PATCH stories/{id}`.
    pub async fn update_story(
        &self,
        story_id: i64,
        request: &UpdateStoryRequest,
    ) -> ClientResult<Value> {
        let body = serde_json::to_value(request)?;
        self.transport
            .request(
                Method::PATCH,
                &format!("stories/{story_id}"),
                NO_QUERY,
                Some(&body),
            )
            .await
    }

    /// Search stories by name.
    ///
    /// The `search` parameter is passed through for server-side narrowing
    /// (which keeps pagination meaningful), and the returned page is filtered
    /// again locally with a case-insensitive substring match so the contract
    /// holds regardless of the server's matching rules.
    pub async fn search_stories(
        &self,
        query: &str,
        team_id: Option<i64>,
        per_page: Option<u32>,
    ) -> ClientResult<Value> {
        let list_query = ListStoriesQuery {
            team_id,
            per_page: per_page.or(Some(DEFAULT_SEARCH_PER_PAGE)),
            search: Some(query.to_string()),
            ..Default::default()
        };
        let mut response = self.list_stories(&list_query).await?;

        match &mut response {
            Value::Object(map) => {
                let filtered = match map.get("stories") {
                    Some(Value::Array(stories)) => Some(filter_stories_by_name(stories, query)),
                    _ => None,
                };
                if let Some(filtered) = filtered {
                    map.insert("stories".to_string(), Value::Array(filtered));
                }
            }
            Value::Array(stories) => {
                let filtered = filter_stories_by_name(stories, query);
                return Ok(Value::Array(filtered));
            }
            _ => {}
        }
        Ok(response)
    }

    // ── drafts ──

    /// `GET stories/{id}/drafts`.
    pub async fn list_story_drafts(&self, story_id: i64) -> ClientResult<Value> {
        self.transport
            .request(
                Method::GET,
                &format!("stories/{story_id}/drafts"),
                NO_QUERY,
                None,
            )
            .await
    }

    /// `GET stories/{id}/drafts/{draft_id}`.
    pub async fn get_story_draft(&self, story_id: i64, draft_id: i64) -> ClientResult<Value> {
        self.transport
            .request(
                Method::GET,
                &format!("stories/{story_id}/drafts/{draft_id}"),
                NO_QUERY,
                None,
            )
            .await
    }

    // ── actions ──

    /// `GET agents?story_id=…` — all actions of a story.
    pub async fn list_story_actions(
        &self,
        story_id: i64,
        draft_id: Option<i64>,
    ) -> ClientResult<Value> {
        let mut pairs = vec![("story_id".to_string(), story_id.to_string())];
        if let Some(draft_id) = draft_id {
            pairs.push(("draft_id".to_string(), draft_id.to_string()));
        }
        self.transport
            .request(Method::GET, "agents", &pairs, None)
            .await
    }

    /// `GET actions/{id}`.
    pub async fn get_action(&self, action_id: i64) -> ClientResult<Value> {
        self.transport
            .request(Method::GET, &format!("actions/{action_id}"), NO_QUERY, None)
            .await
    }

    /// `POST actions` with the typed options of one [`ActionKind`].
    pub async fn create_action(
        &self,
        story_id: i64,
        name: &str,
        kind: &ActionKind,
        position: Option<Position>,
        draft_id: Option<i64>,
    ) -> ClientResult<Value> {
        let mut body = json!({
            "type": kind.api_type(),
            "name": name,
            // the actions endpoint expects story_id as a string
            "story_id": story_id.to_string(),
            "options": kind.options()?,
            "position": position.unwrap_or(Position::ACTION_DEFAULT),
        });
        if let Some(draft_id) = draft_id {
            body["draft_id"] = json!(draft_id);
        }
        self.transport
            .request(Method::POST, "actions", NO_QUERY, Some(&body))
            .await
    }

    /// `PATCH actions/{id}`.
    pub async fn update_action(
        &self,
        action_id: i64,
        request: &UpdateActionRequest,
    ) -> ClientResult<Value> {
        let body = serde_json::to_value(request)?;
        self.transport
            .request(
                Method::PATCH,
                &format!("actions/{action_id}"),
                NO_QUERY,
                Some(&body),
            )
            .await
    }

    /// `DELETE actions/{id}`.
    pub async fn delete_action(&self, action_id: i64) -> ClientResult<Value> {
        self.transport
            .request(
                Method::DELETE,
                &format!("actions/{action_id}"),
                NO_QUERY,
                None,
            )
            .await?;
        Ok(json!({"deleted": true, "action_id": action_id}))
    }

    /// Link two actions by appending the source to the target's `source_ids`.
    ///
    /// Reads the target first to preserve its existing links; no cycle
    /// detection is performed.
    pub async fn connect_actions(
        &self,
        source_action_id: i64,
        target_action_id: i64,
        draft_id: Option<i64>,
    ) -> ClientResult<Value> {
        let target = self.get_action(target_action_id).await?;

        let mut source_ids: Vec<i64> = target
            .get("source_ids")
            .or_else(|| target.get("sources"))
            .and_then(Value::as_array)
            .map(|ids| ids.iter().filter_map(Value::as_i64).collect())
            .unwrap_or_default();
        if !source_ids.contains(&source_action_id) {
            source_ids.push(source_action_id);
        }

        let mut body = json!({"source_ids": source_ids});
        if let Some(draft_id) = draft_id {
            body["draft_id"] = json!(draft_id);
        }
        self.transport
            .request(
                Method::PATCH,
                &format!("actions/{target_action_id}"),
                NO_QUERY,
                Some(&body),
            )
            .await
    }

    // ── notes ──

    /// `POST notes`. Requires a story or group target.
    pub async fn create_note(&self, request: &CreateNoteRequest) -> ClientResult<Value> {
        if request.story_id.is_none() && request.group_id.is_none() {
            return Err(ClientError::validation_error(
                "Either story_id or group_id must be provided",
            ));
        }
        let body = serde_json::to_value(request)?;
        self.transport
            .request(Method::POST, "notes", NO_QUERY, Some(&body))
            .await
    }

    /// `GET notes/{id}`.
    pub async fn get_note(&self, note_id: i64) -> ClientResult<Value> {
        self.transport
            .request(Method::GET, &format!("notes/{note_id}"), NO_QUERY, None)
            .await
    }

    /// `PATCH notes/{id}`. At least one field must be present.
    pub async fn update_note(
        &self,
        note_id: i64,
        request: &UpdateNoteRequest,
    ) -> ClientResult<Value> {
        if request.is_empty() {
            return Err(ClientError::validation_error(
                "At least one of content or position must be provided",
            ));
        }
        let body = serde_json::to_value(request)?;
        self.transport
            .request(
                Method::PATCH,
                &format!("notes/{note_id}"),
                NO_QUERY,
                Some(&body),
            )
            .await
    }

    /// `GET notes`.
    pub async fn list_notes(&self, query: &ListNotesQuery) -> ClientResult<Value> {
        self.transport
            .request(Method::GET, "notes", &query.to_query_pairs(), None)
            .await
    }

    /// `DELETE notes/{id}`. The API answers 204, so a local confirmation
    /// object is returned instead.
    pub async fn delete_note(&self, note_id: i64) -> ClientResult<Value> {
        self.transport
            .request(Method::DELETE, &format!("notes/{note_id}"), NO_QUERY, None)
            .await?;
        Ok(json!({"deleted": true, "note_id": note_id}))
    }
}

/// Case-insensitive substring filter over story objects by `name`.
///
/// Stories without a string `name` never match.
pub fn filter_stories_by_name(stories: &[Value], query: &str) -> Vec<Value> {
    let needle = query.to_lowercase();
    stories
        .iter()
        .filter(|story| {
            story
                .get("name")
                .and_then(Value::as_str)
                .map(|name| name.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}
