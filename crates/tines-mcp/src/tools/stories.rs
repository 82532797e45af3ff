//! Story tool implementations.

use tines_client::types::{
    CreateStoryRequest, ListStoriesQuery, StoryFilter, StoryMode, StoryOrder, UpdateStoryRequest,
};
use tines_client::TinesClient;

use super::helpers::{client_error_json, parse_opt, pretty};
use super::params::{
    CreateStoryParams, GetStoryDraftParams, GetStoryParams, ListStoriesParams,
    ListStoryDraftsParams, SearchStoriesParams, StoryPageParams, UpdateStoryParams,
};

/// Default page size for the convenience filter tools.
const FILTER_PAGE_SIZE: u32 = 20;

pub async fn list_stories(client: &TinesClient, params: ListStoriesParams) -> String {
    let filter = match parse_opt::<StoryFilter>(params.filter.as_deref()) {
        Ok(filter) => filter,
        Err(e) => return client_error_json(&e),
    };
    let order = match parse_opt::<StoryOrder>(params.order.as_deref()) {
        Ok(order) => order,
        Err(e) => return client_error_json(&e),
    };

    let query = ListStoriesQuery {
        team_id: params.team_id,
        folder_id: params.folder_id,
        per_page: params.per_page,
        page: params.page,
        tags: params.tags,
        search: params.search,
        filter,
        order,
    };
    match client.list_stories(&query).await {
        Ok(value) => pretty(&value),
        Err(e) => client_error_json(&e),
    }
}

pub async fn get_story(client: &TinesClient, params: GetStoryParams) -> String {
    let mode = match parse_opt::<StoryMode>(params.story_mode.as_deref()) {
        Ok(mode) => mode,
        Err(e) => return client_error_json(&e),
    };
    match client
        .get_story(params.story_id, mode, params.draft_id)
        .await
    {
        Ok(value) => pretty(&value),
        Err(e) => client_error_json(&e),
    }
}

pub async fn create_story(client: &TinesClient, params: CreateStoryParams) -> String {
    let request = CreateStoryRequest {
        team_id: params.team_id,
        name: params.name,
        description: params.description,
        keep_events_for: params.keep_events_for,
        folder_id: params.folder_id,
        tags: params.tags,
        disabled: params.disabled,
        priority: params.priority,
    };
    match client.create_story(&request).await {
        Ok(value) => pretty(&value),
        Err(e) => client_error_json(&e),
    }
}

pub async fn update_story(client: &TinesClient, params: UpdateStoryParams) -> String {
    let request = UpdateStoryRequest {
        name: params.name,
        description: params.description,
        add_tag_names: params.add_tag_names,
        remove_tag_names: params.remove_tag_names,
        keep_events_for: params.keep_events_for,
        disabled: params.disabled,
        locked: params.locked,
        priority: params.priority,
        send_to_story_access_source: params.send_to_story_access_source,
        send_to_story_access: params.send_to_story_access,
        shared_team_slugs: params.shared_team_slugs,
        send_to_story_skill_use_requires_confirmation: params
            .send_to_story_skill_use_requires_confirmation,
        webhook_api_enabled: params.webhook_api_enabled,
        team_id: params.team_id,
        folder_id: params.folder_id,
        change_control_enabled: params.change_control_enabled,
        draft_id: params.draft_id,
        monitor_failures: params.monitor_failures,
        entry_action_id: params.entry_action_id,
        exit_action_ids: params.exit_action_ids,
    };
    match client.update_story(params.story_id, &request).await {
        Ok(value) => pretty(&value),
        Err(e) => client_error_json(&e),
    }
}

pub async fn search_stories(client: &TinesClient, params: SearchStoriesParams) -> String {
    match client
        .search_stories(&params.query, params.team_id, params.per_page)
        .await
    {
        Ok(value) => pretty(&value),
        Err(e) => client_error_json(&e),
    }
}

async fn filtered_page(
    client: &TinesClient,
    filter: StoryFilter,
    params: StoryPageParams,
) -> String {
    let query = ListStoriesQuery {
        team_id: params.team_id,
        per_page: params.per_page.or(Some(FILTER_PAGE_SIZE)),
        filter: Some(filter),
        ..Default::default()
    };
    match client.list_stories(&query).await {
        Ok(value) => pretty(&value),
        Err(e) => client_error_json(&e),
    }
}

pub async fn high_priority_stories(client: &TinesClient, params: StoryPageParams) -> String {
    filtered_page(client, StoryFilter::HighPriority, params).await
}

pub async fn disabled_stories(client: &TinesClient, params: StoryPageParams) -> String {
    filtered_page(client, StoryFilter::Disabled, params).await
}

pub async fn list_story_drafts(client: &TinesClient, params: ListStoryDraftsParams) -> String {
    match client.list_story_drafts(params.story_id).await {
        Ok(value) => pretty(&value),
        Err(e) => client_error_json(&e),
    }
}

pub async fn get_story_draft(client: &TinesClient, params: GetStoryDraftParams) -> String {
    match client
        .get_story_draft(params.story_id, params.draft_id)
        .await
    {
        Ok(value) => pretty(&value),
        Err(e) => client_error_json(&e),
    }
}
