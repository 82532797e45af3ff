//! Note (annotation) tool implementations.

use tines_client::types::{
    CreateNoteRequest, ListNotesQuery, Position, StoryMode, UpdateNoteRequest,
};
use tines_client::TinesClient;

use super::helpers::{client_error_json, parse_opt, pretty};
use super::params::{
    CreateNoteParams, DeleteNoteParams, GetNoteParams, ListNotesParams, UpdateNoteParams,
};

pub async fn create_note(client: &TinesClient, params: CreateNoteParams) -> String {
    let request = CreateNoteRequest {
        content: params.content,
        story_id: params.story_id,
        group_id: params.group_id,
        position: params
            .position
            .map(Into::into)
            .unwrap_or(Position::NOTE_DEFAULT),
        draft_id: params.draft_id,
    };
    match client.create_note(&request).await {
        Ok(value) => pretty(&value),
        Err(e) => client_error_json(&e),
    }
}

pub async fn get_note(client: &TinesClient, params: GetNoteParams) -> String {
    match client.get_note(params.note_id).await {
        Ok(value) => pretty(&value),
        Err(e) => client_error_json(&e),
    }
}

pub async fn update_note(client: &TinesClient, params: UpdateNoteParams) -> String {
    let request = UpdateNoteRequest {
        content: params.content,
        position: params.position.map(Into::into),
    };
    match client.update_note(params.note_id, &request).await {
        Ok(value) => pretty(&value),
        Err(e) => client_error_json(&e),
    }
}

pub async fn list_notes(client: &TinesClient, params: ListNotesParams) -> String {
    let mode = match parse_opt::<StoryMode>(params.mode.as_deref()) {
        Ok(mode) => mode,
        Err(e) => return client_error_json(&e),
    };
    let query = ListNotesQuery {
        story_id: params.story_id,
        group_id: params.group_id,
        team_id: params.team_id,
        mode,
        draft_id: params.draft_id,
        per_page: params.per_page,
        page: params.page,
    };
    match client.list_notes(&query).await {
        Ok(value) => pretty(&value),
        Err(e) => client_error_json(&e),
    }
}

pub async fn delete_note(client: &TinesClient, params: DeleteNoteParams) -> String {
    match client.delete_note(params.note_id).await {
        Ok(value) => pretty(&value),
        Err(e) => client_error_json(&e),
    }
}
