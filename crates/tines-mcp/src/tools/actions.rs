//! Action tool implementations.
//!
//! Each action type gets its own creation tool with a typed options surface;
//! all of them funnel into [`TinesClient::create_action`].

use tines_client::types::{
    ActionKind, EmailOptions, EventTransformOptions, GroupOptions, ImapOptions, LlmOptions,
    Position, SendToStoryOptions, TransformMode, TriggerOptions, UpdateActionRequest,
    WebhookOptions,
};
use tines_client::TinesClient;

use super::helpers::{client_error_json, parse_opt, pretty};
use super::params::{
    ConnectActionsParams, CreateEmailActionParams, CreateEventTransformActionParams,
    CreateGroupActionParams, CreateImapActionParams, CreateLlmActionParams,
    CreateSendToStoryActionParams, CreateTriggerActionParams, CreateWebhookActionParams,
    DeleteActionParams, ListStoryActionsParams, UpdateActionParams,
};

pub async fn list_story_actions(client: &TinesClient, params: ListStoryActionsParams) -> String {
    match client
        .list_story_actions(params.story_id, params.draft_id)
        .await
    {
        Ok(value) => pretty(&value),
        Err(e) => client_error_json(&e),
    }
}

async fn create(
    client: &TinesClient,
    story_id: i64,
    name: &str,
    kind: ActionKind,
    position: Option<Position>,
    draft_id: Option<i64>,
) -> String {
    match client
        .create_action(story_id, name, &kind, position, draft_id)
        .await
    {
        Ok(value) => pretty(&value),
        Err(e) => client_error_json(&e),
    }
}

pub async fn create_webhook_action(
    client: &TinesClient,
    params: CreateWebhookActionParams,
) -> String {
    let kind = ActionKind::Webhook(WebhookOptions {
        secret: params.secret,
    });
    create(
        client,
        params.story_id,
        &params.name,
        kind,
        params.position.map(Into::into),
        params.draft_id,
    )
    .await
}

pub async fn create_event_transform_action(
    client: &TinesClient,
    params: CreateEventTransformActionParams,
) -> String {
    let mode = match parse_opt::<TransformMode>(params.mode.as_deref()) {
        Ok(mode) => mode.unwrap_or(TransformMode::Message),
        Err(e) => return client_error_json(&e),
    };
    let kind = ActionKind::EventTransform(EventTransformOptions {
        mode,
        message: params.message,
        payload: params.payload,
    });
    create(
        client,
        params.story_id,
        &params.name,
        kind,
        params.position.map(Into::into),
        params.draft_id,
    )
    .await
}

pub async fn create_email_action(client: &TinesClient, params: CreateEmailActionParams) -> String {
    let kind = ActionKind::Email(EmailOptions {
        to: params.to,
        subject: params.subject,
        body: params.body,
        content_type: params
            .content_type
            .unwrap_or_else(|| EmailOptions::DEFAULT_CONTENT_TYPE.to_string()),
        from_email: params.from_email,
        cc: params.cc,
        bcc: params.bcc,
    });
    create(
        client,
        params.story_id,
        &params.name,
        kind,
        params.position.map(Into::into),
        params.draft_id,
    )
    .await
}

pub async fn create_imap_action(client: &TinesClient, params: CreateImapActionParams) -> String {
    let kind = ActionKind::Imap(ImapOptions {
        host: params.host,
        username: params.username,
        password: params.password,
        port: params.port.unwrap_or(ImapOptions::DEFAULT_PORT),
        ssl: params.ssl.unwrap_or(true),
        folder: params
            .folder
            .unwrap_or_else(|| ImapOptions::DEFAULT_FOLDER.to_string()),
        conditions: params.conditions,
    });
    create(
        client,
        params.story_id,
        &params.name,
        kind,
        params.position.map(Into::into),
        params.draft_id,
    )
    .await
}

pub async fn create_send_to_story_action(
    client: &TinesClient,
    params: CreateSendToStoryActionParams,
) -> String {
    let kind = ActionKind::SendToStory(SendToStoryOptions {
        story_id: params.target_story_id,
        payload: params.payload,
    });
    create(
        client,
        params.story_id,
        &params.name,
        kind,
        params.position.map(Into::into),
        params.draft_id,
    )
    .await
}

pub async fn create_trigger_action(
    client: &TinesClient,
    params: CreateTriggerActionParams,
) -> String {
    let kind = ActionKind::Trigger(TriggerOptions {
        rules: params.rules,
        message: params.message,
    });
    create(
        client,
        params.story_id,
        &params.name,
        kind,
        params.position.map(Into::into),
        params.draft_id,
    )
    .await
}

pub async fn create_group_action(client: &TinesClient, params: CreateGroupActionParams) -> String {
    let kind = ActionKind::Group(GroupOptions {
        group_story_id: params.group_story_id,
    });
    create(
        client,
        params.story_id,
        &params.name,
        kind,
        params.position.map(Into::into),
        params.draft_id,
    )
    .await
}

pub async fn create_llm_action(client: &TinesClient, params: CreateLlmActionParams) -> String {
    let kind = ActionKind::Llm(LlmOptions {
        prompt: params.prompt,
        json_mode: params.json_mode.unwrap_or(false),
    });
    create(
        client,
        params.story_id,
        &params.name,
        kind,
        params.position.map(Into::into),
        params.draft_id,
    )
    .await
}

pub async fn update_action(client: &TinesClient, params: UpdateActionParams) -> String {
    let request = UpdateActionRequest {
        name: params.name,
        options: params.options,
        position: params.position.map(Into::into),
        draft_id: params.draft_id,
    };
    match client.update_action(params.action_id, &request).await {
        Ok(value) => pretty(&value),
        Err(e) => client_error_json(&e),
    }
}

pub async fn delete_action(client: &TinesClient, params: DeleteActionParams) -> String {
    match client.delete_action(params.action_id).await {
        Ok(value) => pretty(&value),
        Err(e) => client_error_json(&e),
    }
}

pub async fn connect_actions(client: &TinesClient, params: ConnectActionsParams) -> String {
    match client
        .connect_actions(
            params.source_action_id,
            params.target_action_id,
            params.draft_id,
        )
        .await
    {
        Ok(value) => pretty(&value),
        Err(e) => client_error_json(&e),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{json, Value};
    use tines_client::testing::MockTransport;
    use tines_client::Method;

    use super::*;
    use crate::tools::params::PositionParam;

    fn client_with(mock: Arc<MockTransport>) -> TinesClient {
        TinesClient::new(mock)
    }

    #[tokio::test]
    async fn test_create_webhook_sends_typed_payload() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(json!({"id": 55}));

        create_webhook_action(
            &client_with(mock.clone()),
            CreateWebhookActionParams {
                story_id: 12,
                name: "Inbound alerts".into(),
                secret: Some("s3cret".into()),
                position: None,
                draft_id: None,
            },
        )
        .await;

        let calls = mock.calls();
        assert_eq!(calls[0].method, Method::POST);
        assert_eq!(calls[0].path, "actions");
        let body = calls[0].body.as_ref().unwrap();
        assert_eq!(body["type"], "Agents::WebhookAgent");
        assert_eq!(body["story_id"], "12");
        assert_eq!(body["options"], json!({"secret": "s3cret"}));
        assert_eq!(body["position"], json!({"x": 100, "y": 100}));
    }

    #[tokio::test]
    async fn test_create_event_transform_rejects_bad_mode_without_network() {
        let mock = Arc::new(MockTransport::new());
        let out = create_event_transform_action(
            &client_with(mock.clone()),
            CreateEventTransformActionParams {
                story_id: 1,
                name: "Bad".into(),
                mode: Some("rotate".into()),
                message: None,
                payload: None,
                position: None,
                draft_id: None,
            },
        )
        .await;

        let payload: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(payload["error"], "validation_error");
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_imap_applies_defaults() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(json!({"id": 9}));

        create_imap_action(
            &client_with(mock.clone()),
            CreateImapActionParams {
                story_id: 4,
                name: "Mailbox".into(),
                host: "imap.example.com".into(),
                username: "user".into(),
                password: "pass".into(),
                port: None,
                ssl: None,
                folder: None,
                conditions: None,
                position: Some(PositionParam { x: 5, y: 10 }),
                draft_id: Some(2),
            },
        )
        .await;

        let body = mock.calls()[0].body.clone().unwrap();
        assert_eq!(body["options"]["port"], 993);
        assert_eq!(body["options"]["ssl"], true);
        assert_eq!(body["options"]["folder"], "INBOX");
        assert_eq!(body["position"], json!({"x": 5, "y": 10}));
        assert_eq!(body["draft_id"], 2);
    }

    #[tokio::test]
    async fn test_delete_action_returns_confirmation() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(Value::Null);

        let out = delete_action(
            &client_with(mock.clone()),
            DeleteActionParams { action_id: 31 },
        )
        .await;

        let payload: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(payload, json!({"deleted": true, "action_id": 31}));
        assert_eq!(mock.calls()[0].method, Method::DELETE);
    }

    #[tokio::test]
    async fn test_connect_actions_two_call_sequence() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(json!({"id": 30, "source_ids": []}));
        mock.push_ok(json!({"id": 30, "source_ids": [20]}));

        connect_actions(
            &client_with(mock.clone()),
            ConnectActionsParams {
                source_action_id: 20,
                target_action_id: 30,
                draft_id: None,
            },
        )
        .await;

        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].method, Method::GET);
        assert_eq!(calls[1].method, Method::PATCH);
        assert_eq!(
            calls[1].body.as_ref().unwrap(),
            &json!({"source_ids": [20]})
        );
    }
}
