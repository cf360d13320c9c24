//! Customer chat endpoints.

use serde::{Deserialize, Serialize};

use super::client::{self, ApiError};
use crate::models::{ChatMessage, Conversation};

#[derive(Debug, Deserialize)]
struct ConversationListResponse {
    conversations: Vec<Conversation>,
}

pub async fn fetch_conversations() -> Result<Vec<Conversation>, ApiError> {
    let response: ConversationListResponse = client::get_json("/chat/conversations").await?;
    Ok(response.conversations)
}

#[derive(Debug, Deserialize)]
struct MessageListResponse {
    messages: Vec<ChatMessage>,
}

pub async fn fetch_messages(conversation_id: u64) -> Result<Vec<ChatMessage>, ApiError> {
    let response: MessageListResponse =
        client::get_json(&format!("/chat/conversations/{}/messages", conversation_id)).await?;
    Ok(response.messages)
}

#[derive(Serialize)]
struct SendMessageRequest {
    body: String,
}

pub async fn send_message(conversation_id: u64, body: &str) -> Result<ChatMessage, ApiError> {
    client::post_json(
        &format!("/chat/conversations/{}/messages", conversation_id),
        &SendMessageRequest {
            body: body.to_string(),
        },
    )
    .await
}
