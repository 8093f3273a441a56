//! Start command handler

use teloxide::{Bot, types::Message};
use tracing::info;
use crate::handlers::render::{deliver, Origin};
use crate::services::WorkoutService;
use crate::utils::errors::{GymBroError, Result};

/// Handle /start command
pub async fn handle_start(bot: Bot, msg: Message, service: &WorkoutService) -> Result<()> {
    let user = msg.from.as_ref()
        .ok_or_else(|| GymBroError::InvalidInput("No user in message".to_string()))?;
    let user_id = user.id.0 as i64;

    info!(user_id = user_id, chat_id = %msg.chat.id, "Start command received");

    let response = service.start(user_id).await;
    deliver(&bot, Origin { chat_id: msg.chat.id, message_id: None }, response).await
}
