//! Help command handler

use teloxide::{Bot, types::Message};
use crate::handlers::render::{deliver, Origin};
use crate::services::WorkoutService;
use crate::utils::errors::Result;

/// Handle /help command
pub async fn handle_help(bot: Bot, msg: Message, service: &WorkoutService) -> Result<()> {
    deliver(&bot, Origin { chat_id: msg.chat.id, message_id: None }, service.help()).await
}
