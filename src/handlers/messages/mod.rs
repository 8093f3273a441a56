//! Message handlers module
//!
//! Menu button labels are decoded first; any other message goes to the
//! pending step, if there is one.

use teloxide::{Bot, types::Message};
use tracing::debug;
use crate::handlers::render::{deliver, Origin};
use crate::models::MenuButton;
use crate::services::WorkoutService;
use crate::utils::errors::{GymBroError, Result};

/// Handle incoming messages
pub async fn handle_message(bot: Bot, msg: Message, service: &WorkoutService) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        GymBroError::InvalidInput("No user in message".to_string())
    })?;

    let user_id = user.id.0 as i64;
    let origin = Origin {
        chat_id: msg.chat.id,
        message_id: Some(msg.id),
    };

    debug!(user_id = user_id, chat_id = %msg.chat.id, "Processing message");

    let response = match msg.text().and_then(MenuButton::from_label) {
        Some(button) => service.handle_menu(user_id, button).await,
        None => service.handle_text(user_id, msg.text()).await,
    };

    deliver(&bot, origin, response).await
}
