//! Callback query handlers module
//!
//! This module decodes inline keyboard payloads and routes them to the
//! workout service.

use teloxide::{Bot, types::{CallbackQuery, ChatId}, prelude::*};
use tracing::{debug, warn};
use crate::handlers::render::{deliver, Origin};
use crate::models::CallbackAction;
use crate::services::WorkoutService;
use crate::utils::errors::Result;

/// Main callback query dispatcher
pub async fn handle_callback_query(bot: Bot, query: CallbackQuery, service: &WorkoutService) -> Result<()> {
    let user_id = query.from.id.0 as i64;
    let origin = Origin {
        chat_id: query.message.as_ref().map(|m| m.chat().id).unwrap_or(ChatId(user_id)),
        message_id: query.message.as_ref().map(|m| m.id()),
    };

    debug!(user_id = user_id, callback_data = ?query.data, "Processing callback query");

    let response = match query.data.as_deref().unwrap_or_default().parse::<CallbackAction>() {
        Ok(action) => service.handle_callback(user_id, action).await,
        Err(e) => service.handle_invalid_callback(user_id, e).await,
    };

    // Answer first to remove the loading state
    let mut answer = bot.answer_callback_query(query.id.clone());
    if let Some(notice) = response.notice.clone() {
        answer = answer.text(notice);
    }
    if let Err(e) = answer.await {
        warn!(user_id = user_id, error = %e, "Failed to answer callback query");
    }

    deliver(&bot, origin, response).await
}
