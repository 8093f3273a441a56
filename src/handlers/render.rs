//! Reply rendering
//!
//! Turns service responses into Telegram requests.

use teloxide::{
    prelude::*,
    types::{
        InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup, MessageId,
        ParseMode, ReplyParameters,
    },
};
use tracing::{debug, warn};
use crate::models::MenuButton;
use crate::services::{Delivery, InlineButton, Keyboard, Reply, Response};
use crate::utils::errors::Result;

/// Where the event that produced a response came from
#[derive(Debug, Clone, Copy)]
pub struct Origin {
    pub chat_id: ChatId,
    /// Message to edit or reply to, if any
    pub message_id: Option<MessageId>,
}

/// Main menu reply keyboard: two buttons on the first row, one on the second
pub fn main_menu_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![
            KeyboardButton::new(MenuButton::AddDay.label()),
            KeyboardButton::new(MenuButton::MyDays.label()),
        ],
        vec![KeyboardButton::new(MenuButton::DeleteDay.label())],
    ])
    .resize_keyboard()
}

/// One button per row
pub fn inline_keyboard(buttons: &[InlineButton]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(
        buttons
            .iter()
            .map(|button| vec![InlineKeyboardButton::callback(button.label.clone(), button.action.to_string())]),
    )
}

/// Send every reply of a response in order
pub async fn deliver(bot: &Bot, origin: Origin, response: Response) -> Result<()> {
    for reply in response.replies {
        deliver_reply(bot, origin, reply).await?;
    }
    Ok(())
}

async fn deliver_reply(bot: &Bot, origin: Origin, reply: Reply) -> Result<()> {
    match (reply.delivery, origin.message_id) {
        (Delivery::Edit, Some(message_id)) => {
            if let Err(e) = edit(bot, origin.chat_id, message_id, &reply).await {
                warn!(chat_id = %origin.chat_id, error = %e, "Edit failed, sending a new message");
                send(bot, origin.chat_id, None, reply).await?;
            }
        }
        (Delivery::ReplyTo, Some(message_id)) => send(bot, origin.chat_id, Some(message_id), reply).await?,
        _ => send(bot, origin.chat_id, None, reply).await?,
    }
    Ok(())
}

async fn send(bot: &Bot, chat_id: ChatId, reply_to: Option<MessageId>, reply: Reply) -> Result<()> {
    let mut request = bot.send_message(chat_id, reply.text);

    if reply.markdown {
        request = request.parse_mode(ParseMode::MarkdownV2);
    }
    if let Some(message_id) = reply_to {
        request = request.reply_parameters(ReplyParameters::new(message_id));
    }
    request = match &reply.keyboard {
        Keyboard::None => request,
        Keyboard::MainMenu => request.reply_markup(main_menu_keyboard()),
        Keyboard::Inline(buttons) => request.reply_markup(inline_keyboard(buttons)),
    };

    request.await?;
    debug!(chat_id = %chat_id, "Message sent");
    Ok(())
}

async fn edit(bot: &Bot, chat_id: ChatId, message_id: MessageId, reply: &Reply) -> Result<()> {
    let mut request = bot.edit_message_text(chat_id, message_id, reply.text.clone());

    if reply.markdown {
        request = request.parse_mode(ParseMode::MarkdownV2);
    }
    if let Keyboard::Inline(buttons) = &reply.keyboard {
        request = request.reply_markup(inline_keyboard(buttons));
    }

    request.await?;
    debug!(chat_id = %chat_id, message_id = message_id.0, "Message edited");
    Ok(())
}
