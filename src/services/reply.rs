//! Transport-neutral replies
//!
//! The workout service describes what the chat should show; handlers turn
//! these values into Telegram requests.

use crate::models::CallbackAction;

/// How a reply reaches the chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delivery {
    /// New message
    #[default]
    Send,
    /// Replace the message the inline button belongs to
    Edit,
    /// Reply quoting the user's message
    ReplyTo,
}

/// Button under a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub action: CallbackAction,
}

impl InlineButton {
    pub fn new(label: impl Into<String>, action: CallbackAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Keyboard {
    #[default]
    None,
    /// Persistent reply keyboard with the menu buttons
    MainMenu,
    /// One button per row
    Inline(Vec<InlineButton>),
}

/// One outbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Keyboard,
    pub delivery: Delivery,
    /// Text is MarkdownV2 and already escaped
    pub markdown: bool,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: Keyboard::None,
            delivery: Delivery::Send,
            markdown: false,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            markdown: true,
            ..Self::text(text)
        }
    }

    pub fn with_main_menu(mut self) -> Self {
        self.keyboard = Keyboard::MainMenu;
        self
    }

    pub fn with_buttons(mut self, buttons: Vec<InlineButton>) -> Self {
        self.keyboard = Keyboard::Inline(buttons);
        self
    }

    pub fn as_edit(mut self) -> Self {
        self.delivery = Delivery::Edit;
        self
    }

    pub fn as_reply(mut self) -> Self {
        self.delivery = Delivery::ReplyTo;
        self
    }
}

/// Everything produced for one inbound event
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    /// Short popup text answering a callback query
    pub notice: Option<String>,
    pub replies: Vec<Reply>,
}

impl Response {
    pub fn reply(reply: Reply) -> Self {
        Self {
            notice: None,
            replies: vec![reply],
        }
    }

    pub fn notice(text: impl Into<String>) -> Self {
        Self {
            notice: Some(text.into()),
            replies: Vec::new(),
        }
    }

    pub fn and(mut self, reply: Reply) -> Self {
        self.replies.push(reply);
        self
    }

    /// First reply text, mostly for logs and tests
    pub fn first_text(&self) -> Option<&str> {
        self.replies.first().map(|r| r.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let reply = Reply::markdown("*hi*").with_main_menu().as_edit();
        assert!(reply.markdown);
        assert_eq!(reply.keyboard, Keyboard::MainMenu);
        assert_eq!(reply.delivery, Delivery::Edit);

        let response = Response::notice("Done").and(Reply::text("next"));
        assert_eq!(response.notice.as_deref(), Some("Done"));
        assert_eq!(response.first_text(), Some("next"));
    }
}
