//! Chat actions decoded at the transport boundary
//!
//! Inline buttons carry `<action>_<id>` payloads and the reply keyboard sends
//! its button labels as plain text. Both are turned into enums here so the
//! rest of the bot never matches on presentation strings.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Inline keyboard callback action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackAction {
    /// Show a day's exercises
    SelectDay(i64),
    /// Delete a day with its exercises and logs
    DeleteDay(i64),
    /// Show an exercise's session summary
    SelectExercise(i64),
    /// Start adding a new exercise under a day
    AddExercise(i64),
    /// Start logging a new session for an exercise
    LogNew(i64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionParseError {
    #[error("unknown callback action: {0}")]
    UnknownAction(String),

    #[error("invalid identifier in callback data: {0}")]
    InvalidId(String),
}

impl CallbackAction {
    fn prefix(&self) -> &'static str {
        match self {
            CallbackAction::SelectDay(_) => "select_day",
            CallbackAction::DeleteDay(_) => "delete_day",
            CallbackAction::SelectExercise(_) => "log_ex",
            CallbackAction::AddExercise(_) => "add_ex",
            CallbackAction::LogNew(_) => "log_new",
        }
    }

    /// Identifier carried by the action
    pub fn id(&self) -> i64 {
        match *self {
            CallbackAction::SelectDay(id)
            | CallbackAction::DeleteDay(id)
            | CallbackAction::SelectExercise(id)
            | CallbackAction::AddExercise(id)
            | CallbackAction::LogNew(id) => id,
        }
    }
}

impl fmt::Display for CallbackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.prefix(), self.id())
    }
}

impl FromStr for CallbackAction {
    type Err = ActionParseError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let (prefix, id) = data
            .rsplit_once('_')
            .ok_or_else(|| ActionParseError::UnknownAction(data.to_string()))?;

        let constructor: fn(i64) -> CallbackAction = match prefix {
            "select_day" => CallbackAction::SelectDay,
            "delete_day" => CallbackAction::DeleteDay,
            "log_ex" => CallbackAction::SelectExercise,
            "add_ex" => CallbackAction::AddExercise,
            "log_new" => CallbackAction::LogNew,
            _ => return Err(ActionParseError::UnknownAction(data.to_string())),
        };

        let id = id
            .parse::<i64>()
            .map_err(|_| ActionParseError::InvalidId(data.to_string()))?;

        Ok(constructor(id))
    }
}

/// Main menu reply keyboard buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuButton {
    AddDay,
    MyDays,
    DeleteDay,
}

impl MenuButton {
    pub const ALL: [MenuButton; 3] = [MenuButton::AddDay, MenuButton::MyDays, MenuButton::DeleteDay];

    /// Label shown on the keyboard and sent back as message text
    pub fn label(&self) -> &'static str {
        match self {
            MenuButton::AddDay => "➕ Add day",
            MenuButton::MyDays => "📅 My days",
            MenuButton::DeleteDay => "🗑️ Delete day",
        }
    }

    /// Decode a message text into a menu button, exact label match only
    pub fn from_label(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|button| button.label() == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_callback_encoding() {
        assert_eq!(CallbackAction::SelectDay(4).to_string(), "select_day_4");
        assert_eq!(CallbackAction::DeleteDay(4).to_string(), "delete_day_4");
        assert_eq!(CallbackAction::SelectExercise(9).to_string(), "log_ex_9");
        assert_eq!(CallbackAction::AddExercise(4).to_string(), "add_ex_4");
        assert_eq!(CallbackAction::LogNew(9).to_string(), "log_new_9");
    }

    #[test]
    fn test_callback_decoding() {
        assert_eq!("select_day_12".parse::<CallbackAction>(), Ok(CallbackAction::SelectDay(12)));
        assert_eq!("delete_day_3".parse::<CallbackAction>(), Ok(CallbackAction::DeleteDay(3)));
        assert_eq!("log_ex_7".parse::<CallbackAction>(), Ok(CallbackAction::SelectExercise(7)));
        assert_eq!("add_ex_1".parse::<CallbackAction>(), Ok(CallbackAction::AddExercise(1)));
        assert_eq!("log_new_99".parse::<CallbackAction>(), Ok(CallbackAction::LogNew(99)));
    }

    #[test]
    fn test_callback_decoding_errors() {
        assert_matches!("delete_day_x".parse::<CallbackAction>(), Err(ActionParseError::InvalidId(_)));
        assert_matches!("delete_day_".parse::<CallbackAction>(), Err(ActionParseError::InvalidId(_)));
        assert_matches!("rename_day_3".parse::<CallbackAction>(), Err(ActionParseError::UnknownAction(_)));
        assert_matches!("lang:en".parse::<CallbackAction>(), Err(ActionParseError::UnknownAction(_)));
    }

    #[test]
    fn test_menu_labels() {
        for button in MenuButton::ALL {
            assert_eq!(MenuButton::from_label(button.label()), Some(button));
        }
        assert_eq!(MenuButton::from_label("my days"), None);
        assert_eq!(MenuButton::from_label("Bench 3 80"), None);
    }
}
