//! Command handlers module
//!
//! This module contains handlers for the bot commands: /start and /help.

pub mod start;
pub mod help;

use teloxide::{Bot, types::Message, utils::command::BotCommands};
use crate::utils::errors::Result;
use crate::services::WorkoutService;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "GymBro commands:")]
pub enum Command {
    #[command(description = "Show the main menu")]
    Start,
    #[command(description = "Show help information")]
    Help,
}

/// Main command dispatcher
pub async fn handle_command(bot: Bot, msg: Message, cmd: Command, service: &WorkoutService) -> Result<()> {
    match cmd {
        Command::Start => start::handle_start(bot, msg, service).await,
        Command::Help => help::handle_help(bot, msg, service).await,
    }
}
