//! Workout service implementation
//!
//! This service turns decoded chat events (commands, menu buttons, inline
//! callbacks and free text) into store operations and replies. It owns the
//! per-user pending steps and decides how every failure is reported.

use tracing::{debug, info, warn};
use crate::database::DatabaseService;
use crate::models::{ActionParseError, CallbackAction, Day, Exercise, MenuButton};
use crate::services::reply::{InlineButton, Reply, Response};
use crate::services::sessions::{last_two_sessions, Session};
use crate::state::{
    parse_existing_exercise_line, parse_new_exercise_line, ConversationContext, PendingStep,
    ScenarioManager, StepOutcome,
};
use crate::utils::errors::{ErrorKind, GymBroError, Result};
use crate::utils::helpers::{
    escape_markdown, format_session_date, markdown_bold, markdown_code, session_timestamp,
    truncate_text,
};
use crate::utils::logging::{log_missing_reference, log_rejected_input, log_store_failure, log_user_action};

const GENERIC_ERROR: &str = "An error occurred, try again.";
const NOT_FOUND: &str = "Not found.";
const BUTTON_LABEL_CHARS: usize = 48;

const NEW_EXERCISE_EXAMPLE: &str = "Bench 3 80 85 90";
const EXISTING_EXERCISE_EXAMPLE: &str = "3 80 85 90";

/// Workout service for the conversational logging flows
#[derive(Debug, Clone)]
pub struct WorkoutService {
    db: DatabaseService,
    scenarios: ScenarioManager,
}

impl WorkoutService {
    pub fn new(db: DatabaseService, scenarios: ScenarioManager) -> Self {
        Self { db, scenarios }
    }

    pub fn database(&self) -> &DatabaseService {
        &self.db
    }

    pub fn scenarios(&self) -> &ScenarioManager {
        &self.scenarios
    }

    /// `/start`: welcome with the main menu, dropping any pending step
    pub async fn start(&self, user_id: i64) -> Response {
        if self.scenarios.reset(user_id).await {
            debug!(user_id = user_id, "Pending step dropped by /start");
        }
        log_user_action(user_id, "start", None);

        Response::reply(Reply::text("This is your GymBro. Let's get it started!").with_main_menu())
    }

    /// `/help`
    pub fn help(&self) -> Response {
        let text = format!(
            "{}\n\n{} {}\n{} {}\n{} {}\n\n{}\n{}\n\n{}\n{}",
            markdown_bold("GymBro"),
            escape_markdown(MenuButton::AddDay.label()),
            escape_markdown("create a training day"),
            escape_markdown(MenuButton::MyDays.label()),
            escape_markdown("open a day, its exercises and their last sessions"),
            escape_markdown(MenuButton::DeleteDay.label()),
            escape_markdown("remove a day with all of its exercises and logs"),
            escape_markdown("New exercise: name, reps, then one weight per set"),
            markdown_code(NEW_EXERCISE_EXAMPLE),
            escape_markdown("New session: reps, then one weight per set"),
            markdown_code(EXISTING_EXERCISE_EXAMPLE),
        );

        Response::reply(Reply::markdown(text).with_main_menu())
    }

    /// Main menu button pressed; always starts a new flow
    pub async fn handle_menu(&self, user_id: i64, button: MenuButton) -> Response {
        log_user_action(user_id, "menu", Some(button.label()));

        let result = match button {
            MenuButton::AddDay => {
                self.scenarios.begin(user_id, PendingStep::AwaitingDayName).await;
                Ok(Response::reply(Reply::text("Enter the name of the new training day:")))
            }
            MenuButton::MyDays => {
                self.scenarios.reset(user_id).await;
                self.list_days(user_id).await
            }
            MenuButton::DeleteDay => {
                self.scenarios.reset(user_id).await;
                self.list_days_for_deletion(user_id).await
            }
        };

        result.unwrap_or_else(|e| {
            let text = self.report_failure(user_id, "menu", &e);
            Response::reply(Reply::text(text).with_main_menu())
        })
    }

    /// Inline button pressed; always replaces the pending step
    pub async fn handle_callback(&self, user_id: i64, action: CallbackAction) -> Response {
        log_user_action(user_id, "callback", Some(action.to_string().as_str()));

        let result = match action {
            CallbackAction::SelectDay(day_id) => {
                self.scenarios.reset(user_id).await;
                self.show_day(user_id, day_id).await
            }
            CallbackAction::DeleteDay(day_id) => {
                self.scenarios.reset(user_id).await;
                self.delete_day(user_id, day_id).await
            }
            CallbackAction::SelectExercise(exercise_id) => {
                self.scenarios.reset(user_id).await;
                self.show_exercise(user_id, exercise_id).await
            }
            CallbackAction::AddExercise(day_id) => self.prompt_new_exercise(user_id, day_id).await,
            CallbackAction::LogNew(exercise_id) => self.prompt_new_session(user_id, exercise_id).await,
        };

        match result {
            Ok(response) => response,
            Err(e) => {
                self.scenarios.reset(user_id).await;
                Response::notice(self.report_failure(user_id, "callback", &e))
            }
        }
    }

    /// Callback payload that could not be decoded
    pub async fn handle_invalid_callback(&self, user_id: i64, error: ActionParseError) -> Response {
        self.scenarios.reset(user_id).await;
        let error = GymBroError::from(error);
        Response::notice(self.report_failure(user_id, "callback", &error))
    }

    /// Any other message; `None` when the message carries no text
    pub async fn handle_text(&self, user_id: i64, text: Option<&str>) -> Response {
        let Some(context) = self.scenarios.current(user_id).await else {
            debug!(user_id = user_id, "Message without pending step");
            return Response::reply(Reply::text("Pick an action from the menu below.").with_main_menu());
        };

        let Some(text) = text else {
            debug!(user_id = user_id, step = context.step.name(), "Non-text message while step pending");
            return Response::reply(Reply::text("Please answer with a text message.").as_reply());
        };

        match context.step {
            PendingStep::AwaitingDayName => self.save_day(context, text).await,
            PendingStep::AwaitingNewExerciseLine { day_id } => {
                self.save_new_exercise(context, day_id, text).await
            }
            PendingStep::AwaitingExistingExerciseLine { exercise_id } => {
                self.save_session(context, exercise_id, text).await
            }
        }
    }

    async fn list_days(&self, user_id: i64) -> Result<Response> {
        let days = self.db.days.list_by_user(user_id).await?;

        if days.is_empty() {
            let text = format!(
                "You have no training days yet.\nTap '{}' to create your first one.",
                MenuButton::AddDay.label()
            );
            return Ok(Response::reply(Reply::text(text).with_main_menu()));
        }

        let buttons = days
            .iter()
            .map(|day| InlineButton::new(button_label(&day.day_name), CallbackAction::SelectDay(day.day_id)))
            .collect();

        Ok(Response::reply(
            Reply::text("Choose a day to view or log:").with_buttons(buttons),
        ))
    }

    async fn list_days_for_deletion(&self, user_id: i64) -> Result<Response> {
        let days = self.db.days.list_by_user(user_id).await?;

        if days.is_empty() {
            return Ok(Response::reply(Reply::text("Nothing to delete.").with_main_menu()));
        }

        let buttons = days
            .iter()
            .map(|day| {
                InlineButton::new(
                    format!("❌ {}", button_label(&day.day_name)),
                    CallbackAction::DeleteDay(day.day_id),
                )
            })
            .collect();

        Ok(Response::reply(
            Reply::text("Which day do you want to delete?").with_buttons(buttons),
        ))
    }

    async fn show_day(&self, user_id: i64, day_id: i64) -> Result<Response> {
        let day = self.db.get_user_day(user_id, day_id).await?;
        let exercises = self.db.exercises.list_by_day(day.day_id).await?;

        Ok(Response::reply(day_menu(&day, &exercises).as_edit()))
    }

    async fn delete_day(&self, user_id: i64, day_id: i64) -> Result<Response> {
        let (day, report) = self.db.delete_user_day(user_id, day_id).await?;

        info!(
            user_id = user_id,
            day_id = day.day_id,
            exercises_deleted = report.exercises_deleted,
            logs_deleted = report.logs_deleted,
            "Training day deleted"
        );

        Ok(Response::notice("Day deleted!")
            .and(Reply::text("✅ The day was deleted.").as_edit())
            .and(Reply::text("Choose the next action:").with_main_menu()))
    }

    async fn show_exercise(&self, user_id: i64, exercise_id: i64) -> Result<Response> {
        let exercise = self.db.get_user_exercise(user_id, exercise_id).await?;
        let logs = self.db.logs.list_by_exercise(exercise.exercise_id).await?;
        let comparison = last_two_sessions(&logs);

        let mut text = format!("{}\n\n", markdown_bold(&format!("Exercise: {}", exercise.exercise_name)));
        match &comparison.last {
            None => text.push_str(&escape_markdown("No entries yet.")),
            Some(last) => text.push_str(&session_block("Last session", last)),
        }
        if let Some(previous) = &comparison.previous {
            text.push('\n');
            text.push_str(&session_block("Previous session", previous));
        }
        text.push_str(&escape_markdown("\nWhat's next?"));

        let buttons = vec![
            InlineButton::new("🏋️ Log new workout", CallbackAction::LogNew(exercise.exercise_id)),
            InlineButton::new("⬅️ Back to exercises", CallbackAction::SelectDay(exercise.day_id)),
        ];

        Ok(Response::reply(Reply::markdown(text).with_buttons(buttons).as_edit()))
    }

    async fn prompt_new_exercise(&self, user_id: i64, day_id: i64) -> Result<Response> {
        let day = self.db.get_user_day(user_id, day_id).await?;
        self.scenarios
            .begin(user_id, PendingStep::AwaitingNewExerciseLine { day_id: day.day_id })
            .await;

        let text = format!(
            "{}\n{} {}",
            escape_markdown(&format!("New exercise for {}.", day.day_name)),
            escape_markdown("Enter the name, reps and weights in one line, e.g."),
            markdown_code(NEW_EXERCISE_EXAMPLE),
        );

        Ok(Response::reply(Reply::markdown(text).as_edit()))
    }

    async fn prompt_new_session(&self, user_id: i64, exercise_id: i64) -> Result<Response> {
        let exercise = self.db.get_user_exercise(user_id, exercise_id).await?;
        self.scenarios
            .begin(user_id, PendingStep::AwaitingExistingExerciseLine { exercise_id: exercise.exercise_id })
            .await;

        let text = format!(
            "{} {}\n\n{} {}",
            escape_markdown("Logging for:"),
            markdown_bold(&exercise.exercise_name),
            escape_markdown("Enter reps and weights in one line, e.g."),
            markdown_code(EXISTING_EXERCISE_EXAMPLE),
        );

        Ok(Response::reply(Reply::markdown(text).as_edit()))
    }

    async fn save_day(&self, context: ConversationContext, text: &str) -> Response {
        let user_id = context.user_id;

        match self.db.create_day(user_id, text.to_string()).await {
            Ok(day) => {
                self.scenarios.resolve(context, StepOutcome::Completed).await;
                info!(user_id = user_id, day_id = day.day_id, "Training day created");
                Response::reply(Reply::text(format!("👍 Day '{}' added!", day.day_name)).with_main_menu())
            }
            Err(e) => self.abandon(context, "create_day", e).await,
        }
    }

    async fn save_new_exercise(&self, context: ConversationContext, day_id: i64, text: &str) -> Response {
        let user_id = context.user_id;

        let input = match parse_new_exercise_line(text) {
            Ok(input) => input,
            Err(e) => {
                self.reject(context, &e.to_string()).await;
                return Response::reply(format_error_reply(NEW_EXERCISE_EXAMPLE));
            }
        };

        if let Err(e) = self.db.get_user_day(user_id, day_id).await {
            return self.abandon(context, "create_exercise", e).await;
        }

        let sets = input.batch.sets();
        match self
            .db
            .create_exercise_with_logs(day_id, input.name, &sets, session_timestamp())
            .await
        {
            Ok(exercise) => {
                self.scenarios.resolve(context, StepOutcome::Completed).await;
                info!(user_id = user_id, day_id = day_id, exercise_id = exercise.exercise_id,
                      sets = sets.len(), "Exercise created");
                let text = format!(
                    "👍 Exercise '{}' added and {} sets logged!",
                    exercise.exercise_name,
                    sets.len()
                );
                Response::reply(Reply::text(text).with_main_menu())
            }
            Err(e) => self.abandon(context, "create_exercise", e).await,
        }
    }

    async fn save_session(&self, context: ConversationContext, exercise_id: i64, text: &str) -> Response {
        let user_id = context.user_id;

        let batch = match parse_existing_exercise_line(text) {
            Ok(batch) => batch,
            Err(e) => {
                self.reject(context, &e.to_string()).await;
                return Response::reply(format_error_reply(EXISTING_EXERCISE_EXAMPLE));
            }
        };

        if let Err(e) = self.db.get_user_exercise(user_id, exercise_id).await {
            return self.abandon(context, "log_session", e).await;
        }

        match self.db.log_session(exercise_id, &batch.sets(), session_timestamp()).await {
            Ok(inserted) => {
                self.scenarios.resolve(context, StepOutcome::Completed).await;
                info!(user_id = user_id, exercise_id = exercise_id, sets = inserted, "Session logged");
                Response::reply(Reply::text(format!("🎉 {} sets logged.", inserted)).with_main_menu())
            }
            Err(e) => self.abandon(context, "log_session", e).await,
        }
    }

    async fn reject(&self, context: ConversationContext, reason: &str) {
        let user_id = context.user_id;
        let step = context.step.name();
        let attempts = context.attempts + 1;

        self.scenarios.resolve(context, StepOutcome::Rejected).await;
        log_rejected_input(user_id, step, attempts, reason);
    }

    async fn abandon(&self, context: ConversationContext, operation: &str, error: GymBroError) -> Response {
        let user_id = context.user_id;
        debug!(context = ?context.summary(), operation = operation, "Abandoning flow");
        self.scenarios.resolve(context, StepOutcome::Failed).await;

        let text = self.report_failure(user_id, operation, &error);
        Response::reply(Reply::text(text).with_main_menu())
    }

    /// Log the failure and pick the text the user gets to see
    fn report_failure(&self, user_id: i64, operation: &str, error: &GymBroError) -> &'static str {
        match error.kind() {
            ErrorKind::Referential => {
                log_missing_reference(user_id, error);
                NOT_FOUND
            }
            ErrorKind::Store => {
                log_store_failure(user_id, operation, error);
                GENERIC_ERROR
            }
            ErrorKind::Input | ErrorKind::Other => {
                warn!(user_id = user_id, operation = operation, error = %error, "Request failed");
                GENERIC_ERROR
            }
        }
    }
}

fn button_label(name: &str) -> String {
    truncate_text(name, BUTTON_LABEL_CHARS)
}

fn day_menu(day: &Day, exercises: &[Exercise]) -> Reply {
    let mut buttons: Vec<InlineButton> = exercises
        .iter()
        .map(|ex| InlineButton::new(button_label(&ex.exercise_name), CallbackAction::SelectExercise(ex.exercise_id)))
        .collect();
    buttons.push(InlineButton::new("➕ Add exercise", CallbackAction::AddExercise(day.day_id)));

    Reply::text(format!("{}: choose an exercise to log or add a new one:", day.day_name))
        .with_buttons(buttons)
}

fn session_block(title: &str, session: &Session) -> String {
    format!(
        "{}\n  {}\n",
        markdown_bold(&format!("{} ({}):", title, format_session_date(session.logged_at))),
        markdown_code(&session.render()),
    )
}

fn format_error_reply(example: &str) -> Reply {
    let text = format!(
        "{}\n{} {}\n{}",
        escape_markdown("🚫 Format error, bro."),
        escape_markdown("Example:"),
        markdown_code(example),
        escape_markdown("Try again:"),
    );
    Reply::markdown(text).as_reply()
}
