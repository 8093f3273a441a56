//! End-to-end conversation tests against the workout service

mod helpers;

use gymbro::models::{CallbackAction, MenuButton};
use gymbro::services::{Delivery, InlineButton, Keyboard};
use gymbro::state::PendingStep;
use helpers::*;

#[tokio::test]
async fn test_push_day_bench_two_sessions() {
    let db = TestDatabase::new().await;
    let bot = db.workout_service();

    bot.handle_menu(TEST_USER_ID, MenuButton::AddDay).await;
    bot.handle_text(TEST_USER_ID, Some("Push")).await;
    let day = db.service.days.list_by_user(TEST_USER_ID).await.unwrap().remove(0);

    let response = bot.handle_callback(TEST_USER_ID, CallbackAction::SelectDay(day.day_id)).await;
    assert_eq!(
        response.replies[0].keyboard,
        Keyboard::Inline(vec![InlineButton::new("➕ Add exercise", CallbackAction::AddExercise(day.day_id))])
    );

    bot.handle_callback(TEST_USER_ID, CallbackAction::AddExercise(day.day_id)).await;
    let response = bot.handle_text(TEST_USER_ID, Some("Bench 3 80 85 90")).await;
    assert_eq!(response.first_text(), Some("👍 Exercise 'Bench' added and 3 sets logged!"));

    let exercises = db.service.exercises.list_by_day(day.day_id).await.unwrap();
    assert_eq!(exercises.len(), 1);
    let bench = &exercises[0];
    let logs = db.service.logs.list_by_exercise(bench.exercise_id).await.unwrap();
    assert_eq!(logs.len(), 3);
    assert!(logs.iter().all(|l| l.reps == 3 && l.logged_at == logs[0].logged_at));

    // Move the first session a day back so the next one gets its own timestamp
    db.backdate_logs(bench.exercise_id, at(0)).await;

    bot.handle_callback(TEST_USER_ID, CallbackAction::LogNew(bench.exercise_id)).await;
    let response = bot.handle_text(TEST_USER_ID, Some("3 82 87 92")).await;
    assert_eq!(response.first_text(), Some("🎉 3 sets logged."));
    assert_eq!(response.replies[0].keyboard, Keyboard::MainMenu);

    let response = bot.handle_callback(TEST_USER_ID, CallbackAction::SelectExercise(bench.exercise_id)).await;
    let summary = &response.replies[0];
    assert_eq!(summary.delivery, Delivery::Edit);
    assert!(summary.markdown);

    let last = summary.text.find("`3 82 87 92`").expect("last session missing");
    let previous = summary.text.find("`3 80 85 90`").expect("previous session missing");
    assert!(last < previous);
    assert!(summary.text.contains("Previous session"));
}

#[tokio::test]
async fn test_invalid_lines_keep_step_and_create_nothing() {
    let db = TestDatabase::new().await;
    let bot = db.workout_service();
    let day = db.service.create_day(TEST_USER_ID, "Push".to_string()).await.unwrap();

    bot.handle_callback(TEST_USER_ID, CallbackAction::AddExercise(day.day_id)).await;

    for line in ["Bench", "Bench 3", "Bench 3 80 -5", "Bench 0 80", "Bench x 80", "Bench 3 eighty"] {
        let response = bot.handle_text(TEST_USER_ID, Some(line)).await;
        assert_eq!(response.replies[0].delivery, Delivery::ReplyTo, "line {:?}", line);
        assert!(response.replies[0].text.contains("Format error"));
    }

    let context = bot.scenarios().current(TEST_USER_ID).await.unwrap();
    assert_eq!(context.step, PendingStep::AwaitingNewExerciseLine { day_id: day.day_id });
    assert_eq!(context.attempts, 6);
    assert_eq!(db.count("exercises").await, 0);
    assert_eq!(db.count("logs").await, 0);

    // The re-armed step still accepts a valid line
    bot.handle_text(TEST_USER_ID, Some("Bench 3 80,5")).await;
    assert!(bot.scenarios().current(TEST_USER_ID).await.is_none());
    assert_eq!(db.count("logs").await, 1);
}

#[tokio::test]
async fn test_existing_exercise_rejects_negative_weight() {
    let db = TestDatabase::new().await;
    let bot = db.workout_service();
    let day = db.service.create_day(TEST_USER_ID, "Push".to_string()).await.unwrap();
    let bench = db.service
        .create_exercise_with_logs(day.day_id, "Bench".to_string(), &sets(3, &[80.0]), at(0))
        .await
        .unwrap();

    bot.handle_callback(TEST_USER_ID, CallbackAction::LogNew(bench.exercise_id)).await;
    bot.handle_text(TEST_USER_ID, Some("3 80 -1")).await;

    assert_eq!(db.service.logs.count_by_exercise(bench.exercise_id).await.unwrap(), 1);
    assert_eq!(
        bot.scenarios().current(TEST_USER_ID).await.unwrap().step,
        PendingStep::AwaitingExistingExerciseLine { exercise_id: bench.exercise_id }
    );
}

#[tokio::test]
async fn test_delete_day_flow() {
    let db = TestDatabase::new().await;
    let bot = db.workout_service();

    let response = bot.handle_menu(TEST_USER_ID, MenuButton::DeleteDay).await;
    assert_eq!(response.first_text(), Some("Nothing to delete."));

    let day = db.service.create_day(TEST_USER_ID, "Legs".to_string()).await.unwrap();
    db.service
        .create_exercise_with_logs(day.day_id, "Squat".to_string(), &sets(5, &[100.0, 110.0]), at(0))
        .await
        .unwrap();

    let response = bot.handle_menu(TEST_USER_ID, MenuButton::DeleteDay).await;
    assert_eq!(
        response.replies[0].keyboard,
        Keyboard::Inline(vec![InlineButton::new("❌ Legs", CallbackAction::DeleteDay(day.day_id))])
    );

    let response = bot.handle_callback(TEST_USER_ID, CallbackAction::DeleteDay(day.day_id)).await;
    assert_eq!(response.notice.as_deref(), Some("Day deleted!"));
    assert_eq!(response.replies.len(), 2);
    assert_eq!(response.replies[0].delivery, Delivery::Edit);
    assert_eq!(response.replies[1].keyboard, Keyboard::MainMenu);

    assert_eq!(db.count("training_days").await, 0);
    assert_eq!(db.count("exercises").await, 0);
    assert_eq!(db.count("logs").await, 0);

    // A second press on the stale button
    let response = bot.handle_callback(TEST_USER_ID, CallbackAction::DeleteDay(day.day_id)).await;
    assert_eq!(response.notice.as_deref(), Some("Not found."));
}

#[tokio::test]
async fn test_start_resets_pending_step() {
    let db = TestDatabase::new().await;
    let bot = db.workout_service();

    bot.handle_menu(TEST_USER_ID, MenuButton::AddDay).await;
    let response = bot.start(TEST_USER_ID).await;
    assert_eq!(response.replies[0].keyboard, Keyboard::MainMenu);

    bot.handle_text(TEST_USER_ID, Some("Push")).await;
    assert_eq!(db.count("training_days").await, 0);
}

#[tokio::test]
async fn test_users_do_not_share_steps() {
    let db = TestDatabase::new().await;
    let bot = db.workout_service();

    bot.handle_menu(TEST_USER_ID, MenuButton::AddDay).await;
    bot.handle_text(OTHER_USER_ID, Some("Pull")).await;
    bot.handle_text(TEST_USER_ID, Some("Push")).await;

    assert_eq!(db.service.days.count_by_user(TEST_USER_ID).await.unwrap(), 1);
    assert_eq!(db.service.days.count_by_user(OTHER_USER_ID).await.unwrap(), 0);
}

#[tokio::test]
async fn test_store_failure_returns_to_idle() {
    let db = TestDatabase::new().await;
    let bot = db.workout_service();
    let day = db.service.create_day(TEST_USER_ID, "Push".to_string()).await.unwrap();

    bot.handle_callback(TEST_USER_ID, CallbackAction::AddExercise(day.day_id)).await;
    db.pool.close().await;

    let response = bot.handle_text(TEST_USER_ID, Some("Bench 3 80")).await;
    assert_eq!(response.first_text(), Some("An error occurred, try again."));
    assert_eq!(response.replies[0].keyboard, Keyboard::MainMenu);
    assert!(bot.scenarios().current(TEST_USER_ID).await.is_none());
}

#[tokio::test]
async fn test_store_failure_on_day_name_returns_to_idle() {
    let db = TestDatabase::new().await;
    let bot = db.workout_service();

    bot.handle_menu(TEST_USER_ID, MenuButton::AddDay).await;
    db.pool.close().await;

    let response = bot.handle_text(TEST_USER_ID, Some("Legs")).await;
    assert_eq!(response.first_text(), Some("An error occurred, try again."));
    assert!(bot.scenarios().current(TEST_USER_ID).await.is_none());
}
