//! Router, shared state and HTTP plumbing.

use std::sync::Arc;

use axum::{
    middleware::from_fn,
    routing::{delete, get, post, put},
    Router,
};
use summit_core::GoalTracker;
use tokio::sync::Mutex;

pub mod cors;
pub mod errors;
pub mod extract;
pub mod handlers;

pub use errors::ApiError;
pub use extract::JsonBody;

/// State shared by all handlers.
///
/// The tracker sits behind a mutex so that each request's load, change and
/// save cycle runs to completion before the next one starts. Without it two
/// concurrent writes would both start from the same file contents and one
/// of them would be lost.
#[derive(Clone)]
pub struct AppState {
    tracker: Arc<Mutex<GoalTracker>>,
}

impl AppState {
    pub fn new(tracker: GoalTracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/addGoal", post(handlers::add_goal_handler))
        .route("/getGoals", get(handlers::get_goals_handler))
        .route("/changeGoal/:id", put(handlers::change_goal_handler))
        .route(
            "/changeSubGoal/:goal_id/:sub_goal_id",
            put(handlers::change_sub_goal_handler),
        )
        .route("/deleteGoal/:id", delete(handlers::delete_goal_handler))
        .route(
            "/deleteSubGoal/:goal_id/:sub_goal_id",
            delete(handlers::delete_sub_goal_handler),
        )
        .route("/addSubGoal/:goal_id", post(handlers::add_sub_goal_handler))
        .fallback(handlers::not_found_handler)
        .layer(from_fn(cors::cors_middleware))
        .with_state(state)
}
