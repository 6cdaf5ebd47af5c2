//! Endpoint handlers.
//!
//! Each handler converts the request into core parameters, runs the tracker
//! operation under the state lock, and wraps the result in the response
//! envelope clients expect: `{"message", "goal"}` for goals and
//! `{"message", "subGoal"}` for sub-goals.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use summit_core::{
    AddSubGoal, ChangeGoal, ChangeSubGoal, CreateGoal, Goal, Id, PathId, SubGoal, SubGoalRef,
};

use super::{ApiError, AppState, JsonBody};

type ApiResult<T> = Result<T, ApiError>;

/// Body of `POST /addGoal`.
///
/// Fields of an unexpected JSON type are read as absent rather than
/// rejected: a non-string `goal` behaves like `null`, and a `subGoals` that
/// is not an array creates no sub-goals.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalBody {
    #[serde(default, deserialize_with = "lenient_text")]
    pub goal: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub sub_goals: Option<Vec<String>>,
}

/// Body of the endpoints that take a single text value.
#[derive(Debug, Default, Deserialize)]
pub struct TextBody {
    #[serde(default, deserialize_with = "lenient_text")]
    pub goal: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };

    // Non-string entries keep their JSON text
    Ok(Some(
        items
            .into_iter()
            .map(|item| match item {
                Value::String(text) => text,
                other => other.to_string(),
            })
            .collect(),
    ))
}

#[derive(Debug, Serialize)]
pub struct GoalResponse {
    pub message: &'static str,
    pub goal: Goal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubGoalResponse {
    pub message: &'static str,
    pub sub_goal: SubGoal,
}

pub async fn add_goal_handler(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateGoalBody>,
) -> ApiResult<(StatusCode, Json<GoalResponse>)> {
    debug!("add_goal: {:?}", body);

    let params = CreateGoal {
        goal: body.goal,
        sub_goals: body.sub_goals,
    };
    let goal = state.tracker.lock().await.create_goal(&params).await?;

    Ok((
        StatusCode::CREATED,
        Json(GoalResponse {
            message: "Goal added",
            goal,
        }),
    ))
}

pub async fn get_goals_handler(State(state): State<AppState>) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.tracker.lock().await.list_goals().await?;
    Ok(Json(goals))
}

pub async fn change_goal_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<TextBody>,
) -> ApiResult<Json<GoalResponse>> {
    debug!("change_goal {id}: {:?}", body);

    let params = ChangeGoal {
        id: PathId::parse(&id),
        goal: body.goal,
    };
    let goal = state.tracker.lock().await.change_goal(&params).await?;

    Ok(Json(GoalResponse {
        message: "Goal updated",
        goal,
    }))
}

pub async fn change_sub_goal_handler(
    State(state): State<AppState>,
    Path((goal_id, sub_goal_id)): Path<(String, String)>,
    JsonBody(body): JsonBody<TextBody>,
) -> ApiResult<Json<SubGoalResponse>> {
    debug!("change_sub_goal {goal_id}/{sub_goal_id}: {:?}", body);

    let params = ChangeSubGoal {
        goal_id: PathId::parse(&goal_id),
        sub_goal_id: PathId::parse(&sub_goal_id),
        goal: body.goal,
    };
    let sub_goal = state.tracker.lock().await.change_sub_goal(&params).await?;

    Ok(Json(SubGoalResponse {
        message: "SubGoal updated",
        sub_goal,
    }))
}

pub async fn delete_goal_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<GoalResponse>> {
    debug!("delete_goal {id}");

    let params = Id {
        id: PathId::parse(&id),
    };
    let goal = state.tracker.lock().await.delete_goal(&params).await?;

    Ok(Json(GoalResponse {
        message: "Goal deleted",
        goal,
    }))
}

pub async fn delete_sub_goal_handler(
    State(state): State<AppState>,
    Path((goal_id, sub_goal_id)): Path<(String, String)>,
) -> ApiResult<Json<SubGoalResponse>> {
    debug!("delete_sub_goal {goal_id}/{sub_goal_id}");

    let params = SubGoalRef {
        goal_id: PathId::parse(&goal_id),
        sub_goal_id: PathId::parse(&sub_goal_id),
    };
    let sub_goal = state.tracker.lock().await.delete_sub_goal(&params).await?;

    Ok(Json(SubGoalResponse {
        message: "SubGoal deleted",
        sub_goal,
    }))
}

pub async fn add_sub_goal_handler(
    State(state): State<AppState>,
    Path(goal_id): Path<String>,
    JsonBody(body): JsonBody<TextBody>,
) -> ApiResult<(StatusCode, Json<SubGoalResponse>)> {
    debug!("add_sub_goal {goal_id}: {:?}", body);

    let params = AddSubGoal {
        goal_id: PathId::parse(&goal_id),
        goal: body.goal,
    };
    let sub_goal = state.tracker.lock().await.add_sub_goal(&params).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubGoalResponse {
            message: "SubGoal added",
            sub_goal,
        }),
    ))
}

pub async fn not_found_handler() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Not found")
}
