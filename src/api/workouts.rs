use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::{internal_error, ApiMessage};
use crate::auth::{jwt_auth_middleware, AuthService, UserSession};
use crate::models::Workout;
use crate::services::WorkoutService;

#[derive(Debug, Deserialize)]
pub struct LogWorkoutRequest {
    pub date: Option<String>,
    pub distance: Option<f64>,
    pub duration: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LogWorkoutResponse {
    pub message: String,
    pub workout: Workout,
}

#[derive(Debug, Serialize)]
pub struct WorkoutListResponse {
    pub workouts: Vec<Workout>,
}

#[derive(Clone)]
pub struct WorkoutState {
    pub workout_service: WorkoutService,
}

pub fn workout_routes(auth_service: AuthService, workout_service: WorkoutService) -> Router {
    Router::new()
        .route("/log", post(log_workout))
        .route("/get", get(get_workouts))
        .layer(middleware::from_fn_with_state(
            auth_service,
            jwt_auth_middleware,
        ))
        .with_state(WorkoutState { workout_service })
}

/// Log a workout for the authenticated user
#[tracing::instrument(skip(state, session, request))]
async fn log_workout(
    State(state): State<WorkoutState>,
    Extension(session): Extension<UserSession>,
    Json(request): Json<LogWorkoutRequest>,
) -> Result<(StatusCode, Json<LogWorkoutResponse>), (StatusCode, Json<ApiMessage>)> {
    let (Some(date), Some(distance), Some(duration)) =
        (request.date, request.distance, request.duration)
    else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiMessage::new("Date, distance, and duration are required")),
        ));
    };

    let workout = state
        .workout_service
        .log_workout(session.user_id, date, distance, duration, request.notes)
        .await
        .map_err(|err| {
            tracing::error!("Failed to log workout: {}", err);
            internal_error()
        })?;

    Ok((
        StatusCode::CREATED,
        Json(LogWorkoutResponse {
            message: "Workout logged successfully".to_string(),
            workout,
        }),
    ))
}

/// List the authenticated user's workouts
#[tracing::instrument(skip(state, session))]
async fn get_workouts(
    State(state): State<WorkoutState>,
    Extension(session): Extension<UserSession>,
) -> Result<Json<WorkoutListResponse>, (StatusCode, Json<ApiMessage>)> {
    let workouts = state
        .workout_service
        .workouts_for_user(session.user_id)
        .await
        .map_err(|err| {
            tracing::error!("Failed to list workouts: {}", err);
            internal_error()
        })?;

    Ok(Json(WorkoutListResponse { workouts }))
}
