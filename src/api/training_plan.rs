use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::api::{internal_error, ApiMessage};
use crate::auth::{jwt_auth_middleware, AuthService};
use crate::models::{
    ExperienceLevel, FocusArea, PlanRequest, PlanWeek, RaceType, TrainingPlanRecord,
};
use crate::services::pace_calculator::parse_time_to_seconds;
use crate::services::{generate_plan, PlanService};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanRequest {
    pub plan_type: Option<RaceType>,
    pub plan_duration: Option<u32>,
    pub experience_level: Option<ExperienceLevel>,
    pub marathon_time: Option<String>,
    pub half_marathon_time: Option<String>,
    #[serde(default)]
    pub selected_focus_areas: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GeneratePlanResponse {
    pub message: String,
    pub plan: Vec<PlanWeek>,
}

#[derive(Debug, Serialize)]
pub struct PlanListResponse {
    pub plans: Vec<TrainingPlanRecord>,
}

#[derive(Clone)]
pub struct TrainingPlanState {
    pub plan_service: PlanService,
}

pub fn training_plan_routes(auth_service: AuthService, plan_service: PlanService) -> Router {
    Router::new()
        .route("/generate", post(generate))
        .route("/", get(list_plans))
        .layer(middleware::from_fn_with_state(
            auth_service,
            jwt_auth_middleware,
        ))
        .with_state(TrainingPlanState { plan_service })
}

/// Generate a training plan and persist the resulting record
#[tracing::instrument(skip(state, request))]
async fn generate(
    State(state): State<TrainingPlanState>,
    Json(request): Json<GeneratePlanRequest>,
) -> Result<Json<GeneratePlanResponse>, (StatusCode, Json<ApiMessage>)> {
    let (Some(plan_type), Some(plan_duration), Some(experience_level)) = (
        request.plan_type,
        request.plan_duration,
        request.experience_level,
    ) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiMessage::new(
                "Plan type, duration, and experience level are required",
            )),
        ));
    };

    // A malformed or missing time string means no pace-based computation,
    // not an error
    let goal_time_seconds = match plan_type {
        RaceType::Marathon => request.marathon_time.as_deref(),
        RaceType::HalfMarathon => request.half_marathon_time.as_deref(),
    }
    .and_then(parse_time_to_seconds);

    let focus_areas: Vec<FocusArea> = request
        .selected_focus_areas
        .iter()
        .filter_map(|s| FocusArea::parse(s))
        .collect();

    let plan_request = PlanRequest {
        race_type: plan_type,
        total_weeks: plan_duration,
        experience_level,
        goal_time_seconds,
        focus_areas,
    };

    let plan = generate_plan(&plan_request)
        .map_err(|err| (StatusCode::BAD_REQUEST, Json(ApiMessage::new(err.to_string()))))?;

    state
        .plan_service
        .save_plan(plan_type, plan_duration, experience_level, plan.clone())
        .await
        .map_err(|err| {
            tracing::error!("Failed to persist training plan: {}", err);
            internal_error()
        })?;

    Ok(Json(GeneratePlanResponse {
        message: "Training plan generated successfully".to_string(),
        plan,
    }))
}

/// List stored training plan records
#[tracing::instrument(skip(state))]
async fn list_plans(
    State(state): State<TrainingPlanState>,
) -> Result<Json<PlanListResponse>, (StatusCode, Json<ApiMessage>)> {
    let plans = state.plan_service.list_plans().await.map_err(|err| {
        tracing::error!("Failed to list training plans: {}", err);
        internal_error()
    })?;

    Ok(Json(PlanListResponse { plans }))
}
