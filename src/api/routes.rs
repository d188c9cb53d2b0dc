use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::auth::auth_routes;
use super::health::health_check;
use super::training_plan::training_plan_routes;
use super::workouts::workout_routes;
use crate::auth::{cors_layer, security_headers_layer, AuthService};
use crate::services::{PlanService, WorkoutService};
use crate::storage::JsonFileStore;

/// Build the application router with all stores rooted at `data_dir`
pub fn create_routes(data_dir: &Path, jwt_secret: &str) -> Router {
    let users = Arc::new(JsonFileStore::new(data_dir.join("users.json")));
    let plans = Arc::new(JsonFileStore::new(data_dir.join("trainingPlans.json")));
    let workouts = Arc::new(JsonFileStore::new(data_dir.join("workouts.json")));

    let auth_service = AuthService::new(users, jwt_secret);
    let plan_service = PlanService::new(plans);
    let workout_service = WorkoutService::new(workouts);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/auth", auth_routes(auth_service.clone()))
        .nest(
            "/api/training-plan",
            training_plan_routes(auth_service.clone(), plan_service),
        )
        .nest("/api/workouts", workout_routes(auth_service, workout_service))
        .layer(TraceLayer::new_for_http())
        .layer(security_headers_layer())
        .layer(cors_layer())
}
