// Business logic: the plan generation engine and the record services

pub mod pace_calculator;
pub mod plan_generation_service;
pub mod plan_service;
pub mod workout_service;
pub mod workout_templates;

pub use plan_generation_service::{generate_plan, MIN_PLAN_WEEKS, TAPER_WEEKS};
pub use plan_service::PlanService;
pub use workout_service::WorkoutService;
