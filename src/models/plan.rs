use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Race the plan prepares for. Wire names match the client payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaceType {
    #[serde(rename = "marathon")]
    Marathon,
    #[serde(rename = "half-marathon")]
    HalfMarathon,
}

impl RaceType {
    /// Official race distance in kilometers
    pub fn distance_km(self) -> f64 {
        match self {
            RaceType::Marathon => 42.195,
            RaceType::HalfMarathon => 21.0975,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Training block a week belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Base,
    Build,
    Taper,
}

/// User-selected weakness category driving build-phase adjustments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusArea {
    Speed,
    Endurance,
    LongRuns,
    Hills,
    Recovery,
    Consistency,
}

impl FocusArea {
    /// Parse a focus area as submitted by the client. Unknown values are
    /// ignored by the caller, matching the lenient behavior of the form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Speed" => Some(FocusArea::Speed),
            "Endurance" => Some(FocusArea::Endurance),
            "Long Runs" => Some(FocusArea::LongRuns),
            "Hills" => Some(FocusArea::Hills),
            "Recovery" => Some(FocusArea::Recovery),
            "Consistency" => Some(FocusArea::Consistency),
            _ => None,
        }
    }
}

/// Training paces in seconds per kilometer, derived from a goal race time.
/// Values keep full precision; formatting happens only at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paces {
    pub marathon: f64,
    pub easy: f64,
    pub tempo: f64,
    pub interval: f64,
}

/// Input to the plan generation engine
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub race_type: RaceType,
    pub total_weeks: u32,
    pub experience_level: ExperienceLevel,
    pub goal_time_seconds: Option<u32>,
    pub focus_areas: Vec<FocusArea>,
}

/// One generated week. Constructed once by the synthesizer and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanWeek {
    pub week: u32,
    pub phase: Phase,
    pub workouts: Vec<String>,
}

/// The engine's only validation failure. The message is user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("Plan duration is too short. Minimum {min} weeks required.")]
    DurationTooShort { min: u32 },
}

/// Persisted plan record, appended to the plan store after generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlanRecord {
    pub id: Uuid,
    pub plan_type: RaceType,
    pub plan_duration: u32,
    pub experience_level: ExperienceLevel,
    pub plan: Vec<PlanWeek>,
}
