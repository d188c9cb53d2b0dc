use std::sync::Arc;
use uuid::Uuid;

use crate::models::Workout;
use crate::storage::{JsonFileStore, StoreError};

/// Persists logged workouts, keyed by the owning user
#[derive(Debug, Clone)]
pub struct WorkoutService {
    store: Arc<JsonFileStore<Workout>>,
}

impl WorkoutService {
    pub fn new(store: Arc<JsonFileStore<Workout>>) -> Self {
        Self { store }
    }

    pub async fn log_workout(
        &self,
        user_id: Uuid,
        date: String,
        distance: f64,
        duration: f64,
        notes: Option<String>,
    ) -> Result<Workout, StoreError> {
        let workout = Workout {
            id: Uuid::new_v4(),
            user_id,
            date,
            distance,
            duration,
            notes: notes.unwrap_or_default(),
        };
        self.store.append(workout.clone()).await?;
        Ok(workout)
    }

    /// Workouts belonging to one user, in insertion order
    pub async fn workouts_for_user(&self, user_id: Uuid) -> Result<Vec<Workout>, StoreError> {
        self.store.find(|w| w.user_id == user_id).await
    }
}
