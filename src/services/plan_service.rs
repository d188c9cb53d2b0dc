use std::sync::Arc;
use uuid::Uuid;

use crate::models::{ExperienceLevel, PlanWeek, RaceType, TrainingPlanRecord};
use crate::storage::{JsonFileStore, StoreError};

/// Persists generated training plans to the plan store
#[derive(Debug, Clone)]
pub struct PlanService {
    store: Arc<JsonFileStore<TrainingPlanRecord>>,
}

impl PlanService {
    pub fn new(store: Arc<JsonFileStore<TrainingPlanRecord>>) -> Self {
        Self { store }
    }

    /// Append a freshly generated plan and return the stored record
    pub async fn save_plan(
        &self,
        plan_type: RaceType,
        plan_duration: u32,
        experience_level: ExperienceLevel,
        plan: Vec<PlanWeek>,
    ) -> Result<TrainingPlanRecord, StoreError> {
        let record = TrainingPlanRecord {
            id: Uuid::new_v4(),
            plan_type,
            plan_duration,
            experience_level,
            plan,
        };
        self.store.append(record.clone()).await?;
        Ok(record)
    }

    pub async fn list_plans(&self) -> Result<Vec<TrainingPlanRecord>, StoreError> {
        self.store.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Phase;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_save_and_list_plans() {
        let dir = tempfile::tempdir().unwrap();
        let service = PlanService::new(Arc::new(JsonFileStore::new(dir.path().join("plans.json"))));

        let week = PlanWeek {
            week: 1,
            phase: Phase::Base,
            workouts: vec!["Easy Run (30min)".to_string()],
        };
        let saved = service
            .save_plan(RaceType::Marathon, 16, ExperienceLevel::Beginner, vec![week])
            .await
            .unwrap();

        let listed = service.list_plans().await.unwrap();
        assert_eq!(listed, vec![saved]);
        assert_eq!(listed[0].plan_duration, 16);
    }
}
