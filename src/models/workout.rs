use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A logged workout, owned by the user who logged it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Calendar date as entered by the user (not interpreted server-side)
    pub date: String,
    /// Distance in kilometers
    pub distance: f64,
    /// Duration in minutes
    pub duration: f64,
    pub notes: String,
}
