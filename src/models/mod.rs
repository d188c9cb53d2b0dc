// Data models shared by the plan generation engine and the API

pub mod plan;
pub mod workout;

pub use plan::*;
pub use workout::*;
