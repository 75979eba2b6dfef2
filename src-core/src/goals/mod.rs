mod goal_pacer;
mod goal_pacing_model;

pub use goal_pacer::{business_days_between, days_remaining, pace};
pub use goal_pacing_model::GoalPacing;
