mod monthly_aggregator;
mod monthly_model;

pub use monthly_aggregator::{aggregate, aggregate_selection};
pub use monthly_model::{ClientTotal, DailyPoint, MonthlyAggregate};
