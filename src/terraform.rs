pub mod plan;

pub use plan::{PlanSummary, load_plan, load_validated_plan, summarize_plan, validate_plan_format};
