//! Page Components

mod planner;

pub use planner::PlannerPage;
