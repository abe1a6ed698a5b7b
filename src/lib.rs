//! LiftPlan: equipment-aware workout planning.
//!
//! Turns an unreliable equipment classification and an unreliable external
//! plan into a workout plan the user can actually perform. Deterministic
//! templates back up every external answer.

pub mod cli;
pub mod core;

pub use crate::core::catalog::Equipment;
pub use crate::core::error::{LiftError, Result};
pub use crate::core::normalizer::normalize;
pub use crate::core::parser::{parse_detection, parse_plan};
pub use crate::core::planner::{resolve_plan, PlanSource, Resolution};
pub use crate::core::templates::generate;
pub use crate::core::types::{
    Block, EquipmentSet, Goal, Movement, Plan, TrainingContext, Workout, WorkoutId,
};
pub use crate::core::validator::validate;
