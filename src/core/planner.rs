//! Plan resolution: template output or a validated external plan.
//!
//! The caller owns the network call to the plan generator. It hands over the
//! response body, or nothing when the call failed, and always gets a usable
//! plan back unless the body itself is malformed.

use super::error::Result;
use super::parser;
use super::templates;
use super::types::*;
use super::validator;
use std::fmt;

/// Where the final plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    /// No external plan was supplied
    Template,
    /// External plan survived validation
    External,
    /// External plan emptied by validation, replaced by the template plan
    Fallback,
}

impl fmt::Display for PlanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template => write!(f, "TEMPLATE"),
            Self::External => write!(f, "EXTERNAL"),
            Self::Fallback => write!(f, "FALLBACK"),
        }
    }
}

/// Final plan plus provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub plan: Plan,
    pub source: PlanSource,
    pub dropped_movements: usize,
}

/// Resolve the plan for a request. `external` is the generator's raw JSON
/// body, if the generator answered.
pub fn resolve_plan(
    goal: Goal,
    context: TrainingContext,
    available: &EquipmentSet,
    external: Option<&[u8]>,
) -> Result<Resolution> {
    let Some(body) = external else {
        tracing::debug!(goal = %goal, context = %context, "no external plan, using templates");
        return Ok(Resolution {
            plan: templates::generate(goal, context, available),
            source: PlanSource::Template,
            dropped_movements: 0,
        });
    };

    let plan = parser::parse_plan(body, goal)?;
    let sanitized = validator::sanitize(plan, context, available);
    let source = if sanitized.fell_back {
        PlanSource::Fallback
    } else {
        PlanSource::External
    };

    Ok(Resolution {
        plan: sanitized.plan,
        source,
        dropped_movements: sanitized.dropped_movements,
    })
}

/// Resolve directly from a gym profile.
pub fn resolve_for_profile(profile: &GymProfile, external: Option<&[u8]>) -> Result<Resolution> {
    resolve_plan(
        profile.goal,
        profile.context,
        &profile.equipment(),
        external,
    )
}

/// One-line human summary of a resolution.
pub fn describe(resolution: &Resolution) -> String {
    let movements = resolution.plan.movements().count();
    match resolution.source {
        PlanSource::Template => format!(
            "{}: {} workouts, {} movements from templates",
            resolution.plan.goal,
            resolution.plan.workouts.len(),
            movements
        ),
        PlanSource::External => format!(
            "{}: {} workouts, {} movements ({} dropped for missing equipment)",
            resolution.plan.goal,
            resolution.plan.workouts.len(),
            movements,
            resolution.dropped_movements
        ),
        PlanSource::Fallback => format!(
            "{}: external plan unusable ({} movements dropped), {} template workouts",
            resolution.plan.goal,
            resolution.dropped_movements,
            resolution.plan.workouts.len()
        ),
    }
}
