//! External response decoding and gym profile parsing.
//!
//! Two JSON shapes come back from the outside world:
//! - detection: `{"equipments": [label, ...]}`
//! - plan: `{"workouts": [{title, estMinutes, exercises: [...]}]}`
//!
//! Every embedded equipment label goes through the normalizer. Shape errors
//! are hard errors; unknown labels are not.

use super::catalog::Equipment;
use super::error::{LiftError, Result};
use super::normalizer;
use super::types::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Wire shapes
// ============================================================================

/// Equipment classifier response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DetectionResponse {
    /// Detected equipment labels
    #[schemars(with = "Vec<Equipment>")]
    pub equipments: Vec<String>,
}

/// Plan generator response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PlanResponse {
    pub workouts: Vec<ResponseWorkout>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseWorkout {
    pub title: String,
    pub est_minutes: i64,
    pub exercises: Vec<ResponseExercise>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ResponseExercise {
    pub name: String,

    /// Primary muscle group
    pub primary: String,

    /// Equipment label; decoded leniently, advertised as the catalog enum
    #[serde(default)]
    #[schemars(with = "Option<Equipment>")]
    pub equipment: Option<String>,

    #[serde(default)]
    pub tempo: Option<String>,

    #[serde(default)]
    pub sets: Option<u32>,

    #[serde(default)]
    pub reps: Option<u32>,
}

// ============================================================================
// Detection decode
// ============================================================================

/// Decode a detection response into canonical equipment, first
/// occurrence order, duplicates and unknown labels dropped.
pub fn parse_detection(input: impl AsRef<[u8]>) -> Result<EquipmentSet> {
    let resp: DetectionResponse = serde_json::from_slice(input.as_ref())?;
    let set = normalizer::normalize_all(resp.equipments.iter().map(String::as_str));
    tracing::debug!(
        labels = resp.equipments.len(),
        recognized = set.len(),
        "decoded detection response"
    );
    Ok(set)
}

/// Read and decode a detection response file.
pub fn parse_detection_file(path: &Path) -> Result<EquipmentSet> {
    let content = std::fs::read(path).map_err(|e| LiftError::io(path, e))?;
    parse_detection(content)
}

// ============================================================================
// Plan decode
// ============================================================================

/// Decode a plan response into workouts. Each exercise becomes its own
/// single-movement block, in input order.
pub fn parse_workouts(input: impl AsRef<[u8]>) -> Result<Vec<Workout>> {
    let resp: PlanResponse = serde_json::from_slice(input.as_ref())?;
    let mut workouts = Vec::with_capacity(resp.workouts.len());

    for (wi, w) in resp.workouts.into_iter().enumerate() {
        let mut blocks = Vec::with_capacity(w.exercises.len());
        for (xi, ex) in w.exercises.into_iter().enumerate() {
            let movement = decode_exercise(ex).map_err(|reason| {
                LiftError::invalid(format!("workouts[{}].exercises[{}]", wi, xi), reason)
            })?;
            blocks.push(Block::single(movement));
        }
        let index = wi.to_string();
        workouts.push(Workout {
            id: WorkoutId::derive(&["external", &index, &w.title]),
            title: w.title,
            blocks,
            est_minutes: w.est_minutes,
        });
    }

    tracing::debug!(workouts = workouts.len(), "decoded plan response");
    Ok(workouts)
}

/// Decode a plan response and attach the goal it was requested for.
pub fn parse_plan(input: impl AsRef<[u8]>, goal: Goal) -> Result<Plan> {
    Ok(Plan {
        goal,
        workouts: parse_workouts(input)?,
    })
}

/// Read and decode a plan response file.
pub fn parse_plan_file(path: &Path, goal: Goal) -> Result<Plan> {
    let content = std::fs::read(path).map_err(|e| LiftError::io(path, e))?;
    parse_plan(content, goal)
}

fn decode_exercise(ex: ResponseExercise) -> std::result::Result<Movement, String> {
    if ex.name.trim().is_empty() {
        return Err("name must not be empty".to_string());
    }
    Ok(Movement {
        name: ex.name,
        equipment: ex.equipment.as_deref().and_then(normalizer::normalize),
        primary: ex.primary,
        tempo: ex.tempo,
        sets: ex.sets.filter(|n| *n > 0),
        reps: ex.reps.filter(|n| *n > 0),
    })
}

// ============================================================================
// Gym profile (gym.yaml)
// ============================================================================

/// How much a profile finding matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Reported, but the profile is still usable.
    Warning,
    Error,
}

/// Validation finding on a gym profile.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub severity: Severity,
    pub message: String,
}

impl ValidationError {
    fn error(message: String) -> Self {
        Self {
            severity: Severity::Error,
            message,
        }
    }

    fn warning(message: String) -> Self {
        Self {
            severity: Severity::Warning,
            message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Parse a gym.yaml file from disk.
pub fn parse_profile_file(path: &Path) -> Result<GymProfile> {
    let content = std::fs::read_to_string(path).map_err(|e| LiftError::io(path, e))?;
    parse_profile(&content)
}

/// Parse a gym profile from a YAML string.
pub fn parse_profile(yaml: &str) -> Result<GymProfile> {
    Ok(serde_yaml_ng::from_str(yaml)?)
}

/// Validate a parsed profile. Returns every finding; only `Severity::Error`
/// entries make the profile unusable.
pub fn validate_profile(profile: &GymProfile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if profile.version != "1.0" {
        errors.push(ValidationError::error(format!(
            "version must be \"1.0\", got \"{}\"",
            profile.version
        )));
    }

    if let Some(name) = &profile.name {
        if name.trim().is_empty() {
            errors.push(ValidationError::error(
                "name must not be empty when set".to_string(),
            ));
        }
    }

    for label in &profile.equipments {
        if normalizer::normalize(label).is_none() {
            errors.push(ValidationError::warning(format!(
                "unrecognized equipment '{}' will be ignored",
                label
            )));
        }
    }

    errors
}

// ============================================================================
// Schemas
// ============================================================================

/// JSON Schema the plan generator's output must satisfy.
pub fn plan_response_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(PlanResponse)
}

/// JSON Schema the equipment classifier's output must satisfy.
pub fn detection_response_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(DetectionResponse)
}
