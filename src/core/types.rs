//! Plan model: goals, movements, blocks, workouts, plans, profiles, sessions.
//!
//! All types are plain values owned by the plan that contains them. Domain
//! types serialize with camelCase keys so a saved plan reads like the
//! external generator's documents; the gym profile uses snake_case YAML keys.

use super::catalog::Equipment;
use super::error::LiftError;
use super::normalizer;
use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered, duplicate-free set of available equipment.
pub type EquipmentSet = IndexSet<Equipment>;

// ============================================================================
// Goal / context
// ============================================================================

/// Training goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Goal {
    Strength,
    Hypertrophy,
    FatLoss,
    Endurance,
    Mobility,
}

impl Goal {
    pub const ALL: [Goal; 5] = [
        Self::Strength,
        Self::Hypertrophy,
        Self::FatLoss,
        Self::Endurance,
        Self::Mobility,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Hypertrophy => "hypertrophy",
            Self::FatLoss => "fatLoss",
            Self::Endurance => "endurance",
            Self::Mobility => "mobility",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Goal {
    type Err = LiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = loose_key(s);
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(&key))
            .ok_or_else(|| LiftError::UnknownGoal(s.to_string()))
    }
}

/// Where the user trains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrainingContext {
    #[default]
    Gym,
    Home,
}

impl fmt::Display for TrainingContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gym => write!(f, "gym"),
            Self::Home => write!(f, "home"),
        }
    }
}

impl FromStr for TrainingContext {
    type Err = LiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gym" => Ok(Self::Gym),
            "home" => Ok(Self::Home),
            _ => Err(LiftError::UnknownContext(s.to_string())),
        }
    }
}

/// "fat-loss" / "fat_loss" / "Fat Loss" all become "fatloss".
fn loose_key(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .collect()
}

// ============================================================================
// Movements and blocks
// ============================================================================

/// A single exercise prescription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub name: String,

    /// Required equipment; `None` means bodyweight and is always allowed.
    #[serde(default)]
    pub equipment: Option<Equipment>,

    /// Primary muscle group
    pub primary: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
}

impl Movement {
    /// Template movement with no set/rep prescription.
    pub fn new(name: &str, equipment: Option<Equipment>, primary: &str) -> Self {
        Self {
            name: name.to_string(),
            equipment,
            primary: primary.to_string(),
            tempo: None,
            sets: None,
            reps: None,
        }
    }

    pub fn with_tempo(mut self, tempo: &str) -> Self {
        self.tempo = Some(tempo.to_string());
        self
    }

    /// Bodyweight movements pass; equipment movements need a match.
    pub fn is_available(&self, available: &EquipmentSet) -> bool {
        match self.equipment {
            None => true,
            Some(eq) => available.contains(&eq),
        }
    }
}

/// One exercise, or a superset when it holds more than one movement.
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Movement>", into = "Vec<Movement>")]
pub struct Block(Vec<Movement>);

impl Block {
    pub fn single(movement: Movement) -> Self {
        Self(vec![movement])
    }

    /// Returns `None` for an empty movement list.
    pub fn superset(movements: Vec<Movement>) -> Option<Self> {
        if movements.is_empty() {
            None
        } else {
            Some(Self(movements))
        }
    }

    pub fn movements(&self) -> &[Movement] {
        &self.0
    }

    pub fn first(&self) -> &Movement {
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_superset(&self) -> bool {
        self.0.len() > 1
    }

    /// Keep only movements matching `keep`. `None` when nothing survives.
    pub fn retain(self, keep: impl FnMut(&Movement) -> bool) -> Option<Self> {
        Self::superset(self.0.into_iter().filter(keep).collect())
    }
}

impl TryFrom<Vec<Movement>> for Block {
    type Error = String;

    fn try_from(movements: Vec<Movement>) -> Result<Self, Self::Error> {
        Self::superset(movements).ok_or_else(|| "block must contain at least one movement".into())
    }
}

impl From<Block> for Vec<Movement> {
    fn from(block: Block) -> Self {
        block.0
    }
}

// ============================================================================
// Workouts and plans
// ============================================================================

/// Opaque workout identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Deterministic id from the given seed parts (BLAKE3, 64-bit prefix).
    pub fn derive(parts: &[&str]) -> Self {
        let joined = parts.join("\0");
        let hex = blake3::hash(joined.as_bytes()).to_hex();
        Self(format!("w-{}", &hex.as_str()[..16]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single training session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: WorkoutId,
    pub title: String,
    pub blocks: Vec<Block>,
    pub est_minutes: i64,
}

impl Workout {
    pub fn movements(&self) -> impl Iterator<Item = &Movement> {
        self.blocks.iter().flat_map(|b| b.movements())
    }
}

/// A goal plus its ordered workouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub goal: Goal,
    pub workouts: Vec<Workout>,
}

impl Plan {
    pub fn movements(&self) -> impl Iterator<Item = &Movement> {
        self.workouts.iter().flat_map(Workout::movements)
    }

    /// True when no workout has a single block left.
    pub fn is_empty(&self) -> bool {
        self.workouts.iter().all(|w| w.blocks.is_empty())
    }
}

// ============================================================================
// Gym profile (gym.yaml)
// ============================================================================

/// User configuration: what they train for and what they train with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GymProfile {
    /// Schema version (must be "1.0")
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    pub goal: Goal,

    #[serde(default)]
    pub context: TrainingContext,

    /// Raw equipment labels, resolved through the normalizer
    #[serde(default)]
    pub equipments: Vec<String>,

    /// Photos the equipment list was detected from (informational)
    #[serde(default)]
    pub photo_identifiers: Vec<String>,
}

impl GymProfile {
    /// Canonical equipment in first-appearance order; unknown labels dropped.
    pub fn equipment(&self) -> EquipmentSet {
        normalizer::normalize_all(self.equipments.iter().map(String::as_str))
    }
}

// ============================================================================
// Saved session
// ============================================================================

/// A generated plan persisted together with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSession {
    pub saved_at: DateTime<Utc>,
    pub goal: Goal,
    pub context: TrainingContext,
    pub equipments: Vec<Equipment>,
    pub workouts: Vec<Workout>,
}

impl SavedSession {
    pub fn plan(&self) -> Plan {
        Plan {
            goal: self.goal,
            workouts: self.workouts.clone(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn squat() -> Movement {
        Movement::new("Back Squat", Some(Equipment::SquatRack), "quads")
    }

    #[test]
    fn test_goal_serde_camel_case() {
        assert_eq!(serde_json::to_string(&Goal::FatLoss).unwrap(), "\"fatLoss\"");
        let g: Goal = serde_json::from_str("\"hypertrophy\"").unwrap();
        assert_eq!(g, Goal::Hypertrophy);
    }

    #[test]
    fn test_goal_from_str_loose() {
        assert_eq!("fat-loss".parse::<Goal>().unwrap(), Goal::FatLoss);
        assert_eq!("Fat Loss".parse::<Goal>().unwrap(), Goal::FatLoss);
        assert_eq!("STRENGTH".parse::<Goal>().unwrap(), Goal::Strength);
        assert!("bulk".parse::<Goal>().is_err());
    }

    #[test]
    fn test_context_from_str_and_default() {
        assert_eq!("Home".parse::<TrainingContext>().unwrap(), TrainingContext::Home);
        assert!("office".parse::<TrainingContext>().is_err());
        assert_eq!(TrainingContext::default(), TrainingContext::Gym);
    }

    #[test]
    fn test_movement_availability() {
        let available: EquipmentSet = [Equipment::Dumbbells].into_iter().collect();
        assert!(!squat().is_available(&available));
        assert!(Movement::new("Plank", None, "core").is_available(&available));
        assert!(Movement::new("DB Lunge", Some(Equipment::Dumbbells), "quads")
            .is_available(&available));
    }

    #[test]
    fn test_block_rejects_empty() {
        assert!(Block::superset(vec![]).is_none());
        let err = serde_json::from_str::<Block>("[]");
        assert!(err.is_err());
    }

    #[test]
    fn test_block_retain_drops_to_none() {
        let block = Block::single(squat());
        assert!(block.retain(|m| m.equipment.is_none()).is_none());
    }

    #[test]
    fn test_block_retain_keeps_survivors() {
        let block = Block::superset(vec![squat(), Movement::new("Plank", None, "core")]).unwrap();
        assert!(block.is_superset());
        let kept = block.retain(|m| m.equipment.is_none()).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept.first().name, "Plank");
    }

    #[test]
    fn test_workout_id_deterministic() {
        let a = WorkoutId::derive(&["strength", "0", "Day 1"]);
        let b = WorkoutId::derive(&["strength", "0", "Day 1"]);
        let c = WorkoutId::derive(&["strength", "1", "Day 1"]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.as_str().starts_with("w-"));
        assert_eq!(a.as_str().len(), 18);
    }

    #[test]
    fn test_workout_serde_keys() {
        let w = Workout {
            id: WorkoutId::derive(&["x"]),
            title: "Push".to_string(),
            blocks: vec![Block::single(squat())],
            est_minutes: 40,
        };
        let json = serde_json::to_string(&w).unwrap();
        assert!(json.contains("\"estMinutes\":40"));
        assert!(json.contains("\"equipment\":\"squatRack\""));
        assert!(!json.contains("\"sets\""));
        let back: Workout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }

    #[test]
    fn test_plan_is_empty() {
        let mut plan = Plan {
            goal: Goal::Strength,
            workouts: vec![Workout {
                id: WorkoutId::derive(&["a"]),
                title: "A".to_string(),
                blocks: vec![],
                est_minutes: 30,
            }],
        };
        assert!(plan.is_empty());
        plan.workouts[0].blocks.push(Block::single(squat()));
        assert!(!plan.is_empty());
        assert_eq!(plan.movements().count(), 1);
    }

    #[test]
    fn test_profile_yaml_defaults() {
        let yaml = r#"
version: "1.0"
goal: hypertrophy
equipments: [Dumbbells, "Squat Rack", hoverboard, dumbbell]
"#;
        let p: GymProfile = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(p.context, TrainingContext::Gym);
        assert!(p.photo_identifiers.is_empty());
        let eq: Vec<_> = p.equipment().into_iter().collect();
        assert_eq!(eq, vec![Equipment::Dumbbells, Equipment::SquatRack]);
    }
}
