//! Deterministic template engine.
//!
//! Every goal maps to a fixed list of template days. A day picks one main
//! movement and fills up to its target count from an accessory pool:
//! - main: first candidate whose equipment is available, else the first
//!   candidate regardless of equipment
//! - accessories: available ones in order, then a backfill pass over the
//!   same pool ignoring equipment, skipping names already chosen
//!
//! A day can therefore include equipment the user lacks, but it is never
//! empty and its size does not depend on the equipment list.

use super::catalog::Equipment;
use super::types::*;

const MINUTES_PER_MOVEMENT: i64 = 8;
const MIN_MINUTES: i64 = 30;
const MAX_MINUTES: i64 = 75;

/// Workout skeleton with ordered candidates.
#[derive(Debug, Clone)]
pub struct TemplateDay {
    pub title: &'static str,
    pub mains: Vec<Movement>,
    pub accessories: Vec<Movement>,
    pub target_count: usize,
}

/// Build the plan for a goal. Always returns one workout per template day,
/// each with at least one block.
pub fn generate(goal: Goal, context: TrainingContext, available: &EquipmentSet) -> Plan {
    let workouts = template_days(goal, context)
        .into_iter()
        .enumerate()
        .map(|(i, day)| {
            let chosen = select_movements(&day, available);
            let index = i.to_string();
            let ctx = context.to_string();
            Workout {
                id: WorkoutId::derive(&["template", goal.as_str(), &ctx, &index, day.title]),
                title: day.title.to_string(),
                est_minutes: estimate_minutes(chosen.len()),
                blocks: chosen.into_iter().map(Block::single).collect(),
            }
        })
        .collect();

    Plan { goal, workouts }
}

/// Pick the movements for one day.
pub fn select_movements(day: &TemplateDay, available: &EquipmentSet) -> Vec<Movement> {
    let mut chosen: Vec<Movement> = Vec::with_capacity(day.target_count);

    if let Some(main) = day
        .mains
        .iter()
        .find(|m| m.is_available(available))
        .or_else(|| day.mains.first())
    {
        chosen.push(main.clone());
    }

    for m in &day.accessories {
        if chosen.len() >= day.target_count {
            break;
        }
        if m.is_available(available) {
            chosen.push(m.clone());
        }
    }

    for m in &day.accessories {
        if chosen.len() >= day.target_count {
            break;
        }
        if !chosen.iter().any(|c| c.name == m.name) {
            chosen.push(m.clone());
        }
    }

    chosen
}

/// 8 minutes per movement, clamped to 30..=75.
pub fn estimate_minutes(movement_count: usize) -> i64 {
    let raw = i64::try_from(movement_count)
        .unwrap_or(i64::MAX)
        .saturating_mul(MINUTES_PER_MOVEMENT);
    raw.clamp(MIN_MINUTES, MAX_MINUTES)
}

/// Template days for a goal. Home context drops machine-only accessories
/// from each pool before selection.
pub fn template_days(goal: Goal, context: TrainingContext) -> Vec<TemplateDay> {
    let mut days = match goal {
        Goal::Strength => strength_days(),
        Goal::Hypertrophy => hypertrophy_days(),
        Goal::FatLoss => fat_loss_days(),
        Goal::Endurance => endurance_days(),
        Goal::Mobility => mobility_days(),
    };
    if context == TrainingContext::Home {
        for day in &mut days {
            day.accessories
                .retain(|m| !m.equipment.is_some_and(Equipment::is_machine_only));
        }
    }
    days
}

fn mv(name: &str, equipment: Option<Equipment>, primary: &str) -> Movement {
    Movement::new(name, equipment, primary)
}

fn day(
    title: &'static str,
    mains: Vec<Movement>,
    accessories: Vec<Movement>,
    target_count: usize,
) -> TemplateDay {
    TemplateDay {
        title,
        mains,
        accessories,
        target_count,
    }
}

// ============================================================================
// Goal tables
// ============================================================================

fn strength_accessories() -> Vec<Movement> {
    vec![
        mv("Seated Cable Row", Some(Equipment::CableMachine), "back"),
        mv("Lat Pulldown", Some(Equipment::LatPulldown), "back"),
        mv("DB RDL", Some(Equipment::Dumbbells), "posterior"),
        mv("DB Lunge", Some(Equipment::Dumbbells), "quads"),
        mv("Plank", None, "core"),
    ]
}

fn strength_days() -> Vec<TemplateDay> {
    vec![
        day(
            "Day 1 — Squat focus",
            vec![
                mv("Back Squat", Some(Equipment::SquatRack), "quads"),
                mv("Goblet Squat", Some(Equipment::Dumbbells), "quads"),
            ],
            strength_accessories(),
            5,
        ),
        day(
            "Day 2 — Press focus",
            vec![
                mv("Bench Press", Some(Equipment::BenchFlat), "chest"),
                mv("DB Bench Press", Some(Equipment::Dumbbells), "chest"),
            ],
            strength_accessories(),
            5,
        ),
        day(
            "Day 3 — Hinge focus",
            vec![
                mv("Deadlift", Some(Equipment::Barbell), "posterior"),
                mv("DB RDL", Some(Equipment::Dumbbells), "posterior"),
            ],
            strength_accessories(),
            5,
        ),
    ]
}

fn hypertrophy_accessories() -> Vec<Movement> {
    vec![
        mv("Cable Fly", Some(Equipment::CableMachine), "chest"),
        mv("Lateral Raise", Some(Equipment::Dumbbells), "shoulders"),
        // no leg extension in the catalog; the leg press station stands in
        mv("Leg Extension", Some(Equipment::LegPress), "quads"),
        mv("Seated Row", Some(Equipment::CableMachine), "back"),
        mv("Hammer Curl", Some(Equipment::Dumbbells), "arms"),
        mv("Triceps Pressdown", Some(Equipment::CableMachine), "arms"),
    ]
}

fn hypertrophy_days() -> Vec<TemplateDay> {
    vec![
        day(
            "Push",
            vec![mv("Incline DB Press", Some(Equipment::BenchIncline), "chest")],
            hypertrophy_accessories(),
            6,
        ),
        day(
            "Pull",
            vec![
                mv("Lat Pulldown", Some(Equipment::LatPulldown), "back"),
                mv("1-Arm DB Row", Some(Equipment::Dumbbells), "back"),
            ],
            hypertrophy_accessories(),
            6,
        ),
        day(
            "Legs",
            vec![
                mv("Leg Press", Some(Equipment::LegPress), "quads"),
                mv("DB Split Squat", Some(Equipment::Dumbbells), "quads"),
            ],
            hypertrophy_accessories(),
            6,
        ),
        day(
            "Shoulders & Arms",
            vec![mv("DB Overhead Press", Some(Equipment::Dumbbells), "shoulders")],
            hypertrophy_accessories(),
            6,
        ),
    ]
}

fn fat_loss_accessories() -> Vec<Movement> {
    vec![
        mv("DB Thruster", Some(Equipment::Dumbbells), "full"),
        mv("Step-ups", Some(Equipment::BenchFlat), "quads"),
        mv("Mountain Climbers", None, "core"),
        mv("Burpees", None, "full"),
    ]
}

fn fat_loss_days() -> Vec<TemplateDay> {
    vec![
        day(
            "Intervals + Full Body",
            vec![
                mv("Treadmill Intervals", Some(Equipment::Treadmill), "cardio"),
                mv("KB Swings", Some(Equipment::Kettlebells), "posterior"),
            ],
            fat_loss_accessories(),
            5,
        ),
        day(
            "Row + Core",
            vec![mv("Row Intervals", Some(Equipment::Rower), "cardio")],
            fat_loss_accessories(),
            5,
        ),
        day(
            "Bike + Upper",
            vec![mv("Bike Intervals", Some(Equipment::Bike), "cardio")],
            fat_loss_accessories(),
            5,
        ),
    ]
}

fn endurance_accessories() -> Vec<Movement> {
    vec![
        mv("Core Bracing", None, "core"),
        mv("DB Romanian Deadlift", Some(Equipment::Dumbbells), "posterior"),
        mv("Hip Flexor Stretch", None, "mobility"),
    ]
}

fn endurance_days() -> Vec<TemplateDay> {
    vec![
        day(
            "Zone 2 Treadmill",
            vec![mv("Zone 2 Walk/Jog", Some(Equipment::Treadmill), "cardio")],
            endurance_accessories(),
            4,
        ),
        day(
            "Row 5k Prep",
            vec![mv("Steady Row", Some(Equipment::Rower), "cardio")],
            endurance_accessories(),
            4,
        ),
        day(
            "Bike Tempo",
            vec![mv("Bike Tempo", Some(Equipment::Bike), "cardio")],
            endurance_accessories(),
            4,
        ),
    ]
}

fn mobility_accessories() -> Vec<Movement> {
    vec![
        mv("90/90 Hips", None, "mobility"),
        mv("Bretzel Stretch", None, "mobility"),
        mv("Calf Raises (slow)", Some(Equipment::CalfRaise), "mobility").with_tempo("3-1-3"),
        mv("Thoracic Extension on Bench", Some(Equipment::BenchFlat), "mobility"),
    ]
}

fn mobility_days() -> Vec<TemplateDay> {
    vec![
        day(
            "Hips & Ankles",
            vec![mv("Cossack Squat", None, "mobility")],
            mobility_accessories(),
            5,
        ),
        day(
            "T-Spine & Shoulders",
            vec![mv("Wall Slides", None, "mobility")],
            mobility_accessories(),
            5,
        ),
        day(
            "Hinge Mobility",
            vec![mv("Jefferson Curl (light)", Some(Equipment::Dumbbells), "mobility").with_tempo("3-1-3")],
            mobility_accessories(),
            5,
        ),
    ]
}
