//! Plan validation against the equipment the user actually has.
//!
//! Movements needing missing equipment are dropped, emptied blocks are
//! removed, and a plan left with no blocks anywhere is replaced wholesale by
//! the template engine's output. Workouts that keep at least one block are
//! returned untouched apart from the filtering; there is no per-workout
//! fallback.

use super::templates;
use super::types::*;

/// Outcome of sanitizing an external plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    pub plan: Plan,
    /// Movements removed for missing equipment
    pub dropped_movements: usize,
    /// True when the whole plan was replaced by the template output
    pub fell_back: bool,
}

/// Filter a plan to what `available` supports, falling back to the template
/// engine when nothing survives.
pub fn sanitize(plan: Plan, context: TrainingContext, available: &EquipmentSet) -> Sanitized {
    let goal = plan.goal;
    let mut dropped_movements = 0usize;

    let workouts: Vec<Workout> = plan
        .workouts
        .into_iter()
        .map(|w| {
            let before: usize = w.blocks.iter().map(Block::len).sum();
            let blocks: Vec<Block> = w
                .blocks
                .into_iter()
                .filter_map(|b| b.retain(|m| m.is_available(available)))
                .collect();
            let after: usize = blocks.iter().map(Block::len).sum();
            if before > after {
                tracing::debug!(
                    workout = %w.title,
                    dropped = before - after,
                    "dropped movements needing unavailable equipment"
                );
            }
            dropped_movements += before - after;
            Workout { blocks, ..w }
        })
        .collect();

    let filtered = Plan { goal, workouts };
    if filtered.is_empty() {
        tracing::warn!(
            goal = %goal,
            workouts = filtered.workouts.len(),
            dropped = dropped_movements,
            "external plan unusable after validation, using template plan"
        );
        return Sanitized {
            plan: templates::generate(goal, context, available),
            dropped_movements,
            fell_back: true,
        };
    }

    Sanitized {
        plan: filtered,
        dropped_movements,
        fell_back: false,
    }
}

/// [`sanitize`] without the bookkeeping.
pub fn validate(plan: Plan, context: TrainingContext, available: &EquipmentSet) -> Plan {
    sanitize(plan, context, available).plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Equipment;

    fn set(items: &[Equipment]) -> EquipmentSet {
        items.iter().copied().collect()
    }

    fn workout(title: &str, minutes: i64, blocks: Vec<Block>) -> Workout {
        Workout {
            id: WorkoutId::derive(&["test", title]),
            title: title.to_string(),
            blocks,
            est_minutes: minutes,
        }
    }

    fn single(name: &str, eq: Option<Equipment>) -> Block {
        Block::single(Movement::new(name, eq, "x"))
    }

    #[test]
    fn test_all_unavailable_falls_back_to_template() {
        let plan = Plan {
            goal: Goal::Hypertrophy,
            workouts: vec![
                workout("A", 45, vec![single("Cable Fly", Some(Equipment::CableMachine))]),
                workout("B", 50, vec![single("Leg Press", Some(Equipment::LegPress))]),
            ],
        };
        let gym = set(&[Equipment::Dumbbells]);
        let out = sanitize(plan, TrainingContext::Home, &gym);
        assert!(out.fell_back);
        assert_eq!(out.dropped_movements, 2);
        assert_eq!(
            out.plan,
            templates::generate(Goal::Hypertrophy, TrainingContext::Home, &gym)
        );
    }

    #[test]
    fn test_one_empty_workout_does_not_trigger_fallback() {
        let a = workout(
            "A",
            40,
            vec![
                single("DB Press", Some(Equipment::Dumbbells)),
                single("Push-up", None),
            ],
        );
        let b = workout("B", 55, vec![single("Leg Press", Some(Equipment::LegPress))]);
        let c = workout("C", 35, vec![single("Goblet Squat", Some(Equipment::Dumbbells))]);
        let plan = Plan {
            goal: Goal::Strength,
            workouts: vec![a.clone(), b.clone(), c.clone()],
        };
        let out = sanitize(plan, TrainingContext::Gym, &set(&[Equipment::Dumbbells]));
        assert!(!out.fell_back);
        assert_eq!(out.dropped_movements, 1);
        assert_eq!(out.plan.workouts.len(), 3);
        assert_eq!(out.plan.workouts[0], a);
        assert!(out.plan.workouts[1].blocks.is_empty());
        assert_eq!(out.plan.workouts[1].title, "B");
        assert_eq!(out.plan.workouts[1].id, b.id);
        assert_eq!(out.plan.workouts[1].est_minutes, 55);
        assert_eq!(out.plan.workouts[2], c);
    }

    #[test]
    fn test_superset_partially_filtered() {
        let superset = Block::superset(vec![
            Movement::new("Cable Fly", Some(Equipment::CableMachine), "chest"),
            Movement::new("Push-up", None, "chest"),
        ])
        .unwrap();
        let plan = Plan {
            goal: Goal::Hypertrophy,
            workouts: vec![workout("Push", 45, vec![superset])],
        };
        let out = validate(plan, TrainingContext::Gym, &EquipmentSet::new());
        let blocks = &out.workouts[0].blocks;
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].len(), 1);
        assert_eq!(blocks[0].first().name, "Push-up");
    }

    #[test]
    fn test_bodyweight_always_kept() {
        let plan = Plan {
            goal: Goal::Mobility,
            workouts: vec![workout("Flow", 30, vec![single("Wall Slides", None)])],
        };
        let out = sanitize(plan.clone(), TrainingContext::Home, &EquipmentSet::new());
        assert!(!out.fell_back);
        assert_eq!(out.dropped_movements, 0);
        assert_eq!(out.plan, plan);
    }

    #[test]
    fn test_zero_workouts_falls_back() {
        let plan = Plan {
            goal: Goal::Endurance,
            workouts: vec![],
        };
        let out = sanitize(plan, TrainingContext::Gym, &set(&[Equipment::Rower]));
        assert!(out.fell_back);
        assert_eq!(out.plan.workouts.len(), 3);
    }

    #[test]
    fn test_out_of_range_minutes_preserved() {
        let plan = Plan {
            goal: Goal::Strength,
            workouts: vec![workout("Long", 120, vec![single("Plank", None)])],
        };
        let out = validate(plan, TrainingContext::Gym, &EquipmentSet::new());
        assert_eq!(out.workouts[0].est_minutes, 120);
    }
}
