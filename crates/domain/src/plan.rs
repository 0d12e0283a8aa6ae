use std::collections::{BTreeSet, HashSet};

use crate::{
    Catalog, DataError, EligibilityFilter, Equipment, Exercise, Goal, Level, MuscleGroup, Name,
    PrerequisiteGraph, SetsReps, Split,
};

/// Upper bound on the alternative suggestions attached to a planned
/// exercise.
pub const MAX_ALTERNATIVES: usize = 3;

/// Input to a single plan generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub level: Level,
    pub goal: Goal,
    pub equipment: HashSet<Equipment>,
    pub days_per_week: u8,
    pub split: Split,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedExercise {
    pub exercise: Exercise,
    pub sets_reps: SetsReps,
    pub alternatives: Vec<Exercise>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScheduledDay {
    pub exercises: Vec<PlannedExercise>,
}

impl ScheduledDay {
    #[must_use]
    pub fn is_rest_day(&self) -> bool {
        self.exercises.is_empty()
    }

    /// The day's muscle-group blocks in training order.
    #[must_use]
    pub fn muscle_groups(&self) -> Vec<MuscleGroup> {
        let mut groups: Vec<MuscleGroup> = Vec::new();
        for planned in &self.exercises {
            if groups.last() != Some(&planned.exercise.muscle) {
                groups.push(planned.exercise.muscle);
            }
        }
        groups
    }
}

/// A pure value created per request; the core never persists it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub days: Vec<ScheduledDay>,
}

impl WorkoutPlan {
    #[must_use]
    pub fn exercises(&self) -> BTreeSet<&Name> {
        self.days
            .iter()
            .flat_map(|day| day.exercises.iter().map(|planned| &planned.exercise.name))
            .collect()
    }
}

/// Attaches sets/reps and alternative suggestions to the scheduled
/// assignments. Alternatives are the other eligible exercises for the same
/// muscle group, ordered by topological layer (catalog order within a
/// layer) and capped at [`MAX_ALTERNATIVES`].
pub fn assemble(
    days: &[Vec<&Exercise>],
    request: &PlanRequest,
    graph: &PrerequisiteGraph,
    catalog: &Catalog,
) -> Result<WorkoutPlan, DataError> {
    let filter = EligibilityFilter {
        level: request.level,
        equipment: request.equipment.clone(),
    };
    let mut pool = filter.exercises(catalog.exercises());
    pool.sort_by_key(|e| graph.layer_of(&e.name).unwrap_or(usize::MAX));

    let mut plan_days = Vec::with_capacity(days.len());
    for day in days {
        let mut exercises = Vec::with_capacity(day.len());
        for exercise in day {
            let sets_reps = catalog.sets_reps(request.goal, request.level)?.clone();
            let alternatives = pool
                .iter()
                .filter(|candidate| {
                    candidate.muscle == exercise.muscle && candidate.name != exercise.name
                })
                .take(MAX_ALTERNATIVES)
                .map(|candidate| (*candidate).clone())
                .collect();
            exercises.push(PlannedExercise {
                exercise: (*exercise).clone(),
                sets_reps,
                alternatives,
            });
        }
        plan_days.push(ScheduledDay { exercises });
    }

    Ok(WorkoutPlan { days: plan_days })
}
