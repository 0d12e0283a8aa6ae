use std::{collections::BTreeMap, fmt, slice::Iter};

use crate::{Exercise, MuscleGroup, PrerequisiteGraph, Property, ValidationError};

/// Exercises drawn per muscle group per day when no explicit quota is set.
pub const DEFAULT_QUOTA: usize = 1;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Split {
    FullBody,
    AbSplit,
}

impl Split {
    /// The ordered muscle-group sequence trained on the given day
    /// (0-indexed). Full body trains every group every day; the A/B split
    /// alternates between an upper-push day and a pull/legs day, wrapping
    /// for longer weeks.
    #[must_use]
    pub fn muscle_groups(self, day: usize) -> &'static [MuscleGroup] {
        static FULL_BODY: [MuscleGroup; 7] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Legs,
            MuscleGroup::Triceps,
            MuscleGroup::Shoulders,
            MuscleGroup::Core,
            MuscleGroup::Biceps,
        ];
        static DAY_A: [MuscleGroup; 4] = [
            MuscleGroup::Chest,
            MuscleGroup::Triceps,
            MuscleGroup::Shoulders,
            MuscleGroup::Core,
        ];
        static DAY_B: [MuscleGroup; 4] = [
            MuscleGroup::Back,
            MuscleGroup::Legs,
            MuscleGroup::Biceps,
            MuscleGroup::Core,
        ];

        match self {
            Split::FullBody => &FULL_BODY,
            Split::AbSplit => {
                if day % 2 == 0 {
                    &DAY_A
                } else {
                    &DAY_B
                }
            }
        }
    }
}

impl Property for Split {
    fn iter() -> Iter<'static, Split> {
        static SPLITS: [Split; 2] = [Split::FullBody, Split::AbSplit];
        SPLITS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Split::FullBody => "Full Body",
            Split::AbSplit => "A/B Split",
        }
    }
}

impl Split {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Split::FullBody => "FB",
            Split::AbSplit => "AB",
        }
    }
}

impl TryFrom<&str> for Split {
    type Error = SplitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Split::iter()
            .find(|split| split.id() == value)
            .copied()
            .ok_or_else(|| SplitError::Unknown(value.to_string()))
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SplitError {
    #[error("unknown split `{0}`")]
    Unknown(String),
}

/// Per-muscle-group exercise count per day. Groups without an explicit
/// entry fall back to [`DEFAULT_QUOTA`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quotas(BTreeMap<MuscleGroup, usize>);

impl Default for Quotas {
    /// The big muscle groups get two slots per day, the rest one.
    fn default() -> Self {
        Self(BTreeMap::from([
            (MuscleGroup::Chest, 2),
            (MuscleGroup::Back, 2),
            (MuscleGroup::Legs, 2),
        ]))
    }
}

impl Quotas {
    #[must_use]
    pub fn uniform(quota: usize) -> Self {
        Self(MuscleGroup::iter().map(|group| (*group, quota)).collect())
    }

    #[must_use]
    pub fn of(&self, group: MuscleGroup) -> usize {
        self.0.get(&group).copied().unwrap_or(DEFAULT_QUOTA)
    }

    pub fn set(&mut self, group: MuscleGroup, quota: usize) {
        self.0.insert(group, quota);
    }
}

/// Partitions the eligible exercises into per-day assignments.
///
/// Exercises are grouped into per-muscle FIFO queues ordered by topological
/// layer (catalog order within a layer), so foundational movements surface
/// before their advanced dependents. Each day draws up to the group's quota
/// from its queue via a round-robin cursor. The cursor persists across days
/// within one call and restarts at zero on every call, so repeated calls
/// against the same inputs yield the same plan. Within a single day an
/// exercise appears at most once.
///
/// A muscle group with no eligible exercises is omitted for the day. An
/// empty eligible set yields `days_per_week` empty days.
pub fn schedule<'a>(
    eligible: &[&'a Exercise],
    graph: &PrerequisiteGraph,
    days_per_week: u8,
    split: Split,
    quotas: &Quotas,
) -> Result<Vec<Vec<&'a Exercise>>, ValidationError> {
    if !(1..=7).contains(&days_per_week) {
        return Err(ValidationError::DaysOutOfRange(days_per_week));
    }

    let pools = muscle_pools(eligible, graph);
    let mut cursors: BTreeMap<MuscleGroup, usize> = BTreeMap::new();

    let mut days = Vec::with_capacity(usize::from(days_per_week));
    for day in 0..usize::from(days_per_week) {
        let mut assignments = Vec::new();
        for group in split.muscle_groups(day) {
            let Some(pool) = pools.get(group) else {
                continue;
            };
            let cursor = cursors.entry(*group).or_insert(0);
            for _ in 0..quotas.of(*group).min(pool.len()) {
                assignments.push(pool[*cursor % pool.len()]);
                *cursor += 1;
            }
        }
        days.push(assignments);
    }

    Ok(days)
}

fn muscle_pools<'a>(
    eligible: &[&'a Exercise],
    graph: &PrerequisiteGraph,
) -> BTreeMap<MuscleGroup, Vec<&'a Exercise>> {
    let mut ordered = eligible.to_vec();
    ordered.sort_by_key(|e| graph.layer_of(&e.name).unwrap_or(usize::MAX));

    let mut pools: BTreeMap<MuscleGroup, Vec<&Exercise>> = BTreeMap::new();
    for exercise in ordered {
        pools.entry(exercise.muscle).or_default().push(exercise);
    }
    pools
}
