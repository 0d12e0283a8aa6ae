use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    slice::Iter,
};

use derive_more::{AsRef, Display};

use crate::{DataError, Equipment, Exercise, Level, Name, Property};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Goal {
    Strength,
    Hypertrophy,
    Endurance,
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOALS: [Goal; 3] = [Goal::Strength, Goal::Hypertrophy, Goal::Endurance];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::Strength => "Strength",
            Goal::Hypertrophy => "Hypertrophy (Muscle Mass)",
            Goal::Endurance => "Endurance",
        }
    }
}

impl Goal {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Goal::Strength => "strength",
            Goal::Hypertrophy => "hypertrophy",
            Goal::Endurance => "endurance",
        }
    }
}

impl TryFrom<&str> for Goal {
    type Error = GoalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Goal::iter()
            .find(|goal| goal.id() == value)
            .copied()
            .ok_or_else(|| GoalError::Unknown(value.to_string()))
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GoalError {
    #[error("unknown goal `{0}`")]
    Unknown(String),
}

/// A sets×reps descriptor such as `"4x6-8"`. An opaque display string,
/// never parsed arithmetically.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq)]
pub struct SetsReps(String);

impl SetsReps {
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Display metadata for an equipment choice offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentOption {
    pub id: Equipment,
    pub name: String,
}

/// Immutable collection of exercise records, the goal/level sets-reps lookup
/// table and the equipment-option registry. Exercises keep their insertion
/// order, which breaks ties in all downstream orderings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    exercises: Vec<Exercise>,
    index: HashMap<Name, usize>,
    goal_set_rep: BTreeMap<Goal, BTreeMap<Level, SetsReps>>,
    equipment_options: Vec<EquipmentOption>,
}

impl Catalog {
    pub fn new(
        exercises: Vec<Exercise>,
        goal_set_rep: BTreeMap<Goal, BTreeMap<Level, SetsReps>>,
        equipment_options: Vec<EquipmentOption>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(exercises.len());

        for (i, exercise) in exercises.iter().enumerate() {
            if index.insert(exercise.name.clone(), i).is_some() {
                return Err(CatalogError::DuplicateName(exercise.name.clone()));
            }
        }

        Ok(Self {
            exercises,
            index,
            goal_set_rep,
            equipment_options,
        })
    }

    #[must_use]
    pub fn get(&self, name: &Name) -> Option<&Exercise> {
        self.index.get(name).map(|i| &self.exercises[*i])
    }

    #[must_use]
    pub fn index_of(&self, name: &Name) -> Option<usize> {
        self.index.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &Name) -> bool {
        self.index.contains_key(name)
    }

    /// Exercises in insertion order.
    pub fn exercises(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// An absent combination indicates incomplete catalog data and
    /// propagates; it is never defaulted.
    pub fn sets_reps(&self, goal: Goal, level: Level) -> Result<&SetsReps, DataError> {
        self.goal_set_rep
            .get(&goal)
            .and_then(|levels| levels.get(&level))
            .ok_or(DataError::MissingSetRepEntry { goal, level })
    }

    #[must_use]
    pub fn equipment_options(&self) -> &[EquipmentOption] {
        &self.equipment_options
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("duplicate exercise name {0}")]
    DuplicateName(Name),
}
