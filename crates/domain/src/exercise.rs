use std::{collections::HashSet, fmt, slice::Iter};

use crate::Name;

/// An immutable exercise record. The display fields (`instructions`, `tips`,
/// `common_mistakes`, `video`) are opaque to the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: Name,
    pub prerequisites: Vec<Name>,
    pub level: Level,
    pub equipment: Vec<Equipment>,
    pub muscle: MuscleGroup,
    pub instructions: Vec<String>,
    pub tips: Vec<String>,
    pub common_mistakes: Vec<String>,
    pub video: Option<String>,
}

impl Exercise {
    /// Easier movements remain available to more experienced users.
    #[must_use]
    pub fn suits_level(&self, level: Level) -> bool {
        self.level <= level
    }

    /// An empty equipment set means bodyweight and always passes.
    #[must_use]
    pub fn requires_only(&self, available: &HashSet<Equipment>) -> bool {
        self.equipment.iter().all(|e| available.contains(e))
    }

    #[must_use]
    pub fn is_bodyweight(&self) -> bool {
        self.equipment.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Level {
    fn iter() -> Iter<'static, Level> {
        static LEVELS: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl Level {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl TryFrom<&str> for Level {
    type Error = LevelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Level::iter()
            .find(|level| level.id() == value)
            .copied()
            .ok_or_else(|| LevelError::Unknown(value.to_string()))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LevelError {
    #[error("unknown level `{0}`")]
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Triceps,
    Biceps,
    Core,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 7] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Legs,
            MuscleGroup::Shoulders,
            MuscleGroup::Triceps,
            MuscleGroup::Biceps,
            MuscleGroup::Core,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Core => "Core",
        }
    }
}

impl MuscleGroup {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Core => "core",
        }
    }
}

impl TryFrom<&str> for MuscleGroup {
    type Error = MuscleGroupError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        MuscleGroup::iter()
            .find(|muscle| muscle.id() == value)
            .copied()
            .ok_or_else(|| MuscleGroupError::Unknown(value.to_string()))
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleGroupError {
    #[error("unknown muscle group `{0}`")]
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Equipment {
    Barbell,
    Bench,
    CableMachine,
    Dumbbells,
    ExerciseBall,
    FoamRoller,
    Kettlebells,
    MedicineBall,
    PowerRack,
    PullUpBar,
    ResistanceBands,
    SmithMachine,
    SuspensionTrainer,
    YogaMat,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 14] = [
            Equipment::Barbell,
            Equipment::Bench,
            Equipment::CableMachine,
            Equipment::Dumbbells,
            Equipment::ExerciseBall,
            Equipment::FoamRoller,
            Equipment::Kettlebells,
            Equipment::MedicineBall,
            Equipment::PowerRack,
            Equipment::PullUpBar,
            Equipment::ResistanceBands,
            Equipment::SmithMachine,
            Equipment::SuspensionTrainer,
            Equipment::YogaMat,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::Bench => "Workout Bench",
            Equipment::CableMachine => "Cable Machine",
            Equipment::Dumbbells => "Dumbbells",
            Equipment::ExerciseBall => "Exercise Ball",
            Equipment::FoamRoller => "Foam Roller",
            Equipment::Kettlebells => "Kettlebells",
            Equipment::MedicineBall => "Medicine Ball",
            Equipment::PowerRack => "Power Rack",
            Equipment::PullUpBar => "Pull-up Bar",
            Equipment::ResistanceBands => "Resistance Bands",
            Equipment::SmithMachine => "Smith Machine",
            Equipment::SuspensionTrainer => "Suspension Trainer (TRX)",
            Equipment::YogaMat => "Yoga Mat",
        }
    }
}

impl Equipment {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Equipment::Barbell => "barbell",
            Equipment::Bench => "bench",
            Equipment::CableMachine => "cable machine",
            Equipment::Dumbbells => "dumbbells",
            Equipment::ExerciseBall => "exercise ball",
            Equipment::FoamRoller => "foam roller",
            Equipment::Kettlebells => "kettlebells",
            Equipment::MedicineBall => "medicine ball",
            Equipment::PowerRack => "power rack",
            Equipment::PullUpBar => "pull-up bar",
            Equipment::ResistanceBands => "resistance bands",
            Equipment::SmithMachine => "smith machine",
            Equipment::SuspensionTrainer => "suspension trainer",
            Equipment::YogaMat => "yoga mat",
        }
    }
}

impl TryFrom<&str> for Equipment {
    type Error = EquipmentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Equipment::iter()
            .find(|equipment| equipment.id() == value)
            .copied()
            .ok_or_else(|| EquipmentError::Unknown(value.to_string()))
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EquipmentError {
    #[error("unknown equipment `{0}`")]
    Unknown(String),
}

/// Reduces a catalog to the exercises compatible with a user's level and
/// available equipment. An empty result is valid, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityFilter {
    pub level: Level,
    pub equipment: HashSet<Equipment>,
}

impl EligibilityFilter {
    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        exercises
            .filter(|e| e.suits_level(self.level) && e.requires_only(&self.equipment))
            .collect()
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
