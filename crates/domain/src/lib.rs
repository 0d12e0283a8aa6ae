#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod error;
pub mod exercise;
pub mod graph;
pub mod name;
pub mod plan;
pub mod schedule;
pub mod service;

pub use catalog::{Catalog, CatalogError, EquipmentOption, Goal, GoalError, SetsReps};
pub use error::{DataError, Error, ValidationError};
pub use exercise::{
    EligibilityFilter, Equipment, EquipmentError, Exercise, Level, LevelError, MuscleGroup,
    MuscleGroupError, Property,
};
pub use graph::{PrerequisiteGraph, PrerequisitePolicy};
pub use name::{Name, NameError};
pub use plan::{
    MAX_ALTERNATIVES, PlanRequest, PlannedExercise, ScheduledDay, WorkoutPlan, assemble,
};
pub use schedule::{DEFAULT_QUOTA, Quotas, Split, SplitError, schedule};
pub use service::{Planner, generate_plan};
