//! Catalog ingestion.
//!
//! Parses the JSON catalog document (`exercises`, `goal_set_rep`,
//! `equipment_options`) into a [`Catalog`]. The document's member order
//! defines the catalog's insertion order, which downstream scheduling uses
//! to break ties. The core itself never reads files or touches serde; this
//! crate is the boundary where those concerns live.

#![warn(clippy::pedantic)]

use std::{collections::BTreeMap, fs, path::Path};

use log::debug;
use serde::Deserialize;

use planner_domain::{
    Catalog, CatalogError, Equipment, EquipmentError, EquipmentOption, Exercise, Goal, GoalError,
    Level, LevelError, MuscleGroup, MuscleGroupError, Name, NameError, SetsReps,
};

#[derive(Deserialize, Debug)]
pub struct CatalogDocument {
    #[serde(default)]
    pub exercises: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub goal_set_rep: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default)]
    pub equipment_options: Vec<EquipmentOptionDocument>,
}

#[derive(Deserialize, Debug)]
pub struct ExerciseDocument {
    #[serde(default)]
    pub prerequisites: Vec<String>,
    pub level: String,
    #[serde(default)]
    pub equipment: Vec<String>,
    pub muscle: String,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub common_mistakes: Vec<String>,
    #[serde(default)]
    pub video: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct EquipmentOptionDocument {
    pub id: String,
    pub name: String,
}

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("invalid catalog document: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Name(#[from] NameError),
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    Muscle(#[from] MuscleGroupError),
    #[error(transparent)]
    Equipment(#[from] EquipmentError),
    #[error(transparent)]
    Goal(#[from] GoalError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
}

pub fn parse_catalog(json: &str) -> Result<Catalog, ParseError> {
    let document: CatalogDocument = serde_json::from_str(json)?;
    let catalog = catalog_from_document(document)?;

    debug!(
        "loaded catalog with {} exercises and {} equipment options",
        catalog.len(),
        catalog.equipment_options().len()
    );

    Ok(catalog)
}

pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, ParseError> {
    parse_catalog(&fs::read_to_string(path)?)
}

fn catalog_from_document(document: CatalogDocument) -> Result<Catalog, ParseError> {
    let mut exercises = Vec::with_capacity(document.exercises.len());
    for (name, value) in document.exercises {
        let entry: ExerciseDocument = serde_json::from_value(value)?;
        exercises.push(exercise_from_document(&name, entry)?);
    }

    let mut goal_set_rep = BTreeMap::new();
    for (goal, levels) in document.goal_set_rep {
        let mut by_level = BTreeMap::new();
        for (level, scheme) in levels {
            by_level.insert(Level::try_from(level.as_str())?, SetsReps::new(&scheme));
        }
        goal_set_rep.insert(Goal::try_from(goal.as_str())?, by_level);
    }

    let equipment_options = document
        .equipment_options
        .into_iter()
        .map(|option| {
            Ok(EquipmentOption {
                id: Equipment::try_from(option.id.as_str())?,
                name: option.name,
            })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    Ok(Catalog::new(exercises, goal_set_rep, equipment_options)?)
}

fn exercise_from_document(name: &str, entry: ExerciseDocument) -> Result<Exercise, ParseError> {
    Ok(Exercise {
        name: Name::new(name)?,
        prerequisites: entry
            .prerequisites
            .iter()
            .map(|p| Name::new(p))
            .collect::<Result<_, _>>()?,
        level: Level::try_from(entry.level.as_str())?,
        // "none" marks a bodyweight movement in older documents.
        equipment: entry
            .equipment
            .iter()
            .filter(|e| e.as_str() != "none")
            .map(|e| Equipment::try_from(e.as_str()))
            .collect::<Result<_, _>>()?,
        muscle: MuscleGroup::try_from(entry.muscle.as_str())?,
        instructions: entry.instructions,
        tips: entry.tips,
        common_mistakes: entry.common_mistakes,
        video: entry.video,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const DOCUMENT: &str = r#"{
        "exercises": {
            "Push Up": {
                "prerequisites": [],
                "level": "beginner",
                "equipment": [],
                "muscle": "chest",
                "instructions": ["Start in a high plank.", "Lower until your chest nearly touches the floor."],
                "tips": ["Keep your core tight."],
                "common_mistakes": ["Flaring the elbows."],
                "video": "https://example.org/push-up"
            },
            "Bench Press": {
                "prerequisites": ["Push Up"],
                "level": "intermediate",
                "equipment": ["barbell", "bench"],
                "muscle": "chest"
            },
            "Squat": {
                "prerequisites": [],
                "level": "beginner",
                "equipment": ["none"],
                "muscle": "legs"
            }
        },
        "goal_set_rep": {
            "strength": {
                "beginner": "4x4-6",
                "intermediate": "4x6-8",
                "advanced": "5x3-5"
            },
            "hypertrophy": {
                "beginner": "3x8-12"
            }
        },
        "equipment_options": [
            {"id": "dumbbells", "name": "Dumbbells"},
            {"id": "barbell", "name": "Barbell"}
        ]
    }"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_catalog(DOCUMENT).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog
                .exercises()
                .map(|e| e.name.as_ref().as_str())
                .collect::<Vec<_>>(),
            vec!["Push Up", "Bench Press", "Squat"]
        );

        let bench_press = catalog.get(&Name::new("Bench Press").unwrap()).unwrap();
        assert_eq!(bench_press.level, Level::Intermediate);
        assert_eq!(
            bench_press.equipment,
            vec![Equipment::Barbell, Equipment::Bench]
        );
        assert_eq!(
            bench_press.prerequisites,
            vec![Name::new("Push Up").unwrap()]
        );
        assert!(bench_press.instructions.is_empty());

        let push_up = catalog.get(&Name::new("Push Up").unwrap()).unwrap();
        assert_eq!(push_up.instructions.len(), 2);
        assert_eq!(push_up.video.as_deref(), Some("https://example.org/push-up"));

        assert_eq!(
            catalog.sets_reps(Goal::Strength, Level::Advanced).unwrap(),
            &SetsReps::new("5x3-5")
        );
        assert_eq!(
            catalog.equipment_options(),
            &[
                EquipmentOption {
                    id: Equipment::Dumbbells,
                    name: "Dumbbells".to_string(),
                },
                EquipmentOption {
                    id: Equipment::Barbell,
                    name: "Barbell".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_catalog_none_equipment_means_bodyweight() {
        let catalog = parse_catalog(DOCUMENT).unwrap();

        assert!(
            catalog
                .get(&Name::new("Squat").unwrap())
                .unwrap()
                .is_bodyweight()
        );
    }

    #[rstest]
    #[case::unknown_level(
        r#"{"exercises": {"Push Up": {"level": "expert", "muscle": "chest"}}}"#,
        "unknown level `expert`"
    )]
    #[case::unknown_muscle(
        r#"{"exercises": {"Push Up": {"level": "beginner", "muscle": "forearms"}}}"#,
        "unknown muscle group `forearms`"
    )]
    #[case::unknown_equipment(
        r#"{"exercises": {"Push Up": {"level": "beginner", "muscle": "chest", "equipment": ["treadmill"]}}}"#,
        "unknown equipment `treadmill`"
    )]
    #[case::unknown_goal(
        r#"{"goal_set_rep": {"powerlifting": {"beginner": "5x5"}}}"#,
        "unknown goal `powerlifting`"
    )]
    #[case::duplicate_exercise(
        r#"{"exercises": {"Push Up": {"level": "beginner", "muscle": "chest"}, "Push Up ": {"level": "beginner", "muscle": "chest"}}}"#,
        "duplicate exercise name Push Up"
    )]
    fn test_parse_catalog_names_offending_value(#[case] json: &str, #[case] message: &str) {
        assert_eq!(parse_catalog(json).unwrap_err().to_string(), message);
    }

    #[test]
    fn test_parse_catalog_invalid_json() {
        assert!(matches!(
            parse_catalog("not json"),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn test_parse_catalog_empty_document() {
        let catalog = parse_catalog("{}").unwrap();

        assert!(catalog.is_empty());
        assert!(catalog.equipment_options().is_empty());
    }

    #[test]
    fn test_load_catalog_missing_file() {
        assert!(matches!(
            load_catalog("/nonexistent/exercises.json"),
            Err(ParseError::Io(_))
        ));
    }
}
