use crate::{Goal, Level, Name};

/// Malformed or incomplete catalog data. Not recoverable within the core;
/// any occurrence aborts the whole scheduling call.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("exercise {exercise} references unknown prerequisite {prerequisite}")]
    DanglingPrerequisite { exercise: Name, prerequisite: Name },
    #[error("prerequisite cycle involving {name}")]
    CyclicDependency { name: Name },
    #[error("no sets/reps entry for goal {goal} at level {level}")]
    MissingSetRepEntry { goal: Goal, level: Level },
}

/// Invalid request parameters. Propagated, never silently clamped.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("days per week must be in the range 1 to 7 ({0} given)")]
    DaysOutOfRange(u8),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_error_from_data_error() {
        assert!(matches!(
            Error::from(DataError::CyclicDependency {
                name: Name::new("Pull Up").unwrap()
            }),
            Error::Data(DataError::CyclicDependency { .. })
        ));
    }

    #[test]
    fn test_error_from_validation_error() {
        assert!(matches!(
            Error::from(ValidationError::DaysOutOfRange(0)),
            Error::Validation(ValidationError::DaysOutOfRange(0))
        ));
    }

    #[test]
    fn test_data_error_display() {
        assert_eq!(
            DataError::DanglingPrerequisite {
                exercise: Name::new("Muscle Up").unwrap(),
                prerequisite: Name::new("Strict Pull Up").unwrap(),
            }
            .to_string(),
            "exercise Muscle Up references unknown prerequisite Strict Pull Up"
        );
        assert_eq!(
            DataError::MissingSetRepEntry {
                goal: Goal::Strength,
                level: Level::Advanced,
            }
            .to_string(),
            "no sets/reps entry for goal strength at level advanced"
        );
    }
}
