//! Integrity checks for workout programs.
//!
//! Resolution never requires a valid program; malformed input simply
//! resolves to `None` or to whichever duplicate is listed first. These
//! checks let program editors reject bad input before it is saved.
//! Detects:
//! - Programs without workout days
//! - Duplicate day numbers
//! - Day numbers outside the mode's range (0, or > 7 for day-of-week)
//! - Custom programs without a starting date
//! - Negative set weights

use std::collections::HashSet;

use thiserror::Error;

use crate::error::Error;
use crate::models::{ProgramType, WorkoutProgram};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The program has no workout days.
    EmptyProgram,
    /// Two workout days share a day number.
    DuplicateDayNumber,
    /// A day number is outside the valid range for the program type.
    DayNumberOutOfRange,
    /// A custom program has no starting date.
    MissingStartingDate,
    /// A prescribed set has a negative weight.
    NegativeWeight,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a program against the data-model invariants.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_program(program: &WorkoutProgram) -> ValidationResult {
    let mut errors = Vec::new();

    if program.workout_days.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProgram,
            "Program has no workout days",
        ));
    }

    if program.program_type == ProgramType::Custom && program.starting_date.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingStartingDate,
            "Custom program has no starting date",
        ));
    }

    let max_day = match program.program_type {
        ProgramType::DayOfWeek => 7,
        ProgramType::Custom => u32::MAX,
    };

    let mut seen = HashSet::new();
    for day in &program.workout_days {
        if !seen.insert(day.day_number) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateDayNumber,
                format!("Duplicate day number: {}", day.day_number),
            ));
        }

        if day.day_number == 0 || day.day_number > max_day {
            errors.push(ValidationError::new(
                ValidationErrorKind::DayNumberOutOfRange,
                format!(
                    "Day number {} is out of range for a {} program",
                    day.day_number, program.program_type
                ),
            ));
        }

        for exercise in &day.exercises {
            if exercise.sets.iter().any(|s| s.weight < 0.0) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeWeight,
                    format!(
                        "Exercise '{}' on day {} has a negative weight",
                        exercise.name, day.day_number
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// [`validate_program`] folded into the crate [`Error`].
pub fn ensure_valid(program: &WorkoutProgram) -> crate::error::Result<()> {
    validate_program(program).map_err(Error::Validation)
}
