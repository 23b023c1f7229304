//! Workout program model.
//!
//! A program is a set of numbered workout days plus a rule for mapping
//! calendar dates onto those numbers:
//!
//! - **Day of week**: day numbers are ISO weekdays (Monday = 1 … Sunday = 7).
//! - **Custom**: day numbers are slots in a rolling cycle anchored to
//!   `starting_date`. The cycle length is the largest day number present;
//!   missing numbers are rest days.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use super::Exercise;
use crate::error::Error;

/// How a program maps dates onto workout days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProgramType {
    /// Fixed weekdays, repeating every 7 days.
    #[default]
    DayOfWeek,
    /// Rolling N-day cycle anchored to a starting date.
    Custom,
}

impl ProgramType {
    /// Wire name (`dayOfWeek` / `custom`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramType::DayOfWeek => "dayOfWeek",
            ProgramType::Custom => "custom",
        }
    }
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgramType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dayOfWeek" => Ok(ProgramType::DayOfWeek),
            "custom" => Ok(ProgramType::Custom),
            other => Err(Error::UnknownProgramType(other.to_string())),
        }
    }
}

/// One prescribed training day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    /// Weekday (1-7) or cycle slot (1-N), unique within the program.
    pub day_number: u32,
    /// Display label (e.g. "Push", "Legs").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Prescribed exercises. Opaque to date resolution.
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl WorkoutDay {
    /// Creates an empty workout day.
    pub fn new(day_number: u32) -> Self {
        Self {
            day_number,
            name: None,
            exercises: Vec::new(),
        }
    }

    /// Sets the display label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds an exercise.
    pub fn with_exercise(mut self, exercise: Exercise) -> Self {
        self.exercises.push(exercise);
        self
    }

    /// Whether the day prescribes nothing.
    pub fn is_rest_day(&self) -> bool {
        self.exercises.is_empty()
    }
}

/// A recurring training program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutProgram {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Date-mapping mode.
    pub program_type: ProgramType,
    /// Cycle anchor. Only read for [`ProgramType::Custom`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_date: Option<NaiveDate>,
    /// Workout days, unique by `day_number`.
    #[serde(default)]
    pub workout_days: Vec<WorkoutDay>,
}

impl WorkoutProgram {
    /// Creates an empty day-of-week program.
    pub fn day_of_week() -> Self {
        Self {
            name: None,
            program_type: ProgramType::DayOfWeek,
            starting_date: None,
            workout_days: Vec::new(),
        }
    }

    /// Creates an empty custom-cycle program anchored at `starting_date`.
    pub fn custom(starting_date: NaiveDate) -> Self {
        Self {
            name: None,
            program_type: ProgramType::Custom,
            starting_date: Some(starting_date),
            workout_days: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a workout day.
    pub fn with_day(mut self, day: WorkoutDay) -> Self {
        self.workout_days.push(day);
        self
    }

    /// Adds empty workout days for each of the given numbers.
    pub fn with_days(mut self, day_numbers: impl IntoIterator<Item = u32>) -> Self {
        self.workout_days
            .extend(day_numbers.into_iter().map(WorkoutDay::new));
        self
    }

    /// Rotation cycle length: the largest day number present.
    ///
    /// Returns `None` for an empty program or when every day number is 0.
    /// Gaps below the maximum still count towards the length.
    pub fn cycle_length(&self) -> Option<u32> {
        self.workout_days
            .iter()
            .map(|d| d.day_number)
            .max()
            .filter(|&len| len > 0)
    }

    /// Looks up a workout day by number.
    pub fn day(&self, day_number: u32) -> Option<&WorkoutDay> {
        self.workout_days.iter().find(|d| d.day_number == day_number)
    }

    /// Whether the program has any workout days.
    pub fn has_days(&self) -> bool {
        !self.workout_days.is_empty()
    }
}
