//! Logged workout session.

use serde::{Deserialize, Serialize};

use chrono::NaiveDate;

use super::Exercise;

/// A workout performed on a given calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Calendar day the session was performed.
    pub date: NaiveDate,
    /// Exercises performed with their sets.
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl Session {
    /// Creates an empty session.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            exercises: Vec::new(),
        }
    }

    /// Adds an exercise.
    pub fn with_exercise(mut self, exercise: Exercise) -> Self {
        self.exercises.push(exercise);
        self
    }

    /// Total volume across all exercises, regardless of muscle group.
    pub fn volume(&self) -> f64 {
        self.exercises.iter().map(Exercise::volume).sum()
    }
}
