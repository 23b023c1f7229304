//! Exercise and set records.
//!
//! Shared by prescriptions ([`WorkoutDay`](super::WorkoutDay)) and logged
//! history ([`Session`](super::Session)). Volume is weight × reps, summed
//! over sets.

use serde::{Deserialize, Serialize};

/// Default muscle-group vocabulary for volume charts.
pub const DEFAULT_MUSCLE_GROUPS: [&str; 6] =
    ["Chest", "Shoulder", "Back", "Quads", "Hamstrings", "Arms"];

/// A single set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    /// Load (caller's unit, e.g. kg).
    pub weight: f64,
    /// Repetitions performed.
    pub reps: u32,
}

impl ExerciseSet {
    /// Creates a set.
    pub fn new(weight: f64, reps: u32) -> Self {
        Self { weight, reps }
    }

    /// weight × reps.
    #[inline]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

/// An exercise with its muscle-group tag and sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Exercise name (e.g. "Bench Press").
    #[serde(default)]
    pub name: String,
    /// Muscle-group tag, matched exactly against the chart vocabulary.
    pub muscle_group: String,
    /// Sets in performed order.
    #[serde(default)]
    pub sets: Vec<ExerciseSet>,
}

impl Exercise {
    /// Creates an exercise with no sets.
    pub fn new(name: impl Into<String>, muscle_group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            muscle_group: muscle_group.into(),
            sets: Vec::new(),
        }
    }

    /// Adds a set.
    pub fn with_set(mut self, weight: f64, reps: u32) -> Self {
        self.sets.push(ExerciseSet::new(weight, reps));
        self
    }

    /// Total volume across all sets.
    pub fn volume(&self) -> f64 {
        self.sets.iter().map(ExerciseSet::volume).sum()
    }

    /// Total repetitions across all sets.
    pub fn total_reps(&self) -> u64 {
        self.sets.iter().map(|s| u64::from(s.reps)).sum()
    }
}
