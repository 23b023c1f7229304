//! Muscle-group training volume.
//!
//! Sums weight × reps per muscle group over the sessions falling inside a
//! closed date window.
//!
//! # Rules
//!
//! | Case | Behavior |
//! |------|----------|
//! | Session date outside `[start, end]` | Skipped |
//! | Group in vocabulary, never trained | Reported as 0 |
//! | Exercise tag outside vocabulary | Ignored |
//! | Group listed twice in vocabulary | First position kept |
//!
//! Sums are exact. Scaling for display (e.g. tonnes) is a separate step,
//! see [`VolumeSeries::scaled`].

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{DateRange, Session};

/// Volume for one muscle group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleVolume {
    /// Muscle group label.
    pub muscle_group: String,
    /// Σ weight × reps.
    pub volume: f64,
}

/// Per-group volumes in vocabulary order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeSeries {
    /// One entry per vocabulary group.
    pub entries: Vec<MuscleVolume>,
}

impl VolumeSeries {
    /// Volume for a group, `None` if the group is not in the series.
    pub fn get(&self, muscle_group: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.muscle_group == muscle_group)
            .map(|e| e.volume)
    }

    /// Sum over all groups.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.volume).sum()
    }

    /// Whether every group is zero.
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|e| e.volume == 0.0)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the series has no groups.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(group, volume)` pairs in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|e| (e.muscle_group.as_str(), e.volume))
    }

    /// A display copy with every volume divided by `divisor`.
    ///
    /// A zero divisor returns the series unchanged.
    pub fn scaled(&self, divisor: f64) -> Self {
        if divisor == 0.0 {
            return self.clone();
        }
        Self {
            entries: self
                .entries
                .iter()
                .map(|e| MuscleVolume {
                    muscle_group: e.muscle_group.clone(),
                    volume: e.volume / divisor,
                })
                .collect(),
        }
    }

    /// Ordered `(group, volume)` pairs.
    pub fn into_pairs(self) -> Vec<(String, f64)> {
        self.entries
            .into_iter()
            .map(|e| (e.muscle_group, e.volume))
            .collect()
    }
}

/// Aggregates volume per muscle group for sessions in `[window_start, window_end]`.
///
/// # Arguments
/// * `sessions` - Logged sessions, in any order.
/// * `window_start`, `window_end` - Inclusive bounds. `start > end` matches nothing.
/// * `known_muscle_groups` - Vocabulary; fixes both the keys and their order.
pub fn weekly_volume<S: AsRef<str>>(
    sessions: &[Session],
    window_start: NaiveDate,
    window_end: NaiveDate,
    known_muscle_groups: &[S],
) -> VolumeSeries {
    let mut entries: Vec<MuscleVolume> = Vec::with_capacity(known_muscle_groups.len());
    let mut index: HashMap<&str, usize> = HashMap::new();

    for group in known_muscle_groups {
        let group = group.as_ref();
        if !index.contains_key(group) {
            index.insert(group, entries.len());
            entries.push(MuscleVolume {
                muscle_group: group.to_string(),
                volume: 0.0,
            });
        }
    }

    let window = DateRange::new(window_start, window_end);
    let mut matched_sessions = 0usize;
    let mut ignored_exercises = 0usize;

    for session in sessions.iter().filter(|s| window.contains(s.date)) {
        matched_sessions += 1;
        for exercise in &session.exercises {
            match index.get(exercise.muscle_group.as_str()) {
                Some(&i) => entries[i].volume += exercise.volume(),
                None => ignored_exercises += 1,
            }
        }
    }

    debug!(
        %window_start,
        %window_end,
        sessions = sessions.len(),
        matched_sessions,
        ignored_exercises,
        "aggregated muscle-group volume"
    );

    VolumeSeries { entries }
}

/// [`weekly_volume`] over a [`DateRange`].
pub fn volume_for_range<S: AsRef<str>>(
    sessions: &[Session],
    range: &DateRange,
    known_muscle_groups: &[S],
) -> VolumeSeries {
    weekly_volume(sessions, range.start, range.end, known_muscle_groups)
}
