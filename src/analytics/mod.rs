//! Training-volume aggregation over logged sessions.
//!
//! Produces chart-ready, vocabulary-ordered series. Presentation (units,
//! rounding, colors) belongs to the caller.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use workout_rotation::analytics::weekly_volume;
//! use workout_rotation::models::{Exercise, Session, DEFAULT_MUSCLE_GROUPS};
//!
//! let day = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
//! let sessions = vec![Session::new(day)
//!     .with_exercise(Exercise::new("Bench", "Chest").with_set(100.0, 5))];
//!
//! let series = weekly_volume(&sessions, day, day, &DEFAULT_MUSCLE_GROUPS);
//! assert_eq!(series.get("Chest"), Some(500.0));
//! assert_eq!(series.get("Back"), Some(0.0));
//! ```

mod volume;

pub use volume::{volume_for_range, weekly_volume, MuscleVolume, VolumeSeries};
