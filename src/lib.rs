//! Workout program rotation engine.
//!
//! Maps calendar dates onto the workout days of a recurring training
//! program and aggregates logged sessions into per-muscle-group volume.
//! Every operation is a pure function over borrowed, read-only records;
//! persistence, transport and presentation are left to the caller.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `WorkoutProgram`, `WorkoutDay`, `Exercise`,
//!   `ExerciseSet`, `Session`, `DateRange`, `RotationWindow`
//! - **`rotation`**: Date → workout day resolution, rotation windows,
//!   upcoming-days preview
//! - **`analytics`**: Muscle-group volume over a date window
//! - **`config`**: Volume chart settings (vocabulary, scaling, week start)
//! - **`validation`**: Program integrity checks (duplicates, ranges, anchors)
//!
//! # Conventions
//!
//! - Dates are `chrono::NaiveDate` calendar days. Zoned timestamps are
//!   reduced to their local date first (see [`rotation::resolve_at`]).
//! - Custom cycle length is the largest day number in the program.
//! - Rotation windows are half-open `[start, end)`; volume windows are
//!   closed `[start, end]`.

pub mod analytics;
pub mod config;
pub mod error;
pub mod models;
pub mod rotation;
pub mod validation;

pub use error::{Error, Result};
