//! Program day resolution and rotation windows.
//!
//! Pure functions over a borrowed [`WorkoutProgram`](crate::models::WorkoutProgram)
//! and a calendar date. Nothing is cached; callers re-run them whenever the
//! selected date changes.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use workout_rotation::models::WorkoutProgram;
//! use workout_rotation::rotation::{current_window, resolve};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let program = WorkoutProgram::custom(start).with_days([1, 2, 3]);
//! let today = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
//!
//! assert_eq!(resolve(&program, today).map(|d| d.day_number), Some(1));
//! assert_eq!(current_window(&program, today).unwrap().start, today);
//! ```

mod resolver;
mod window;

pub use resolver::{cycle_day, resolve, resolve_at, upcoming, ScheduledDay};
pub use window::{current_window, window_offset};
