//! Workout domain models.
//!
//! Read-only records supplied by external program-editing and logging
//! flows. The engine never mutates them.
//!
//! | Type | Role |
//! |------|------|
//! | `WorkoutProgram` | Program definition (mode, anchor date, days) |
//! | `WorkoutDay` | One prescribed day, keyed by `day_number` |
//! | `Exercise` / `ExerciseSet` | Muscle-group tag and weight × reps sets |
//! | `Session` | A logged workout on a calendar day |
//! | `DateRange` / `RotationWindow` | Closed volume windows, half-open cycles |

mod exercise;
mod program;
mod session;
mod window;

pub use exercise::{Exercise, ExerciseSet, DEFAULT_MUSCLE_GROUPS};
pub use program::{ProgramType, WorkoutDay, WorkoutProgram};
pub use session::Session;
pub use window::{DateRange, RotationWindow};
