//! Rotation window computation for custom-cycle programs.
//!
//! The window containing `today` starts at
//! `starting_date + floor(diff / L) × L` days and ends (exclusive)
//! `L` days later. Floor division keeps dates before the starting date in
//! negative rotations, so a window always contains the reference date.

use chrono::{Duration, NaiveDate};
use tracing::trace;

use crate::models::{ProgramType, RotationWindow, WorkoutProgram};

/// Returns the rotation cycle containing `today`.
///
/// `None` for day-of-week programs, programs without days, custom
/// programs lacking a starting date, and windows whose bounds fall outside
/// chrono's supported date range (e.g. a cycle of 100 million days).
/// [`resolve`](super::resolve) still works for such programs.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use workout_rotation::models::WorkoutProgram;
/// use workout_rotation::rotation::current_window;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let program = WorkoutProgram::custom(start).with_days([1, 2, 3]);
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// let window = current_window(&program, today).unwrap();
/// assert_eq!(window.start, NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
/// assert_eq!(window.end, NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
/// ```
pub fn current_window(program: &WorkoutProgram, today: NaiveDate) -> Option<RotationWindow> {
    if program.program_type != ProgramType::Custom {
        return None;
    }
    let cycle_length = i64::from(program.cycle_length()?);
    let starting_date = program.starting_date?;

    let diff = (today - starting_date).num_days();
    let rotation_index = diff.div_euclid(cycle_length);
    window_at(starting_date, cycle_length, rotation_index)
}

/// Returns the window `offset` rotations away from the one containing
/// `today` (negative = earlier).
pub fn window_offset(
    program: &WorkoutProgram,
    today: NaiveDate,
    offset: i64,
) -> Option<RotationWindow> {
    let current = current_window(program, today)?;
    let starting_date = program.starting_date?;
    let cycle_length = current.days();
    window_at(
        starting_date,
        cycle_length,
        current.rotation_index.checked_add(offset)?,
    )
}

fn window_at(
    starting_date: NaiveDate,
    cycle_length: i64,
    rotation_index: i64,
) -> Option<RotationWindow> {
    let start_offset = Duration::try_days(rotation_index.checked_mul(cycle_length)?)?;
    let start = starting_date.checked_add_signed(start_offset)?;
    let end = start.checked_add_signed(Duration::try_days(cycle_length)?)?;

    trace!(%start, %end, rotation_index, "rotation window");
    Some(RotationWindow {
        start,
        end,
        rotation_index,
    })
}
