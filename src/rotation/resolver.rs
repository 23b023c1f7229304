//! Date → workout day resolution.
//!
//! # Algorithm
//!
//! Day-of-week programs use the ISO weekday number (Monday = 1).
//!
//! Custom programs count whole days `diff` from `starting_date` and fold
//! them into the cycle of length `L = max(day_number)`:
//! - `diff ≥ 0`: slot = `diff mod L + 1`
//! - `diff < 0`: `r = |diff| mod L`, slot = `1` if `r == 0` else `L + 1 − r`
//!
//! The negative branch walks the cycle backwards so that the day before
//! the start is slot `L`. Both branches together equal
//! `diff.rem_euclid(L) + 1`, which makes resolution periodic in `L` across
//! the starting date.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use serde::Serialize;
use tracing::trace;

use crate::models::{ProgramType, WorkoutDay, WorkoutProgram};

/// Returns the workout day that applies on `date`, if any.
///
/// `None` when the program has no days, a custom program has no starting
/// date, or the resolved slot is a gap.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use workout_rotation::models::WorkoutProgram;
/// use workout_rotation::rotation::resolve;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let program = WorkoutProgram::custom(start).with_days([1, 2, 3]);
///
/// let day_before = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
/// assert_eq!(resolve(&program, day_before).map(|d| d.day_number), Some(3));
/// ```
pub fn resolve(program: &WorkoutProgram, date: NaiveDate) -> Option<&WorkoutDay> {
    let slot = cycle_day(program, date)?;
    program.day(slot)
}

/// Resolves a zoned timestamp by its local calendar day.
///
/// The time of day is discarded, so two instants on the same local date
/// always resolve to the same workout regardless of DST transitions.
pub fn resolve_at<'a, Tz: TimeZone>(
    program: &'a WorkoutProgram,
    at: &DateTime<Tz>,
) -> Option<&'a WorkoutDay> {
    resolve(program, at.date_naive())
}

/// Returns the day number (weekday or cycle slot) that `date` maps to.
///
/// Unlike [`resolve`], a slot is returned even when no workout day carries
/// that number.
pub fn cycle_day(program: &WorkoutProgram, date: NaiveDate) -> Option<u32> {
    if !program.has_days() {
        return None;
    }

    let slot = match program.program_type {
        ProgramType::DayOfWeek => date.weekday().number_from_monday(),
        ProgramType::Custom => {
            let cycle_length = program.cycle_length()?;
            let starting_date = program.starting_date?;
            let diff = (date - starting_date).num_days();
            custom_slot(diff, cycle_length)
        }
    };

    trace!(
        program_type = %program.program_type,
        %date,
        slot,
        "resolved cycle day"
    );
    Some(slot)
}

/// Folds a signed day offset into a 1-based slot of a cycle.
fn custom_slot(diff: i64, cycle_length: u32) -> u32 {
    let len = i64::from(cycle_length);
    let slot = if diff >= 0 {
        diff % len + 1
    } else {
        let remainder = diff.unsigned_abs() % len.unsigned_abs();
        if remainder == 0 {
            1
        } else {
            len + 1 - remainder as i64
        }
    };
    // slot ∈ 1..=cycle_length
    slot as u32
}

/// One entry of an upcoming-days preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledDay<'a> {
    /// Calendar day.
    pub date: NaiveDate,
    /// Weekday or cycle slot the date maps to.
    pub cycle_day: Option<u32>,
    /// Prescribed workout, `None` for rest days and gaps.
    pub workout: Option<&'a WorkoutDay>,
}

impl ScheduledDay<'_> {
    /// Whether nothing is prescribed on this day.
    pub fn is_rest(&self) -> bool {
        self.workout.map_or(true, WorkoutDay::is_rest_day)
    }
}

/// Lists the next `days` calendar days starting at `from` (inclusive).
pub fn upcoming(program: &WorkoutProgram, from: NaiveDate, days: usize) -> Vec<ScheduledDay<'_>> {
    from.iter_days()
        .take(days)
        .map(|date| {
            let slot = cycle_day(program, date);
            ScheduledDay {
                date,
                cycle_day: slot,
                workout: slot.and_then(|n| program.day(n)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Exercise;
    use chrono::{Duration, FixedOffset};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn three_day_program() -> WorkoutProgram {
        WorkoutProgram::custom(date(2024, 1, 1)).with_days([1, 2, 3])
    }

    fn resolved_number(program: &WorkoutProgram, d: NaiveDate) -> Option<u32> {
        resolve(program, d).map(|w| w.day_number)
    }

    #[test]
    fn test_custom_start_and_wraparound() {
        let program = three_day_program();
        assert_eq!(resolved_number(&program, date(2024, 1, 1)), Some(1));
        assert_eq!(resolved_number(&program, date(2024, 1, 2)), Some(2));
        assert_eq!(resolved_number(&program, date(2024, 1, 3)), Some(3));
        assert_eq!(resolved_number(&program, date(2024, 1, 4)), Some(1)); // diff = 3
    }

    #[test]
    fn test_custom_before_start() {
        let program = three_day_program();
        assert_eq!(resolved_number(&program, date(2023, 12, 31)), Some(3));
        assert_eq!(resolved_number(&program, date(2023, 12, 30)), Some(2));
        assert_eq!(resolved_number(&program, date(2023, 12, 29)), Some(1));
        assert_eq!(resolved_number(&program, date(2023, 12, 28)), Some(3));
    }

    #[test]
    fn test_custom_periodicity() {
        let program = three_day_program();
        let mut d = date(2023, 10, 1);
        while d < date(2024, 4, 1) {
            assert_eq!(
                resolve(&program, d),
                resolve(&program, d + Duration::days(3)),
                "period broken at {d}"
            );
            d += Duration::days(1);
        }
    }

    #[test]
    fn test_custom_slot_matches_euclidean_remainder() {
        for len in 1..=9u32 {
            for diff in -40..=40i64 {
                let expected = (diff.rem_euclid(i64::from(len)) + 1) as u32;
                assert_eq!(custom_slot(diff, len), expected, "diff={diff} len={len}");
            }
        }
    }

    #[test]
    fn test_custom_gap() {
        let program = WorkoutProgram::custom(date(2024, 1, 1)).with_days([1, 3]);
        assert_eq!(cycle_day(&program, date(2024, 1, 2)), Some(2));
        assert!(resolve(&program, date(2024, 1, 2)).is_none());
        assert_eq!(resolved_number(&program, date(2024, 1, 3)), Some(3));
        assert_eq!(resolved_number(&program, date(2024, 1, 4)), Some(1));
    }

    #[test]
    fn test_custom_single_day_cycle() {
        let program = WorkoutProgram::custom(date(2024, 1, 1)).with_days([1]);
        for offset in -5..5 {
            let d = date(2024, 1, 1) + Duration::days(offset);
            assert_eq!(resolved_number(&program, d), Some(1));
        }
    }

    #[test]
    fn test_custom_without_starting_date() {
        let mut program = three_day_program();
        program.starting_date = None;
        assert!(resolve(&program, date(2024, 1, 1)).is_none());
    }

    #[test]
    fn test_custom_zero_cycle_length() {
        let program = WorkoutProgram::custom(date(2024, 1, 1)).with_days([0]);
        assert!(cycle_day(&program, date(2024, 1, 1)).is_none());
    }

    #[test]
    fn test_empty_program() {
        assert!(resolve(&WorkoutProgram::day_of_week(), date(2024, 1, 1)).is_none());
        assert!(resolve(&WorkoutProgram::custom(date(2024, 1, 1)), date(2024, 1, 1)).is_none());
    }

    #[test]
    fn test_day_of_week() {
        let program = WorkoutProgram::day_of_week()
            .with_day(WorkoutDay::new(1).with_name("Mon"))
            .with_day(WorkoutDay::new(3).with_name("Wed"))
            .with_day(WorkoutDay::new(7).with_name("Sun"));

        // 2024-01-01 is a Monday
        assert_eq!(resolved_number(&program, date(2024, 1, 1)), Some(1));
        assert!(resolve(&program, date(2024, 1, 2)).is_none());
        assert_eq!(resolved_number(&program, date(2024, 1, 3)), Some(3));
        assert_eq!(resolved_number(&program, date(2024, 1, 7)), Some(7));
    }

    #[test]
    fn test_day_of_week_ignores_starting_date() {
        let mut program = WorkoutProgram::day_of_week().with_days([1]);
        program.starting_date = Some(date(2024, 1, 3));
        assert_eq!(resolved_number(&program, date(2024, 1, 8)), Some(1));
    }

    #[test]
    fn test_day_of_week_periodicity() {
        let program = WorkoutProgram::day_of_week().with_days([1, 2, 4, 6]);
        let mut d = date(2023, 12, 1);
        while d < date(2024, 3, 1) {
            assert_eq!(resolve(&program, d), resolve(&program, d + Duration::days(7)));
            d += Duration::days(1);
        }
    }

    #[test]
    fn test_resolve_at_uses_local_date() {
        let program = three_day_program();
        // 2024-01-02 01:00 at UTC+9 is 2024-01-01 in UTC; the local day wins
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let at = tokyo.with_ymd_and_hms(2024, 1, 2, 1, 0, 0).unwrap();
        assert_eq!(resolve_at(&program, &at).map(|d| d.day_number), Some(2));

        let late = tokyo.with_ymd_and_hms(2024, 1, 2, 23, 59, 59).unwrap();
        assert_eq!(resolve_at(&program, &late), resolve_at(&program, &at));
    }

    #[test]
    fn test_upcoming() {
        let program = WorkoutProgram::custom(date(2024, 1, 1))
            .with_day(WorkoutDay::new(1).with_exercise(Exercise::new("Bench", "Chest")))
            .with_day(WorkoutDay::new(3));

        let days = upcoming(&program, date(2024, 1, 1), 4);
        assert_eq!(days.len(), 4);
        assert_eq!(days[0].date, date(2024, 1, 1));
        assert_eq!(days[0].cycle_day, Some(1));
        assert!(!days[0].is_rest());
        assert_eq!(days[1].cycle_day, Some(2));
        assert!(days[1].workout.is_none()); // gap
        assert!(days[1].is_rest());
        assert!(days[2].is_rest()); // day 3 has no exercises
        assert_eq!(days[3].cycle_day, Some(1));
    }

    #[test]
    fn test_upcoming_zero_days() {
        assert!(upcoming(&three_day_program(), date(2024, 1, 1), 0).is_empty());
    }
}
