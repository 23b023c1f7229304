//! Volume chart settings.
//!
//! Groups the caller-side choices that shape a volume chart: which muscle
//! groups to show, how to scale them, and which weekday starts a week.
//! Deserializable so a client can ship them alongside user preferences.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::analytics::{volume_for_range, VolumeSeries};
use crate::models::{DateRange, Session, DEFAULT_MUSCLE_GROUPS};

/// Settings for weekly volume charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeConfig {
    /// Muscle groups shown, in display order.
    pub muscle_groups: Vec<String>,
    /// Divisor applied for display (1000 = tonnes from kg).
    pub display_divisor: f64,
    /// First day of a chart week.
    pub week_start: Weekday,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            muscle_groups: DEFAULT_MUSCLE_GROUPS.iter().map(|g| g.to_string()).collect(),
            display_divisor: 1000.0,
            week_start: Weekday::Mon,
        }
    }
}

impl VolumeConfig {
    /// Replaces the muscle-group vocabulary.
    pub fn with_muscle_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.muscle_groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the display divisor.
    pub fn with_display_divisor(mut self, divisor: f64) -> Self {
        self.display_divisor = divisor;
        self
    }

    /// Sets the first weekday.
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// The chart week containing `date`.
    pub fn week_containing(&self, date: NaiveDate) -> DateRange {
        DateRange::week_of(date, self.week_start)
    }

    /// Exact volume over `range` for the configured groups.
    pub fn aggregate(&self, sessions: &[Session], range: &DateRange) -> VolumeSeries {
        volume_for_range(sessions, range, self.muscle_groups.as_slice())
    }

    /// Volume for the week containing `date`, scaled for display.
    pub fn weekly_display(&self, sessions: &[Session], date: NaiveDate) -> VolumeSeries {
        self.aggregate(sessions, &self.week_containing(date))
            .scaled(self.display_divisor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Exercise;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cfg = VolumeConfig::default();
        assert_eq!(cfg.muscle_groups, DEFAULT_MUSCLE_GROUPS);
        assert_eq!(cfg.week_start, Weekday::Mon);
        assert!((cfg.display_divisor - 1000.0).abs() < 1e-10);
    }

    #[test]
    fn test_deserialize_partial() {
        let cfg: VolumeConfig =
            serde_json::from_str(r#"{"muscleGroups": ["Chest", "Back"], "weekStart": "Sun"}"#)
                .unwrap();
        assert_eq!(cfg.muscle_groups, vec!["Chest", "Back"]);
        assert_eq!(cfg.week_start, Weekday::Sun);
        assert!((cfg.display_divisor - 1000.0).abs() < 1e-10); // default kept
    }

    #[test]
    fn test_week_containing() {
        let cfg = VolumeConfig::default().with_week_start(Weekday::Sun);
        let week = cfg.week_containing(date(2024, 1, 3));
        assert_eq!(week.start, date(2023, 12, 31));
        assert_eq!(week.end, date(2024, 1, 6));
    }

    #[test]
    fn test_weekly_display() {
        let cfg = VolumeConfig::default()
            .with_muscle_groups(["Chest", "Arms"])
            .with_display_divisor(100.0);
        let sessions = vec![
            Session::new(date(2024, 1, 2))
                .with_exercise(Exercise::new("Bench", "Chest").with_set(100.0, 5)),
            Session::new(date(2024, 1, 9))
                .with_exercise(Exercise::new("Bench", "Chest").with_set(100.0, 5)),
        ];

        let series = cfg.weekly_display(&sessions, date(2024, 1, 4));
        assert_eq!(series.len(), 2);
        assert!((series.get("Chest").unwrap() - 5.0).abs() < 1e-10);
        assert_eq!(series.get("Arms"), Some(0.0));
    }

    #[test]
    fn test_week_containing_at_date_limits() {
        let cfg = VolumeConfig::default();
        assert!(cfg.week_containing(NaiveDate::MIN).contains(NaiveDate::MIN));
        assert!(cfg.week_containing(NaiveDate::MAX).contains(NaiveDate::MAX));

        let sessions = vec![Session::new(NaiveDate::MAX)
            .with_exercise(Exercise::new("Bench", "Chest").with_set(100.0, 5))];
        let series = cfg.weekly_display(&sessions, NaiveDate::MAX);
        assert!((series.get("Chest").unwrap() - 0.5).abs() < 1e-10);
        assert!(cfg.weekly_display(&sessions, NaiveDate::MIN).is_zero());
    }
}
