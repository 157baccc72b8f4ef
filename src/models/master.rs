// SPDX-License-Identifier: MIT

//! Master (staff member) model with weekly schedule validation.

use crate::models::LocalizedText;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Master profile stored in Firestore.
///
/// Document ids follow the `master<N>` convention (1-indexed catalog order).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Master {
    /// Identity record this profile belongs to
    pub user_id: String,
    /// Name shown to clients
    pub display_name: String,
    /// Specializations, in display order
    pub specializations: Vec<String>,
    /// Free-text experience summary ("5 лет")
    pub experience: String,
    /// Bio shown on the master's page
    pub description: LocalizedText,
    /// Profile photo
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    /// Portfolio photos, in display order
    pub portfolio: Vec<String>,
    /// Working hours per weekday
    pub schedule: WeeklySchedule,
    /// Average review rating
    pub rating: f64,
    /// Number of reviews behind the rating
    pub reviews_count: u32,
}

/// Working hours for each weekday; `None` is a day off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub monday: Option<DaySchedule>,
    pub tuesday: Option<DaySchedule>,
    pub wednesday: Option<DaySchedule>,
    pub thursday: Option<DaySchedule>,
    pub friday: Option<DaySchedule>,
    pub saturday: Option<DaySchedule>,
    pub sunday: Option<DaySchedule>,
}

/// One working day: an open window and the breaks inside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Opening time, 24-hour "HH:MM"
    pub start: String,
    /// Closing time, 24-hour "HH:MM"
    pub end: String,
    /// Breaks in chronological order
    pub breaks: Vec<BreakInterval>,
}

/// A break inside a working day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakInterval {
    pub start: String,
    pub end: String,
}

/// Schedule invariant violations.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Invalid time '{0}': expected 24-hour HH:MM")]
    InvalidTime(String),

    #[error("{day}: start {start} is not before end {end}")]
    EmptyDay {
        day: &'static str,
        start: String,
        end: String,
    },

    #[error("{day}: break {start}..{end} is outside the working window")]
    BreakOutsideDay {
        day: &'static str,
        start: String,
        end: String,
    },

    #[error("{day}: breaks out of order or overlapping at {at}")]
    OverlappingBreaks { day: &'static str, at: String },
}

fn parse_hhmm(value: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| ScheduleError::InvalidTime(value.to_string()))
}

impl WeeklySchedule {
    /// All seven days with their names, Monday first.
    pub fn days(&self) -> [(&'static str, Option<&DaySchedule>); 7] {
        [
            ("monday", self.monday.as_ref()),
            ("tuesday", self.tuesday.as_ref()),
            ("wednesday", self.wednesday.as_ref()),
            ("thursday", self.thursday.as_ref()),
            ("friday", self.friday.as_ref()),
            ("saturday", self.saturday.as_ref()),
            ("sunday", self.sunday.as_ref()),
        ]
    }

    /// Check every working day against the schedule invariants.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        for (day, schedule) in self.days() {
            if let Some(schedule) = schedule {
                schedule.validate(day)?;
            }
        }
        Ok(())
    }
}

impl DaySchedule {
    /// Invariants: `start < end`; every break lies inside the window,
    /// is non-empty, and breaks do not overlap.
    pub fn validate(&self, day: &'static str) -> Result<(), ScheduleError> {
        let open = parse_hhmm(&self.start)?;
        let close = parse_hhmm(&self.end)?;
        if open >= close {
            return Err(ScheduleError::EmptyDay {
                day,
                start: self.start.clone(),
                end: self.end.clone(),
            });
        }

        let mut previous_end = open;
        for interval in &self.breaks {
            let break_start = parse_hhmm(&interval.start)?;
            let break_end = parse_hhmm(&interval.end)?;

            if break_start >= break_end || break_start < open || break_end > close {
                return Err(ScheduleError::BreakOutsideDay {
                    day,
                    start: interval.start.clone(),
                    end: interval.end.clone(),
                });
            }
            if break_start < previous_end {
                return Err(ScheduleError::OverlappingBreaks {
                    day,
                    at: interval.start.clone(),
                });
            }
            previous_end = break_end;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(start: &str, end: &str, breaks: &[(&str, &str)]) -> DaySchedule {
        DaySchedule {
            start: start.to_string(),
            end: end.to_string(),
            breaks: breaks
                .iter()
                .map(|(s, e)| BreakInterval {
                    start: s.to_string(),
                    end: e.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_typical_day_with_lunch_break() {
        day("09:00", "18:00", &[("13:00", "14:00")])
            .validate("monday")
            .unwrap();
    }

    #[test]
    fn test_day_must_start_before_it_ends() {
        let err = day("18:00", "09:00", &[]).validate("monday").unwrap_err();
        assert!(matches!(err, ScheduleError::EmptyDay { .. }));

        let err = day("09:00", "09:00", &[]).validate("monday").unwrap_err();
        assert!(matches!(err, ScheduleError::EmptyDay { .. }));
    }

    #[test]
    fn test_break_outside_window_rejected() {
        let err = day("10:00", "18:00", &[("09:00", "11:00")])
            .validate("tuesday")
            .unwrap_err();
        assert!(matches!(err, ScheduleError::BreakOutsideDay { .. }));

        let err = day("10:00", "18:00", &[("17:30", "18:30")])
            .validate("tuesday")
            .unwrap_err();
        assert!(matches!(err, ScheduleError::BreakOutsideDay { .. }));
    }

    #[test]
    fn test_empty_break_rejected() {
        let err = day("10:00", "18:00", &[("13:00", "13:00")])
            .validate("friday")
            .unwrap_err();
        assert!(matches!(err, ScheduleError::BreakOutsideDay { .. }));
    }

    #[test]
    fn test_overlapping_breaks_rejected() {
        let err = day("09:00", "20:00", &[("12:00", "14:00"), ("13:30", "15:00")])
            .validate("saturday")
            .unwrap_err();
        assert!(matches!(err, ScheduleError::OverlappingBreaks { .. }));
    }

    #[test]
    fn test_back_to_back_breaks_allowed() {
        day("09:00", "20:00", &[("12:00", "13:00"), ("13:00", "14:00")])
            .validate("sunday")
            .unwrap();
    }

    #[test]
    fn test_garbage_time_rejected() {
        let err = day("9am", "18:00", &[]).validate("monday").unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidTime(_)));
    }

    #[test]
    fn test_week_with_days_off_validates_working_days_only() {
        let schedule = WeeklySchedule {
            monday: Some(day("09:00", "18:00", &[("13:00", "14:00")])),
            tuesday: None,
            wednesday: Some(day("10:00", "16:00", &[])),
            thursday: None,
            friday: None,
            saturday: None,
            sunday: None,
        };
        schedule.validate().unwrap();
    }
}
