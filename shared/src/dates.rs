//! Date-window resolution
//!
//! Turns a symbolic preset or an explicit date list into a canonical,
//! chronologically ordered, deduplicated list of `YYYY-MM-DD` strings.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateWindowError {
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Symbolic date presets accepted by the ranking endpoints
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DatePreset {
    Today,
    Tomorrow,
    ThisWeekend,
    #[default]
    NextWeekend,
}

/// An ordered, deduplicated, non-empty set of calendar dates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    dates: Vec<String>,
}

impl DateWindow {
    /// Resolve an optional explicit `dates` parameter (comma-separated
    /// `YYYY-MM-DD` values) falling back to a preset relative to `today`.
    ///
    /// # Errors
    /// Returns `DateWindowError::InvalidDate` if any explicit entry does
    /// not parse as a calendar date.
    pub fn resolve(
        explicit: Option<&str>,
        preset: DatePreset,
        today: NaiveDate,
    ) -> Result<Self, DateWindowError> {
        let entries: Vec<&str> = explicit
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if entries.is_empty() {
            return Ok(Self::from_dates(preset_dates(preset, today)));
        }

        let mut parsed = Vec::with_capacity(entries.len());
        for entry in entries {
            parsed.push(parse_date(entry)?);
        }
        parsed.sort_unstable();
        parsed.dedup();
        Ok(Self::from_dates(parsed))
    }

    /// Build a window from already-valid dates, normalizing order and
    /// duplicates. Panics on an empty input in debug builds only; callers
    /// always supply at least one date.
    pub fn from_dates(mut dates: Vec<NaiveDate>) -> Self {
        debug_assert!(!dates.is_empty());
        dates.sort_unstable();
        dates.dedup();
        Self {
            dates: dates.iter().map(|d| format_date(*d)).collect(),
        }
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn first(&self) -> &str {
        &self.dates[0]
    }

    /// Comma-joined form used in cache keys
    pub fn key(&self) -> String {
        self.dates.join(",")
    }
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn parse_date(s: &str) -> Result<NaiveDate, DateWindowError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| DateWindowError::InvalidDate(s.to_string()))
}

/// The upcoming weekend relative to `d`: Saturday (today, if `d` is a
/// Saturday) followed by its Sunday.
pub fn weekend_of(d: NaiveDate) -> [NaiveDate; 2] {
    let day = i64::from(d.weekday().num_days_from_sunday()); // 0 Sun ... 6 Sat
    let days_until_sat = (6 - day).rem_euclid(7);
    let sat = d + Duration::days(days_until_sat);
    [sat, sat + Duration::days(1)]
}

/// Expand a preset into concrete dates relative to `today`
pub fn preset_dates(preset: DatePreset, today: NaiveDate) -> Vec<NaiveDate> {
    match preset {
        DatePreset::Today => vec![today],
        DatePreset::Tomorrow => vec![today + Duration::days(1)],
        DatePreset::ThisWeekend => weekend_of(today).to_vec(),
        DatePreset::NextWeekend => {
            let [sat, _] = weekend_of(today);
            let sat = sat + Duration::days(7);
            vec![sat, sat + Duration::days(1)]
        }
    }
}

/// Indices of hourly timestamps whose 10-character date prefix is one of
/// the window's dates. String prefix match, not timezone math: this is
/// what assigns hours to calendar dates everywhere downstream.
pub fn filter_hours_by_dates(times: &[String], dates: &[String]) -> Vec<usize> {
    times
        .iter()
        .enumerate()
        .filter(|(_, t)| dates.iter().any(|d| t.starts_with(d.as_str())))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn weekend_of_midweek_day() {
        // 2025-01-01 is a Wednesday
        let [sat, sun] = weekend_of(date("2025-01-01"));
        assert_eq!(sat, date("2025-01-04"));
        assert_eq!(sun, date("2025-01-05"));
    }

    #[test]
    fn weekend_of_saturday_is_today() {
        let [sat, sun] = weekend_of(date("2025-01-04"));
        assert_eq!(sat, date("2025-01-04"));
        assert_eq!(sun, date("2025-01-05"));
    }

    #[test]
    fn weekend_of_sunday_rolls_to_next_saturday() {
        let [sat, _] = weekend_of(date("2025-01-05"));
        assert_eq!(sat, date("2025-01-11"));
    }

    #[test]
    fn next_weekend_is_seven_days_after_this_weekend() {
        let window =
            DateWindow::resolve(None, DatePreset::NextWeekend, date("2025-01-01")).unwrap();
        assert_eq!(window.dates(), ["2025-01-11", "2025-01-12"]);
        let sat = date(window.first());
        assert_eq!(sat.weekday(), Weekday::Sat);
    }

    #[test]
    fn explicit_dates_are_sorted_and_deduplicated() {
        let window = DateWindow::resolve(
            Some("2025-03-02, 2025-03-01,2025-03-02"),
            DatePreset::Today,
            date("2025-01-01"),
        )
        .unwrap();
        assert_eq!(window.dates(), ["2025-03-01", "2025-03-02"]);
        assert_eq!(window.key(), "2025-03-01,2025-03-02");
    }

    #[test]
    fn invalid_explicit_date_is_rejected() {
        let err = DateWindow::resolve(Some("2025-13-40"), DatePreset::Today, date("2025-01-01"))
            .unwrap_err();
        assert_eq!(err, DateWindowError::InvalidDate("2025-13-40".into()));
    }

    #[test]
    fn blank_explicit_list_falls_back_to_preset() {
        let window = DateWindow::resolve(Some(" , "), DatePreset::Today, date("2025-01-01")).unwrap();
        assert_eq!(window.dates(), ["2025-01-01"]);
    }

    #[test]
    fn hour_filtering_matches_date_prefix() {
        let times = vec![
            "2025-01-04T00:00".to_string(),
            "2025-01-04T23:00".to_string(),
            "2025-01-05T00:00".to_string(),
        ];
        let dates = vec!["2025-01-04".to_string()];
        assert_eq!(filter_hours_by_dates(&times, &dates), vec![0, 1]);
    }
}
