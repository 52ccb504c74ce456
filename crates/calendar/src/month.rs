// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Month-grid calculation for the appointment calendar.
//!
//! This module builds the render model for one month view:
//! - Grid bounds padded to whole weeks (Sunday through Saturday)
//! - Padding days borrowed from the adjacent months
//! - Events attached to the day they are scheduled for
//! - The selected day marked, when it falls inside the grid
//!
//! ## Invariants
//!
//! - The grid always contains a whole number of weeks: 35 or 42 cells
//! - Week rows are Sunday-first
//! - Every leading padding day is strictly before the 1st of the
//!   displayed month; every trailing padding day is strictly after its
//!   last day
//! - Identical inputs produce an identical grid
//!
//! ## Usage
//!
//! This logic is used by:
//! - The month view (grid rendering)
//! - Day-agenda views (via [`events_on_date`])

use crate::types::{CalendarDay, CalendarMonth, CalendarWeek, Scheduled};
use chrono::{Datelike, Duration, NaiveDate};
use thiserror::Error;

/// Earliest year the grid builder accepts.
pub const MIN_YEAR: i32 = 1900;

/// Latest year the grid builder accepts.
pub const MAX_YEAR: i32 = 2999;

/// Input-contract violations of the grid builder.
///
/// These indicate an integration bug upstream (a month picker handing out
/// an impossible index), so the builder fails fast instead of clamping.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Month index is outside the zero-based range.
    #[error("Month index {index} is out of range. Must be between 0 and 11")]
    MonthIndexOutOfRange {
        /// The rejected index.
        index: u8,
    },
    /// Year is outside the supported calendar range.
    #[error("Year {year} is out of range. Must be between {MIN_YEAR} and {MAX_YEAR}")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
    },
}

/// Builds the month grid for a year and zero-based month index.
///
/// # Arguments
///
/// * `year` - The displayed year
/// * `month_index` - The displayed month, zero-based (January is 0)
/// * `events` - The already-fetched events to attach, in display order
/// * `selected_date` - The currently selected date, if any
///
/// # Returns
///
/// A [`CalendarMonth`] whose weeks cover every date from the Sunday on or
/// before the 1st through the Saturday on or after the last day.
///
/// # Errors
///
/// Returns an error if `month_index` exceeds 11 or `year` falls outside
/// [`MIN_YEAR`]..=[`MAX_YEAR`].
///
/// # Example
///
/// ```text
/// year = 2024, month_index = 1 (February, leap year, starts Thursday)
///
/// Week 1: Jan 28 29 30 31 | Feb  1  2  3
/// Week 2: Feb  4  5  6  7      8  9 10
/// Week 3: Feb 11 12 13 14     15 16 17
/// Week 4: Feb 18 19 20 21     22 23 24
/// Week 5: Feb 25 26 27 28     29 | Mar 1  2
///
/// 35 cells: 4 leading January days, 29 February days, 2 trailing March days.
/// ```
pub fn build_month<'a, E: Scheduled>(
    year: i32,
    month_index: u8,
    events: &'a [E],
    selected_date: Option<NaiveDate>,
) -> Result<CalendarMonth<'a, E>, CalendarError> {
    if month_index > 11 {
        return Err(CalendarError::MonthIndexOutOfRange { index: month_index });
    }
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange { year });
    }

    let month: u32 = u32::from(month_index) + 1;
    let first_of_month: NaiveDate =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::YearOutOfRange { year })?;
    let last_of_month: NaiveDate = last_day_of_month(first_of_month);

    let grid_start: NaiveDate = week_start(first_of_month);
    let grid_end: NaiveDate = week_end(last_of_month);

    let mut weeks: Vec<CalendarWeek<'a, E>> = Vec::new();
    let mut days: Vec<CalendarDay<'a, E>> = Vec::with_capacity(7);
    let mut total_appointments: usize = 0;

    let mut current: NaiveDate = grid_start;
    loop {
        let day_events: Vec<&'a E> = events_on_date(events, current);
        total_appointments += day_events.len();

        days.push(CalendarDay {
            date: current,
            in_displayed_month: current.year() == year && current.month() == month,
            events: day_events,
            is_selected: selected_date == Some(current),
        });

        if days.len() == 7 {
            weeks.push(CalendarWeek {
                days: std::mem::take(&mut days),
            });
        }

        if current == grid_end {
            break;
        }
        current += Duration::days(1);
    }

    Ok(CalendarMonth {
        year,
        month_index,
        weeks,
        total_appointments,
    })
}

/// Selects the events scheduled on a date, preserving input order.
#[must_use]
pub fn events_on_date<'a, E: Scheduled>(events: &'a [E], date: NaiveDate) -> Vec<&'a E> {
    events
        .iter()
        .filter(|event| event.scheduled_date() == date)
        .collect()
}

/// Returns the 1st of the month after the given date.
///
/// Rolls December into January of the following year. Saturates at the
/// chrono calendar bound.
#[must_use]
pub fn next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// Returns the 1st of the month before the given date.
///
/// Rolls January into December of the preceding year. Saturates at the
/// chrono calendar bound.
#[must_use]
pub fn previous_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// Returns the seven weekday labels for the grid header, Sunday first.
#[must_use]
pub const fn weekday_names(short_form: bool) -> [&'static str; 7] {
    if short_form {
        ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"]
    } else {
        [
            "Domingo",
            "Segunda-feira",
            "Terça-feira",
            "Quarta-feira",
            "Quinta-feira",
            "Sexta-feira",
            "Sábado",
        ]
    }
}

/// Returns the Sunday on or before the given date.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Returns the Saturday on or after the given date.
fn week_end(date: NaiveDate) -> NaiveDate {
    date + Duration::days(i64::from(6 - date.weekday().num_days_from_sunday()))
}

/// Returns the last day of the month containing `first_of_month`.
fn last_day_of_month(first_of_month: NaiveDate) -> NaiveDate {
    next_month(first_of_month)
        .pred_opt()
        .unwrap_or(first_of_month)
}
