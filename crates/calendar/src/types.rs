// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use clinilog_domain::Appointment;
use serde::Serialize;

/// The one thing the grid builder needs from an event: the calendar date
/// it is scheduled for.
///
/// Dates handed to the builder must already be in the clinic's operational
/// calendar; the builder performs no timezone conversion of its own.
pub trait Scheduled {
    /// Returns the calendar date this event is scheduled for.
    fn scheduled_date(&self) -> NaiveDate;
}

impl Scheduled for Appointment {
    fn scheduled_date(&self) -> NaiveDate {
        self.clinic_date()
    }
}

impl Scheduled for NaiveDate {
    fn scheduled_date(&self) -> NaiveDate {
        *self
    }
}

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay<'a, E> {
    /// The calendar date of this cell.
    pub date: NaiveDate,
    /// Whether this date belongs to the displayed month. Padding days
    /// borrowed from the adjacent months carry `false`.
    pub in_displayed_month: bool,
    /// The events scheduled on this date, in input order.
    pub events: Vec<&'a E>,
    /// Whether this is the currently selected date. At most one day per
    /// grid carries `true`.
    pub is_selected: bool,
}

/// One row of the month grid: exactly seven days, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarWeek<'a, E> {
    /// The days of this week, Sunday through Saturday.
    pub days: Vec<CalendarDay<'a, E>>,
}

/// The full render model for one month view.
///
/// A pure value recomputed whenever the displayed year, month, event
/// collection, or selected date changes. Holds no caches and no interior
/// mutability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth<'a, E> {
    /// The displayed year.
    pub year: i32,
    /// The displayed month as a zero-based index (January is 0).
    pub month_index: u8,
    /// The grid rows, top to bottom.
    pub weeks: Vec<CalendarWeek<'a, E>>,
    /// Total event count across the whole grid, padding days included,
    /// since their events are visibly rendered too.
    pub total_appointments: usize,
}

impl<'a, E> CalendarMonth<'a, E> {
    /// Iterates every cell of the grid in display order.
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay<'a, E>> + '_ {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }
}
