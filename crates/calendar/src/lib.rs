// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod month;
mod types;

pub use month::{
    CalendarError, MAX_YEAR, MIN_YEAR, build_month, events_on_date, next_month, previous_month,
    weekday_names,
};
pub use types::{CalendarDay, CalendarMonth, CalendarWeek, Scheduled};
