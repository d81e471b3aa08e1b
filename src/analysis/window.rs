//! Alert window calculation.
//!
//! This module defines the inclusive date window within which a due date
//! raises an alert.

use chrono::{Duration, NaiveDate};

/// The default alert window size in days when the caller does not supply one.
pub const DEFAULT_ALERT_WINDOW_DAYS: i64 = 60;

/// The largest alert window size in days accepted at the API boundary.
pub const MAX_ALERT_WINDOW_DAYS: i64 = 36_500;

/// An inclusive date window `[start, end]` anchored at "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl AlertWindow {
    /// Builds a window starting at `now` and ending `alert_window_days`
    /// later, both ends inclusive.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_alert_engine::analysis::AlertWindow;
    /// use chrono::NaiveDate;
    ///
    /// let now = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    /// let window = AlertWindow::new(now, 60);
    /// assert!(window.contains(now));
    /// assert!(window.contains(NaiveDate::from_ymd_opt(2026, 4, 30).unwrap()));
    /// assert!(!window.contains(NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()));
    /// ```
    pub fn new(now: NaiveDate, alert_window_days: i64) -> Self {
        // Spans past the calendar range saturate at the bounds rather than
        // overflowing.
        let end = Duration::try_days(alert_window_days)
            .and_then(|delta| now.checked_add_signed(delta))
            .unwrap_or(if alert_window_days < 0 {
                NaiveDate::MIN
            } else {
                NaiveDate::MAX
            });

        Self { start: now, end }
    }

    /// Returns true if `date` falls inside the window (inclusive both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
