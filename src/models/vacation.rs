//! Vacation entitlement model.
//!
//! This module defines the VacationRecord struct representing one accrual
//! period from the vacations worksheet.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents one vacation entitlement period for a client.
///
/// Multiple records may share a `client_id` (one per entitlement period).
/// Day counts are passed through from the source data unvalidated; negative
/// or inconsistent values are preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRecord {
    /// Identifier of the client this entitlement belongs to.
    pub client_id: i64,
    /// Days of vacation the client is entitled to for this period.
    pub entitlement_days: i64,
    /// Days of vacation already taken in this period.
    pub days_taken: i64,
    /// The date by which the remaining vacation must be taken.
    pub due_by_date: NaiveDate,
}

impl VacationRecord {
    /// Returns the untaken balance for this period.
    ///
    /// The balance may be negative when more days were taken than accrued;
    /// the value is derived without bounds checking.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_alert_engine::models::VacationRecord;
    /// use chrono::NaiveDate;
    ///
    /// let record = VacationRecord {
    ///     client_id: 1,
    ///     entitlement_days: 30,
    ///     days_taken: 10,
    ///     due_by_date: NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
    /// };
    /// assert_eq!(record.remaining_days(), 20);
    /// ```
    pub fn remaining_days(&self) -> i64 {
        self.entitlement_days - self.days_taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(entitlement_days: i64, days_taken: i64) -> VacationRecord {
        VacationRecord {
            client_id: 1,
            entitlement_days,
            days_taken,
            due_by_date: NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
        }
    }

    #[test]
    fn test_deserialize_vacation_record() {
        let json = r#"{
            "client_id": 2,
            "entitlement_days": 20,
            "days_taken": 5,
            "due_by_date": "2026-11-15"
        }"#;

        let record: VacationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.client_id, 2);
        assert_eq!(record.entitlement_days, 20);
        assert_eq!(record.days_taken, 5);
        assert_eq!(
            record.due_by_date,
            NaiveDate::from_ymd_opt(2026, 11, 15).unwrap()
        );
    }

    #[test]
    fn test_remaining_days_positive() {
        assert_eq!(create_test_record(30, 10).remaining_days(), 20);
    }

    #[test]
    fn test_remaining_days_zero() {
        assert_eq!(create_test_record(30, 30).remaining_days(), 0);
    }

    #[test]
    fn test_remaining_days_negative_is_preserved() {
        assert_eq!(create_test_record(10, 15).remaining_days(), -5);
    }

    #[test]
    fn test_due_by_date_serializes_as_iso_string() {
        let record = create_test_record(30, 10);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["due_by_date"], "2026-09-30");
    }
}
