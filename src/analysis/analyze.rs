//! The core analysis transformation.

use chrono::NaiveDate;

use crate::models::{AnalysisResult, ClientRecord, EnrichedVacationRecord, VacationRecord};

use super::client_index::build_client_index;
use super::enrich::enrich_record;
use super::metrics::compute_metrics;
use super::window::AlertWindow;

/// Joins, filters, enriches, sorts and summarizes the vacation tables.
///
/// Keeps the vacation records whose `due_by_date` lies inside the inclusive
/// window `[now, now + alert_window_days]`, resolves each one's company name
/// through a lenient join against `clients`, derives the remaining-days
/// balance, orders the result by `(due_by_date, client_id)` ascending (ties
/// beyond that keep input order), and computes aggregate metrics over the
/// filtered set.
///
/// `now` is threaded in explicitly rather than read from the process clock,
/// so the transformation is a pure function of its arguments: identical
/// inputs with the same `now` always produce identical output.
///
/// # Examples
///
/// ```
/// use vacation_alert_engine::analysis::analyze;
/// use vacation_alert_engine::models::{ClientRecord, VacationRecord};
/// use chrono::NaiveDate;
///
/// let clients = vec![ClientRecord { client_id: 1, name: "Acme".to_string() }];
/// let vacations = vec![VacationRecord {
///     client_id: 1,
///     entitlement_days: 30,
///     days_taken: 10,
///     due_by_date: NaiveDate::from_ymd_opt(2026, 3, 11).unwrap(),
/// }];
///
/// let now = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// let result = analyze(&clients, &vacations, 60, now);
/// assert_eq!(result.metrics.alert_count, 1);
/// assert_eq!(result.records[0].company_name.as_deref(), Some("Acme"));
/// ```
pub fn analyze(
    clients: &[ClientRecord],
    vacations: &[VacationRecord],
    alert_window_days: i64,
    now: NaiveDate,
) -> AnalysisResult {
    let index = build_client_index(clients);
    let window = AlertWindow::new(now, alert_window_days);

    let mut records: Vec<EnrichedVacationRecord> = vacations
        .iter()
        .filter(|vacation| window.contains(vacation.due_by_date))
        .map(|vacation| enrich_record(vacation, &index))
        .collect();

    // Vec::sort_by is stable, so ties beyond the two keys keep input order.
    records.sort_by(|a, b| {
        a.due_by_date
            .cmp(&b.due_by_date)
            .then(a.client_id.cmp(&b.client_id))
    });

    let metrics = compute_metrics(&records);

    AnalysisResult { records, metrics }
}
