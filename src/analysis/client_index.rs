//! Client lookup index construction.

use std::collections::HashMap;

use crate::models::ClientRecord;

/// Builds a `client_id -> name` lookup index from the clients table.
///
/// When the table repeats a client id, the last occurrence wins, matching
/// how the source data was handled historically.
///
/// # Examples
///
/// ```
/// use vacation_alert_engine::analysis::build_client_index;
/// use vacation_alert_engine::models::ClientRecord;
///
/// let clients = vec![
///     ClientRecord { client_id: 1, name: "Acme".to_string() },
///     ClientRecord { client_id: 2, name: "Globex".to_string() },
/// ];
///
/// let index = build_client_index(&clients);
/// assert_eq!(index.get(&1).map(String::as_str), Some("Acme"));
/// assert_eq!(index.get(&3), None);
/// ```
pub fn build_client_index(clients: &[ClientRecord]) -> HashMap<i64, String> {
    clients
        .iter()
        .map(|client| (client.client_id, client.name.clone()))
        .collect()
}
