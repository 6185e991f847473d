use chrono::SecondsFormat;
use lectern_model::{Row, Table};
use lectern_types::{
    BackendError, BackendResult, NoLatency, Operation, RecordId, SharedClock,
    SharedLatency, SystemClock,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::query::{Query, Select};
use crate::seed::SeedData;

/// Result payload of [`RecordStore::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    pub success: bool,
}

/// Emulated relational tables.
pub struct RecordStore {
    tables: RwLock<HashMap<Table, Vec<Row>>>,
    latency: SharedLatency,
    clock: SharedClock,
}

impl RecordStore {
    pub fn new(seed: SeedData, latency: SharedLatency, clock: SharedClock) -> Self {
        Self {
            tables: RwLock::new(seed.into_tables()),
            latency,
            clock,
        }
    }

    /// No rows, no latency, system clock.
    pub fn empty() -> Self {
        Self::new(SeedData::empty(), Arc::new(NoLatency), Arc::new(SystemClock))
    }

    /// Starts a query against `table`. Nothing runs until it is awaited.
    pub fn select(&self, table: Table) -> Select<'_> {
        Select::new(self, table)
    }

    pub(crate) async fn execute(&self, query: &Query) -> BackendResult<Vec<Row>> {
        self.latency.pause(Operation::Select).await;

        let tables = self.tables.read().await;
        let mut rows: Vec<Row> = tables
            .get(&query.table)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter(|row| query.matches(row))
            .cloned()
            .collect();
        drop(tables);

        if let Some(order) = &query.order {
            // Stable: ties keep insertion order.
            rows.sort_by(|a, b| order.compare(a, b));
        }
        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }

        debug!(table = %query.table, rows = rows.len(), "Selected rows");
        Ok(rows)
    }

    /// Appends `row` under a freshly generated id.
    ///
    /// Any caller-supplied `id` is replaced. `created_at` is stamped from the
    /// clock unless the row already carries a non-null value.
    pub async fn insert(&self, table: Table, mut row: Row) -> BackendResult<Row> {
        self.latency.pause(Operation::Insert).await;

        let id = RecordId::new();
        row.insert("id".to_string(), id.into());
        if row.get("created_at").is_none_or(Value::is_null) {
            let now = self.clock.now().to_rfc3339_opts(SecondsFormat::AutoSi, true);
            row.insert("created_at".to_string(), Value::String(now));
        }

        self.tables
            .write()
            .await
            .entry(table)
            .or_default()
            .push(row.clone());

        debug!(table = %table, id = %id, "Inserted row");
        Ok(row)
    }

    /// Merges `patch` over the row with `id`; columns absent from the patch
    /// are preserved. The `id` column cannot be changed.
    pub async fn update(&self, table: Table, id: RecordId, patch: Row) -> BackendResult<Row> {
        self.latency.pause(Operation::Update).await;

        let mut tables = self.tables.write().await;
        let row = tables
            .get_mut(&table)
            .and_then(|rows| rows.iter_mut().find(|row| has_id(row, id)))
            .ok_or_else(|| BackendError::not_found(table, id))?;

        for (column, value) in patch {
            if column == "id" {
                continue;
            }
            row.insert(column, value);
        }

        debug!(table = %table, id = %id, "Updated row");
        Ok(row.clone())
    }

    /// Removes the row with `id`. Deleting an absent id still succeeds.
    pub async fn delete(&self, table: Table, id: RecordId) -> BackendResult<Deleted> {
        self.latency.pause(Operation::Delete).await;

        let mut tables = self.tables.write().await;
        let removed = match tables.get_mut(&table) {
            Some(rows) => {
                let before = rows.len();
                rows.retain(|row| !has_id(row, id));
                before - rows.len()
            }
            None => 0,
        };

        debug!(table = %table, id = %id, removed, "Deleted row");
        Ok(Deleted { success: true })
    }

    /// Number of rows currently held in `table`. Does not simulate latency.
    pub async fn count(&self, table: Table) -> usize {
        self.tables.read().await.get(&table).map_or(0, Vec::len)
    }
}

fn has_id(row: &Row, id: RecordId) -> bool {
    row.get("id")
        .and_then(Value::as_str)
        .and_then(|s| RecordId::parse(s).ok())
        == Some(id)
}
