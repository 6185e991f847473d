//! Chainable select queries.

use chrono::{DateTime, Utc};
use lectern_model::{Row, Table};
use lectern_types::{BackendError, BackendResult};
use serde_json::Value;
use std::cmp::Ordering;
use std::future::{Future, IntoFuture};
use std::pin::Pin;

use crate::store::RecordStore;

/// Sort direction for [`Select::order`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// Single-column ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub direction: Direction,
}

impl Order {
    /// Compares two rows on this ordering's column.
    ///
    /// Null or missing values rank above every other value, so they come
    /// last ascending and first descending. RFC 3339 strings compare as
    /// instants.
    pub fn compare(&self, a: &Row, b: &Row) -> Ordering {
        let ordering =
            SortKey::of(a.get(&self.column)).compare(&SortKey::of(b.get(&self.column)));
        match self.direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// The shape of a select: table, AND-ed equality filters, ordering, limit.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub table: Table,
    pub filters: Vec<(String, Value)>,
    pub order: Option<Order>,
    pub limit: Option<usize>,
}

impl Query {
    #[must_use]
    pub fn new(table: Table) -> Self {
        Self {
            table,
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// True when every filter matches exactly. A missing column never matches.
    #[must_use]
    pub fn matches(&self, row: &Row) -> bool {
        self.filters
            .iter()
            .all(|(column, value)| row.get(column) == Some(value))
    }

    fn describe_filters(&self) -> String {
        match self.filters.as_slice() {
            [(column, Value::String(id))] if column == "id" => id.clone(),
            filters => filters
                .iter()
                .map(|(column, value)| match value {
                    Value::String(s) => format!("{column}={s}"),
                    other => format!("{column}={other}"),
                })
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// A pending select. Chain filters, then `.await` it for the matching rows.
#[must_use = "a select does nothing until it is awaited"]
pub struct Select<'a> {
    store: &'a RecordStore,
    query: Query,
}

impl<'a> Select<'a> {
    pub(crate) fn new(store: &'a RecordStore, table: Table) -> Self {
        Self {
            store,
            query: Query::new(table),
        }
    }

    /// Keeps rows whose `column` equals `value`. Chained filters are AND-ed.
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.filters.push((column.into(), value.into()));
        self
    }

    /// Sorts by a single column. A later call replaces an earlier one.
    pub fn order(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.query.order = Some(Order {
            column: column.into(),
            direction,
        });
        self
    }

    /// Keeps at most `n` rows after filtering and ordering.
    pub fn limit(mut self, n: usize) -> Self {
        self.query.limit = Some(n);
        self
    }

    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Runs the query and expects exactly one row.
    pub async fn single(self) -> BackendResult<Row> {
        let mut rows = self.store.execute(&self.query).await?;
        match rows.len() {
            1 => Ok(rows.remove(0)),
            0 => Err(BackendError::not_found(
                self.query.table,
                self.query.describe_filters(),
            )),
            n => Err(BackendError::validation(format!(
                "expected a single {} row, found {n}",
                self.query.table
            ))),
        }
    }
}

impl<'a> IntoFuture for Select<'a> {
    type Output = BackendResult<Vec<Row>>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send + 'a>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move { self.store.execute(&self.query).await })
    }
}

/// Total order over column values used for sorting.
///
/// Ranks by kind first (bool, number, timestamp, text, compound, null), then
/// by value within a kind.
enum SortKey<'a> {
    Bool(bool),
    Number(f64),
    Timestamp(DateTime<Utc>),
    Text(&'a str),
    Compound,
    Null,
}

impl<'a> SortKey<'a> {
    fn of(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Null,
            Some(Value::Bool(b)) => Self::Bool(*b),
            Some(Value::Number(n)) => Self::Number(n.as_f64().unwrap_or_default()),
            Some(Value::String(s)) => match DateTime::parse_from_rfc3339(s) {
                Ok(at) => Self::Timestamp(at.with_timezone(&Utc)),
                Err(_) => Self::Text(s),
            },
            Some(Value::Array(_) | Value::Object(_)) => Self::Compound,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Number(_) => 1,
            Self::Timestamp(_) => 2,
            Self::Text(_) => 3,
            Self::Compound => 4,
            Self::Null => 5,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Timestamp(a), Self::Timestamp(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}
