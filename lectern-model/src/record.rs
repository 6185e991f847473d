use lectern_types::{BackendError, BackendResult, RecordId};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Table;

/// A stored row: a JSON object keyed by column name.
pub type Row = serde_json::Map<String, Value>;

/// A typed record living in one table.
pub trait Record: Serialize + DeserializeOwned {
    const TABLE: Table;

    fn id(&self) -> RecordId;
}

/// Encodes an insert payload or patch into a row object.
pub fn to_row<T: Serialize>(value: &T) -> BackendResult<Row> {
    match serde_json::to_value(value) {
        Ok(Value::Object(row)) => Ok(row),
        Ok(other) => Err(BackendError::validation(format!(
            "expected a JSON object, got {other}"
        ))),
        Err(e) => Err(BackendError::validation(e.to_string())),
    }
}

/// Decodes a stored row into its typed record.
pub fn from_row<R: Record>(row: Row) -> BackendResult<R> {
    serde_json::from_value(Value::Object(row))
        .map_err(|e| BackendError::transport(format!("malformed {} row: {e}", R::TABLE)))
}
