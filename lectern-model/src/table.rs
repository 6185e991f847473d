use lectern_types::BackendError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The tables emulated by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Articles,
    Books,
    Messages,
}

impl Table {
    pub const ALL: [Table; 3] = [Table::Articles, Table::Books, Table::Messages];

    /// The table name used by the hosted backend.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Articles => "articles",
            Self::Books => "books",
            Self::Messages => "messages",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Table {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|table| table.name() == s)
            .ok_or_else(|| BackendError::validation(format!("unknown table: {s}")))
    }
}
