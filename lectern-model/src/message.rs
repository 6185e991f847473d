use chrono::{DateTime, Utc};
use lectern_types::{BackendError, BackendResult, RecordId};
use serde::{Deserialize, Serialize};

use crate::validate::{Validate, is_valid_email, require_text};
use crate::{Record, Table};

/// A contact-form submission. Append-only: never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Record for Message {
    const TABLE: Table = Table::Messages;

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Validate for NewMessage {
    fn validate(&self) -> BackendResult<()> {
        require_text("name", &self.name)?;
        require_text("email", &self.email)?;
        if !is_valid_email(&self.email) {
            return Err(BackendError::validation("Invalid email address"));
        }
        require_text("subject", &self.subject)?;
        require_text("message", &self.message)
    }
}
