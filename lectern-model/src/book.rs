use chrono::{DateTime, NaiveDate, Utc};
use lectern_types::{BackendResult, RecordId};
use serde::{Deserialize, Serialize};

use crate::format::{format_price, slugify};
use crate::validate::{Validate, require_price, require_text};
use crate::{Record, Table};

/// A stored book. `pdf_url` points at an object in the `books` bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: RecordId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub published_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// Price with two decimals, e.g. `"12.50"`.
    #[must_use]
    pub fn display_price(&self) -> Option<String> {
        self.price.map(format_price)
    }
}

impl Record for Book {
    const TABLE: Table = Table::Books;

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<NaiveDate>,
}

impl NewBook {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: None,
            description: String::new(),
            author: String::new(),
            cover_image_url: None,
            pdf_url: None,
            isbn: None,
            price: None,
            published_date: None,
        }
    }

    /// Fills the slug from the title when the caller left it out.
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        if self.slug.is_none() {
            self.slug = Some(slugify(&self.title));
        }
        self
    }
}

impl Validate for NewBook {
    fn validate(&self) -> BackendResult<()> {
        require_text("title", &self.title)?;
        require_price(self.price)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<NaiveDate>,
}

impl Validate for BookPatch {
    fn validate(&self) -> BackendResult<()> {
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        require_price(self.price)
    }
}
