use chrono::{DateTime, NaiveDate, Utc};
use lectern_types::{BackendError, BackendResult, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::format::slugify;
use crate::validate::{Validate, require_text};
use crate::{Record, Table};

/// Publication state of an article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
}

impl ArticleStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(BackendError::validation(format!(
                "invalid article status: {other}"
            ))),
        }
    }
}

/// Topic an article is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleCategory {
    Agriculture,
    Motivation,
}

impl ArticleCategory {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Agriculture => "agriculture",
            Self::Motivation => "motivation",
        }
    }
}

impl fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleCategory {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "agriculture" => Ok(Self::Agriculture),
            "motivation" => Ok(Self::Motivation),
            other => Err(BackendError::validation(format!(
                "invalid article category: {other}"
            ))),
        }
    }
}

/// A stored article. `content` may contain markup and is rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: RecordId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub author: String,
    pub status: ArticleStatus,
    pub category: ArticleCategory,
    pub created_at: DateTime<Utc>,
    pub published_date: NaiveDate,
}

impl Article {
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Published
    }
}

impl Record for Article {
    const TABLE: Table = Table::Articles;

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Insert payload for an article. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArticle {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub status: ArticleStatus,
    pub category: ArticleCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<NaiveDate>,
}

impl NewArticle {
    /// A draft with only the required fields set.
    #[must_use]
    pub fn new(title: impl Into<String>, category: ArticleCategory) -> Self {
        Self {
            title: title.into(),
            slug: None,
            excerpt: None,
            content: String::new(),
            cover_image_url: None,
            author: String::new(),
            status: ArticleStatus::Draft,
            category,
            published_date: None,
        }
    }

    /// Fills the slug from the title and the publication date from `today`
    /// when the caller left them out.
    #[must_use]
    pub fn with_defaults(mut self, today: NaiveDate) -> Self {
        if self.slug.is_none() {
            self.slug = Some(slugify(&self.title));
        }
        self.published_date.get_or_insert(today);
        self
    }
}

impl Validate for NewArticle {
    fn validate(&self) -> BackendResult<()> {
        require_text("title", &self.title)
    }
}

/// Partial update for an article. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ArticleCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<NaiveDate>,
}

impl Validate for ArticlePatch {
    fn validate(&self) -> BackendResult<()> {
        match &self.title {
            Some(title) => require_text("title", title),
            None => Ok(()),
        }
    }
}
