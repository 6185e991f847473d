use lectern_model::{Row, Table};
use lectern_types::RecordId;
use serde_json::{Value, json};
use std::collections::HashMap;

/// Initial table contents handed to [`crate::RecordStore::new`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedData {
    tables: HashMap<Table, Vec<Row>>,
}

impl SeedData {
    /// No rows in any table.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends `rows` to `table`.
    #[must_use]
    pub fn with_rows(mut self, table: Table, rows: impl IntoIterator<Item = Row>) -> Self {
        self.tables.entry(table).or_default().extend(rows);
        self
    }

    #[must_use]
    pub fn rows(&self, table: Table) -> &[Row] {
        self.tables.get(&table).map(Vec::as_slice).unwrap_or_default()
    }

    pub(crate) fn into_tables(self) -> HashMap<Table, Vec<Row>> {
        self.tables
    }

    /// Demo content: three articles and three books, no messages.
    #[must_use]
    pub fn sample() -> Self {
        Self::empty()
            .with_rows(Table::Articles, sample_articles())
            .with_rows(Table::Books, sample_books())
    }
}

fn sample_articles() -> Vec<Row> {
    [
        json!({
            "id": RecordId::from_u128(0xa1),
            "title": "Sustainable Farming Practices in Eastern Africa",
            "slug": "sustainable-farming-practices-in-eastern-africa",
            "excerpt": "Exploring sustainable farming methods that work well in the Eastern African climate and soil conditions.",
            "content": "<p>Healthy soil is the foundation of every harvest.</p>",
            "cover_image_url": "/images/articles/sustainable-farming.jpg",
            "author": "Wallace Mukoka",
            "status": "published",
            "category": "agriculture",
            "created_at": "2023-05-15T08:00:00Z",
            "published_date": "2023-05-15"
        }),
        json!({
            "id": RecordId::from_u128(0xa2),
            "title": "Water Conservation Techniques for Small Farms",
            "slug": "water-conservation-techniques-for-small-farms",
            "excerpt": "Simple but effective water conservation techniques that small-scale farmers can implement.",
            "content": "<p>Every drop counts in a dry season.</p>",
            "cover_image_url": "/images/articles/water-conservation.jpg",
            "author": "Wallace Mukoka",
            "status": "published",
            "category": "agriculture",
            "created_at": "2023-06-22T08:00:00Z",
            "published_date": "2023-06-22"
        }),
        json!({
            "id": RecordId::from_u128(0xa3),
            "title": "Building Resilience and Mental Strength",
            "slug": "building-resilience-and-mental-strength",
            "excerpt": "How setbacks on the farm and in business become the raw material of resilience.",
            "content": "<p>Resilience is built one season at a time.</p>",
            "cover_image_url": null,
            "author": "Wallace Mukoka",
            "status": "draft",
            "category": "motivation",
            "created_at": "2023-07-10T08:00:00Z",
            "published_date": "2023-07-10"
        }),
    ]
    .into_iter()
    .filter_map(into_row)
    .collect()
}

fn sample_books() -> Vec<Row> {
    [
        json!({
            "id": RecordId::from_u128(0xb1),
            "title": "Modern Agricultural Practices",
            "slug": "modern-agricultural-practices",
            "description": "A comprehensive guide to modern and sustainable agricultural practices for the African continent.",
            "author": "Wallace Mukoka",
            "cover_image_url": "/images/books/modern-agriculture.jpg",
            "pdf_url": "modern-agriculture.pdf",
            "isbn": "978-1234567890",
            "price": 24.99,
            "published_date": "2022-03-15",
            "created_at": "2022-03-15T08:00:00Z"
        }),
        json!({
            "id": RecordId::from_u128(0xb2),
            "title": "Water Management for Arid Regions",
            "slug": "water-management-for-arid-regions",
            "description": "Expert strategies for managing water resources in arid and semi-arid regions.",
            "author": "Wallace Mukoka",
            "cover_image_url": "/images/books/water-management.jpg",
            "pdf_url": "water-management.pdf",
            "isbn": "978-0987654321",
            "price": 19.5,
            "published_date": "2022-09-10",
            "created_at": "2022-09-10T08:00:00Z"
        }),
        json!({
            "id": RecordId::from_u128(0xb3),
            "title": "Organic Farming Handbook",
            "slug": "organic-farming-handbook",
            "description": "A practical guide to implementing organic farming methods in various climates.",
            "author": "Wallace Mukoka",
            "cover_image_url": "/images/books/organic-farming.jpg",
            "pdf_url": "organic-farming.pdf",
            "isbn": "978-5678901234",
            "price": null,
            "published_date": "2023-01-22",
            "created_at": "2023-01-22T08:00:00Z"
        }),
    ]
    .into_iter()
    .filter_map(into_row)
    .collect()
}

fn into_row(value: Value) -> Option<Row> {
    match value {
        Value::Object(row) => Some(row),
        _ => None,
    }
}
