use chrono::{NaiveDate, TimeZone, Utc};
use lectern_model::{
    Article, ArticleCategory, ArticlePatch, ArticleStatus, Book, NewArticle, Record, Table,
    from_row, to_row,
};
use lectern_types::{ErrorCode, RecordId};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::str::FromStr;

fn article_row() -> serde_json::Value {
    json!({
        "id": RecordId::from_u128(1).to_string(),
        "title": "Soil Health",
        "excerpt": null,
        "content": "<p>Rotate crops.</p>",
        "author": "Wallace Mukoka",
        "status": "published",
        "category": "agriculture",
        "created_at": "2023-05-15T08:30:00Z",
        "published_date": "2023-05-15"
    })
}

// ── Table catalogue ──────────────────────────────────────────────

#[test]
fn table_names_match_hosted_backend() {
    assert_eq!(Table::Articles.name(), "articles");
    assert_eq!(Table::Books.to_string(), "books");
    assert_eq!(Table::from_str("messages").unwrap(), Table::Messages);
}

#[test]
fn unknown_table_is_rejected() {
    let err = Table::from_str("contacts").unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);
}

#[test]
fn records_know_their_table() {
    assert_eq!(Article::TABLE, Table::Articles);
    assert_eq!(Book::TABLE, Table::Books);
    assert_eq!(lectern_model::Message::TABLE, Table::Messages);
}

// ── Closed enumerations ──────────────────────────────────────────

#[test]
fn status_parses_only_known_values() {
    assert_eq!(ArticleStatus::from_str("draft").unwrap(), ArticleStatus::Draft);
    assert_eq!(
        ArticleStatus::from_str("published").unwrap(),
        ArticleStatus::Published
    );
    assert!(ArticleStatus::from_str("archived").is_err());
    assert!(ArticleStatus::from_str("Published").is_err());
}

#[test]
fn category_parses_only_known_values() {
    assert_eq!(
        ArticleCategory::from_str("motivation").unwrap(),
        ArticleCategory::Motivation
    );
    let err = ArticleCategory::from_str("Farming").unwrap_err();
    assert!(err.to_string().contains("Farming"));
}

#[test]
fn row_with_unknown_enum_value_fails_to_decode() {
    let mut row = article_row();
    row["status"] = json!("archived");
    let row = row.as_object().unwrap().clone();
    let err = from_row::<Article>(row).unwrap_err();
    assert_eq!(err.code(), ErrorCode::TransportError);
    assert!(err.to_string().contains("articles"));
}

// ── Row conversion ───────────────────────────────────────────────

#[test]
fn decodes_article_row() {
    let row = article_row().as_object().unwrap().clone();
    let article: Article = from_row(row).unwrap();
    assert_eq!(article.id(), RecordId::from_u128(1));
    assert!(article.is_published());
    assert_eq!(article.excerpt, None);
    assert_eq!(article.cover_image_url, None);
    assert_eq!(
        article.created_at,
        Utc.with_ymd_and_hms(2023, 5, 15, 8, 30, 0).unwrap()
    );
}

#[test]
fn new_article_omits_unset_optionals() {
    let row = to_row(&NewArticle::new("A", ArticleCategory::Agriculture)).unwrap();
    assert_eq!(row["title"], "A");
    assert_eq!(row["status"], "draft");
    assert_eq!(row["category"], "agriculture");
    assert!(!row.contains_key("excerpt"));
    assert!(!row.contains_key("published_date"));
}

#[test]
fn patch_serializes_only_present_fields() {
    let patch = ArticlePatch {
        status: Some(ArticleStatus::Published),
        ..Default::default()
    };
    let row = to_row(&patch).unwrap();
    assert_eq!(serde_json::Value::Object(row), json!({"status": "published"}));
}

#[test]
fn to_row_rejects_non_objects() {
    let err = to_row(&vec![1, 2, 3]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);
}

// ── Defaults ─────────────────────────────────────────────────────

#[test]
fn new_article_defaults_fill_slug_and_date() {
    let today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let article = NewArticle::new("Building Resilience & Mental Strength", ArticleCategory::Motivation)
        .with_defaults(today);
    assert_eq!(article.slug.as_deref(), Some("building-resilience--mental-strength"));
    assert_eq!(article.published_date, Some(today));
}

#[test]
fn new_article_defaults_keep_explicit_values() {
    let today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let earlier = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let article = NewArticle {
        slug: Some("custom".into()),
        published_date: Some(earlier),
        ..NewArticle::new("Title", ArticleCategory::Agriculture)
    }
    .with_defaults(today);
    assert_eq!(article.slug.as_deref(), Some("custom"));
    assert_eq!(article.published_date, Some(earlier));
}
