//! Typed records for Lectern.
//!
//! The record store keeps untyped JSON rows; this crate defines the typed
//! boundary the facade converts through:
//! - [`Article`], [`Book`], [`Message`]: stored records with store-assigned ids
//! - `New*` insert payloads and `*Patch` partial updates
//! - [`ArticleStatus`] and [`ArticleCategory`]: closed enumerations
//! - [`Validate`]: boundary checks applied before anything reaches a store
//! - [`Table`]: the table catalogue
//! - [`format`]: display helpers (prices, dates, slugs)

mod article;
mod book;
pub mod format;
mod message;
mod record;
mod table;
mod validate;

pub use article::{Article, ArticleCategory, ArticlePatch, ArticleStatus, NewArticle};
pub use book::{Book, BookPatch, NewBook};
pub use message::{Message, NewMessage};
pub use record::{Record, Row, from_row, to_row};
pub use table::Table;
pub use validate::{Validate, is_valid_email};
