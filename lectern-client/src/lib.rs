//! Data-access facade for the Lectern site.
//!
//! [`Backend`] composes the session, record and blob stores behind named
//! operations. Every fallible operation returns a [`Response`]: callers
//! check `error` before touching `data`, and nothing fails across this
//! boundary any other way. Failures are logged with the operation name.
//!
//! ```no_run
//! use lectern_client::{Backend, EmulatorConfig};
//!
//! # async fn demo() {
//! lectern_client::logging::init();
//! let backend = Backend::new(&EmulatorConfig::from_env());
//! let articles = backend.get_published_articles().await;
//! if let Some(err) = articles.error() {
//!     eprintln!("{err}");
//! }
//! # }
//! ```

mod backend;
mod config;
pub mod logging;

pub use backend::Backend;
pub use config::{EmulatorConfig, PUBLIC_URL_ENV, SESSION_PATH_ENV};

pub use lectern_auth::{AuthData, Role, Session, SessionEvent, SignedOut, Subscription, User};
pub use lectern_blobstore::{ARTICLE_IMAGES_BUCKET, BOOKS_BUCKET, BlobMetadata, UploadReceipt};
pub use lectern_model::{
    Article, ArticleCategory, ArticlePatch, ArticleStatus, Book, BookPatch, Message, NewArticle,
    NewBook, NewMessage,
};
pub use lectern_storage::Deleted;
pub use lectern_types::{BackendError, ErrorCode, LatencyProfile, RecordId, Response};
