use chrono::NaiveDate;
use lectern_auth::{
    AuthData, FilePersistence, MemoryPersistence, Session, SessionEvent, SessionPersistence,
    SessionStore, SignedOut, Subscription, User,
};
use lectern_blobstore::{ARTICLE_IMAGES_BUCKET, BOOKS_BUCKET, BlobStore, UploadReceipt, object_key};
use lectern_model::{
    Article, ArticlePatch, ArticleStatus, Book, BookPatch, Message, NewArticle, NewBook,
    NewMessage, Record, Validate, from_row, to_row,
};
use lectern_storage::{Deleted, Direction, RecordStore, SeedData};
use lectern_types::{
    BackendResult, RecordId, Response, SharedClock, SharedLatency, SimulatedLatency, SystemClock,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::EmulatorConfig;

/// The data-access facade over the three emulated stores.
///
/// Cheap to clone; clones share the same stores.
#[derive(Clone)]
pub struct Backend {
    sessions: Arc<SessionStore>,
    records: Arc<RecordStore>,
    blobs: Arc<BlobStore>,
    clock: SharedClock,
}

impl Backend {
    pub fn new(config: &EmulatorConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Builds every store from `config`, stamping times from `clock`.
    pub fn with_clock(config: &EmulatorConfig, clock: SharedClock) -> Self {
        let latency: SharedLatency = Arc::new(SimulatedLatency::new(config.latency.clone()));
        let persistence: Arc<dyn SessionPersistence> = match &config.session_path {
            Some(path) => Arc::new(FilePersistence::new(path.clone())),
            None => Arc::new(MemoryPersistence::new()),
        };
        let seed = if config.seed_sample_data {
            SeedData::sample()
        } else {
            SeedData::empty()
        };

        info!(
            public_base_url = %config.public_base_url,
            session_path = ?config.session_path,
            seeded = config.seed_sample_data,
            "Backend emulator ready"
        );

        Self::from_parts(
            Arc::new(SessionStore::new(persistence, latency.clone(), clock.clone())),
            Arc::new(RecordStore::new(seed, latency.clone(), clock.clone())),
            Arc::new(BlobStore::new(
                config.public_base_url.clone(),
                latency,
                clock.clone(),
            )),
            clock,
        )
    }

    /// Composes already-built stores.
    pub fn from_parts(
        sessions: Arc<SessionStore>,
        records: Arc<RecordStore>,
        blobs: Arc<BlobStore>,
        clock: SharedClock,
    ) -> Self {
        Self {
            sessions,
            records,
            blobs,
            clock,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn blobs(&self) -> &BlobStore {
        &self.blobs
    }

    // ── Auth ─────────────────────────────────────────────────────

    pub async fn sign_in(&self, email: &str, password: &str) -> Response<AuthData> {
        respond("sign_in", self.sessions.sign_in(email, password).await)
    }

    pub async fn sign_out(&self) -> Response<SignedOut> {
        respond("sign_out", self.sessions.sign_out().await)
    }

    pub fn get_session(&self) -> Option<Session> {
        self.sessions.get_session()
    }

    pub fn current_user(&self) -> Option<User> {
        self.sessions.current_user()
    }

    pub fn on_session_change<F>(&self, callback: F) -> Subscription
    where
        F: Fn(SessionEvent, Option<&Session>) + Send + Sync + 'static,
    {
        self.sessions.on_session_change(callback)
    }

    // ── Articles ─────────────────────────────────────────────────

    /// Every article, newest first.
    pub async fn get_articles(&self) -> Response<Vec<Article>> {
        respond("get_articles", self.list().await)
    }

    pub async fn get_article(&self, id: RecordId) -> Response<Article> {
        respond("get_article", self.fetch(id).await)
    }

    /// Published articles, newest first.
    pub async fn get_published_articles(&self) -> Response<Vec<Article>> {
        respond("get_published_articles", self.published(None).await)
    }

    /// Up to `limit` other published articles, newest first.
    pub async fn get_related_articles(&self, id: RecordId, limit: usize) -> Response<Vec<Article>> {
        let result = self
            .published(Some(limit.saturating_add(1)))
            .await
            .map(|articles| others(articles, id, limit));
        respond("get_related_articles", result)
    }

    /// Validates and inserts `article`, filling the slug and publication
    /// date when absent.
    pub async fn create_article(&self, article: NewArticle) -> Response<Article> {
        let article = article.with_defaults(self.today());
        respond("create_article", self.insert(&article).await)
    }

    pub async fn update_article(&self, id: RecordId, patch: ArticlePatch) -> Response<Article> {
        respond("update_article", self.update(id, &patch).await)
    }

    pub async fn delete_article(&self, id: RecordId) -> Response<Deleted> {
        respond("delete_article", self.delete::<Article>(id).await)
    }

    // ── Books ────────────────────────────────────────────────────

    /// Every book, newest first.
    pub async fn get_books(&self) -> Response<Vec<Book>> {
        respond("get_books", self.list().await)
    }

    pub async fn get_book(&self, id: RecordId) -> Response<Book> {
        respond("get_book", self.fetch(id).await)
    }

    /// Up to `limit` other books, newest first.
    pub async fn get_related_books(&self, id: RecordId, limit: usize) -> Response<Vec<Book>> {
        let result = self
            .newest::<Book>(limit.saturating_add(1))
            .await
            .map(|books| others(books, id, limit));
        respond("get_related_books", result)
    }

    pub async fn create_book(&self, book: NewBook) -> Response<Book> {
        respond("create_book", self.insert(&book.with_defaults()).await)
    }

    pub async fn update_book(&self, id: RecordId, patch: BookPatch) -> Response<Book> {
        respond("update_book", self.update(id, &patch).await)
    }

    pub async fn delete_book(&self, id: RecordId) -> Response<Deleted> {
        respond("delete_book", self.delete::<Book>(id).await)
    }

    // ── Messages ─────────────────────────────────────────────────

    pub async fn submit_message(&self, message: NewMessage) -> Response<Message> {
        respond("submit_message", self.insert(&message).await)
    }

    /// Every contact message, newest first.
    pub async fn get_messages(&self) -> Response<Vec<Message>> {
        respond("get_messages", self.list().await)
    }

    // ── Files ────────────────────────────────────────────────────

    /// Stores an article image under a generated `{unix_millis}.{ext}` key.
    pub async fn upload_article_image(
        &self,
        file_name: &str,
        bytes: impl Into<Vec<u8>>,
    ) -> Response<UploadReceipt> {
        let key = object_key(file_name, self.clock.as_ref());
        respond(
            "upload_article_image",
            self.blobs.upload(ARTICLE_IMAGES_BUCKET, &key, bytes).await,
        )
    }

    /// Stores a book file under a generated `{unix_millis}.{ext}` key.
    pub async fn upload_book_file(
        &self,
        file_name: &str,
        bytes: impl Into<Vec<u8>>,
    ) -> Response<UploadReceipt> {
        let key = object_key(file_name, self.clock.as_ref());
        respond(
            "upload_book_file",
            self.blobs.upload(BOOKS_BUCKET, &key, bytes).await,
        )
    }

    /// Public URL of an article image, or `None` for a missing path.
    pub fn get_image_url(&self, path: Option<&str>) -> Option<String> {
        self.public_url(ARTICLE_IMAGES_BUCKET, path)
    }

    /// Public URL of a book file, or `None` for a missing path.
    pub fn get_book_url(&self, path: Option<&str>) -> Option<String> {
        self.public_url(BOOKS_BUCKET, path)
    }

    fn public_url(&self, bucket: &str, path: Option<&str>) -> Option<String> {
        path.filter(|p| !p.is_empty())
            .map(|p| self.blobs.public_url(bucket, p))
    }

    // ── Typed record plumbing ────────────────────────────────────

    fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }

    async fn list<R: Record>(&self) -> BackendResult<Vec<R>> {
        self.records
            .select(R::TABLE)
            .order("created_at", Direction::Descending)
            .await?
            .into_iter()
            .map(from_row)
            .collect()
    }

    async fn newest<R: Record>(&self, limit: usize) -> BackendResult<Vec<R>> {
        self.records
            .select(R::TABLE)
            .order("created_at", Direction::Descending)
            .limit(limit)
            .await?
            .into_iter()
            .map(from_row)
            .collect()
    }

    async fn published(&self, limit: Option<usize>) -> BackendResult<Vec<Article>> {
        let mut select = self
            .records
            .select(Article::TABLE)
            .eq("status", ArticleStatus::Published.as_str())
            .order("created_at", Direction::Descending);
        if let Some(limit) = limit {
            select = select.limit(limit);
        }
        select.await?.into_iter().map(from_row).collect()
    }

    async fn fetch<R: Record>(&self, id: RecordId) -> BackendResult<R> {
        let row = self.records.select(R::TABLE).eq("id", id).single().await?;
        from_row(row)
    }

    async fn insert<R, P>(&self, payload: &P) -> BackendResult<R>
    where
        R: Record,
        P: Serialize + Validate + Sync,
    {
        payload.validate()?;
        let row = self.records.insert(R::TABLE, to_row(payload)?).await?;
        from_row(row)
    }

    async fn update<R, P>(&self, id: RecordId, patch: &P) -> BackendResult<R>
    where
        R: Record,
        P: Serialize + Validate + Sync,
    {
        patch.validate()?;
        let row = self.records.update(R::TABLE, id, to_row(patch)?).await?;
        from_row(row)
    }

    async fn delete<R: Record>(&self, id: RecordId) -> BackendResult<Deleted> {
        self.records.delete(R::TABLE, id).await
    }
}

/// Drops the record with `id`, keeping at most `limit` of the rest.
fn others<R: Record>(records: Vec<R>, id: RecordId, limit: usize) -> Vec<R> {
    records
        .into_iter()
        .filter(|record| record.id() != id)
        .take(limit)
        .collect()
}

/// Wraps a store result in the response envelope, logging failures.
fn respond<T>(op: &'static str, result: BackendResult<T>) -> Response<T> {
    if let Err(e) = &result {
        error!(op, code = ?e.code(), "Backend call failed: {}", e);
    }
    Response::from(result)
}
