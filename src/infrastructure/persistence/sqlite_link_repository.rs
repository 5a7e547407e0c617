//! SQLite implementation of link repository.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::entities::{Link, LinkTotals, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_code;

const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

const LINK_COLUMNS: &str = "id, original_url, short_code, created_at, clicks, title";

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
    clicks: i64,
    title: Option<String>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Self {
            id: row.id,
            original_url: row.original_url,
            short_code: row.short_code,
            created_at: row.created_at,
            clicks: row.clicks,
            title: row.title,
        }
    }
}

/// SQLite repository for link storage and click counting.
///
/// Every call is bounded by a timeout; an expired call surfaces as
/// [`AppError::StoreUnavailable`].
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
    timeout: Duration,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            pool,
            timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Overrides the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn bounded<T, F>(&self, query: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        Ok(tokio::time::timeout(self.timeout, query).await??)
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let sql = format!(
            "INSERT INTO links (original_url, short_code, created_at, clicks) \
             VALUES (?, ?, ?, 0) RETURNING {LINK_COLUMNS}"
        );

        let query = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(&new_link.original_url)
            .bind(&new_link.short_code)
            .bind(new_link.created_at)
            .fetch_one(self.pool.as_ref());

        match tokio::time::timeout(self.timeout, query).await? {
            Ok(row) => Ok(row.into()),
            Err(e) if is_unique_violation_on_code(&e) => Err(AppError::CodeTaken {
                code: new_link.short_code.clone(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM links WHERE short_code = ?");

        let row = self
            .bounded(
                sqlx::query_as::<_, LinkRow>(&sql)
                    .bind(code)
                    .fetch_optional(self.pool.as_ref()),
            )
            .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        // `=` on TEXT uses BINARY collation: byte-identical matches only.
        let sql = format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE original_url = ? ORDER BY id LIMIT 1"
        );

        let row = self
            .bounded(
                sqlx::query_as::<_, LinkRow>(&sql)
                    .bind(original_url)
                    .fetch_optional(self.pool.as_ref()),
            )
            .await?;

        Ok(row.map(Link::from))
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<Link>, AppError> {
        let sql = format!(
            "UPDATE links SET clicks = clicks + 1 WHERE short_code = ? RETURNING {LINK_COLUMNS}"
        );

        let row = self
            .bounded(
                sqlx::query_as::<_, LinkRow>(&sql)
                    .bind(code)
                    .fetch_optional(self.pool.as_ref()),
            )
            .await?;

        Ok(row.map(Link::from))
    }

    async fn totals(&self) -> Result<LinkTotals, AppError> {
        let (total_urls, total_clicks) = self
            .bounded(
                sqlx::query_as::<_, (i64, i64)>(
                    "SELECT COUNT(*), COALESCE(SUM(clicks), 0) FROM links",
                )
                .fetch_one(self.pool.as_ref()),
            )
            .await?;

        Ok(LinkTotals {
            total_urls,
            total_clicks,
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.bounded(sqlx::query("SELECT 1").execute(self.pool.as_ref()))
            .await?;
        Ok(())
    }
}
