// src/infrastructure/repositories/postgres_article.rs
use super::{
    listing::{begin_read_snapshot, like_prefix},
    map_sqlx,
};
use crate::domain::article::{
    Article, ArticleDescription, ArticleFilter, ArticleId, ArticleImage, ArticlePatch,
    ArticleReadRepository, ArticleTitle, ArticleView, ArticleWriteRepository, NewArticle,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{PageRequest, Paged};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

/// Columns of an article joined with its live category. Expects the article
/// relation aliased `a` and categories aliased `c`.
const VIEW_COLUMNS: &str = "a.id, a.title, a.category_id, a.description, a.content, a.img, \
     a.comment_count, a.read_count, a.created_at, a.updated_at, c.name AS category_name";

const CATEGORY_JOIN: &str =
    " LEFT JOIN categories c ON c.id = a.category_id AND c.deleted_at IS NULL";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    category_id: i64,
    description: String,
    content: String,
    img: String,
    comment_count: i64,
    read_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    category_name: Option<String>,
}

impl TryFrom<ArticleRow> for ArticleView {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(ArticleView {
            article: Article {
                id: ArticleId::new(row.id)?,
                title: ArticleTitle::new(row.title)?,
                category_id: CategoryId::new(row.category_id)?,
                description: ArticleDescription::new(row.description)?,
                content: row.content,
                img: ArticleImage::new(row.img)?,
                comment_count: row.comment_count,
                read_count: row.read_count,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            category_name: row.category_name,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleView> {
        let NewArticle {
            title,
            category_id,
            description,
            content,
            img,
            created_at,
        } = article;

        let sql = format!(
            "WITH inserted AS (
                INSERT INTO articles (title, category_id, description, content, img, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $6)
                RETURNING *
             )
             SELECT {VIEW_COLUMNS} FROM inserted a{CATEGORY_JOIN}"
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(i64::from(category_id))
            .bind(description.as_str())
            .bind(content)
            .bind(img.as_str())
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        ArticleView::try_from(row)
    }

    async fn update(&self, patch: ArticlePatch) -> DomainResult<ArticleView> {
        let ArticlePatch {
            id,
            title,
            category_id,
            description,
            content,
            img,
            updated_at,
        } = patch;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("WITH updated AS (UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            let title_str: String = title.into();
            builder.push(", title = ");
            builder.push_bind(title_str);
        }

        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(i64::from(category_id));
        }

        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description.into_inner());
        }

        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content);
        }

        if let Some(img) = img {
            builder.push(", img = ");
            builder.push_bind(img.into_inner());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND deleted_at IS NULL RETURNING *) SELECT ");
        builder.push(VIEW_COLUMNS);
        builder.push(" FROM updated a");
        builder.push(CATEGORY_JOIN);

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        ArticleView::try_from(row)
    }

    async fn soft_delete(&self, id: ArticleId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE articles SET deleted_at = $2, updated_at = $2
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(i64::from(id))
        .bind(deleted_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

impl PostgresArticleReadRepository {
    /// Shared by the page query and the count query so both see the same rows.
    fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleFilter) {
        builder.push(" WHERE a.deleted_at IS NULL");

        if let Some(prefix) = filter.title_prefix() {
            builder.push(" AND a.title LIKE ");
            builder.push_bind(like_prefix(prefix));
            builder.push(" ESCAPE '\\'");
        }

        if let Some(category_id) = filter.category_id {
            builder.push(" AND a.category_id = ");
            builder.push_bind(i64::from(category_id));
        }
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleView>> {
        let sql = format!(
            "SELECT {VIEW_COLUMNS} FROM articles a{CATEGORY_JOIN}
             WHERE a.id = $1 AND a.deleted_at IS NULL"
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ArticleView::try_from).transpose()
    }

    async fn find_and_record_read(&self, id: ArticleId) -> DomainResult<Option<ArticleView>> {
        let sql = format!(
            "WITH bumped AS (
                UPDATE articles SET read_count = read_count + 1
                WHERE id = $1 AND deleted_at IS NULL
                RETURNING *
             )
             SELECT {VIEW_COLUMNS} FROM bumped a{CATEGORY_JOIN}"
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ArticleView::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<Paged<ArticleView>> {
        let mut tx = begin_read_snapshot(&self.pool).await.map_err(map_sqlx)?;

        let mut count: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles a");
        Self::push_filters(&mut count, filter);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let mut select: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        select.push(VIEW_COLUMNS);
        select.push(" FROM articles a");
        select.push(CATEGORY_JOIN);
        Self::push_filters(&mut select, filter);
        select.push(" ORDER BY a.created_at DESC, a.id DESC LIMIT ");
        select.push_bind(page.limit());
        select.push(" OFFSET ");
        select.push_bind(page.offset());

        let rows = select
            .build_query_as::<ArticleRow>()
            .fetch_all(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(ArticleView::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Paged::new(items, u64::try_from(total).unwrap_or_default()))
    }
}
