// src/infrastructure/repositories/postgres_comment.rs
use super::{listing::begin_read_snapshot, map_sqlx};
use crate::domain::article::ArticleId;
use crate::domain::comment::{
    Comment, CommentContent, CommentFilter, CommentId, CommentModerationRepository,
    CommentRepository, CommentStatus, CommentView, CounterReconciliation, ModerationAction,
    ModerationOutcome, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{PageRequest, Paged};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str =
    "id, user_id, article_id, article_title, username, content, status, created_at, updated_at";

/// Live article title and username win over the snapshots stored on the row.
const VIEW_COLUMNS: &str = "c.id, c.user_id, c.article_id, \
     COALESCE(a.title, c.article_title) AS article_title, \
     COALESCE(u.username, c.username) AS username, \
     c.content, c.status, c.created_at";

const VIEW_JOINS: &str = " LEFT JOIN articles a ON a.id = c.article_id AND a.deleted_at IS NULL \
     LEFT JOIN users u ON u.id = c.user_id AND u.deleted_at IS NULL";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &CommentFilter) {
        builder.push(" WHERE c.deleted_at IS NULL");

        if let Some(article_id) = filter.article_id {
            builder.push(" AND c.article_id = ");
            builder.push_bind(i64::from(article_id));
        }

        if let Some(status) = filter.status {
            builder.push(" AND c.status = ");
            builder.push_bind(status.code());
        }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    user_id: i64,
    article_id: i64,
    article_title: String,
    username: String,
    content: String,
    status: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            article_id: ArticleId::new(row.article_id)?,
            article_title: row.article_title,
            username: row.username,
            content: CommentContent::new(row.content)?,
            status: CommentStatus::try_from(row.status)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CommentViewRow {
    id: i64,
    user_id: i64,
    article_id: i64,
    article_title: String,
    username: String,
    content: String,
    status: i16,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentViewRow> for CommentView {
    type Error = DomainError;

    fn try_from(row: CommentViewRow) -> Result<Self, Self::Error> {
        Ok(CommentView {
            id: CommentId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            article_id: ArticleId::new(row.article_id)?,
            article_title: row.article_title,
            username: row.username,
            content: CommentContent::new(row.content)?,
            status: CommentStatus::try_from(row.status)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            user_id,
            article_id,
            article_title,
            username,
            content,
            status,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO comments (user_id, article_id, article_title, username, content, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
             RETURNING {COLUMNS}"
        ))
        .bind(i64::from(user_id))
        .bind(i64::from(article_id))
        .bind(article_title)
        .bind(username)
        .bind(content.into_inner())
        .bind(status.code())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "SELECT {COLUMNS} FROM comments WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: &CommentFilter,
        page: PageRequest,
    ) -> DomainResult<Paged<CommentView>> {
        let mut tx = begin_read_snapshot(&self.pool).await.map_err(map_sqlx)?;

        let mut count: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM comments c");
        Self::push_filters(&mut count, filter);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let mut select: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        select.push(VIEW_COLUMNS);
        select.push(" FROM comments c");
        select.push(VIEW_JOINS);
        Self::push_filters(&mut select, filter);
        select.push(" ORDER BY c.created_at DESC, c.id DESC LIMIT ");
        select.push_bind(page.limit());
        select.push(" OFFSET ");
        select.push_bind(page.offset());

        let rows = select
            .build_query_as::<CommentViewRow>()
            .fetch_all(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(CommentView::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Paged::new(items, u64::try_from(total).unwrap_or_default()))
    }

    async fn count_approved(&self, article_id: ArticleId) -> DomainResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM comments
             WHERE article_id = $1 AND status = $2 AND deleted_at IS NULL",
        )
        .bind(i64::from(article_id))
        .bind(CommentStatus::Approved.code())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}

#[async_trait]
impl CommentModerationRepository for PostgresCommentRepository {
    async fn moderate(
        &self,
        id: CommentId,
        action: ModerationAction,
        at: DateTime<Utc>,
    ) -> DomainResult<ModerationOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // Row lock serializes concurrent moderation of the same comment; the
        // second caller plans against the first caller's committed status.
        let current = sqlx::query_as::<_, (i64, i16)>(
            "SELECT article_id, status FROM comments
             WHERE id = $1 AND deleted_at IS NULL
             FOR UPDATE",
        )
        .bind(i64::from(id))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let Some((article_id, status)) = current else {
            return Err(DomainError::NotFound("comment not found".into()));
        };
        let article_id = ArticleId::new(article_id)?;
        let plan = action.plan(CommentStatus::try_from(status)?);

        if plan.changes_status() || plan.tombstone {
            let result = sqlx::query(
                "UPDATE comments SET status = $2, updated_at = $3, deleted_at = $4
                 WHERE id = $1 AND deleted_at IS NULL",
            )
            .bind(i64::from(id))
            .bind(plan.next_status.code())
            .bind(at)
            .bind(plan.tombstone.then_some(at))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

            if result.rows_affected() != 1 {
                return Err(DomainError::Persistence(format!(
                    "comment {id} changed underneath moderation"
                )));
            }
        }

        let comment_count = if plan.counter_delta != 0 {
            sqlx::query_scalar::<_, i64>(
                "UPDATE articles SET comment_count = comment_count + $2
                 WHERE id = $1
                 RETURNING comment_count",
            )
            .bind(i64::from(article_id))
            .bind(plan.counter_delta)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
        } else {
            sqlx::query_scalar::<_, i64>("SELECT comment_count FROM articles WHERE id = $1")
                .bind(i64::from(article_id))
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_sqlx)?
        };

        // Returning early drops the transaction, which rolls the status write back.
        let comment_count = comment_count.ok_or_else(|| {
            DomainError::Persistence(format!(
                "article {article_id} missing while moderating comment {id}"
            ))
        })?;

        tx.commit().await.map_err(map_sqlx)?;

        Ok(ModerationOutcome {
            comment_id: id,
            article_id,
            plan,
            comment_count,
        })
    }

    async fn recount(&self, article_id: ArticleId) -> DomainResult<CounterReconciliation> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // Locking the article first makes in-flight moderation either finish
        // before the count or apply its delta after the rewrite.
        let recorded = sqlx::query_scalar::<_, i64>(
            "SELECT comment_count FROM articles WHERE id = $1 FOR UPDATE",
        )
        .bind(i64::from(article_id))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        let actual = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM comments
             WHERE article_id = $1 AND status = $2 AND deleted_at IS NULL",
        )
        .bind(i64::from(article_id))
        .bind(CommentStatus::Approved.code())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if recorded != actual {
            sqlx::query("UPDATE articles SET comment_count = $2 WHERE id = $1")
                .bind(i64::from(article_id))
                .bind(actual)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;

        Ok(CounterReconciliation {
            article_id,
            recorded,
            actual,
        })
    }

    async fn article_ids(&self) -> DomainResult<Vec<ArticleId>> {
        let ids = sqlx::query_scalar::<_, i64>("SELECT id FROM articles ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        ids.into_iter().map(ArticleId::new).collect()
    }
}
