// tests/support/mocks/store.rs
//! Process-local store implementing every repository port.
//!
//! All tables live behind one mutex, so each trait call (moderation included)
//! observes and mutates a consistent state. Soft deletes keep the rows around
//! with a tombstone, matching the Postgres schema.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use quill_core::domain::article::{
    Article, ArticleFilter, ArticleId, ArticlePatch, ArticleReadRepository, ArticleView,
    ArticleWriteRepository, NewArticle,
};
use quill_core::domain::category::{
    Category, CategoryId, CategoryName, CategoryPatch, CategoryRepository, NewCategory,
};
use quill_core::domain::comment::{
    Comment, CommentFilter, CommentId, CommentModerationRepository, CommentRepository,
    CommentStatus, CommentView, CounterReconciliation, ModerationAction, ModerationOutcome,
    NewComment,
};
use quill_core::domain::errors::{DomainError, DomainResult};
use quill_core::domain::pagination::{PageRequest, Paged};
use quill_core::domain::profile::{
    Profile, ProfileFields, ProfileId, ProfilePatch, ProfileRepository, SITE_PROFILE_ID,
};
use quill_core::domain::user::{
    NewUser, User, UserFilter, UserId, UserPatch, UserRepository, Username,
};

#[derive(Debug, Clone)]
struct Stored<T> {
    value: T,
    deleted_at: Option<DateTime<Utc>>,
}

impl<T> Stored<T> {
    fn live(value: T) -> Self {
        Self {
            value,
            deleted_at: None,
        }
    }

    fn is_live(&self) -> bool {
        self.deleted_at.is_none()
    }
}

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i64, Stored<Category>>,
    articles: BTreeMap<i64, Stored<Article>>,
    comments: BTreeMap<i64, Stored<Comment>>,
    users: BTreeMap<i64, Stored<User>>,
    profiles: BTreeMap<i64, Profile>,
    last_id: i64,
    fail_next_counter_write: bool,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn article_view(&self, article: &Article) -> ArticleView {
        let category_name = self
            .categories
            .get(&i64::from(article.category_id))
            .filter(|row| row.is_live())
            .map(|row| row.value.name.to_string());
        ArticleView {
            article: article.clone(),
            category_name,
        }
    }

    fn comment_view(&self, comment: &Comment) -> CommentView {
        let article_title = self
            .articles
            .get(&i64::from(comment.article_id))
            .filter(|row| row.is_live())
            .map_or_else(
                || comment.article_title.clone(),
                |row| row.value.title.to_string(),
            );
        let username = self
            .users
            .get(&i64::from(comment.user_id))
            .filter(|row| row.is_live())
            .map_or_else(
                || comment.username.clone(),
                |row| row.value.username.to_string(),
            );
        CommentView {
            id: comment.id,
            user_id: comment.user_id,
            article_id: comment.article_id,
            article_title,
            username,
            content: comment.content.clone(),
            status: comment.status,
            created_at: comment.created_at,
        }
    }

    fn live_approved(&self, article_id: ArticleId) -> i64 {
        let count = self
            .comments
            .values()
            .filter(|row| {
                row.is_live()
                    && row.value.article_id == article_id
                    && row.value.status == CommentStatus::Approved
            })
            .count();
        i64::try_from(count).unwrap_or(i64::MAX)
    }
}

/// Newest first, ties broken by the larger id.
fn page_of<T>(
    mut rows: Vec<T>,
    page: PageRequest,
    key: impl Fn(&T) -> (DateTime<Utc>, i64),
) -> Paged<T> {
    rows.sort_by_key(|row| Reverse(key(row)));
    let total = rows.len() as u64;
    let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
    let items = rows.into_iter().skip(offset).take(limit).collect();
    Paged::new(items, total)
}

fn starts_with(value: &str, prefix: Option<&str>) -> bool {
    prefix.is_none_or(|prefix| value.starts_with(prefix))
}

pub struct InMemoryBlogStore {
    tables: Mutex<Tables>,
}

impl Default for InMemoryBlogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBlogStore {
    /// Empty store with the site profile row seeded, like the initial migration.
    pub fn new() -> Self {
        let mut tables = Tables::default();
        tables.profiles.insert(
            SITE_PROFILE_ID,
            Profile {
                id: ProfileId(SITE_PROFILE_ID),
                fields: ProfileFields::default(),
                updated_at: Utc::now(),
            },
        );
        Self {
            tables: Mutex::new(tables),
        }
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| DomainError::Persistence("in-memory store poisoned".into()))
    }

    /// Makes the next counter adjustment fail, so the surrounding moderation
    /// call has to roll back.
    pub fn fail_next_counter_write(&self) -> DomainResult<()> {
        self.lock()?.fail_next_counter_write = true;
        Ok(())
    }

    /// Writes `comment_count` directly, bypassing moderation. Simulates drift.
    pub fn overwrite_comment_count(&self, id: ArticleId, value: i64) -> DomainResult<()> {
        let mut tables = self.lock()?;
        let row = tables
            .articles
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        row.value.comment_count = value;
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryBlogStore {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut tables = self.lock()?;
        let id = tables.next_id();
        let created = Category {
            id: CategoryId(id),
            name: category.name,
            created_at: category.created_at,
            updated_at: category.created_at,
        };
        tables.categories.insert(id, Stored::live(created.clone()));
        Ok(created)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let tables = self.lock()?;
        Ok(tables
            .categories
            .get(&i64::from(id))
            .filter(|row| row.is_live())
            .map(|row| row.value.clone()))
    }

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>> {
        let tables = self.lock()?;
        Ok(tables
            .categories
            .values()
            .find(|row| row.is_live() && row.value.name.as_str() == name.as_str())
            .map(|row| row.value.clone()))
    }

    async fn list_page(&self, page: PageRequest) -> DomainResult<Paged<Category>> {
        let tables = self.lock()?;
        let rows = tables
            .categories
            .values()
            .filter(|row| row.is_live())
            .map(|row| row.value.clone())
            .collect();
        Ok(page_of(rows, page, |c: &Category| (c.created_at, i64::from(c.id))))
    }

    async fn update(&self, patch: CategoryPatch) -> DomainResult<Category> {
        let mut tables = self.lock()?;
        let row = tables
            .categories
            .get_mut(&i64::from(patch.id))
            .filter(|row| row.is_live())
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        if let Some(name) = patch.name {
            row.value.name = name;
        }
        row.value.updated_at = patch.updated_at;
        Ok(row.value.clone())
    }

    async fn soft_delete(&self, id: CategoryId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let mut tables = self.lock()?;
        let row = tables
            .categories
            .get_mut(&i64::from(id))
            .filter(|row| row.is_live())
            .ok_or_else(|| DomainError::NotFound("category not found".into()))?;
        row.deleted_at = Some(deleted_at);
        row.value.updated_at = deleted_at;
        Ok(())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryBlogStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleView> {
        let mut tables = self.lock()?;
        if !tables
            .categories
            .contains_key(&i64::from(article.category_id))
        {
            return Err(DomainError::NotFound("category not found".into()));
        }

        let id = tables.next_id();
        let created = Article {
            id: ArticleId(id),
            title: article.title,
            category_id: article.category_id,
            description: article.description,
            content: article.content,
            img: article.img,
            comment_count: 0,
            read_count: 0,
            created_at: article.created_at,
            updated_at: article.created_at,
        };
        let view = tables.article_view(&created);
        tables.articles.insert(id, Stored::live(created));
        Ok(view)
    }

    async fn update(&self, patch: ArticlePatch) -> DomainResult<ArticleView> {
        let mut tables = self.lock()?;
        let category_missing = patch
            .category_id
            .is_some_and(|id| !tables.categories.contains_key(&i64::from(id)));
        if category_missing {
            return Err(DomainError::NotFound("category not found".into()));
        }

        let row = tables
            .articles
            .get_mut(&i64::from(patch.id))
            .filter(|row| row.is_live())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        patch.apply_to(&mut row.value);
        let updated = row.value.clone();
        Ok(tables.article_view(&updated))
    }

    async fn soft_delete(&self, id: ArticleId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let mut tables = self.lock()?;
        let row = tables
            .articles
            .get_mut(&i64::from(id))
            .filter(|row| row.is_live())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        row.deleted_at = Some(deleted_at);
        row.value.updated_at = deleted_at;
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryBlogStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleView>> {
        let tables = self.lock()?;
        Ok(tables
            .articles
            .get(&i64::from(id))
            .filter(|row| row.is_live())
            .map(|row| tables.article_view(&row.value)))
    }

    async fn find_and_record_read(&self, id: ArticleId) -> DomainResult<Option<ArticleView>> {
        let mut tables = self.lock()?;
        let Some(row) = tables
            .articles
            .get_mut(&i64::from(id))
            .filter(|row| row.is_live())
        else {
            return Ok(None);
        };
        row.value.read_count += 1;
        let article = row.value.clone();
        Ok(Some(tables.article_view(&article)))
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<Paged<ArticleView>> {
        let tables = self.lock()?;
        let prefix = filter.title_prefix();
        let rows = tables
            .articles
            .values()
            .filter(|row| row.is_live())
            .map(|row| &row.value)
            .filter(|article| starts_with(article.title.as_str(), prefix))
            .filter(|article| filter.category_id.is_none_or(|id| article.category_id == id))
            .map(|article| tables.article_view(article))
            .collect();
        Ok(page_of(rows, page, |view: &ArticleView| {
            (view.article.created_at, i64::from(view.article.id))
        }))
    }
}

#[async_trait]
impl CommentRepository for InMemoryBlogStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut tables = self.lock()?;
        if !tables.articles.contains_key(&i64::from(comment.article_id)) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        if !tables.users.contains_key(&i64::from(comment.user_id)) {
            return Err(DomainError::NotFound("user not found".into()));
        }

        let id = tables.next_id();
        let created = Comment {
            id: CommentId(id),
            user_id: comment.user_id,
            article_id: comment.article_id,
            article_title: comment.article_title,
            username: comment.username,
            content: comment.content,
            status: comment.status,
            created_at: comment.created_at,
            updated_at: comment.created_at,
        };
        tables.comments.insert(id, Stored::live(created.clone()));
        Ok(created)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let tables = self.lock()?;
        Ok(tables
            .comments
            .get(&i64::from(id))
            .filter(|row| row.is_live())
            .map(|row| row.value.clone()))
    }

    async fn list_page(
        &self,
        filter: &CommentFilter,
        page: PageRequest,
    ) -> DomainResult<Paged<CommentView>> {
        let tables = self.lock()?;
        let rows = tables
            .comments
            .values()
            .filter(|row| row.is_live() && filter.matches(&row.value))
            .map(|row| tables.comment_view(&row.value))
            .collect();
        Ok(page_of(rows, page, |view: &CommentView| {
            (view.created_at, i64::from(view.id))
        }))
    }

    async fn count_approved(&self, article_id: ArticleId) -> DomainResult<u64> {
        let tables = self.lock()?;
        Ok(u64::try_from(tables.live_approved(article_id)).unwrap_or_default())
    }
}

#[async_trait]
impl CommentModerationRepository for InMemoryBlogStore {
    async fn moderate(
        &self,
        id: CommentId,
        action: ModerationAction,
        at: DateTime<Utc>,
    ) -> DomainResult<ModerationOutcome> {
        let mut tables = self.lock()?;

        let (article_id, current) = tables
            .comments
            .get(&i64::from(id))
            .filter(|row| row.is_live())
            .map(|row| (row.value.article_id, row.value.status))
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        let plan = action.plan(current);

        let key = i64::from(id);
        let before = tables.comments.get(&key).cloned();
        if let Some(row) = tables.comments.get_mut(&key) {
            row.value.status = plan.next_status;
            if plan.changes_status() || plan.tombstone {
                row.value.updated_at = at;
            }
            if plan.tombstone {
                row.deleted_at = Some(at);
            }
        }

        let counter = if plan.counter_delta != 0
            && std::mem::take(&mut tables.fail_next_counter_write)
        {
            Err(DomainError::Persistence(format!(
                "counter update for article {article_id} failed"
            )))
        } else {
            tables
                .articles
                .get_mut(&i64::from(article_id))
                .map(|row| {
                    row.value.comment_count += plan.counter_delta;
                    row.value.comment_count
                })
                .ok_or_else(|| {
                    DomainError::Persistence(format!(
                        "article {article_id} missing while moderating comment {id}"
                    ))
                })
        };
        let comment_count = match counter {
            Ok(count) => count,
            Err(err) => {
                if let Some(row) = before {
                    tables.comments.insert(key, row);
                }
                return Err(err);
            }
        };

        Ok(ModerationOutcome {
            comment_id: id,
            article_id,
            plan,
            comment_count,
        })
    }

    async fn recount(&self, article_id: ArticleId) -> DomainResult<CounterReconciliation> {
        let mut tables = self.lock()?;
        let actual = tables.live_approved(article_id);
        let row = tables
            .articles
            .get_mut(&i64::from(article_id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        let recorded = row.value.comment_count;
        row.value.comment_count = actual;
        Ok(CounterReconciliation {
            article_id,
            recorded,
            actual,
        })
    }

    async fn article_ids(&self) -> DomainResult<Vec<ArticleId>> {
        let tables = self.lock()?;
        Ok(tables.articles.keys().copied().map(ArticleId).collect())
    }
}

#[async_trait]
impl UserRepository for InMemoryBlogStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut tables = self.lock()?;
        let id = tables.next_id();
        let created = User {
            id: UserId(id),
            username: new_user.username,
            password_hash: new_user.password_hash,
            role: new_user.role,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        tables.users.insert(id, Stored::live(created.clone()));
        Ok(created)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let tables = self.lock()?;
        Ok(tables
            .users
            .values()
            .find(|row| row.is_live() && &row.value.username == username)
            .map(|row| row.value.clone()))
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let tables = self.lock()?;
        Ok(tables
            .users
            .get(&i64::from(id))
            .filter(|row| row.is_live())
            .map(|row| row.value.clone()))
    }

    async fn update(&self, patch: UserPatch) -> DomainResult<User> {
        let mut tables = self.lock()?;
        let row = tables
            .users
            .get_mut(&i64::from(patch.id))
            .filter(|row| row.is_live())
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        patch.apply_to(&mut row.value);
        Ok(row.value.clone())
    }

    async fn soft_delete(&self, id: UserId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let mut tables = self.lock()?;
        let row = tables
            .users
            .get_mut(&i64::from(id))
            .filter(|row| row.is_live())
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        row.deleted_at = Some(deleted_at);
        row.value.updated_at = deleted_at;
        Ok(())
    }

    async fn list_page(&self, filter: &UserFilter, page: PageRequest) -> DomainResult<Paged<User>> {
        let tables = self.lock()?;
        let prefix = filter.username_prefix();
        let rows = tables
            .users
            .values()
            .filter(|row| row.is_live() && starts_with(row.value.username.as_str(), prefix))
            .map(|row| row.value.clone())
            .collect();
        Ok(page_of(rows, page, |user: &User| {
            (user.created_at, i64::from(user.id))
        }))
    }
}

#[async_trait]
impl ProfileRepository for InMemoryBlogStore {
    async fn find_by_id(&self, id: ProfileId) -> DomainResult<Option<Profile>> {
        let tables = self.lock()?;
        Ok(tables.profiles.get(&i64::from(id)).cloned())
    }

    async fn update(
        &self,
        id: ProfileId,
        patch: ProfilePatch,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Profile> {
        let mut tables = self.lock()?;
        let profile = tables
            .profiles
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("profile not found".into()))?;
        patch.apply_to(&mut profile.fields);
        profile.updated_at = updated_at;
        Ok(profile.clone())
    }
}
