// tests/support/helpers.rs
use std::sync::Arc;

use quill_core::application::{
    commands::{
        articles::CreateArticleCommand,
        categories::CreateCategoryCommand,
        comments::CreateCommentCommand,
        users::{CreateUserCommand, EditUserCommand},
    },
    dto::{ArticleDto, CategoryDto, CommentDto, UserDto},
    queries::{articles::GetArticleQuery, comments::GetCommentQuery},
    services::{ApplicationServices, Repositories},
};
use quill_core::domain::comment::CommentStatus;
use quill_core::domain::user::Role;
use super::mocks::{DummyPasswordHasher, InMemoryBlogStore, SteppingClock};

pub const MAX_PAGE_SIZE: u32 = 100;

pub struct TestApp {
    pub store: Arc<InMemoryBlogStore>,
    pub services: ApplicationServices,
}

pub fn repositories(store: &Arc<InMemoryBlogStore>) -> Repositories {
    Repositories {
        article_write: store.clone(),
        article_read: store.clone(),
        category: store.clone(),
        comment: store.clone(),
        comment_moderation: store.clone(),
        user: store.clone(),
        profile: store.clone(),
    }
}

pub fn build_app() -> TestApp {
    let store = Arc::new(InMemoryBlogStore::new());
    let services = ApplicationServices::new(
        repositories(&store),
        Arc::new(DummyPasswordHasher),
        Arc::new(SteppingClock::default()),
        MAX_PAGE_SIZE,
    );
    TestApp { store, services }
}

impl TestApp {
    pub async fn category(&self, name: &str) -> CategoryDto {
        self.services
            .category_commands
            .create_category(CreateCategoryCommand { name: name.into() })
            .await
            .expect("create category")
    }

    pub async fn article(&self, title: &str, category_id: i64) -> ArticleDto {
        let command = CreateArticleCommand::builder()
            .title(title)
            .category_id(category_id)
            .description("summary")
            .content("body")
            .build()
            .expect("article command");
        self.services
            .article_commands
            .create_article(command)
            .await
            .expect("create article")
    }

    pub async fn user(&self, username: &str, password: &str) -> UserDto {
        self.services
            .user_commands
            .create_user(CreateUserCommand {
                username: username.into(),
                password: password.into(),
                role: None,
            })
            .await
            .expect("create user")
    }

    pub async fn admin(&self, username: &str, password: &str) -> UserDto {
        let user = self.user(username, password).await;
        self.services
            .user_commands
            .edit_user(EditUserCommand {
                id: user.id,
                username: None,
                role: Some(Role::Admin),
            })
            .await
            .expect("promote admin")
    }

    pub async fn comment(&self, article_id: i64, user_id: i64, content: &str) -> CommentDto {
        self.services
            .comment_commands
            .create_comment(CreateCommentCommand {
                article_id,
                user_id,
                content: content.into(),
            })
            .await
            .expect("create comment")
    }

    /// Stored counter, read without bumping `read_count`.
    pub async fn comment_count(&self, article_id: i64) -> i64 {
        use quill_core::domain::article::{ArticleId, ArticleReadRepository};
        ArticleReadRepository::find_by_id(
            self.store.as_ref(),
            ArticleId::new(article_id).expect("article id"),
        )
        .await
        .expect("read article")
        .expect("article exists")
        .article
        .comment_count
    }

    pub async fn comment_status(&self, id: i64) -> CommentStatus {
        self.services
            .comment_queries
            .get_comment(GetCommentQuery { id })
            .await
            .expect("get comment")
            .status
    }

    pub async fn read_article(&self, id: i64) -> ArticleDto {
        self.services
            .article_queries
            .get_article(GetArticleQuery { id })
            .await
            .expect("get article")
    }
}

/// Category, article, and user ready for comments.
pub async fn seeded() -> (TestApp, ArticleDto, UserDto) {
    let app = build_app();
    let category = app.category("rust").await;
    let article = app.article("Ownership", category.id).await;
    let user = app.user("reader", "password1").await;
    (app, article, user)
}
