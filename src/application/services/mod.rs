// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, categories::CategoryCommandService,
            comments::CommentCommandService, profile::ProfileCommandService,
            users::UserCommandService,
        },
        ports::{ClockPort, PasswordHasherPort},
        queries::{
            articles::ArticleQueryService, categories::CategoryQueryService,
            comments::CommentQueryService, profile::ProfileQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        category::{CategoryNameService, CategoryRepository},
        comment::{CommentModerationRepository, CommentRepository},
        profile::ProfileRepository,
        user::{UserRepository, UsernameAvailabilityService},
    },
};

/// Storage ports the services are assembled from. Postgres and the in-memory
/// store both provide every one of them.
#[derive(Clone)]
pub struct Repositories {
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub category: Arc<dyn CategoryRepository>,
    pub comment: Arc<dyn CommentRepository>,
    pub comment_moderation: Arc<dyn CommentModerationRepository>,
    pub user: Arc<dyn UserRepository>,
    pub profile: Arc<dyn ProfileRepository>,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub profile_commands: Arc<ProfileCommandService>,
    pub profile_queries: Arc<ProfileQueryService>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        password_hasher: Arc<PasswordHasherPort>,
        clock: Arc<ClockPort>,
        max_page_size: u32,
    ) -> Self {
        let category_names = Arc::new(CategoryNameService::new(Arc::clone(&repos.category)));
        let usernames = Arc::new(UsernameAvailabilityService::new(Arc::clone(&repos.user)));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.category),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_read),
            max_page_size,
        ));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&repos.category),
            category_names,
            Arc::clone(&clock),
        ));
        let category_queries = Arc::new(CategoryQueryService::new(
            Arc::clone(&repos.category),
            max_page_size,
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.comment),
            Arc::clone(&repos.comment_moderation),
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.user),
            Arc::clone(&clock),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&repos.comment),
            max_page_size,
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.user),
            password_hasher,
            Arc::clone(&usernames),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&repos.user),
            usernames,
            max_page_size,
        ));

        let profile_commands = Arc::new(ProfileCommandService::new(
            Arc::clone(&repos.profile),
            clock,
        ));
        let profile_queries = Arc::new(ProfileQueryService::new(repos.profile));

        Self {
            article_commands,
            article_queries,
            category_commands,
            category_queries,
            comment_commands,
            comment_queries,
            user_commands,
            user_queries,
            profile_commands,
            profile_queries,
        }
    }
}
