// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleDescription, ArticleId, ArticleImage, ArticleTitle,
};
use crate::domain::category::CategoryId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub category_id: CategoryId,
    pub description: ArticleDescription,
    pub content: String,
    pub img: ArticleImage,
    /// Number of approved, live comments. Only the moderation engine moves it.
    pub comment_count: i64,
    pub read_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Article joined with its category's name; `None` when the category is gone.
#[derive(Debug, Clone)]
pub struct ArticleView {
    pub article: Article,
    pub category_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub category_id: CategoryId,
    pub description: ArticleDescription,
    pub content: String,
    pub img: ArticleImage,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticlePatch {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub category_id: Option<CategoryId>,
    pub description: Option<ArticleDescription>,
    pub content: Option<String>,
    pub img: Option<ArticleImage>,
    pub updated_at: DateTime<Utc>,
}

impl ArticlePatch {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            category_id: None,
            description: None,
            content: None,
            img: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_description(mut self, description: ArticleDescription) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_img(mut self, img: ArticleImage) -> Self {
        self.img = Some(img);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category_id.is_none()
            && self.description.is_none()
            && self.content.is_none()
            && self.img.is_none()
    }

    /// Applies the supplied fields to `article`, leaving the rest untouched.
    pub fn apply_to(&self, article: &mut Article) {
        if let Some(title) = &self.title {
            article.title = title.clone();
        }
        if let Some(category_id) = self.category_id {
            article.category_id = category_id;
        }
        if let Some(description) = &self.description {
            article.description = description.clone();
        }
        if let Some(content) = &self.content {
            article.content.clone_from(content);
        }
        if let Some(img) = &self.img {
            article.img = img.clone();
        }
        article.updated_at = self.updated_at;
    }
}

#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    /// Matches titles starting with this text; blank means no restriction.
    pub title_prefix: Option<String>,
    pub category_id: Option<CategoryId>,
}

impl ArticleFilter {
    pub fn title_prefix(&self) -> Option<&str> {
        self.title_prefix
            .as_deref()
            .map(str::trim)
            .filter(|prefix| !prefix.is_empty())
    }
}
