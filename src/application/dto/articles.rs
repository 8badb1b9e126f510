use crate::domain::article::ArticleView;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub cid: i64,
    #[serde(default)]
    pub category_name: Option<String>,
    pub desc: String,
    pub content: String,
    pub img: String,
    pub comment_count: i64,
    pub read_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ArticleView> for ArticleDto {
    fn from(view: ArticleView) -> Self {
        let ArticleView {
            article,
            category_name,
        } = view;
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            cid: article.category_id.into(),
            category_name,
            desc: article.description.into_inner(),
            content: article.content,
            img: article.img.into_inner(),
            comment_count: article.comment_count,
            read_count: article.read_count,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
