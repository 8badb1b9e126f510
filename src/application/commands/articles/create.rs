// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{ArticleDescription, ArticleImage, ArticleTitle, NewArticle},
        category::CategoryId,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub category_id: i64,
    pub description: String,
    pub content: String,
    pub img: String,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    category_id: Option<i64>,
    description: String,
    content: String,
    img: String,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn img(mut self, img: impl Into<String>) -> Self {
        self.img = img.into();
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            category_id: self.category_id.ok_or("category is required")?,
            description: self.description,
            content: self.content,
            img: self.img,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let category_id = CategoryId::new(command.category_id)?;
        let description = ArticleDescription::new(command.description)?;
        let img = ArticleImage::new(command.img)?;

        self.ensure_category_exists(category_id).await?;

        let new_article = NewArticle {
            title,
            category_id,
            description,
            content: command.content,
            img,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }
}
