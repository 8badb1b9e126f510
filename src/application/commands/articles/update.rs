use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleDescription, ArticleId, ArticleImage, ArticlePatch, ArticleTitle},
        category::CategoryId,
    },
};

/// Only the supplied fields are written; `comment_count` and `read_count`
/// cannot be edited here.
#[derive(Debug, Default)]
pub struct EditArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub category_id: Option<i64>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub img: Option<String>,
}

impl ArticleCommandService {
    pub async fn edit_article(&self, command: EditArticleCommand) -> ApplicationResult<ArticleDto> {
        let EditArticleCommand {
            id,
            title,
            category_id,
            description,
            content,
            img,
        } = command;
        let id = ArticleId::new(id)?;

        let mut patch = ArticlePatch::new(id, self.clock.now());
        if let Some(title) = title {
            patch = patch.with_title(ArticleTitle::new(title)?);
        }
        if let Some(category_id) = category_id {
            let category_id = CategoryId::new(category_id)?;
            self.ensure_category_exists(category_id).await?;
            patch = patch.with_category(category_id);
        }
        if let Some(description) = description {
            patch = patch.with_description(ArticleDescription::new(description)?);
        }
        if let Some(content) = content {
            patch = patch.with_content(content);
        }
        if let Some(img) = img {
            patch = patch.with_img(ArticleImage::new(img)?);
        }

        if patch.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let updated = self.write_repo.update(patch).await?;
        Ok(updated.into())
    }
}
