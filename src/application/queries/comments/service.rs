use std::sync::Arc;

use crate::domain::comment::CommentRepository;

pub struct CommentQueryService {
    pub(super) repo: Arc<dyn CommentRepository>,
    pub(super) max_page_size: u32,
}

impl CommentQueryService {
    pub fn new(repo: Arc<dyn CommentRepository>, max_page_size: u32) -> Self {
        Self {
            repo,
            max_page_size,
        }
    }
}
