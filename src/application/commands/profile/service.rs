use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::profile::ProfileRepository};

pub struct ProfileCommandService {
    pub(super) repo: Arc<dyn ProfileRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ProfileCommandService {
    pub fn new(repo: Arc<dyn ProfileRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}
