use crate::domain::pagination::{PageRequest, Paged};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Rows matching the filter across all pages.
    pub total: u64,
    pub page_num: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    pub fn from_paged<S>(paged: Paged<S>, request: PageRequest) -> Self
    where
        S: Into<T>,
    {
        Self {
            items: paged.items.into_iter().map(Into::into).collect(),
            total: paged.total,
            page_num: request.page_num(),
            page_size: request.page_size(),
        }
    }
}
