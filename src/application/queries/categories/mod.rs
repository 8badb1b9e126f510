mod service;

pub use service::{CategoryQueryService, GetCategoryQuery, ListCategoriesQuery};
