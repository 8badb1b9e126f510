pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Category, CategoryPatch, NewCategory};
pub use repository::CategoryRepository;
pub use services::CategoryNameService;
pub use value_objects::{CategoryId, CategoryName};
