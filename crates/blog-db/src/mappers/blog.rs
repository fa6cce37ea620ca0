//! Blog entity <-> model mapper

use blog_core::{Blog, BlogId};

use crate::models::BlogModel;

/// Convert BlogModel to Blog entity
impl From<BlogModel> for Blog {
    fn from(model: BlogModel) -> Self {
        Blog {
            id: BlogId::new(model.id),
            name: model.name,
            handle: model.handle,
            positive: model.positive,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Column values of a Blog for insert and update statements
pub struct BlogRow<'a> {
    pub id: i64,
    pub name: &'a str,
    pub handle: &'a str,
    pub positive: bool,
}

impl<'a> BlogRow<'a> {
    pub fn new(blog: &'a Blog) -> Self {
        Self {
            id: blog.id.into_inner(),
            name: &blog.name,
            handle: &blog.handle,
            positive: blog.positive,
        }
    }
}
