pub mod admin;
pub mod appointments;
pub mod auth;
pub mod profile;
pub mod properties;
pub mod search;

use serde::Serialize;

use crate::pagination::{Page, Pagination};

/// A page of items plus the navigation state for it
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
    pub show_pagination: bool,
}

impl<T> From<Page<T>> for ListResponse<T> {
    fn from(page: Page<T>) -> Self {
        let pagination = page.pagination();
        Self {
            items: page.items,
            show_pagination: pagination.is_visible(),
            pagination,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
