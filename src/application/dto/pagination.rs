// src/application/dto/pagination.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Offset pagination block in the shape the list endpoint promises.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_posts: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub limit: u32,
}

impl PaginationDto {
    pub fn new(total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if total == 0 || limit == 0 {
            0
        } else {
            u32::try_from((total - 1) / u64::from(limit) + 1).unwrap_or(u32::MAX)
        };
        Self {
            current_page: page,
            total_pages,
            total_posts: total,
            has_next_page: page < total_pages,
            has_prev_page: page > 1 && total_pages > 0,
            limit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: PaginationDto,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        Self {
            items,
            pagination: PaginationDto::new(total, page, limit),
        }
    }
}
