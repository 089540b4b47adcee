// src/domain/post/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostPatch};
use crate::domain::post::value_objects::{PostId, PostSlug, PostStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Filter over the posts collection. `include_deleted` defaults to false so
/// soft-deleted posts stay invisible unless a caller asks for them.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub status: Option<PostStatus>,
    pub published_before: Option<DateTime<Utc>>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub author_name: Option<String>,
    pub include_deleted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSortField {
    CreatedAt,
    UpdatedAt,
    PublishedAt,
    Title,
    ViewCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy)]
pub struct PostSort {
    pub field: PostSortField,
    pub order: SortOrder,
}

impl Default for PostSort {
    fn default() -> Self {
        Self {
            field: PostSortField::CreatedAt,
            order: SortOrder::Desc,
        }
    }
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_slug(
        &self,
        slug: &PostSlug,
        include_deleted: bool,
    ) -> DomainResult<Option<Post>>;

    /// Page through posts matching `filter`, returning the page plus the
    /// total match count for pagination.
    async fn find_page(
        &self,
        filter: &PostFilter,
        sort: PostSort,
        skip: u64,
        limit: u64,
    ) -> DomainResult<(Vec<Post>, u64)>;
}

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    /// Insert a new post. The store's unique index over active slugs is the
    /// backstop for the create-time uniqueness probe; a losing concurrent
    /// writer gets `DomainError::Conflict`.
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;

    async fn update(&self, id: PostId, patch: PostPatch) -> DomainResult<Post>;

    /// Store-side atomic `view_count + 1`; concurrent views never lose
    /// increments.
    async fn increment_views(&self, id: PostId) -> DomainResult<Post>;

    /// Hard delete everything matching `filter`. Used by the seeding binary
    /// to reset sample data, never by the API.
    async fn delete_many(&self, filter: &PostFilter) -> DomainResult<u64>;
}
