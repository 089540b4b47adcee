// src/domain/post/entity.rs
use crate::domain::post::text;
use crate::domain::post::value_objects::{
    Author, FeaturedImage, PostContent, PostId, PostSlug, PostStatus, PostTitle,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub slug: PostSlug,
    pub meta_title: String,
    pub meta_description: String,
    pub keywords: Vec<String>,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub author: Author,
    pub category: String,
    pub tags: Vec<String>,
    pub featured_image: Option<FeaturedImage>,
    pub view_count: i64,
    pub read_time: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.status = PostStatus::Published;
        self.published_at = Some(now);
        self.updated_at = now;
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.status = PostStatus::Draft;
        self.published_at = None;
        self.updated_at = now;
    }

    /// Soft deletion also forces the post out of the published state; the
    /// deletion timestamp, not the status, is what hides it from queries.
    pub fn soft_delete(&mut self, now: DateTime<Utc>) {
        self.deleted_at = Some(now);
        self.status = PostStatus::Archived;
        self.updated_at = now;
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn excerpt(&self) -> String {
        text::excerpt(self.content.as_str(), text::EXCERPT_LENGTH)
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub content: PostContent,
    pub slug: PostSlug,
    pub meta_title: String,
    pub meta_description: String,
    pub keywords: Vec<String>,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub author: Author,
    pub category: String,
    pub tags: Vec<String>,
    pub featured_image: Option<FeaturedImage>,
    pub read_time: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update applied by `update`-style repository calls. Outer `None`
/// leaves a column untouched; the nested options on `published_at` and
/// `featured_image` distinguish "set" from "clear".
#[derive(Debug, Clone)]
pub struct PostPatch {
    pub title: Option<PostTitle>,
    pub content: Option<PostContent>,
    pub slug: Option<PostSlug>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub status: Option<PostStatus>,
    pub published_at: Option<Option<DateTime<Utc>>>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub featured_image: Option<Option<FeaturedImage>>,
    pub read_time: Option<u32>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl PostPatch {
    pub fn new(updated_at: DateTime<Utc>) -> Self {
        Self {
            title: None,
            content: None,
            slug: None,
            meta_title: None,
            meta_description: None,
            keywords: None,
            status: None,
            published_at: None,
            category: None,
            tags: None,
            featured_image: None,
            read_time: None,
            deleted_at: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_slug(mut self, slug: PostSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_meta_title(mut self, meta_title: String) -> Self {
        self.meta_title = Some(meta_title);
        self
    }

    pub fn with_meta_description(mut self, meta_description: String) -> Self {
        self.meta_description = Some(meta_description);
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = Some(keywords);
        self
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_published_at(mut self, published_at: Option<DateTime<Utc>>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn with_category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_featured_image(mut self, image: Option<FeaturedImage>) -> Self {
        self.featured_image = Some(image);
        self
    }

    pub fn with_read_time(mut self, read_time: u32) -> Self {
        self.read_time = Some(read_time);
        self
    }

    pub fn with_deleted_at(mut self, deleted_at: DateTime<Utc>) -> Self {
        self.deleted_at = Some(deleted_at);
        self
    }
}
