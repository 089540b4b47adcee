// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};
use quillpress::domain::post::{
    Author, Post, PostContent, PostId, PostSlug, PostStatus, PostTitle,
};

use crate::support::mocks::fixed_now;

/// Builds fully-formed `Post` values for seeding the in-memory repository.
/// Defaults describe a freshly published post; override what the scenario
/// cares about.
pub struct PostBuilder {
    id: i64,
    title: String,
    slug: Option<String>,
    content: String,
    status: PostStatus,
    published_at: Option<DateTime<Utc>>,
    category: String,
    tags: Vec<String>,
    author_name: String,
    view_count: i64,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl PostBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Post {id}"),
            slug: None,
            content: "Body text long enough to pass validation.".into(),
            status: PostStatus::Published,
            published_at: Some(fixed_now() - Duration::days(1)),
            category: "Uncategorized".into(),
            tags: Vec::new(),
            author_name: "Admin".into(),
            view_count: 0,
            created_at: fixed_now() - Duration::days(1) + Duration::minutes(id),
            deleted_at: None,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: &str) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.into();
        self
    }

    pub fn status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    pub fn published_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.published_at = at;
        self
    }

    pub fn draft(mut self) -> Self {
        self.status = PostStatus::Draft;
        self.published_at = None;
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.into();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    pub fn author_name(mut self, name: &str) -> Self {
        self.author_name = name.into();
        self
    }

    pub fn view_count(mut self, count: i64) -> Self {
        self.view_count = count;
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(fixed_now() - Duration::hours(1));
        self.status = PostStatus::Archived;
        self
    }

    pub fn build(self) -> Post {
        let slug = self
            .slug
            .unwrap_or_else(|| quillpress::domain::post::text::slugify(&self.title));
        Post {
            id: PostId::new(self.id).unwrap(),
            title: PostTitle::new(self.title.clone()).unwrap(),
            content: PostContent::new(self.content.clone()).unwrap(),
            slug: PostSlug::new(slug).unwrap(),
            meta_title: self.title,
            meta_description: self.content,
            keywords: Vec::new(),
            status: self.status,
            published_at: self.published_at,
            author: Author {
                name: self.author_name,
                email: "admin@example.com".into(),
                avatar: None,
            },
            category: self.category,
            tags: self.tags,
            featured_image: None,
            view_count: self.view_count,
            read_time: 1,
            created_at: self.created_at,
            updated_at: self.created_at,
            deleted_at: self.deleted_at,
        }
    }
}
