// src/application/dto/posts.rs
use crate::domain::post::value_objects::{Author, FeaturedImage, PostStatus};
use crate::domain::post::Post;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire representation of a post. Field names are camelCase to stay
/// compatible with the JSON contract the browser UI consumes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
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
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        let excerpt = post.excerpt();
        Self {
            id: post.id.into(),
            title: post.title.into(),
            slug: post.slug.into(),
            excerpt,
            content: post.content.into(),
            meta_title: post.meta_title,
            meta_description: post.meta_description,
            keywords: post.keywords,
            status: post.status,
            published_at: post.published_at,
            author: post.author,
            category: post.category,
            tags: post.tags,
            featured_image: post.featured_image,
            view_count: post.view_count,
            read_time: post.read_time,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
