// src/application/queries/posts/get_by_slug.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostSlug,
};

#[derive(Debug, Clone)]
pub struct GetPostBySlugQuery {
    pub slug: String,
}

impl PostQueryService {
    pub async fn get_post_by_slug(&self, query: GetPostBySlugQuery) -> ApplicationResult<PostDto> {
        let slug = PostSlug::new(query.slug)?;
        let post = self
            .read_repo
            .find_by_slug(&slug, false)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Post not found"))?;

        Ok(post.into())
    }
}
