// src/application/commands/posts/publish.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostPatch, PostSlug},
};

#[derive(Debug, Clone)]
pub struct SetPublishStateCommand {
    pub slug: String,
    pub publish: bool,
}

impl PostCommandService {
    /// Explicit publish/unpublish toggle. Publishing always restamps
    /// `published_at`; unpublishing clears it.
    pub async fn set_publish_state(
        &self,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<PostDto> {
        let slug = PostSlug::new(command.slug)?;
        let mut post = self
            .read_repo
            .find_by_slug(&slug, false)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Post not found"))?;

        let now = self.clock.now();
        if command.publish {
            post.publish(now);
        } else {
            post.unpublish(now);
        }

        let patch = PostPatch::new(now)
            .with_status(post.status)
            .with_published_at(post.published_at);

        let updated = self.write_repo.update(post.id, patch).await?;
        Ok(updated.into())
    }
}
