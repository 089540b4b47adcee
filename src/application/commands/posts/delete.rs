// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::post::{PostPatch, PostSlug, PostStatus},
};

#[derive(Debug, Clone)]
pub struct DeletePostCommand {
    pub slug: String,
}

impl PostCommandService {
    /// Soft delete: the post keeps its row but gains a deletion timestamp
    /// and drops out of every default query and slug-uniqueness check.
    pub async fn delete_post(&self, command: DeletePostCommand) -> ApplicationResult<()> {
        let slug = PostSlug::new(command.slug)?;
        let post = self
            .read_repo
            .find_by_slug(&slug, false)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Post not found"))?;

        let now = self.clock.now();
        let patch = PostPatch::new(now)
            .with_deleted_at(now)
            .with_status(PostStatus::Archived);

        self.write_repo.update(post.id, patch).await?;
        tracing::info!(slug = %post.slug, "post soft-deleted");
        Ok(())
    }
}
