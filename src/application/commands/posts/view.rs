// src/application/commands/posts/view.rs
use super::PostCommandService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::PostId,
};

#[derive(Debug, Clone)]
pub struct RecordPostViewCommand {
    pub id: i64,
}

impl PostCommandService {
    /// Bump the view counter and return the post with the incremented count.
    /// The increment happens store-side, so concurrent views all land; a
    /// deleted post answers not-found.
    pub async fn record_view(&self, command: RecordPostViewCommand) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        let updated = self.write_repo.increment_views(id).await?;
        Ok(updated.into())
    }
}
