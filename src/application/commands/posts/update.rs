// src/application/commands/posts/update.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{
        text, value_objects::normalize_labels, FeaturedImage, PostContent, PostPatch, PostSlug,
        PostStatus, PostTitle,
    },
};

#[derive(Debug, Clone)]
pub struct UpdatePostCommand {
    /// Slug identifying the post to update.
    pub slug: String,
    pub title: String,
    pub content: String,
    /// Replacement slug, honoured only when the title actually changed.
    pub new_slug: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<PostStatus>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub featured_image: Option<FeaturedImage>,
}

impl PostCommandService {
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let slug = PostSlug::new(command.slug)?;
        let existing = self
            .read_repo
            .find_by_slug(&slug, false)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Post not found"))?;

        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let now = self.clock.now();

        let read_time = text::read_time_minutes(content.as_str(), text::WORDS_PER_MINUTE);
        let meta_title = Self::resolve_meta_title(command.meta_title, &title)?;
        let meta_description = Self::resolve_meta_description(command.meta_description, &content)?;

        let mut patch = PostPatch::new(now)
            .with_title(title.clone())
            .with_content(content)
            .with_meta_title(meta_title)
            .with_meta_description(meta_description)
            .with_read_time(read_time);

        // The slug never regenerates from an edited title on its own; a
        // replacement must be requested explicitly, and it fails on
        // collision instead of probing for a free suffix.
        if title.as_str() != existing.title.as_str() {
            if let Some(new_slug) = command.new_slug.filter(|s| !s.is_empty()) {
                let candidate = PostSlug::new(self.slug_service.slugify(&new_slug))?;
                if let Some(other) = self.read_repo.find_by_slug(&candidate, false).await? {
                    if other.id != existing.id {
                        return Err(ApplicationError::conflict(
                            "A post with this slug already exists",
                        ));
                    }
                }
                patch = patch.with_slug(candidate);
            }
        }

        if let Some(category) = command.category.filter(|c| !c.trim().is_empty()) {
            patch = patch.with_category(category.trim().to_string());
        }
        if let Some(tags) = command.tags {
            patch = patch.with_tags(normalize_labels(&tags));
        }
        if let Some(keywords) = command.keywords {
            patch = patch.with_keywords(normalize_labels(&keywords));
        }
        if let Some(image) = command.featured_image {
            patch = patch.with_featured_image(Some(image));
        }

        let next_status = command.status.unwrap_or(existing.status);
        if next_status != existing.status {
            patch = patch.with_status(next_status);
        }
        // publishedAt is stamped on the transition into published, and only
        // the first time; republishing via update keeps the original date.
        if next_status == PostStatus::Published
            && existing.status != PostStatus::Published
            && existing.published_at.is_none()
        {
            patch = patch.with_published_at(Some(now));
        }

        let updated = self.write_repo.update(existing.id, patch).await?;
        tracing::info!(slug = %updated.slug, "post updated");
        Ok(updated.into())
    }
}
