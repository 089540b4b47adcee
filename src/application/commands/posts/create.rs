// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::{
        text, value_objects::normalize_labels, Author, FeaturedImage, NewPost, PostContent,
        PostSlug, PostStatus, PostTitle,
    },
};

#[derive(Debug, Clone, Default)]
pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub status: Option<PostStatus>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Vec<String>,
    pub featured_image: Option<FeaturedImage>,
}

impl PostCommandService {
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let now = self.clock.now();

        // A custom slug is taken as given (shape-validated); otherwise the
        // slug derives from the title. Either way the live uniqueness probe
        // appends -1, -2, ... until free.
        let base = match command.slug.filter(|s| !s.is_empty()) {
            Some(custom) => PostSlug::new(custom)?.into(),
            None => self.slug_service.slugify(title.as_str()),
        };
        let slug = self.slug_service.resolve_unique(&base, None).await?;

        let status = command.status.unwrap_or_default();
        let meta_title = Self::resolve_meta_title(command.meta_title, &title)?;
        let meta_description = Self::resolve_meta_description(command.meta_description, &content)?;
        let read_time = text::read_time_minutes(content.as_str(), text::WORDS_PER_MINUTE);

        let new_post = NewPost {
            title,
            content,
            slug,
            meta_title,
            meta_description,
            keywords: normalize_labels(&command.keywords),
            status,
            published_at: (status == PostStatus::Published).then_some(now),
            author: Author::default_identity(),
            category: command
                .category
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| "Uncategorized".into()),
            tags: normalize_labels(&command.tags),
            featured_image: command.featured_image,
            read_time,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_post).await?;
        tracing::info!(slug = %created.slug, "post created");
        Ok(created.into())
    }
}
