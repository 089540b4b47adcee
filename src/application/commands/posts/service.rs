// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::post::{
        services::PostSlugService, text, PostContent, PostReadRepository, PostTitle,
        PostWriteRepository,
    },
};

pub const META_TITLE_MAX_CHARS: usize = 60;

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) slug_service: Arc<PostSlugService>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        slug_service: Arc<PostSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
        }
    }

    /// Meta title defaults to the post title, clamped to the SEO limit.
    pub(super) fn resolve_meta_title(
        explicit: Option<String>,
        title: &PostTitle,
    ) -> ApplicationResult<String> {
        match explicit.filter(|s| !s.trim().is_empty()) {
            Some(value) => {
                if value.chars().count() > META_TITLE_MAX_CHARS {
                    return Err(ApplicationError::validation(
                        "Meta title cannot exceed 60 characters",
                    ));
                }
                Ok(value)
            }
            None => Ok(text::truncate_chars(title.as_str(), META_TITLE_MAX_CHARS)),
        }
    }

    /// Meta description defaults to the stripped content, truncated to 160
    /// characters with an ellipsis only when truncation happened.
    pub(super) fn resolve_meta_description(
        explicit: Option<String>,
        content: &PostContent,
    ) -> ApplicationResult<String> {
        match explicit.filter(|s| !s.trim().is_empty()) {
            Some(value) => {
                if value.chars().count() > text::META_DESCRIPTION_LENGTH {
                    return Err(ApplicationError::validation(
                        "Meta description cannot exceed 160 characters",
                    ));
                }
                Ok(value)
            }
            None => Ok(text::excerpt(content.as_str(), text::META_DESCRIPTION_LENGTH)),
        }
    }
}
