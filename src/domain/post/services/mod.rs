// src/domain/post/services/mod.rs
use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::post::repository::PostReadRepository;
use crate::domain::post::value_objects::{PostId, PostSlug};

/// Domain service resolving slugs against live data. The check-then-act
/// sequence here has an inherent race window between two concurrent creates;
/// the store's unique index over active slugs settles the loser.
pub struct PostSlugService {
    read_repo: Arc<dyn PostReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl PostSlugService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub fn slugify(&self, input: &str) -> String {
        self.generator.slugify(input)
    }

    /// Probe `base`, `base-1`, `base-2`, ... against non-deleted posts until
    /// a free slug is found, skipping the post identified by `ignore_id`.
    pub async fn resolve_unique(
        &self,
        base: &str,
        ignore_id: Option<PostId>,
    ) -> DomainResult<PostSlug> {
        let base = if base.is_empty() {
            format!("post-{}", Utc::now().timestamp())
        } else {
            base.to_string()
        };

        let mut candidate = base.clone();
        let mut counter = 1u64;

        loop {
            let slug = PostSlug::new(candidate.clone())?;
            match self.read_repo.find_by_slug(&slug, false).await? {
                Some(existing) if ignore_id.is_some_and(|id| id == existing.id) => {
                    return Ok(slug);
                }
                Some(_) => {
                    candidate = format!("{base}-{counter}");
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }
}
