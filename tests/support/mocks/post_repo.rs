// tests/support/mocks/post_repo.rs
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Mutex,
};

use async_trait::async_trait;
use quillpress::domain::errors::{DomainError, DomainResult};
use quillpress::domain::post::{
    NewPost, Post, PostFilter, PostId, PostPatch, PostReadRepository, PostSlug, PostSort,
    PostSortField, PostWriteRepository, SortOrder,
};

/// In-memory stand-in for the Postgres repositories. Mirrors the store's
/// behaviour closely enough for service-level tests, including the partial
/// unique index over active slugs.
pub struct InMemoryPostRepo {
    posts: Mutex<Vec<Post>>,
    next_id: AtomicI64,
}

impl InMemoryPostRepo {
    pub fn new() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Insert a pre-built post verbatim, bypassing create-side derivation.
    /// Useful for seeding listing scenarios.
    pub fn seed(&self, post: Post) {
        let mut posts = self.posts.lock().unwrap();
        let next = i64::from(post.id) + 1;
        self.next_id.fetch_max(next, Ordering::SeqCst);
        posts.push(post);
    }

    pub fn snapshot(&self) -> Vec<Post> {
        self.posts.lock().unwrap().clone()
    }

    fn matches(post: &Post, filter: &PostFilter) -> bool {
        if !filter.include_deleted && post.is_deleted() {
            return false;
        }
        if let Some(status) = filter.status {
            if post.status != status {
                return false;
            }
        }
        if let Some(cutoff) = filter.published_before {
            match post.published_at {
                Some(published_at) if published_at <= cutoff => {}
                _ => return false,
            }
        }
        if let Some(category) = &filter.category {
            if &post.category != category {
                return false;
            }
        }
        if let Some(tag) = &filter.tag {
            if !post.tags.iter().any(|t| t == tag) {
                return false;
            }
        }
        if let Some(author_name) = &filter.author_name {
            if &post.author.name != author_name {
                return false;
            }
        }
        true
    }

    fn apply_patch(post: &mut Post, patch: PostPatch) {
        post.updated_at = patch.updated_at;
        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(content) = patch.content {
            post.content = content;
        }
        if let Some(slug) = patch.slug {
            post.slug = slug;
        }
        if let Some(meta_title) = patch.meta_title {
            post.meta_title = meta_title;
        }
        if let Some(meta_description) = patch.meta_description {
            post.meta_description = meta_description;
        }
        if let Some(keywords) = patch.keywords {
            post.keywords = keywords;
        }
        if let Some(status) = patch.status {
            post.status = status;
        }
        if let Some(published_at) = patch.published_at {
            post.published_at = published_at;
        }
        if let Some(category) = patch.category {
            post.category = category;
        }
        if let Some(tags) = patch.tags {
            post.tags = tags;
        }
        if let Some(image) = patch.featured_image {
            post.featured_image = image;
        }
        if let Some(read_time) = patch.read_time {
            post.read_time = read_time;
        }
        if let Some(deleted_at) = patch.deleted_at {
            post.deleted_at = Some(deleted_at);
        }
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepo {
    async fn find_by_slug(
        &self,
        slug: &PostSlug,
        include_deleted: bool,
    ) -> DomainResult<Option<Post>> {
        let posts = self.posts.lock().unwrap();
        Ok(posts
            .iter()
            .find(|p| p.slug == *slug && (include_deleted || !p.is_deleted()))
            .cloned())
    }

    async fn find_page(
        &self,
        filter: &PostFilter,
        sort: PostSort,
        skip: u64,
        limit: u64,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let posts = self.posts.lock().unwrap();
        let mut matching: Vec<Post> = posts
            .iter()
            .filter(|p| Self::matches(p, filter))
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            let ordering = match sort.field {
                PostSortField::CreatedAt => a.created_at.cmp(&b.created_at),
                PostSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
                PostSortField::PublishedAt => a.published_at.cmp(&b.published_at),
                PostSortField::Title => a.title.as_str().cmp(b.title.as_str()),
                PostSortField::ViewCount => a.view_count.cmp(&b.view_count),
            };
            match sort.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
            .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });

        let total = matching.len() as u64;
        let page: Vec<Post> = matching
            .into_iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect();

        Ok((page, total))
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();

        // Unique-index backstop over active slugs.
        if posts.iter().any(|p| p.slug == post.slug && !p.is_deleted()) {
            return Err(DomainError::Conflict(
                "A post with this slug already exists".into(),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Post {
            id: PostId::new(id)?,
            title: post.title,
            content: post.content,
            slug: post.slug,
            meta_title: post.meta_title,
            meta_description: post.meta_description,
            keywords: post.keywords,
            status: post.status,
            published_at: post.published_at,
            author: post.author,
            category: post.category,
            tags: post.tags,
            featured_image: post.featured_image,
            view_count: 0,
            read_time: post.read_time,
            created_at: post.created_at,
            updated_at: post.updated_at,
            deleted_at: None,
        };
        posts.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: PostId, patch: PostPatch) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();

        if let Some(new_slug) = &patch.slug {
            if posts
                .iter()
                .any(|p| p.slug == *new_slug && p.id != id && !p.is_deleted())
            {
                return Err(DomainError::Conflict(
                    "A post with this slug already exists".into(),
                ));
            }
        }

        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::NotFound("Post not found".into()))?;

        Self::apply_patch(post, patch);
        Ok(post.clone())
    }

    async fn increment_views(&self, id: PostId) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|p| p.id == id && !p.is_deleted())
            .ok_or_else(|| DomainError::NotFound("Post not found".into()))?;
        post.view_count += 1;
        Ok(post.clone())
    }

    async fn delete_many(&self, filter: &PostFilter) -> DomainResult<u64> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| !Self::matches(p, filter));
        Ok((before - posts.len()) as u64)
    }
}
