// src/application/queries/posts/list.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::{Page, PostDto},
        error::ApplicationResult,
    },
    domain::post::{PostFilter, PostSort, PostSortField, PostStatus, SortOrder},
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 100;

/// Listing parameters as they arrive from the query string; normalization
/// (defaults, clamping, sort whitelist) happens here, not in the controller.
#[derive(Debug, Clone, Default)]
pub struct ListPostsQuery {
    pub status: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub author: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<Page<PostDto>> {
        let mut filter = PostFilter::default();

        // Default listing shows published posts whose publish date has
        // passed; "draft" narrows to drafts; "all" (or anything else) drops
        // the status condition. Soft-deleted posts stay hidden throughout.
        match query.status.as_deref() {
            None | Some("published") => {
                filter.status = Some(PostStatus::Published);
                filter.published_before = Some(self.clock.now());
            }
            Some("draft") => filter.status = Some(PostStatus::Draft),
            Some(_) => {}
        }

        filter.category = query.category.filter(|c| !c.is_empty());
        filter.tag = query.tag.filter(|t| !t.is_empty());
        filter.author_name = query.author.filter(|a| !a.is_empty());

        let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let page = query.page.unwrap_or(1).max(1);
        let skip = u64::from(page - 1) * u64::from(limit);

        let sort = PostSort {
            field: sort_field(query.sort.as_deref()),
            order: sort_order(query.order.as_deref()),
        };

        let (posts, total) = self
            .read_repo
            .find_page(&filter, sort, skip, u64::from(limit))
            .await?;

        let items = posts.into_iter().map(Into::into).collect();
        Ok(Page::new(items, total, page, limit))
    }
}

/// Sort keys arrive in the wire's camelCase; unknown keys fall back to
/// creation date rather than reaching the store unchecked.
fn sort_field(raw: Option<&str>) -> PostSortField {
    match raw {
        Some("updatedAt") => PostSortField::UpdatedAt,
        Some("publishedAt") => PostSortField::PublishedAt,
        Some("title") => PostSortField::Title,
        Some("viewCount") => PostSortField::ViewCount,
        _ => PostSortField::CreatedAt,
    }
}

fn sort_order(raw: Option<&str>) -> SortOrder {
    match raw {
        Some("asc") => SortOrder::Asc,
        _ => SortOrder::Desc,
    }
}
