// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    Author, FeaturedImage, NewPost, Post, PostContent, PostFilter, PostId, PostPatch,
    PostReadRepository, PostSlug, PostSort, PostSortField, PostStatus, PostTitle,
    PostWriteRepository, SortOrder,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, title, content, slug, meta_title, meta_description, keywords, status, \
     published_at, author_name, author_email, author_avatar, category, tags, \
     featured_image_url, featured_image_alt, featured_image_caption, \
     view_count, read_time, created_at, updated_at, deleted_at";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    slug: String,
    meta_title: String,
    meta_description: String,
    keywords: Vec<String>,
    status: String,
    published_at: Option<DateTime<Utc>>,
    author_name: String,
    author_email: String,
    author_avatar: Option<String>,
    category: String,
    tags: Vec<String>,
    featured_image_url: Option<String>,
    featured_image_alt: Option<String>,
    featured_image_caption: Option<String>,
    view_count: i64,
    read_time: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        let featured_image = row.featured_image_url.map(|url| FeaturedImage {
            url,
            alt: row.featured_image_alt,
            caption: row.featured_image_caption,
        });

        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            content: PostContent::new(row.content)?,
            slug: PostSlug::new(row.slug)?,
            meta_title: row.meta_title,
            meta_description: row.meta_description,
            keywords: row.keywords,
            status: PostStatus::parse(&row.status)?,
            published_at: row.published_at,
            author: Author {
                name: row.author_name,
                email: row.author_email,
                avatar: row.author_avatar,
            },
            category: row.category,
            tags: row.tags,
            featured_image,
            view_count: row.view_count,
            read_time: u32::try_from(row.read_time).unwrap_or(0),
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

fn sort_column(field: PostSortField) -> &'static str {
    match field {
        PostSortField::CreatedAt => "created_at",
        PostSortField::UpdatedAt => "updated_at",
        PostSortField::PublishedAt => "published_at",
        PostSortField::Title => "title",
        PostSortField::ViewCount => "view_count",
    }
}

/// Append the WHERE clause for `filter`; shared between the page query, the
/// count query, and `delete_many`.
fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a PostFilter) {
    let mut has_where = false;
    let mut push_cond = |builder: &mut QueryBuilder<'a, Postgres>| {
        builder.push(if has_where { " AND " } else { " WHERE " });
        has_where = true;
    };

    if !filter.include_deleted {
        push_cond(builder);
        builder.push("deleted_at IS NULL");
    }
    if let Some(status) = filter.status {
        push_cond(builder);
        builder.push("status = ");
        builder.push_bind(status.as_str());
    }
    if let Some(published_before) = filter.published_before {
        push_cond(builder);
        builder.push("published_at <= ");
        builder.push_bind(published_before);
    }
    if let Some(category) = filter.category.as_deref() {
        push_cond(builder);
        builder.push("category = ");
        builder.push_bind(category);
    }
    if let Some(tag) = filter.tag.as_deref() {
        push_cond(builder);
        builder.push_bind(tag);
        builder.push(" = ANY(tags)");
    }
    if let Some(author_name) = filter.author_name.as_deref() {
        push_cond(builder);
        builder.push("author_name = ");
        builder.push_bind(author_name);
    }
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            content,
            slug,
            meta_title,
            meta_description,
            keywords,
            status,
            published_at,
            author,
            category,
            tags,
            featured_image,
            read_time,
            created_at,
            updated_at,
        } = post;

        let (image_url, image_alt, image_caption) = match featured_image {
            Some(image) => (Some(image.url), image.alt, image.caption),
            None => (None, None, None),
        };

        let sql = format!(
            "INSERT INTO posts (title, content, slug, meta_title, meta_description, keywords, \
             status, published_at, author_name, author_email, author_avatar, category, tags, \
             featured_image_url, featured_image_alt, featured_image_caption, read_time, \
             created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19) \
             RETURNING {COLUMNS}"
        );

        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(title.as_str())
            .bind(content.as_str())
            .bind(slug.as_str())
            .bind(meta_title)
            .bind(meta_description)
            .bind(keywords)
            .bind(status.as_str())
            .bind(published_at)
            .bind(author.name)
            .bind(author.email)
            .bind(author.avatar)
            .bind(category)
            .bind(tags)
            .bind(image_url)
            .bind(image_alt)
            .bind(image_caption)
            .bind(i32::try_from(read_time).unwrap_or(i32::MAX))
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, id: PostId, patch: PostPatch) -> DomainResult<Post> {
        let PostPatch {
            title,
            content,
            slug,
            meta_title,
            meta_description,
            keywords,
            status,
            published_at,
            category,
            tags,
            featured_image,
            read_time,
            deleted_at,
            updated_at,
        } = patch;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(String::from(content));
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }
        if let Some(meta_title) = meta_title {
            builder.push(", meta_title = ");
            builder.push_bind(meta_title);
        }
        if let Some(meta_description) = meta_description {
            builder.push(", meta_description = ");
            builder.push_bind(meta_description);
        }
        if let Some(keywords) = keywords {
            builder.push(", keywords = ");
            builder.push_bind(keywords);
        }
        if let Some(status) = status {
            builder.push(", status = ");
            builder.push_bind(status.as_str());
        }
        if let Some(published_at) = published_at {
            builder.push(", published_at = ");
            builder.push_bind(published_at);
        }
        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category);
        }
        if let Some(tags) = tags {
            builder.push(", tags = ");
            builder.push_bind(tags);
        }
        if let Some(image) = featured_image {
            let (url, alt, caption) = match image {
                Some(image) => (Some(image.url), image.alt, image.caption),
                None => (None, None, None),
            };
            builder.push(", featured_image_url = ");
            builder.push_bind(url);
            builder.push(", featured_image_alt = ");
            builder.push_bind(alt);
            builder.push(", featured_image_caption = ");
            builder.push_bind(caption);
        }
        if let Some(read_time) = read_time {
            builder.push(", read_time = ");
            builder.push_bind(i32::try_from(read_time).unwrap_or(i32::MAX));
        }
        if let Some(deleted_at) = deleted_at {
            builder.push(", deleted_at = ");
            builder.push_bind(deleted_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {COLUMNS}"));

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("Post not found".into()))?;

        Post::try_from(row)
    }

    async fn increment_views(&self, id: PostId) -> DomainResult<Post> {
        let sql = format!(
            "UPDATE posts SET view_count = view_count + 1 \
             WHERE id = $1 AND deleted_at IS NULL RETURNING {COLUMNS}"
        );

        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("Post not found".into()))?;

        Post::try_from(row)
    }

    async fn delete_many(&self, filter: &PostFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("DELETE FROM posts");
        apply_filter(&mut builder, filter);

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_slug(
        &self,
        slug: &PostSlug,
        include_deleted: bool,
    ) -> DomainResult<Option<Post>> {
        let sql = if include_deleted {
            format!("SELECT {COLUMNS} FROM posts WHERE slug = $1")
        } else {
            format!("SELECT {COLUMNS} FROM posts WHERE slug = $1 AND deleted_at IS NULL")
        };

        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_page(
        &self,
        filter: &PostFilter,
        sort: PostSort,
        skip: u64,
        limit: u64,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM posts"));
        apply_filter(&mut builder, filter);

        builder.push(" ORDER BY ");
        builder.push(sort_column(sort.field));
        builder.push(match sort.order {
            SortOrder::Asc => " ASC",
            SortOrder::Desc => " DESC",
        });
        builder.push(", id DESC");

        builder.push(" LIMIT ");
        builder.push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(skip).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let posts = rows
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM posts");
        apply_filter(&mut count_builder, filter);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok((posts, u64::try_from(total).unwrap_or(0)))
    }
}
