// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{
        CreatePostCommand, DeletePostCommand, RecordPostViewCommand, SetPublishStateCommand,
        UpdatePostCommand,
    },
    dto::{PaginationDto, PostDto},
    queries::posts::{GetPostBySlugQuery, ListPostsQuery},
};
use crate::domain::post::{FeaturedImage, PostStatus};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsParams {
    /// `published` (default), `draft`, or `all`.
    pub status: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub author: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
    /// Sort key: createdAt, updatedAt, publishedAt, title, viewCount.
    pub sort: Option<String>,
    /// `asc` or `desc` (default).
    pub order: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub slug: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: Option<PostStatus>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub featured_image: Option<FeaturedImage>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
    pub new_slug: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<PostStatus>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub featured_image: Option<FeaturedImage>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishRequest {
    pub publish: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostListResponse {
    pub success: bool,
    pub posts: Vec<PostDto>,
    pub pagination: PaginationDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub post: PostDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/api/posts",
    params(ListPostsParams),
    responses(
        (status = 200, description = "Paged post listing.", body = PostListResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListPostsParams>,
) -> HttpResult<Json<PostListResponse>> {
    let page = state
        .services
        .post_queries
        .list_posts(ListPostsQuery {
            status: params.status,
            category: params.category,
            tag: params.tag,
            author: params.author,
            limit: params.limit,
            page: params.page,
            sort: params.sort,
            order: params.order,
        })
        .await
        .into_http()?;

    Ok(Json(PostListResponse {
        success: true,
        posts: page.items,
        pagination: page.pagination,
    }))
}

#[utoipa::path(
    post,
    path = "/api/posts/create",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created.", body = PostResponse),
        (status = 400, description = "Validation failure or slug conflict.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostResponse>)> {
    let command = CreatePostCommand {
        title: payload.title,
        content: payload.content,
        slug: payload.slug,
        category: payload.category,
        tags: payload.tags,
        status: payload.status,
        meta_title: payload.meta_title,
        meta_description: payload.meta_description,
        keywords: payload.keywords,
        featured_image: payload.featured_image,
    };

    let post = state
        .services
        .post_commands
        .create_post(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(PostResponse {
            success: true,
            message: Some("Post created successfully".into()),
            post,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "The post, with its view count incremented.", body = PostResponse),
        (status = 404, description = "No active post under this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostResponse>> {
    let post = state
        .services
        .post_queries
        .get_post_by_slug(GetPostBySlugQuery { slug })
        .await
        .into_http()?;

    // Reading a post counts as a view; the response carries the new count.
    let post = state
        .services
        .post_commands
        .record_view(RecordPostViewCommand { id: post.id })
        .await
        .into_http()?;

    Ok(Json(PostResponse {
        success: true,
        message: None,
        post,
    }))
}

#[utoipa::path(
    put,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated.", body = PostResponse),
        (status = 404, description = "No active post under this slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 400, description = "Validation failure or slug conflict.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostResponse>> {
    let command = UpdatePostCommand {
        slug,
        title: payload.title,
        content: payload.content,
        new_slug: payload.new_slug,
        category: payload.category,
        tags: payload.tags,
        status: payload.status,
        meta_title: payload.meta_title,
        meta_description: payload.meta_description,
        keywords: payload.keywords,
        featured_image: payload.featured_image,
    };

    let post = state
        .services
        .post_commands
        .update_post(command)
        .await
        .into_http()?;

    Ok(Json(PostResponse {
        success: true,
        message: Some("Post updated successfully".into()),
        post,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Post soft-deleted.", body = MessageResponse),
        (status = 404, description = "No active post under this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .post_commands
        .delete_post(DeletePostCommand { slug })
        .await
        .into_http()?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Post deleted successfully".into(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/posts/{slug}/publish",
    params(("slug" = String, Path, description = "Post slug")),
    request_body = PublishRequest,
    responses(
        (status = 200, description = "Publish state updated.", body = PostResponse),
        (status = 404, description = "No active post under this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn set_publish_state(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<PostResponse>> {
    let post = state
        .services
        .post_commands
        .set_publish_state(SetPublishStateCommand {
            slug,
            publish: payload.publish,
        })
        .await
        .into_http()?;

    Ok(Json(PostResponse {
        success: true,
        message: None,
        post,
    }))
}
