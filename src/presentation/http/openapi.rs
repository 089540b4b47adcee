// src/presentation/http/openapi.rs
use axum::Router;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::routes::health,
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::get_post,
        crate::presentation::http::controllers::posts::update_post,
        crate::presentation::http::controllers::posts::delete_post,
        crate::presentation::http::controllers::posts::set_publish_state
    ),
    components(
        schemas(
            crate::presentation::http::routes::HealthResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::posts::CreatePostRequest,
            crate::presentation::http::controllers::posts::UpdatePostRequest,
            crate::presentation::http::controllers::posts::PublishRequest,
            crate::presentation::http::controllers::posts::PostListResponse,
            crate::presentation::http::controllers::posts::PostResponse,
            crate::presentation::http::controllers::posts::MessageResponse,
            crate::application::dto::PostDto,
            crate::application::dto::PaginationDto,
            crate::domain::post::PostStatus,
            crate::domain::post::Author,
            crate::domain::post::FeaturedImage
        )
    ),
    tags(
        (name = "Posts", description = "Post management endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Quillpress API",
        description = "Blog content-management backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Interactive API documentation plus the raw OpenAPI document.
pub fn docs_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
}
