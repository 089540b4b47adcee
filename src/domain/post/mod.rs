pub mod entity;
pub mod repository;
pub mod services;
pub mod text;
pub mod value_objects;

pub use entity::{NewPost, Post, PostPatch};
pub use repository::{
    PostFilter, PostReadRepository, PostSort, PostSortField, PostWriteRepository, SortOrder,
};
pub use value_objects::{Author, FeaturedImage, PostContent, PostId, PostSlug, PostStatus, PostTitle};
