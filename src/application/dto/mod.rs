pub mod pagination;
pub mod posts;

pub use pagination::{Page, PaginationDto};
pub use posts::PostDto;
