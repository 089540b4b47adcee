// tests/support/mocks/mod.rs
pub mod post_repo;
pub mod time;

pub use post_repo::InMemoryPostRepo;
pub use time::{fixed_now, FixedClock};
