// tests/support/mod.rs
#![allow(dead_code, unused_imports)]

pub mod builders;
pub mod mocks;

use std::sync::Arc;

use axum::Router;
use quillpress::application::ports::time::Clock;
use quillpress::application::services::ApplicationServices;
use quillpress::domain::post::{PostReadRepository, PostWriteRepository};
use quillpress::presentation::http::{routes::build_router, state::HttpState};

use self::mocks::{FixedClock, InMemoryPostRepo};

pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub repo: Arc<InMemoryPostRepo>,
    pub clock: Arc<FixedClock>,
}

/// Services wired against the in-memory repository and a fixed clock.
pub fn make_services() -> TestContext {
    let repo = Arc::new(InMemoryPostRepo::new());
    let clock = Arc::new(FixedClock::new());
    let slugger = Arc::new(quillpress::infrastructure::util::DefaultSlugGenerator);
    let write_repo: Arc<dyn PostWriteRepository> = Arc::clone(&repo) as _;
    let read_repo: Arc<dyn PostReadRepository> = Arc::clone(&repo) as _;
    let test_clock: Arc<dyn Clock> = Arc::clone(&clock) as _;
    let services = Arc::new(ApplicationServices::new(
        write_repo,
        read_repo,
        test_clock,
        slugger,
    ));
    TestContext {
        services,
        repo,
        clock,
    }
}

/// Full HTTP router backed by the in-memory stack, for oneshot requests.
pub fn make_test_router() -> (Router, TestContext) {
    let ctx = make_services();
    let router = build_router(
        HttpState {
            services: Arc::clone(&ctx.services),
        },
        &[],
    );
    (router, ctx)
}
