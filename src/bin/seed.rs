// src/bin/seed.rs
//
// Resets the posts table and loads sample content through the regular
// create operation, so slugs, excerpts, and read times are derived exactly
// as they would be for API-created posts.
//
// Usage: cargo run --bin seed

use std::sync::Arc;

use anyhow::Result;
use quillpress::application::{
    commands::posts::CreatePostCommand,
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use quillpress::config::AppConfig;
use quillpress::domain::post::{
    PostFilter, PostReadRepository, PostStatus, PostWriteRepository,
};
use quillpress::infrastructure::{
    database,
    repositories::{PostgresPostReadRepository, PostgresPostWriteRepository},
    time::SystemClock,
    util::DefaultSlugGenerator,
};

struct SamplePost {
    title: &'static str,
    meta_title: &'static str,
    meta_description: &'static str,
    content: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
}

const SAMPLE_POSTS: &[SamplePost] = &[
    SamplePost {
        title: "The Art of Clean Code Design: Principles Every Developer Should Know",
        meta_title: "Clean Code Design Principles - Best Practices",
        meta_description: "Learn essential clean code principles that every developer should know, from naming to single responsibility.",
        content: "<h2>Introduction to Clean Code</h2><p>Clean code is not just about making your code work. It is about making it readable, maintainable, and scalable. In this guide we explore the fundamental principles every developer should practice.</p><h3>Meaningful Names</h3><p>Names for variables, functions, and classes should be self-documenting and reveal intent.</p><h3>Single Responsibility</h3><p>Each function and class should have one reason to change. This keeps code easier to understand and modify.</p><h2>Conclusion</h2><p>Clean code is an investment in the future. It pays dividends in maintainability, readability, and team productivity.</p>",
        category: "Programming",
        tags: &["clean-code", "best-practices", "software-development"],
    },
    SamplePost {
        title: "Modern JavaScript Best Practices: ES6+ Features You Should Master",
        meta_title: "Modern JavaScript ES6+ Features and Best Practices",
        meta_description: "Master essential ES6+ JavaScript features including arrow functions, destructuring, and async/await.",
        content: "<h2>Introduction to Modern JavaScript</h2><p>JavaScript has evolved significantly over the years. With ES6 and beyond we have powerful features that make code more readable and efficient.</p><h3>Arrow Functions</h3><p>Arrow functions provide a concise syntax for function expressions, especially useful for short single-purpose functions.</p><h3>Async/Await</h3><p>Async and await make asynchronous code look and behave more like synchronous code.</p><h2>Conclusion</h2><p>By mastering these features you will write better, more efficient code.</p>",
        category: "JavaScript",
        tags: &["javascript", "es6", "web-development"],
    },
    SamplePost {
        title: "Building Scalable React Applications: Architecture Patterns and Best Practices",
        meta_title: "Scalable React Architecture Patterns",
        meta_description: "Learn how to build scalable React applications with proper architecture patterns and state management.",
        content: "<h2>Introduction to React Architecture</h2><p>As React applications grow in complexity, a solid architecture becomes crucial. This guide explores patterns that help build scalable, maintainable applications.</p><h3>Component Architecture</h3><p>Understanding the difference between presentational and container components is key to proper structure.</p><h3>State Management</h3><p>Choose local state for component data, context for shared state, and a dedicated store for complex global state.</p><h2>Conclusion</h2><p>Scalability requires careful consideration of architecture, state management, and performance.</p>",
        category: "React",
        tags: &["react", "architecture", "frontend"],
    },
    SamplePost {
        title: "Mastering CSS Grid and Flexbox: Modern Layout Techniques for Responsive Design",
        meta_title: "CSS Grid and Flexbox - Modern Layout Techniques",
        meta_description: "Master CSS Grid and Flexbox for creating responsive, modern web layouts with professional results.",
        content: "<h2>Introduction to Modern CSS Layout</h2><p>CSS Grid and Flexbox have revolutionized how we create layouts on the web. Understanding both layout systems is essential for building responsive applications.</p><h3>Flexbox Fundamentals</h3><p>Flexbox is designed for one-dimensional layouts and is perfect for navigation bars, card rows, and form elements.</p><h3>Grid Essentials</h3><p>CSS Grid handles two-dimensional layouts and excels at page structure and dashboards.</p><h2>Conclusion</h2><p>Use Grid for the big picture and Flexbox for the details, and always test on real devices.</p>",
        category: "CSS",
        tags: &["css", "grid", "flexbox", "responsive-design"],
    },
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sqlx=warn".to_string()),
        )
        .init();

    if let Err(err) = seed().await {
        tracing::error!(error = %err, "seeding failed");
        eprintln!("seeding failed: {err}");
        std::process::exit(1);
    }
}

async fn seed() -> Result<()> {
    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let read_repo: Arc<dyn PostReadRepository> =
        Arc::new(PostgresPostReadRepository::new(pool.clone()));
    let write_repo: Arc<dyn PostWriteRepository> =
        Arc::new(PostgresPostWriteRepository::new(pool.clone()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    // Wipe everything, soft-deleted rows included, before reseeding.
    let removed = write_repo
        .delete_many(&PostFilter {
            include_deleted: true,
            ..PostFilter::default()
        })
        .await?;
    tracing::info!(removed, "cleared existing posts");

    let services = ApplicationServices::new(
        Arc::clone(&write_repo),
        Arc::clone(&read_repo),
        clock,
        slugger,
    );

    for sample in SAMPLE_POSTS {
        let created = services
            .post_commands
            .create_post(CreatePostCommand {
                title: sample.title.to_string(),
                content: sample.content.to_string(),
                category: Some(sample.category.to_string()),
                tags: sample.tags.iter().map(ToString::to_string).collect(),
                status: Some(PostStatus::Published),
                meta_title: Some(sample.meta_title.to_string()),
                meta_description: Some(sample.meta_description.to_string()),
                ..CreatePostCommand::default()
            })
            .await?;
        tracing::info!(slug = %created.slug, "seeded post");
    }

    tracing::info!(count = SAMPLE_POSTS.len(), "seeding complete");
    Ok(())
}
