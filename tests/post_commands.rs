// tests/post_commands.rs
mod support;

use chrono::Duration;
use quillpress::application::commands::posts::{
    CreatePostCommand, DeletePostCommand, RecordPostViewCommand, SetPublishStateCommand,
    UpdatePostCommand,
};
use quillpress::application::error::ApplicationError;
use quillpress::application::ports::time::Clock;
use quillpress::domain::errors::DomainError;
use quillpress::domain::post::PostStatus;

use support::make_services;
use support::mocks::fixed_now;

fn create(title: &str) -> CreatePostCommand {
    CreatePostCommand {
        title: title.into(),
        content: "<p>Hello there, this is long enough content for a post.</p>".into(),
        ..CreatePostCommand::default()
    }
}

#[tokio::test]
async fn create_derives_slug_and_metadata() {
    let ctx = make_services();
    let dto = ctx
        .services
        .post_commands
        .create_post(create("My First Post!"))
        .await
        .unwrap();

    assert_eq!(dto.slug, "my-first-post");
    assert_eq!(dto.status, PostStatus::Draft);
    assert!(dto.published_at.is_none());
    assert_eq!(dto.meta_title, "My First Post!");
    assert_eq!(
        dto.meta_description,
        "Hello there, this is long enough content for a post."
    );
    assert_eq!(dto.read_time, 1);
    assert_eq!(dto.category, "Uncategorized");
    assert_eq!(dto.author.name, "Admin");
    assert_eq!(dto.view_count, 0);
    assert_eq!(dto.created_at, fixed_now());
}

#[tokio::test]
async fn create_published_stamps_published_at() {
    let ctx = make_services();
    let dto = ctx
        .services
        .post_commands
        .create_post(CreatePostCommand {
            status: Some(PostStatus::Published),
            ..create("Launch Day")
        })
        .await
        .unwrap();

    assert_eq!(dto.status, PostStatus::Published);
    assert_eq!(dto.published_at, Some(fixed_now()));
}

#[tokio::test]
async fn duplicate_titles_get_numeric_suffixes() {
    let ctx = make_services();
    let commands = &ctx.services.post_commands;

    let first = commands.create_post(create("Same Title")).await.unwrap();
    let second = commands.create_post(create("Same Title")).await.unwrap();
    let third = commands.create_post(create("Same Title")).await.unwrap();

    assert_eq!(first.slug, "same-title");
    assert_eq!(second.slug, "same-title-1");
    assert_eq!(third.slug, "same-title-2");
}

#[tokio::test]
async fn custom_slug_is_honoured_and_probed() {
    let ctx = make_services();
    let commands = &ctx.services.post_commands;

    let first = commands
        .create_post(CreatePostCommand {
            slug: Some("hand-picked".into()),
            ..create("A Title")
        })
        .await
        .unwrap();
    let second = commands
        .create_post(CreatePostCommand {
            slug: Some("hand-picked".into()),
            ..create("Another Title")
        })
        .await
        .unwrap();

    assert_eq!(first.slug, "hand-picked");
    assert_eq!(second.slug, "hand-picked-1");
}

#[tokio::test]
async fn create_rejects_malformed_custom_slug() {
    let ctx = make_services();
    let err = ctx
        .services
        .post_commands
        .create_post(CreatePostCommand {
            slug: Some("Not A Slug".into()),
            ..create("A Title")
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn create_validates_title_and_content() {
    let ctx = make_services();
    let commands = &ctx.services.post_commands;

    let err = commands
        .create_post(CreatePostCommand {
            title: "Hi".into(),
            content: "Long enough content here.".into(),
            ..CreatePostCommand::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(ref msg))
            if msg == "Title must be between 3 and 200 characters"
    ));

    let err = commands
        .create_post(CreatePostCommand {
            title: "Valid Title".into(),
            content: "short".into(),
            ..CreatePostCommand::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(ref msg))
            if msg == "Content must be at least 10 characters"
    ));
}

#[tokio::test]
async fn create_normalizes_tags_and_keywords() {
    let ctx = make_services();
    let dto = ctx
        .services
        .post_commands
        .create_post(CreatePostCommand {
            tags: vec!["  Rust ".into(), "WEB".into(), "rust".into(), "".into()],
            keywords: vec!["Blog".into(), "blog".into()],
            ..create("Tagged Post")
        })
        .await
        .unwrap();

    assert_eq!(dto.tags, vec!["rust", "web"]);
    assert_eq!(dto.keywords, vec!["blog"]);
}

#[tokio::test]
async fn create_truncates_long_meta_description() {
    let ctx = make_services();
    let word = "word ".repeat(80);
    let dto = ctx
        .services
        .post_commands
        .create_post(CreatePostCommand {
            title: "Long Read".into(),
            content: format!("<p>{word}</p>"),
            ..CreatePostCommand::default()
        })
        .await
        .unwrap();

    assert!(dto.meta_description.ends_with("..."));
    assert!(dto.meta_description.chars().count() <= 163);
}

fn update(slug: &str, title: &str) -> UpdatePostCommand {
    UpdatePostCommand {
        slug: slug.into(),
        title: title.into(),
        content: "<p>Hello there, this is long enough content for a post.</p>".into(),
        new_slug: None,
        category: None,
        tags: None,
        status: None,
        meta_title: None,
        meta_description: None,
        keywords: None,
        featured_image: None,
    }
}

#[tokio::test]
async fn update_keeps_slug_unless_explicitly_changed() {
    let ctx = make_services();
    let commands = &ctx.services.post_commands;
    commands.create_post(create("Original Title")).await.unwrap();

    // Title edit alone never touches the slug.
    let dto = commands
        .update_post(update("original-title", "A Fully Renamed Title"))
        .await
        .unwrap();
    assert_eq!(dto.slug, "original-title");
    assert_eq!(dto.title, "A Fully Renamed Title");

    // A new slug alongside a changed title is applied.
    let dto = commands
        .update_post(UpdatePostCommand {
            new_slug: Some("Renamed Again".into()),
            ..update("original-title", "Renamed Once More")
        })
        .await
        .unwrap();
    assert_eq!(dto.slug, "renamed-again");
}

#[tokio::test]
async fn update_ignores_new_slug_when_title_unchanged() {
    let ctx = make_services();
    let commands = &ctx.services.post_commands;
    commands.create_post(create("Stable Title")).await.unwrap();

    let dto = commands
        .update_post(UpdatePostCommand {
            new_slug: Some("different-slug".into()),
            ..update("stable-title", "Stable Title")
        })
        .await
        .unwrap();

    assert_eq!(dto.slug, "stable-title");
}

#[tokio::test]
async fn update_rejects_conflicting_slug() {
    let ctx = make_services();
    let commands = &ctx.services.post_commands;
    commands.create_post(create("First Post")).await.unwrap();
    commands.create_post(create("Second Post")).await.unwrap();

    let err = commands
        .update_post(UpdatePostCommand {
            new_slug: Some("first-post".into()),
            ..update("second-post", "Second Post Renamed")
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Conflict(_)));
}

#[tokio::test]
async fn update_missing_post_is_not_found() {
    let ctx = make_services();
    let err = ctx
        .services
        .post_commands
        .update_post(update("no-such-post", "Whatever Title"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(ref msg) if msg == "Post not found"));
}

#[tokio::test]
async fn first_publish_through_update_stamps_once() {
    let ctx = make_services();
    let commands = &ctx.services.post_commands;
    commands.create_post(create("Draft Piece")).await.unwrap();

    ctx.clock.advance(Duration::hours(1));
    let first_publish = ctx.clock.now();
    let dto = commands
        .update_post(UpdatePostCommand {
            status: Some(PostStatus::Published),
            ..update("draft-piece", "Draft Piece")
        })
        .await
        .unwrap();
    assert_eq!(dto.published_at, Some(first_publish));

    // Back to draft and published again later; the original date survives.
    ctx.clock.advance(Duration::hours(1));
    commands
        .update_post(UpdatePostCommand {
            status: Some(PostStatus::Draft),
            ..update("draft-piece", "Draft Piece")
        })
        .await
        .unwrap();

    ctx.clock.advance(Duration::hours(1));
    let dto = commands
        .update_post(UpdatePostCommand {
            status: Some(PostStatus::Published),
            ..update("draft-piece", "Draft Piece")
        })
        .await
        .unwrap();
    assert_eq!(dto.published_at, Some(first_publish));
}

#[tokio::test]
async fn publish_toggle_restamps_and_clears() {
    let ctx = make_services();
    let commands = &ctx.services.post_commands;
    commands
        .create_post(CreatePostCommand {
            status: Some(PostStatus::Published),
            ..create("Toggled Post")
        })
        .await
        .unwrap();

    ctx.clock.advance(Duration::days(1));
    let later = ctx.clock.now();
    let dto = commands
        .set_publish_state(SetPublishStateCommand {
            slug: "toggled-post".into(),
            publish: true,
        })
        .await
        .unwrap();
    assert_eq!(dto.published_at, Some(later));

    let dto = commands
        .set_publish_state(SetPublishStateCommand {
            slug: "toggled-post".into(),
            publish: false,
        })
        .await
        .unwrap();
    assert_eq!(dto.status, PostStatus::Draft);
    assert!(dto.published_at.is_none());
}

#[tokio::test]
async fn soft_delete_hides_post_and_frees_slug() {
    let ctx = make_services();
    let commands = &ctx.services.post_commands;
    let created = commands.create_post(create("Short Lived")).await.unwrap();

    commands
        .delete_post(DeletePostCommand {
            slug: "short-lived".into(),
        })
        .await
        .unwrap();

    // Hidden from reads and from the publish toggle.
    let err = commands
        .set_publish_state(SetPublishStateCommand {
            slug: "short-lived".into(),
            publish: true,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    // The row survives with its deletion markers.
    let stored = ctx
        .repo
        .snapshot()
        .into_iter()
        .find(|p| i64::from(p.id) == created.id)
        .unwrap();
    assert!(stored.is_deleted());
    assert_eq!(stored.status, PostStatus::Archived);

    // The slug is free again for new posts.
    let replacement = commands.create_post(create("Short Lived")).await.unwrap();
    assert_eq!(replacement.slug, "short-lived");
}

#[tokio::test]
async fn delete_twice_is_not_found() {
    let ctx = make_services();
    let commands = &ctx.services.post_commands;
    commands.create_post(create("One Shot")).await.unwrap();

    commands
        .delete_post(DeletePostCommand {
            slug: "one-shot".into(),
        })
        .await
        .unwrap();
    let err = commands
        .delete_post(DeletePostCommand {
            slug: "one-shot".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn record_view_increments_counter() {
    let ctx = make_services();
    let commands = &ctx.services.post_commands;
    let created = commands.create_post(create("Counted Post")).await.unwrap();

    let dto = commands
        .record_view(RecordPostViewCommand { id: created.id })
        .await
        .unwrap();
    assert_eq!(dto.view_count, 1);

    let dto = commands
        .record_view(RecordPostViewCommand { id: created.id })
        .await
        .unwrap();
    assert_eq!(dto.view_count, 2);
}

#[tokio::test]
async fn record_view_skips_deleted_posts() {
    let ctx = make_services();
    let commands = &ctx.services.post_commands;
    let created = commands.create_post(create("Gone Post")).await.unwrap();
    commands
        .delete_post(DeletePostCommand {
            slug: "gone-post".into(),
        })
        .await
        .unwrap();

    let err = commands
        .record_view(RecordPostViewCommand { id: created.id })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::NotFound(_))));
}
