mod create;
mod delete;
mod publish;
mod service;
mod update;
mod view;

pub use create::CreatePostCommand;
pub use delete::DeletePostCommand;
pub use publish::SetPublishStateCommand;
pub use service::PostCommandService;
pub use update::UpdatePostCommand;
pub use view::RecordPostViewCommand;
