mod builder;
mod document;
mod markdown;
mod paths;
pub mod pipeline;
mod render;
mod template;
mod title;
mod variables;
mod walk;

pub use builder::Builder;
pub use markdown::MarkdownError;
pub use paths::ProjectLayout;
