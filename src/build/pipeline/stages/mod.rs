//! Default pipeline stages.
//!
//! The standard document processing pipeline consists of:
//!
//! 1. **MarkdownStage** - Convert the markdown body to HTML
//! 2. **TitleStage** - Resolve the display title
//! 3. **TemplateStage** - Choose the page template
//! 4. **ContentStage** - Substitute variables in the rendered HTML
//! 5. **PageStage** - Wrap content in the page template
//! 6. **WriteStage** - Write final HTML to the build directory

mod content;
mod markdown;
mod page;
mod template;
mod title;
mod write;

pub use content::ContentStage;
pub use markdown::MarkdownStage;
pub use page::PageStage;
pub use template::TemplateStage;
pub use title::TitleStage;
pub use write::WriteStage;
