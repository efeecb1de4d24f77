// UI Components
// Building blocks shared by the login screens

pub mod markdown_content;
pub mod template;

pub use markdown_content::MarkdownContent;
pub use template::Template;
