// Page context injected by the identity provider

pub mod page_context;

pub use page_context::{terms_source, MessageKind, PageContext};
