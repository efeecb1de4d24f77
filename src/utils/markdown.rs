/// Markdown rendering for server-provided legal documents (terms of
/// service and similar), which arrive as untrusted remote text.
use pulldown_cmark::{html, Options, Parser};

/// Render markdown to safe HTML
/// Uses pulldown-cmark for parsing and ammonia for sanitization
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    sanitize_html(&html_output)
}

/// Sanitize HTML using ammonia
///
/// The allowlist is deliberately narrower than a general article renderer:
/// legal documents are prose, so no images and no raw class/style hooks.
/// Note: "rel" is NOT in the "a" attributes because link_rel() handles it.
pub fn sanitize_html(html: &str) -> String {
    use ammonia::Builder;
    use maplit::{hashmap, hashset};

    Builder::default()
        .tags(hashset![
            "h1", "h2", "h3", "h4", "h5", "h6",
            "p", "br", "hr",
            "strong", "em", "s", "del",
            "a",
            "ul", "ol", "li",
            "blockquote",
            "code", "pre",
            "table", "thead", "tbody", "tr", "th", "td",
            "sup", "sub",
        ])
        .tag_attributes(hashmap![
            "a" => hashset!["href", "title"],
            "th" => hashset!["align"],
            "td" => hashset!["align"],
        ])
        .url_schemes(hashset!["http", "https", "mailto"])
        .link_rel(Some("noopener noreferrer"))
        .clean(html)
        .to_string()
}
