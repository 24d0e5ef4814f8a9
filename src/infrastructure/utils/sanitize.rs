use ammonia::{Builder, UrlRelative};

/// Strips unsafe markup from HTML-bearing text such as job descriptions.
/// Links get `rel="nofollow noopener noreferrer"` and relative URLs are
/// dropped.
pub fn sanitize_rich_text(content: &str) -> String {
    Builder::default()
        .link_rel(Some("nofollow noopener noreferrer"))
        .url_relative(UrlRelative::Deny)
        .clean(content)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(sanitize_rich_text("Senior Rust Engineer"), "Senior Rust Engineer");
    }

    #[test]
    fn links_are_marked_nofollow() {
        let clean = sanitize_rich_text(r#"<a href="https://jobs.test/apply">Apply</a>"#);
        assert!(clean.contains(r#"rel="nofollow noopener noreferrer""#));
    }

    #[test]
    fn relative_links_lose_their_href() {
        let clean = sanitize_rich_text(r#"<a href="/internal">Apply</a>"#);
        assert!(!clean.contains("/internal"));
    }
}
