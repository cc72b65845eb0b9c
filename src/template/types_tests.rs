use super::*;
use crate::link::parse_tags;

#[test]
fn test_page_names() {
    assert_eq!(Page::List.name(), "list");
    assert_eq!(Page::Add.file_name(), "add.hbs");
    assert_eq!(Page::Edit.file_name(), "edit.hbs");
}

#[test]
fn test_link_view_encodes_hrefs() {
    let link = Link::new("http://example.com/?a=1&b=2", parse_tags("c++,web dev"), "");
    let view = LinkView::from(&link);
    assert_eq!(
        view.edit_href,
        "/edit?url=http%3A%2F%2Fexample.com%2F%3Fa%3D1%26b%3D2"
    );
    assert_eq!(view.tags[0].href, "/search?tag=c%2B%2B");
    assert_eq!(view.tags[1].href, "/search?tag=web+dev");
    assert_eq!(view.tags_text, "c++,web dev");
}

#[test]
fn test_link_view_skips_empty_tag_links() {
    let link = Link::new("http://example.com", parse_tags(""), "");
    let view = LinkView::from(&link);
    assert!(view.tags.is_empty());
    assert_eq!(view.tags_text, "");
}

#[test]
fn test_list_context_counts_links() {
    let links = vec![
        Link::new("http://a.example", vec![], ""),
        Link::new("http://b.example", vec![], ""),
    ];
    let ctx = ListContext::new("Links", "/", &links);
    assert_eq!(ctx.count, 2);
    assert!(ctx.heading.is_none());

    let ctx = ctx.with_search("go".to_string(), "Search: go".to_string());
    assert_eq!(ctx.query, "go");
    assert_eq!(ctx.heading.as_deref(), Some("Search: go"));
}

#[test]
fn test_edit_context_prefills_from_link() {
    let link = Link::new("http://example.com", parse_tags("a,b"), "hi");
    let ctx = EditContext::new("Links", "/", "http://example.com", Some(&link));
    assert_eq!(ctx.url, "http://example.com");
    assert_eq!(ctx.tag_string, "a,b");
    assert_eq!(ctx.notes, "hi");
}

#[test]
fn test_edit_context_for_unknown_url() {
    let ctx = EditContext::new("Links", "/", "http://new.example", None);
    assert_eq!(ctx.url, "http://new.example");
    assert!(ctx.tag_string.is_empty());
    assert!(ctx.notes.is_empty());
}

#[test]
fn test_link_view_keeps_web_hrefs() {
    let view = LinkView::from(&Link::new("https://example.com/a?b=c", vec![], ""));
    assert_eq!(view.href, "https://example.com/a?b=c");

    let view = LinkView::from(&Link::new("mailto:me@example.com", vec![], ""));
    assert_eq!(view.href, "mailto:me@example.com");

    let view = LinkView::from(&Link::new("/local/page", vec![], ""));
    assert_eq!(view.href, "/local/page");
}

#[test]
fn test_link_view_neutralises_script_hrefs() {
    for raw in [
        "javascript:alert(document.cookie)",
        "JavaScript:alert(1)",
        "  javascript:alert(1)",
        "data:text/html,<script>alert(1)</script>",
        "vbscript:msgbox(1)",
    ] {
        let view = LinkView::from(&Link::new(raw, vec![], ""));
        assert_eq!(view.href, "#", "{raw}");
        assert_eq!(view.url, raw);
    }
}
