//! Highlighting a page from the link a result points at.

use scour::{highlight_from_url, keywords_from_url, ExclusionSet, MatchOptions, MemoryTree, ParentInfo};

/// `<article><h1>..</h1><p>..</p><button>..</button><div class="mermaid">..</div></article>`
fn page() -> MemoryTree {
    let mut tree = MemoryTree::new("article");
    let root = tree.root();
    let h1 = tree.append_element(root, ParentInfo::new("h1"));
    tree.append_text(h1, "Async Rust in practice");
    let p = tree.append_element(root, ParentInfo::new("p"));
    tree.append_text(p, "Tokio is the usual async runtime & more.");
    let button = tree.append_element(root, ParentInfo::new("button"));
    tree.append_text(button, "Copy async snippet");
    let diagram = tree.append_element(root, ParentInfo::new("div").with_classes(["mermaid"]));
    tree.append_text(diagram, "graph async --> tokio");
    tree
}

fn highlight_page(tree: &mut MemoryTree, url: &str, options: MatchOptions) -> usize {
    match highlight_from_url(tree, url, options, &ExclusionSet::default()) {
        Ok(marks) => marks,
        Err(never) => match never {},
    }
}

#[test]
fn test_result_link_keywords_are_marked() {
    let mut tree = page();
    let before = tree.text_content(tree.root());

    let url = "https://blog.example/posts/async-rust/?highlight=async+tokio";
    assert_eq!(keywords_from_url(url), vec!["async", "tokio"]);
    let marks = highlight_page(&mut tree, url, MatchOptions::default());

    assert_eq!(marks, 3);
    assert_eq!(tree.text_content(tree.root()), before);
    let html = tree.to_html(tree.root());
    assert!(html.contains("<h1><mark class=\"search-keyword\">Async</mark> Rust in practice</h1>"));
    assert!(html.contains("<button>Copy async snippet</button>"));
    assert!(html.contains("<div class=\"mermaid\">graph async --&gt; tokio</div>"));
}

#[test]
fn test_page_without_highlight_param_is_untouched() {
    let mut tree = page();
    let before = tree.to_html(tree.root());
    assert_eq!(highlight_page(&mut tree, "/posts/async-rust/", MatchOptions::default()), 0);
    assert_eq!(tree.to_html(tree.root()), before);
}

#[test]
fn test_unescaped_keywords_skip_plain_ampersands() {
    let mut tree = page();
    let url = "/posts/async-rust/?highlight=%26";
    assert_eq!(highlight_page(&mut tree, url, MatchOptions::with_unescape(true)), 0);
    assert_eq!(highlight_page(&mut tree, url, MatchOptions::default()), 1);
}
