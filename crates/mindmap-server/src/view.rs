//! Server-rendered HTML tree of all apps.

use mindmap_types::{PrettyApp, PrettyLeaf};

use crate::openapi::API_TITLE;

/// Render the index page: one section per app, each leaf as nested lists of
/// its path segments with the text at the innermost level.
pub fn render_index(apps: &[PrettyApp]) -> String {
    let mut body = String::new();
    if apps.is_empty() {
        body.push_str("<p>No apps yet.</p>");
    }
    for app in apps {
        body.push_str(&format!(
            "<section class=\"app\"><h2>{}</h2><ul>",
            escape(&app.id)
        ));
        for leaf in &app.data {
            body.push_str("<li>");
            render_leaf(&mut body, leaf);
            body.push_str("</li>");
        }
        body.push_str("</ul></section>");
    }

    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{title}</title></head><body>\
<h1>{title}</h1>{body}</body></html>",
        title = API_TITLE,
    )
}

fn render_leaf(out: &mut String, leaf: &PrettyLeaf) {
    for segment in &leaf.path {
        out.push_str(&format!(
            "<ul><li><span class=\"segment\">{}</span>",
            escape(segment)
        ));
    }
    if let Some(text) = &leaf.text {
        out.push_str(&format!("<p class=\"text\">{}</p>", escape(text)));
    }
    for _ in &leaf.path {
        out.push_str("</li></ul>");
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pretty(id: &str, path: &[&str], text: Option<&str>) -> PrettyApp {
        PrettyApp {
            id: id.into(),
            data: vec![PrettyLeaf {
                path: path.iter().map(|s| s.to_string()).collect(),
                text: text.map(str::to_owned),
            }],
        }
    }

    #[test]
    fn renders_nested_segments() {
        let html = render_index(&[pretty("app-0", &["i", "like", "potatoes"], Some("Because reasons"))]);
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<h2>app-0</h2>"));
        assert!(html.contains(
            "<ul><li><span class=\"segment\">i</span><ul><li><span class=\"segment\">like</span>"
        ));
        assert!(html.contains("<p class=\"text\">Because reasons</p></li></ul></li></ul></li></ul>"));
    }

    #[test]
    fn escapes_user_text() {
        let html = render_index(&[pretty("<b>", &["a&b"], Some("\"x\""))]);
        assert!(html.contains("<h2>&lt;b&gt;</h2>"));
        assert!(html.contains("a&amp;b"));
        assert!(html.contains("&quot;x&quot;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn empty_page() {
        let html = render_index(&[]);
        assert!(html.contains("No apps yet."));
    }

    #[test]
    fn leaf_without_path_or_text() {
        let html = render_index(&[pretty("bare", &[], None)]);
        assert!(html.contains("<ul><li></li></ul>"));
    }
}
