//! Root layout applied to every page.

use maud::{DOCTYPE, Markup, Render, html};

/// Static page metadata placed in the document head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    pub title: &'static str,
    pub description: &'static str,
}

/// Site-wide metadata.
pub const METADATA: Metadata = Metadata {
    title: "HAK Empire v8.1",
    description: "Fully‑automated empire platform",
};

/// Inline style of `<body>`.
pub const BODY_STYLE: &str = "margin:0;font-family:sans-serif";

/// Document shell wrapping page content.
///
/// Built once at startup and shared by all handlers. [`wrap`](Self::wrap) is
/// pure: the child is rendered and nested in `<body>` as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootLayout {
    metadata: Metadata,
    stylesheet: Option<String>,
}

impl Default for RootLayout {
    fn default() -> Self {
        Self::new(METADATA)
    }
}

impl RootLayout {
    pub fn new(metadata: Metadata) -> Self {
        Self {
            metadata,
            stylesheet: None,
        }
    }

    /// Link an external stylesheet from the head.
    #[must_use]
    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet = Some(href.into());
        self
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn stylesheet(&self) -> Option<&str> {
        self.stylesheet.as_deref()
    }

    /// Wrap `children` in the full `<html>` document, doctype included.
    pub fn wrap(&self, children: impl Render) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (self.metadata.title) }
                    meta name="description" content=(self.metadata.description);
                    @if let Some(href) = &self.stylesheet {
                        link rel="stylesheet" href=(href);
                    }
                }
                body style=(BODY_STYLE) {
                    (children)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maud::PreEscaped;

    fn body_inner(document: &str) -> &str {
        let open = format!("<body style=\"{BODY_STYLE}\">");
        let start = document.find(&open).unwrap() + open.len();
        let end = document.rfind("</body>").unwrap();
        &document[start..end]
    }

    #[test]
    fn test_metadata_values() {
        assert_eq!(METADATA.title, "HAK Empire v8.1");
        assert_eq!(METADATA.description, "Fully‑automated empire platform");
    }

    #[test]
    fn test_html_lang_and_body_style() {
        let doc = RootLayout::default().wrap("content").into_string();
        assert!(doc.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
        assert!(doc.contains("<body style=\"margin:0;font-family:sans-serif\">"));
        assert!(doc.ends_with("</body></html>"));
    }

    #[test]
    fn test_child_nested_once_unmodified() {
        let children = [
            PreEscaped("<section id=\"x\">inner</section>".to_string()),
            PreEscaped("<p>a</p><p>b</p>".to_string()),
            PreEscaped(String::new()),
        ];
        for child in children {
            let doc = RootLayout::default().wrap(&child).into_string();
            assert_eq!(body_inner(&doc), child.0);
        }
    }

    #[test]
    fn test_text_child_is_escaped() {
        let doc = RootLayout::default().wrap("plain <text>").into_string();
        assert_eq!(body_inner(&doc), "plain &lt;text&gt;");
    }

    #[test]
    fn test_wrap_is_pure() {
        let layout = RootLayout::default();
        assert_eq!(
            layout.wrap("same").into_string(),
            layout.wrap("same").into_string()
        );
    }

    #[test]
    fn test_head_carries_metadata() {
        let doc = RootLayout::default().wrap("x").into_string();
        assert!(doc.contains("<meta charset=\"utf-8\">"));
        assert!(doc.contains("<title>HAK Empire v8.1</title>"));
        assert!(doc.contains(
            "<meta name=\"description\" content=\"Fully‑automated empire platform\">"
        ));
    }

    #[test]
    fn test_stylesheet_is_optional() {
        let plain = RootLayout::default().wrap("x").into_string();
        assert!(!plain.contains("<link"));

        let styled = RootLayout::default()
            .with_stylesheet("/static/globals.css")
            .wrap("x")
            .into_string();
        assert!(styled.contains("<link rel=\"stylesheet\" href=\"/static/globals.css\">"));
    }
}
