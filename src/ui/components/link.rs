//! Navigational link component.

use maud::{Markup, Render, html};

/// Declarative reference to another route.
///
/// Rendering never performs the request; following the link is left to the
/// browser.
///
/// # Example
///
/// ```rust,ignore
/// let link = Link::new("/api/health", "Health check");
/// assert_eq!(link.render().into_string(), r#"<a href="/api/health">Health check</a>"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    href: &'static str,
    label: &'static str,
}

impl Link {
    pub const fn new(href: &'static str, label: &'static str) -> Self {
        Self { href, label }
    }

    pub fn href(&self) -> &'static str {
        self.href
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl Render for Link {
    fn render(&self) -> Markup {
        html! {
            a href=(self.href) { (self.label) }
        }
    }
}
