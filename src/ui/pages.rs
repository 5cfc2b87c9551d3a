//! Route pages.

use maud::{Markup, Render, html};

use crate::ui::components::Link;

/// Inline style of each page's `<main>` container.
pub const PAGE_STYLE: &str = "padding:2rem;font-family:sans-serif";

/// Content for the root route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LandingPage;

impl LandingPage {
    pub const HEADING: &'static str = "🔥 HAK Empire v8.1";
    pub const WELCOME: &'static str = "Welcome to the fully‑automated empire platform.";
    pub const HEALTH_LINK: Link = Link::new("/api/health", "Health check");
}

impl Render for LandingPage {
    fn render(&self) -> Markup {
        html! {
            main style=(PAGE_STYLE) {
                h1 { (Self::HEADING) }
                p { (Self::WELCOME) }
                p { (Self::HEALTH_LINK) }
            }
        }
    }
}

/// Content for unresolved routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotFoundPage;

impl Render for NotFoundPage {
    fn render(&self) -> Markup {
        html! {
            main style=(PAGE_STYLE) {
                h1 { "404" }
                p { "Page not found" }
                p { (Link::new("/", "Go home")) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_page_structure() {
        assert_eq!(
            LandingPage.render().into_string(),
            concat!(
                "<main style=\"padding:2rem;font-family:sans-serif\">",
                "<h1>🔥 HAK Empire v8.1</h1>",
                "<p>Welcome to the fully‑automated empire platform.</p>",
                "<p><a href=\"/api/health\">Health check</a></p>",
                "</main>",
            )
        );
    }

    #[test]
    fn test_landing_page_single_health_link() {
        let html = LandingPage.render().into_string();
        assert_eq!(html.matches("<a ").count(), 1);
        assert_eq!(LandingPage::HEALTH_LINK.href(), "/api/health");
        assert_eq!(LandingPage::HEALTH_LINK.label(), "Health check");
    }

    #[test]
    fn test_landing_page_is_deterministic() {
        assert_eq!(
            LandingPage.render().into_string(),
            LandingPage.render().into_string()
        );
    }

    #[test]
    fn test_not_found_page_links_home() {
        let html = NotFoundPage.render().into_string();
        assert!(html.contains("<h1>404</h1>"));
        assert!(html.contains("<a href=\"/\">Go home</a>"));
    }
}
