//! Resolved wikilink metadata.

use std::sync::Arc;

use crate::page::Page;

/// Target URL of a wikilink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Href {
    /// No link should be rendered; the literal link text is emitted instead.
    NoLink,
    /// Resolved URL of the target.
    Resolved(String),
}

impl Href {
    pub fn resolved(url: impl Into<String>) -> Self {
        Self::Resolved(url.into())
    }

    pub fn as_url(&self) -> Option<&str> {
        match self {
            Self::NoLink => None,
            Self::Resolved(url) => Some(url.as_str()),
        }
    }
}

/// A single wikilink occurrence after lookup against the page index.
///
/// Built by the link resolution stage and read, never modified, by the
/// resolvers.
#[derive(Debug, Clone)]
pub struct WikilinkMeta {
    /// Canonical identifier of the target.
    pub name: String,
    /// Display title overriding the name.
    pub title: Option<String>,
    pub href: Href,
    /// Fragment appended to the href.
    pub anchor: Option<String>,
    /// Whether the target page exists in the site.
    pub exists: bool,
    /// Target page, present only when it exists.
    pub page: Option<Arc<Page>>,
    /// Literal text emitted when no href is produced.
    pub link: String,
}

impl WikilinkMeta {
    /// Creates metadata for a link that resolved to no target yet.
    ///
    /// The href is [`Href::NoLink`] and the fallback text is `[[name]]`
    /// until overridden.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let link = format!("[[{}]]", name);
        Self {
            name,
            title: None,
            href: Href::NoLink,
            anchor: None,
            exists: false,
            page: None,
            link,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_href(mut self, href: Href) -> Self {
        self.href = href;
        self
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Attaches the target page and marks the link as existing.
    pub fn with_page(mut self, page: Arc<Page>) -> Self {
        self.page = Some(page);
        self.exists = true;
        self
    }

    /// Returns the title when set, otherwise the name.
    pub fn display_text(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    /// Returns the href with `#anchor` appended when an anchor is set.
    ///
    /// Empty anchors are ignored. Returns `None` for [`Href::NoLink`].
    pub fn effective_href(&self) -> Option<String> {
        let url = self.href.as_url()?;
        match self.anchor.as_deref() {
            Some(anchor) if !anchor.is_empty() => Some(format!("{}#{}", url, anchor)),
            _ => Some(url.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        // Arrange & Act
        let link = WikilinkMeta::new("Home");

        // Assert
        assert_eq!(link.name, "Home");
        assert_eq!(link.href, Href::NoLink);
        assert_eq!(link.link, "[[Home]]");
        assert!(!link.exists);
        assert!(link.page.is_none());
    }

    #[test]
    fn test_display_text_prefers_title() {
        // Arrange
        let link = WikilinkMeta::new("home").with_title("Home Page");

        // Act & Assert
        assert_eq!(link.display_text(), "Home Page");
        assert_eq!(WikilinkMeta::new("home").display_text(), "home");
    }

    #[test]
    fn test_display_text_keeps_empty_title() {
        // Arrange
        let link = WikilinkMeta::new("home").with_title("");

        // Act & Assert
        assert_eq!(link.display_text(), "", "Only a missing title falls back");
    }

    #[test]
    fn test_effective_href_with_anchor() {
        // Arrange
        let link = WikilinkMeta::new("Home")
            .with_href(Href::resolved("/home"))
            .with_anchor("top");

        // Act & Assert
        assert_eq!(link.effective_href().as_deref(), Some("/home#top"));
    }

    #[test]
    fn test_effective_href_ignores_empty_anchor() {
        // Arrange
        let link = WikilinkMeta::new("Home")
            .with_href(Href::resolved("/home"))
            .with_anchor("");

        // Act & Assert
        assert_eq!(link.effective_href().as_deref(), Some("/home"));
    }

    #[test]
    fn test_effective_href_no_link() {
        // Arrange
        let link = WikilinkMeta::new("Home").with_anchor("top");

        // Act & Assert
        assert!(link.effective_href().is_none());
    }
}
