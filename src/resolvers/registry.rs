//! Named resolver registry and dispatch by link kind.

use anyhow::{Result, bail};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use super::{resolve_embed, resolve_image, resolve_link};
use crate::link::WikilinkMeta;
use crate::page::Page;
use crate::render::RenderContext;

/// Kind of wikilink occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// `[[Page]]`
    Link,
    /// `![[Page]]`
    Embed,
    /// `![[image.png]]`
    Image,
}

impl LinkKind {
    /// Name of the resolver registered for this kind by default.
    pub fn default_resolver(self) -> &'static str {
        match self {
            Self::Link => "default",
            Self::Embed => "default-embed",
            Self::Image => "default-image-embed",
        }
    }
}

/// A function turning a wikilink into its replacement HTML.
///
/// `None` means the wikilink produces no replacement.
#[async_trait]
pub trait Resolve: Send + Sync {
    async fn resolve(
        &self,
        link: &WikilinkMeta,
        current_page: &Page,
        ctx: &RenderContext,
    ) -> Result<Option<String>>;
}

/// Renders plain wikilinks with [`resolve_link`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLinkResolver;

#[async_trait]
impl Resolve for DefaultLinkResolver {
    async fn resolve(
        &self,
        link: &WikilinkMeta,
        current_page: &Page,
        ctx: &RenderContext,
    ) -> Result<Option<String>> {
        Ok(Some(resolve_link(link, current_page, ctx)))
    }
}

/// Renders page embeds with [`resolve_embed`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEmbedResolver;

#[async_trait]
impl Resolve for DefaultEmbedResolver {
    async fn resolve(
        &self,
        link: &WikilinkMeta,
        current_page: &Page,
        ctx: &RenderContext,
    ) -> Result<Option<String>> {
        resolve_embed(link, current_page, ctx).await
    }
}

/// Renders image embeds with [`resolve_image`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultImageResolver;

#[async_trait]
impl Resolve for DefaultImageResolver {
    async fn resolve(
        &self,
        link: &WikilinkMeta,
        current_page: &Page,
        ctx: &RenderContext,
    ) -> Result<Option<String>> {
        Ok(Some(resolve_image(link, current_page, ctx)))
    }
}

/// Resolvers by name.
///
/// Starts with the three default resolvers registered under the names
/// returned by [`LinkKind::default_resolver`]. Registering under one of
/// those names replaces the default for that kind.
#[derive(Clone)]
pub struct Resolvers {
    by_name: HashMap<String, Arc<dyn Resolve>>,
}

impl Default for Resolvers {
    fn default() -> Self {
        let mut resolvers = Self {
            by_name: HashMap::new(),
        };
        resolvers.register(LinkKind::Link.default_resolver(), Arc::new(DefaultLinkResolver));
        resolvers.register(LinkKind::Embed.default_resolver(), Arc::new(DefaultEmbedResolver));
        resolvers.register(LinkKind::Image.default_resolver(), Arc::new(DefaultImageResolver));
        resolvers
    }
}

impl Resolvers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers resolver under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, resolver: Arc<dyn Resolve>) {
        self.by_name.insert(name.into(), resolver);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolves wikilink with the resolver registered for its kind.
    ///
    /// # Errors
    ///
    /// Returns error if the kind's resolver was removed or the resolver fails.
    pub async fn resolve(
        &self,
        kind: LinkKind,
        link: &WikilinkMeta,
        current_page: &Page,
        ctx: &RenderContext,
    ) -> Result<Option<String>> {
        self.resolve_with(kind.default_resolver(), link, current_page, ctx)
            .await
    }

    /// Resolves wikilink with the resolver registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns error if no resolver has that name or the resolver fails.
    pub async fn resolve_with(
        &self,
        name: &str,
        link: &WikilinkMeta,
        current_page: &Page,
        ctx: &RenderContext,
    ) -> Result<Option<String>> {
        let Some(resolver) = self.by_name.get(name) else {
            bail!("Unknown resolver: {}", name);
        };

        debug!(resolver = name, link = %link.name, "Resolving wikilink");
        resolver.resolve(link, current_page, ctx).await
    }
}
