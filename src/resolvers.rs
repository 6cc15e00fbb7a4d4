//! Wikilink resolvers.
//!
//! Each resolver turns one resolved wikilink into the HTML fragment that
//! replaces it in the rendered page: an anchor or dead link marker, the
//! rendered body of another page, or an image tag. The [`Resolvers`]
//! registry dispatches a link to the resolver registered for its kind.

mod embed;
mod image;
mod link;
mod registry;

pub use embed::{EmbedTarget, layout_directive, resolve_embed};
pub use image::resolve_image;
pub use link::resolve_link;
pub use registry::{
    DefaultEmbedResolver, DefaultImageResolver, DefaultLinkResolver, LinkKind, Resolve, Resolvers,
};

/// Encodes text for use in HTML text content and quoted attributes.
///
/// Escapes `&`, `<`, `>`, `"` and `'`.
pub(crate) fn encode_html(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}
