//! Wikilink resolution for static site generators.

mod config;
mod link;
mod options;
mod page;
mod render;
pub mod resolvers;

pub use config::Config;
pub use link::{Href, WikilinkMeta};
pub use options::InterlinkerOptions;
pub use page::{FileTemplate, InlineTemplate, Page, PageData, TemplateSource, strip_front_matter};
pub use render::{CompiledTemplate, RenderContext, TemplateCompiler};
pub use resolvers::{
    EmbedTarget, LinkKind, Resolve, Resolvers, resolve_embed, resolve_image, resolve_link,
};
