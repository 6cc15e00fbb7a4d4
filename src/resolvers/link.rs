//! Wikilinks rendered as anchors.

use maud::{PreEscaped, html};
use tracing::debug;

use super::encode_html;
use crate::link::WikilinkMeta;
use crate::page::Page;
use crate::render::RenderContext;

/// Resolves wikilink to an anchor, a dead link marker or its literal text.
///
/// Decision order:
/// - [`Href::NoLink`](crate::Href::NoLink) returns `link.link` verbatim
/// - Hrefs under the configured stub URL render a `dead-wikilink` span
/// - Anything else renders an `a.wikilink` anchor
///
/// Title or name text is entity encoded; the href and the literal link
/// text are emitted as given.
///
/// # Arguments
///
/// * `link`: Resolved wikilink
/// * `_current_page`: Page containing the wikilink
/// * `ctx`: Shared render context
///
/// # Returns
///
/// HTML fragment replacing the wikilink
pub fn resolve_link(link: &WikilinkMeta, _current_page: &Page, ctx: &RenderContext) -> String {
    let Some(href) = link.effective_href() else {
        return link.link.clone();
    };

    let text = encode_html(link.display_text());

    if href.starts_with(&ctx.opts.stub_url) {
        debug!(name = %link.name, href = %href, "Wikilink points at stub");
        let title = format!("{} was not created yet", text);
        html! {
            span title=(PreEscaped(title.as_str())) class="dead-wikilink" { (PreEscaped(text.as_str())) }
        }
        .into_string()
    } else {
        html! {
            a href=(PreEscaped(href.as_str())) class="wikilink" { (PreEscaped(text.as_str())) }
        }
        .into_string()
    }
}
