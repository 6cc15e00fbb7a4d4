//! Image wikilinks rendered as `img` tags.

use super::encode_html;
use crate::link::WikilinkMeta;
use crate::page::Page;
use crate::render::RenderContext;

/// Resolves image wikilink to an `img` tag.
///
/// Names containing a `/` are treated as site paths and only gain a
/// leading slash. Bare names are placed under the configured images
/// folder. Alt text is the title when set and non-empty, otherwise the
/// file name without its extension.
///
/// The tag is written by hand: its self-closing `<img ... />` form is part
/// of the output contract.
pub fn resolve_image(link: &WikilinkMeta, _current_page: &Page, ctx: &RenderContext) -> String {
    let image_path = if link.name.contains('/') {
        format!("/{}", link.name)
    } else {
        format!("{}{}", ctx.opts.images_folder(), link.name)
    };

    let alt_text = match link.title.as_deref() {
        Some(title) if !title.is_empty() => encode_html(title),
        _ => encode_html(file_stem(&link.name)),
    };

    format!(r#"<img src="{}" alt="{}" />"#, image_path, alt_text)
}

/// Last path segment of `name` with its final extension removed.
///
/// A trailing dot with nothing after it is not an extension.
fn file_stem(name: &str) -> &str {
    let file_name = name.rsplit_once('/').map_or(name, |(_, last)| last);

    match file_name.rfind('.') {
        Some(dot) if dot + 1 < file_name.len() => &file_name[..dot],
        _ => file_name,
    }
}
