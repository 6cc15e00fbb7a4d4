//! Wikilinks rendered as the embedded body of another page.

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use crate::link::WikilinkMeta;
use crate::options::InterlinkerOptions;
use crate::page::{Page, PageData};
use crate::render::{RenderContext, TemplateCompiler};

/// Layout and template language used to embed a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedTarget {
    /// Layout wrapping the embedded content, if any.
    pub layout: Option<String>,
    /// Language the page body and layout directive are compiled in.
    pub language: String,
}

impl EmbedTarget {
    /// Selects layout and language for embedding `page`.
    ///
    /// Layout precedence:
    /// 1. Page data field named by `layout_key` (JSON `null` disables wrapping)
    /// 2. `default_layout`
    ///
    /// Language precedence:
    /// 1. Page data field named by `layout_template_lang_key`, unless `null`
    /// 2. `default_layout_lang`
    /// 3. The page's own template syntax
    pub fn select(page: &Page, opts: &InterlinkerOptions) -> Self {
        Self {
            layout: select_layout(page.data(), opts),
            language: select_language(page.data(), opts, page.template_syntax()),
        }
    }
}

fn select_layout(data: &PageData, opts: &InterlinkerOptions) -> Option<String> {
    match data.get(&opts.layout_key) {
        Some(value) => value_text(value),
        None => opts.default_layout.clone(),
    }
}

fn select_language(data: &PageData, opts: &InterlinkerOptions, template_syntax: &str) -> String {
    data.get(&opts.layout_template_lang_key)
        .and_then(value_text)
        .or_else(|| opts.default_layout_lang.clone())
        .unwrap_or_else(|| template_syntax.to_string())
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Builds the template invoking `layout`.
///
/// Always emitted as a `{% layout %}` tag, whatever language it is later
/// compiled in. Languages without that tag, or embedded content holding
/// raw template tags, will not wrap correctly.
pub fn layout_directive(layout: &str) -> String {
    format!("{{% layout \"{}\" %}}", layout)
}

/// Resolves embed wikilink to the rendered body of its target page.
///
/// The target's template body is compiled in the selected language and
/// rendered with the target's data. When a layout is selected, the result
/// is passed to it as `content`, alongside the target's data.
///
/// # Arguments
///
/// * `link`: Resolved wikilink
/// * `_current_page`: Page containing the wikilink
/// * `ctx`: Shared render context
///
/// # Returns
///
/// `None` when the target does not exist or no compiler is configured,
/// otherwise the rendered HTML
///
/// # Errors
///
/// Returns error if an existing link has no page, or if reading,
/// compiling or rendering any template fails. Failures are not recovered
/// here; the caller decides on a fallback.
pub async fn resolve_embed(
    link: &WikilinkMeta,
    _current_page: &Page,
    ctx: &RenderContext,
) -> Result<Option<String>> {
    if !link.exists {
        debug!(name = %link.name, "Embed target does not exist");
        return Ok(None);
    }

    let Some(compiler) = ctx.compiler() else {
        debug!(name = %link.name, "No template compiler, skipping embed");
        return Ok(None);
    };

    let page = link
        .page
        .as_deref()
        .with_context(|| format!("Embed target has no page: {}", link.name))?;

    let source = page
        .template()
        .read()
        .await
        .with_context(|| format!("Failed to read embed source: {}", link.name))?;

    let target = EmbedTarget::select(page, &ctx.opts);
    debug!(
        name = %link.name,
        layout = ?target.layout,
        language = %target.language,
        "Embedding page"
    );

    let content = compile_and_render(compiler, &source, &target.language, page.data())
        .await
        .with_context(|| format!("Failed to render embed: {}", link.name))?;

    let Some(layout) = target.layout else {
        return Ok(Some(content));
    };

    let mut layout_data = PageData::new();
    layout_data.insert("content".to_string(), Value::String(content));
    layout_data.extend(page.data().clone());

    let wrapped = compile_and_render(
        compiler,
        &layout_directive(&layout),
        &target.language,
        &layout_data,
    )
    .await
    .with_context(|| format!("Failed to render embed layout {}: {}", layout, link.name))?;

    Ok(Some(wrapped))
}

async fn compile_and_render(
    compiler: &dyn TemplateCompiler,
    source: &str,
    language: &str,
    data: &PageData,
) -> Result<String> {
    let template = compiler.compile(source, language).await?;
    template.render(data).await
}
