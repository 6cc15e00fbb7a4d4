//! Pages targeted by wikilinks.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Front matter and computed data of a page.
pub type PageData = Map<String, Value>;

/// Source of a page's raw template body.
#[async_trait]
pub trait TemplateSource: fmt::Debug + Send + Sync {
    /// Reads the template body, without front matter.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying source cannot be read.
    async fn read(&self) -> Result<String>;
}

/// Template body held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineTemplate {
    content: String,
}

impl InlineTemplate {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[async_trait]
impl TemplateSource for InlineTemplate {
    async fn read(&self) -> Result<String> {
        Ok(self.content.clone())
    }
}

/// Template body read from a file on disk.
///
/// A leading `---` front matter block is stripped so the result matches
/// what the page body renders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTemplate {
    path: PathBuf,
}

impl FileTemplate {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TemplateSource for FileTemplate {
    async fn read(&self) -> Result<String> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read template: {}", self.path.display()))?;

        Ok(strip_front_matter(&raw).to_string())
    }
}

/// Returns the body of a template source, skipping a leading front matter block.
///
/// Front matter opens with a `---` line at the very start and closes with
/// the next `---` line. Sources with an unterminated block are returned
/// unchanged.
pub fn strip_front_matter(source: &str) -> &str {
    let Some(rest) = source
        .strip_prefix("---\n")
        .or_else(|| source.strip_prefix("---\r\n"))
    else {
        return source;
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        offset += line.len();
        if line.trim_end() == "---" {
            return &rest[offset..];
        }
    }

    source
}

/// A page of the site, as seen by the resolvers.
#[derive(Debug, Clone)]
pub struct Page {
    data: PageData,
    template_syntax: String,
    template: Arc<dyn TemplateSource>,
}

impl Page {
    /// Creates page from its data, template language and template source.
    ///
    /// # Arguments
    ///
    /// * `data`: Front matter and computed page data
    /// * `template_syntax`: Template language the page is written in (e.g. `md`, `liquid`)
    /// * `template`: Source of the raw template body
    pub fn new(
        data: PageData,
        template_syntax: impl Into<String>,
        template: Arc<dyn TemplateSource>,
    ) -> Self {
        Self {
            data,
            template_syntax: template_syntax.into(),
            template,
        }
    }

    /// Creates page whose template body is held in memory.
    pub fn inline(
        data: PageData,
        template_syntax: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::new(data, template_syntax, Arc::new(InlineTemplate::new(content)))
    }

    pub fn data(&self) -> &PageData {
        &self.data
    }

    pub fn template_syntax(&self) -> &str {
        &self.template_syntax
    }

    pub fn template(&self) -> &dyn TemplateSource {
        self.template.as_ref()
    }
}
