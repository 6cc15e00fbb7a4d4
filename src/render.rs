//! Template compilation capability and the shared render context.
//!
//! The host site generator owns the template engines. Resolvers only see
//! them through [`TemplateCompiler`], which compiles a source string in a
//! named language, and [`CompiledTemplate`], which renders it against page
//! data.

use anyhow::Result;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::options::InterlinkerOptions;
use crate::page::PageData;

/// Compiles template sources with the host's template engines.
#[async_trait]
pub trait TemplateCompiler: Send + Sync {
    /// Compiles `source` as a template written in `language`.
    ///
    /// # Errors
    ///
    /// Returns error if the language is unknown or the source fails to compile.
    async fn compile(&self, source: &str, language: &str) -> Result<Box<dyn CompiledTemplate>>;
}

/// A compiled template ready to render.
#[async_trait]
pub trait CompiledTemplate: Send + Sync {
    /// Renders the template with `data` as its variables.
    ///
    /// # Errors
    ///
    /// Returns error if rendering fails.
    async fn render(&self, data: &PageData) -> Result<String>;
}

/// Options and services shared by all resolutions of one site build.
///
/// Cloning is cheap; the compiler is reference counted.
#[derive(Clone, Default)]
pub struct RenderContext {
    pub opts: InterlinkerOptions,
    compiler: Option<Arc<dyn TemplateCompiler>>,
}

impl RenderContext {
    /// Creates context without template services.
    ///
    /// Embeds resolve to nothing until a compiler is attached.
    pub fn new(opts: InterlinkerOptions) -> Self {
        Self {
            opts,
            compiler: None,
        }
    }

    pub fn with_compiler(mut self, compiler: Arc<dyn TemplateCompiler>) -> Self {
        self.compiler = Some(compiler);
        self
    }

    pub fn compiler(&self) -> Option<&dyn TemplateCompiler> {
        self.compiler.as_deref()
    }
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("opts", &self.opts)
            .field("compiler", &self.compiler.is_some())
            .finish()
    }
}
