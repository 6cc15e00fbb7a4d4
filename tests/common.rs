//! Shared test utilities for integration tests.
//!
//! Provides a small template compiler standing in for the host site
//! generator's engines, and helpers for building pages and links.

#![allow(dead_code)]

use anyhow::{Result, bail};
use async_trait::async_trait;
use interlinker::{CompiledTemplate, Href, Page, PageData, TemplateCompiler, WikilinkMeta};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Template compiler substituting `{{ name }}` variables.
///
/// Sources of the form `{% layout "name" %}` compile to the registered
/// layout body. Every compile call is recorded as `(source, language)`.
#[derive(Default)]
pub struct StubCompiler {
    layouts: HashMap<String, String>,
    failing_language: Option<String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl StubCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers layout body available to `{% layout %}` sources.
    pub fn with_layout(mut self, name: &str, body: &str) -> Self {
        self.layouts.insert(name.to_string(), body.to_string());
        self
    }

    /// Makes every compile in `language` fail.
    pub fn failing_on(mut self, language: &str) -> Self {
        self.failing_language = Some(language.to_string());
        self
    }

    /// Returns recorded `(source, language)` compile calls.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TemplateCompiler for StubCompiler {
    async fn compile(&self, source: &str, language: &str) -> Result<Box<dyn CompiledTemplate>> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((source.to_string(), language.to_string()));
        }

        if self.failing_language.as_deref() == Some(language) {
            bail!("Unsupported template language: {}", language);
        }

        let body = match source
            .strip_prefix("{% layout \"")
            .and_then(|rest| rest.strip_suffix("\" %}"))
        {
            Some(name) => match self.layouts.get(name) {
                Some(layout) => layout.clone(),
                None => bail!("Layout not found: {}", name),
            },
            None => source.to_string(),
        };

        Ok(Box::new(StubTemplate { body }))
    }
}

struct StubTemplate {
    body: String,
}

#[async_trait]
impl CompiledTemplate for StubTemplate {
    async fn render(&self, data: &PageData) -> Result<String> {
        let mut output = self.body.clone();
        for (key, value) in data {
            let text = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            output = output.replace(&format!("{{{{ {} }}}}", key), &text);
        }
        Ok(output)
    }
}

/// Builds page data from a JSON object literal.
pub fn page_data(value: Value) -> PageData {
    match value {
        Value::Object(map) => map,
        _ => PageData::new(),
    }
}

/// Page hosting the wikilinks under test.
pub fn current_page() -> Page {
    Page::inline(PageData::new(), "md", "")
}

/// Wikilink to an existing page rendered from `content`.
pub fn embed_link(name: &str, data: Value, syntax: &str, content: &str) -> WikilinkMeta {
    let page = Page::inline(page_data(data), syntax, content);
    WikilinkMeta::new(name)
        .with_href(Href::resolved(format!("/{}/", name.to_lowercase())))
        .with_page(Arc::new(page))
}
