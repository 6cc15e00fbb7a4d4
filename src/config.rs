//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;

use crate::link::{Href, WikilinkMeta};
use crate::options::{DEFAULT_IMAGES_FOLDER, DEFAULT_STUB_URL, InterlinkerOptions};
use crate::resolvers::LinkKind;

/// Command line configuration for Interlinker.
///
/// Resolves one wikilink and prints the HTML that replaces it.
#[derive(Debug, Clone, Parser)]
#[command(name = "interlinker", version, about, long_about = None)]
pub struct Config {
    /// Wikilink target name
    pub name: String,

    /// Display title overriding the name
    #[arg(long)]
    pub title: Option<String>,

    /// Resolved target URL (omit to render no link)
    #[arg(long)]
    pub href: Option<String>,

    /// Fragment appended to the href
    #[arg(long)]
    pub anchor: Option<String>,

    /// Literal text printed when no href is given (defaults to [[NAME]])
    #[arg(long)]
    pub link: Option<String>,

    /// Resolve as an image embed
    #[arg(long)]
    pub image: bool,

    /// URL prefix of pages not created yet
    #[arg(long, default_value = DEFAULT_STUB_URL)]
    pub stub_url: String,

    /// Folder prefixed to bare image names
    #[arg(long, default_value = DEFAULT_IMAGES_FOLDER)]
    pub images_folder: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the wikilink name is empty.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("Wikilink name must not be empty");
        }

        Ok(())
    }

    /// Returns resolver options from configuration.
    pub fn options(&self) -> InterlinkerOptions {
        InterlinkerOptions::new()
            .with_stub_url(&self.stub_url)
            .with_images_folder(&self.images_folder)
    }

    /// Returns kind of wikilink to resolve.
    pub fn kind(&self) -> LinkKind {
        if self.image {
            LinkKind::Image
        } else {
            LinkKind::Link
        }
    }

    /// Builds wikilink metadata from configuration.
    pub fn wikilink(&self) -> WikilinkMeta {
        let mut link = WikilinkMeta::new(&self.name);

        if let Some(title) = &self.title {
            link = link.with_title(title);
        }
        if let Some(href) = &self.href {
            link = link.with_href(Href::resolved(href));
        }
        if let Some(anchor) = &self.anchor {
            link = link.with_anchor(anchor);
        }
        if let Some(text) = &self.link {
            link = link.with_link(text);
        }

        link
    }
}
