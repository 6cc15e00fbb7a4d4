use anyhow::Result;
use interlinker::{Config, LinkKind, Page, PageData, RenderContext, resolve_image, resolve_link};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Installs the tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects debug level
/// and warnings are shown by default.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.verbose);
    config.validate()?;

    let ctx = RenderContext::new(config.options());
    let link = config.wikilink();
    let current_page = Page::inline(PageData::new(), "md", "");

    debug!(kind = ?config.kind(), name = %link.name, "Resolving wikilink");

    let html = match config.kind() {
        LinkKind::Image => resolve_image(&link, &current_page, &ctx),
        LinkKind::Link | LinkKind::Embed => resolve_link(&link, &current_page, &ctx),
    };

    println!("{}", html);

    Ok(())
}
