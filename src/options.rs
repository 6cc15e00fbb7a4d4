//! Resolver configuration.

/// Default URL prefix reserved for pages that have not been written yet.
pub const DEFAULT_STUB_URL: &str = "/stubs/";

/// Default folder prefixed to bare image names.
pub const DEFAULT_IMAGES_FOLDER: &str = "/images/";

/// Default page data field naming an embed layout.
pub const DEFAULT_LAYOUT_KEY: &str = "embedLayout";

/// Default page data field naming the embed template language.
pub const DEFAULT_LAYOUT_LANG_KEY: &str = "embedLayoutLanguage";

/// Options shared by every resolver during a site build.
///
/// All defaults are applied at construction, so resolvers read plain
/// values and never probe for missing keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterlinkerOptions {
    /// Prefix identifying links to pages that do not exist yet.
    pub stub_url: String,
    /// Prefix for image embeds whose name carries no folder.
    pub images_folder: String,
    /// Page data field that overrides the embed layout.
    pub layout_key: String,
    /// Page data field that overrides the embed template language.
    pub layout_template_lang_key: String,
    /// Layout wrapping embeds when the target page names none.
    pub default_layout: Option<String>,
    /// Embed language when the target page names none.
    ///
    /// `None` means the target page's own template syntax is used.
    pub default_layout_lang: Option<String>,
}

impl Default for InterlinkerOptions {
    fn default() -> Self {
        Self {
            stub_url: DEFAULT_STUB_URL.to_string(),
            images_folder: DEFAULT_IMAGES_FOLDER.to_string(),
            layout_key: DEFAULT_LAYOUT_KEY.to_string(),
            layout_template_lang_key: DEFAULT_LAYOUT_LANG_KEY.to_string(),
            default_layout: None,
            default_layout_lang: None,
        }
    }
}

impl InterlinkerOptions {
    /// Creates options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stub_url(mut self, stub_url: impl Into<String>) -> Self {
        self.stub_url = stub_url.into();
        self
    }

    pub fn with_images_folder(mut self, images_folder: impl Into<String>) -> Self {
        self.images_folder = images_folder.into();
        self
    }

    pub fn with_layout_key(mut self, key: impl Into<String>) -> Self {
        self.layout_key = key.into();
        self
    }

    pub fn with_layout_template_lang_key(mut self, key: impl Into<String>) -> Self {
        self.layout_template_lang_key = key.into();
        self
    }

    pub fn with_default_layout(mut self, layout: Option<String>) -> Self {
        self.default_layout = layout;
        self
    }

    pub fn with_default_layout_lang(mut self, language: Option<String>) -> Self {
        self.default_layout_lang = language;
        self
    }

    /// Returns the images folder, falling back to the default when empty.
    pub fn images_folder(&self) -> &str {
        if self.images_folder.is_empty() {
            DEFAULT_IMAGES_FOLDER
        } else {
            &self.images_folder
        }
    }
}
