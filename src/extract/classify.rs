// src/extract/classify.rs
// =============================================================================
// Buckets external URLs into images, scripts, stylesheets, fonts and links.
//
// The rules only look at the lower-cased URL split on '.':
//   1. last piece is jpg/png/svg/jpeg -> image
//   2. last piece is js               -> script
//   3. last piece is css              -> stylesheet
//   4. FIRST piece is "https://fonts" -> font
//   5. anything else                  -> link
//
// Rule 4 compares the first piece with a whole URL prefix, so only
// "https://fonts.<...>" style URLs hit it. Keep it as is; changing it
// changes which bucket existing URLs land in.
// =============================================================================

use serde::Serialize;

const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "png", "svg", "jpeg"];
const SCRIPT_EXTENSIONS: [&str; 1] = ["js"];
const STYLESHEET_EXTENSIONS: [&str; 1] = ["css"];
const FONT_PREFIXES: [&str; 1] = ["https://fonts"];

/// Which bucket a URL belongs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Image,
    Script,
    Stylesheet,
    Font,
    Link,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Image,
        ResourceKind::Script,
        ResourceKind::Stylesheet,
        ResourceKind::Font,
        ResourceKind::Link,
    ];

    /// Classify a single URL. Deterministic: depends on nothing but the URL.
    pub fn of(url: &str) -> Self {
        let lowered = url.to_lowercase();
        // split() always yields at least one piece, so these never miss
        let first = lowered.split('.').next().unwrap_or_default();
        let last = lowered.rsplit('.').next().unwrap_or_default();

        if IMAGE_EXTENSIONS.contains(&last) {
            ResourceKind::Image
        } else if SCRIPT_EXTENSIONS.contains(&last) {
            ResourceKind::Script
        } else if STYLESHEET_EXTENSIONS.contains(&last) {
            ResourceKind::Stylesheet
        } else if FONT_PREFIXES.contains(&first) {
            ResourceKind::Font
        } else {
            ResourceKind::Link
        }
    }
}

/// External resources of a page, grouped by kind.
///
/// Serializes to a JSON object with the five bucket names as keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExternalResources {
    pub images: Vec<String>,
    pub scripts: Vec<String>,
    pub stylesheets: Vec<String>,
    pub fonts: Vec<String>,
    pub links: Vec<String>,
}

impl ExternalResources {
    /// Sort every URL into exactly one bucket, keeping input order per bucket
    pub fn classify<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut resources = Self::default();
        for url in urls {
            let url = url.into();
            let kind = ResourceKind::of(&url);
            resources.bucket_mut(kind).push(url);
        }

        log::debug!(
            "classified {} URL(s): {} images, {} scripts, {} stylesheets, {} fonts, {} links",
            resources.len(),
            resources.images.len(),
            resources.scripts.len(),
            resources.stylesheets.len(),
            resources.fonts.len(),
            resources.links.len()
        );

        resources
    }

    pub fn bucket(&self, kind: ResourceKind) -> &[String] {
        match kind {
            ResourceKind::Image => &self.images,
            ResourceKind::Script => &self.scripts,
            ResourceKind::Stylesheet => &self.stylesheets,
            ResourceKind::Font => &self.fonts,
            ResourceKind::Link => &self.links,
        }
    }

    fn bucket_mut(&mut self, kind: ResourceKind) -> &mut Vec<String> {
        match kind {
            ResourceKind::Image => &mut self.images,
            ResourceKind::Script => &mut self.scripts,
            ResourceKind::Stylesheet => &mut self.stylesheets,
            ResourceKind::Font => &mut self.fonts,
            ResourceKind::Link => &mut self.links,
        }
    }

    /// Total number of URLs across all buckets
    pub fn len(&self) -> usize {
        self.images.len()
            + self.scripts.len()
            + self.stylesheets.len()
            + self.fonts.len()
            + self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceKind::Image => "images",
            ResourceKind::Script => "scripts",
            ResourceKind::Stylesheet => "stylesheets",
            ResourceKind::Font => "fonts",
            ResourceKind::Link => "links",
        };
        f.pad(name)
    }
}
