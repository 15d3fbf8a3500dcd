//! Per-page metadata descriptors.
//!
//! A `PageDescriptor` carries everything the metadata synchronizer must
//! render into the document head for one page view. Descriptors are plain
//! values constructed fresh per route; only field values matter, never
//! identity.

use serde_json::Value;

// ============================================================================
// Content Type
// ============================================================================

/// Open Graph content type of a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentType {
    #[default]
    Website,
    Article,
    Profile,
}

impl ContentType {
    /// The `og:type` attribute value.
    pub const fn as_og_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
            Self::Profile => "profile",
        }
    }
}

// ============================================================================
// Page Descriptor
// ============================================================================

/// All metadata for one page view.
///
/// `title` and `description` are a caller contract: the synchronizer
/// asserts they are non-empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageDescriptor {
    /// Page-specific title, without the brand suffix.
    pub title: String,
    /// Meta description, also used for social previews.
    pub description: String,
    /// Comma-separated keyword list.
    pub keywords: Option<String>,
    /// Absolute social-preview image URL; config default when `None`.
    pub social_image: Option<String>,
    /// Canonical page URL, surfaced as `og:url`.
    pub canonical_url: Option<String>,
    /// Open Graph content type.
    pub content_type: ContentType,
    /// Page author; brand name when `None`.
    pub author: Option<String>,
    /// Publication date (YYYY-MM-DD); only meaningful for articles.
    pub published_at: Option<String>,
    /// Last-modified date (YYYY-MM-DD); only meaningful for articles.
    pub modified_at: Option<String>,
    /// Structured-data documents, inserted in order.
    pub structured_data: Vec<Value>,
}

impl PageDescriptor {
    /// Create a descriptor with the two required fields.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn social_image(mut self, image: impl Into<String>) -> Self {
        self.social_image = Some(image.into());
        self
    }

    pub fn canonical_url(mut self, url: impl Into<String>) -> Self {
        self.canonical_url = Some(url.into());
        self
    }

    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn published_at(mut self, date: impl Into<String>) -> Self {
        self.published_at = Some(date.into());
        self
    }

    pub fn modified_at(mut self, date: impl Into<String>) -> Self {
        self.modified_at = Some(date.into());
        self
    }

    pub fn structured_data(mut self, documents: Vec<Value>) -> Self {
        self.structured_data = documents;
        self
    }
}
