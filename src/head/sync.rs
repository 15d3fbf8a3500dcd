//! Metadata synchronizer.
//!
//! `MetadataSync` reconciles the [`DocumentHead`] against the most
//! recently applied [`PageDescriptor`]: title with brand suffix, standard
//! meta tags, Open Graph and Twitter Card tags, article tags, and the
//! managed JSON-LD script batch.
//!
//! # Contract
//!
//! - `apply` is a full, self-contained reconciliation: later calls fully
//!   supersede earlier ones, with no accumulation. Calling it repeatedly
//!   with the same descriptor leaves the head byte-identical.
//! - Managed tags use find-or-create-then-set; the head never holds two
//!   tags for one managed `(namespace, key)`.
//! - Structured data is replaced wholesale (remove-then-insert), not
//!   diffed. Reconciliation happens only on navigation, so the churn is
//!   negligible and the implementation stays obviously correct.
//! - `release` removes the managed script batch and nothing else. Meta
//!   tags have no empty state worth restoring; the next `apply` overwrites
//!   them.
//! - Empty `title`/`description` are caller errors and panic.

use crate::config::SiteConfig;
use crate::descriptor::{ContentType, PageDescriptor};
use crate::head::{DocumentHead, MetaNs};

/// Article tags cleared whenever the active descriptor is not an article.
const ARTICLE_KEYS: [&str; 3] = [
    "article:published_time",
    "article:modified_time",
    "article:author",
];

/// Reconciles the document head with the active page descriptor.
pub struct MetadataSync<'a> {
    config: &'a SiteConfig,
    head: DocumentHead,
}

impl<'a> MetadataSync<'a> {
    /// Create a synchronizer over an empty head.
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            head: DocumentHead::new(),
        }
    }

    /// Create a synchronizer over an existing head (e.g., one carrying
    /// unmanaged static scripts).
    pub fn with_head(config: &'a SiteConfig, head: DocumentHead) -> Self {
        Self { config, head }
    }

    /// The head in its current reconciled state.
    pub fn head(&self) -> &DocumentHead {
        &self.head
    }

    /// Consume the synchronizer, yielding the head.
    pub fn into_head(self) -> DocumentHead {
        self.head
    }

    /// Reconcile the head against `descriptor`.
    ///
    /// # Panics
    ///
    /// Panics if `descriptor.title` or `descriptor.description` is empty;
    /// both are caller contracts, not recoverable conditions.
    pub fn apply(&mut self, descriptor: &PageDescriptor) {
        assert!(
            !descriptor.title.is_empty(),
            "page descriptor title must not be empty"
        );
        assert!(
            !descriptor.description.is_empty(),
            "page descriptor description must not be empty"
        );

        let base = &self.config.base;
        let head = &mut self.head;

        head.set_title(format!("{} | {}", descriptor.title, base.title_suffix));

        // Standard meta tags
        head.set_meta(MetaNs::Name, "description", &descriptor.description);
        match &descriptor.keywords {
            Some(keywords) => head.set_meta(MetaNs::Name, "keywords", keywords),
            None => head.remove_meta(MetaNs::Name, "keywords"),
        }
        let author = descriptor.author.as_deref().unwrap_or(&base.name);
        head.set_meta(MetaNs::Name, "author", author);

        // Open Graph tags
        let image = descriptor
            .social_image
            .as_deref()
            .unwrap_or(&base.default_image);
        head.set_meta(MetaNs::Property, "og:title", &descriptor.title);
        head.set_meta(MetaNs::Property, "og:description", &descriptor.description);
        head.set_meta(
            MetaNs::Property,
            "og:type",
            descriptor.content_type.as_og_str(),
        );
        head.set_meta(MetaNs::Property, "og:image", image);
        match &descriptor.canonical_url {
            Some(url) => head.set_meta(MetaNs::Property, "og:url", url),
            None => head.remove_meta(MetaNs::Property, "og:url"),
        }
        head.set_meta(MetaNs::Property, "og:site_name", &base.name);
        head.set_meta(MetaNs::Property, "og:locale", &base.locale);

        // Twitter Card tags
        head.set_meta(MetaNs::Name, "twitter:card", "summary_large_image");
        head.set_meta(MetaNs::Name, "twitter:title", &descriptor.title);
        head.set_meta(MetaNs::Name, "twitter:description", &descriptor.description);
        head.set_meta(MetaNs::Name, "twitter:image", image);
        head.set_meta(MetaNs::Name, "twitter:site", &base.twitter_site);

        // Article tags: present only while an article descriptor is active
        if descriptor.content_type == ContentType::Article {
            Self::set_or_remove(
                head,
                "article:published_time",
                descriptor.published_at.as_deref(),
            );
            Self::set_or_remove(
                head,
                "article:modified_time",
                descriptor.modified_at.as_deref(),
            );
            Self::set_or_remove(head, "article:author", descriptor.author.as_deref());
        } else {
            for key in ARTICLE_KEYS {
                head.remove_meta(MetaNs::Property, key);
            }
        }

        // Structured data: unconditional remove-then-insert
        head.remove_managed_scripts();
        for (index, document) in descriptor.structured_data.iter().enumerate() {
            let payload =
                serde_json::to_string(document).unwrap_or_else(|_| "{}".to_string());
            head.push_managed_script(index, payload);
        }
    }

    /// Remove the managed script batch. Idempotent.
    pub fn release(&mut self) {
        self.head.remove_managed_scripts();
    }

    fn set_or_remove(head: &mut DocumentHead, key: &str, value: Option<&str>) {
        match value {
            Some(value) => head.set_meta(MetaNs::Property, key, value),
            None => head.remove_meta(MetaNs::Property, key),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> SiteConfig {
        SiteConfig::default()
    }

    fn descriptor(title: &str) -> PageDescriptor {
        PageDescriptor::new(title, "Some description")
    }

    /// Every managed key the synchronizer writes for a plain website page.
    fn managed_keys() -> Vec<(MetaNs, &'static str)> {
        vec![
            (MetaNs::Name, "description"),
            (MetaNs::Name, "author"),
            (MetaNs::Property, "og:title"),
            (MetaNs::Property, "og:description"),
            (MetaNs::Property, "og:type"),
            (MetaNs::Property, "og:image"),
            (MetaNs::Property, "og:site_name"),
            (MetaNs::Property, "og:locale"),
            (MetaNs::Name, "twitter:card"),
            (MetaNs::Name, "twitter:title"),
            (MetaNs::Name, "twitter:description"),
            (MetaNs::Name, "twitter:image"),
            (MetaNs::Name, "twitter:site"),
        ]
    }

    #[test]
    fn test_apply_sets_title_with_brand_suffix() {
        let config = config();
        let mut sync = MetadataSync::new(&config);

        sync.apply(&descriptor("Blog"));

        assert_eq!(
            sync.head().title(),
            Some("Blog | VisionCut – Creative Digital Marketing Agency")
        );
    }

    #[test]
    fn test_no_duplication_across_applies() {
        let config = config();
        let mut sync = MetadataSync::new(&config);

        sync.apply(&descriptor("One").keywords("a"));
        sync.apply(&descriptor("Two").keywords("b"));
        sync.apply(&descriptor("Three"));

        for (ns, key) in managed_keys() {
            assert!(
                sync.head().meta_count(ns, key) <= 1,
                "duplicated tag for {key}"
            );
        }
        assert_eq!(sync.head().meta(MetaNs::Property, "og:title"), Some("Three"));
    }

    #[test]
    fn test_idempotence() {
        let config = config();
        let d = descriptor("Services")
            .keywords("design, video")
            .canonical_url("https://visioncut.com/services")
            .structured_data(vec![json!({"@type": "WebPage"})]);

        let mut once = MetadataSync::new(&config);
        once.apply(&d);

        let mut twice = MetadataSync::new(&config);
        twice.apply(&d);
        twice.apply(&d);

        assert_eq!(once.head(), twice.head());
        assert_eq!(once.head().render(), twice.head().render());
    }

    #[test]
    fn test_author_defaults_to_brand() {
        let config = config();
        let mut sync = MetadataSync::new(&config);

        sync.apply(&descriptor("Home"));
        assert_eq!(sync.head().meta(MetaNs::Name, "author"), Some("VisionCut"));

        sync.apply(&descriptor("Post").author("Priya Sharma"));
        assert_eq!(
            sync.head().meta(MetaNs::Name, "author"),
            Some("Priya Sharma")
        );
    }

    #[test]
    fn test_social_image_falls_back_to_config_default() {
        let config = config();
        let mut sync = MetadataSync::new(&config);

        sync.apply(&descriptor("Home"));

        let image = sync.head().meta(MetaNs::Property, "og:image").unwrap();
        assert_eq!(image, config.base.default_image);
        assert_eq!(sync.head().meta(MetaNs::Name, "twitter:image"), Some(image));
    }

    #[test]
    fn test_optional_keys_cleared_when_absent() {
        let config = config();
        let mut sync = MetadataSync::new(&config);

        sync.apply(
            &descriptor("One")
                .keywords("a, b")
                .canonical_url("https://visioncut.com/one"),
        );
        assert!(sync.head().meta(MetaNs::Name, "keywords").is_some());
        assert!(sync.head().meta(MetaNs::Property, "og:url").is_some());

        sync.apply(&descriptor("Two"));
        assert_eq!(sync.head().meta(MetaNs::Name, "keywords"), None);
        assert_eq!(sync.head().meta(MetaNs::Property, "og:url"), None);
    }

    #[test]
    fn test_article_tags_cleared_on_non_article() {
        let config = config();
        let mut sync = MetadataSync::new(&config);

        sync.apply(
            &descriptor("Post")
                .content_type(ContentType::Article)
                .author("Priya Sharma")
                .published_at("2025-01-15")
                .modified_at("2025-01-20"),
        );
        assert_eq!(
            sync.head().meta(MetaNs::Property, "article:published_time"),
            Some("2025-01-15")
        );
        assert_eq!(
            sync.head().meta(MetaNs::Property, "article:modified_time"),
            Some("2025-01-20")
        );
        assert_eq!(
            sync.head().meta(MetaNs::Property, "article:author"),
            Some("Priya Sharma")
        );

        sync.apply(&descriptor("Home"));
        for key in ARTICLE_KEYS {
            assert_eq!(sync.head().meta(MetaNs::Property, key), None, "stale {key}");
        }
        assert_eq!(
            sync.head().meta(MetaNs::Property, "og:type"),
            Some("website")
        );
    }

    #[test]
    fn test_article_tags_never_set_for_website() {
        let config = config();
        let mut sync = MetadataSync::new(&config);

        // published_at on a non-article descriptor is ignored
        sync.apply(&descriptor("Home").published_at("2025-01-15"));

        assert_eq!(
            sync.head().meta(MetaNs::Property, "article:published_time"),
            None
        );
    }

    #[test]
    fn test_structured_data_ordering() {
        let config = config();
        let mut sync = MetadataSync::new(&config);

        let a = json!({"@type": "Organization"});
        let b = json!({"@type": "LocalBusiness"});
        let c = json!({"@type": "WebPage"});
        sync.apply(&descriptor("Home").structured_data(vec![a.clone(), b.clone(), c.clone()]));

        let scripts: Vec<_> = sync.head().managed_scripts().collect();
        assert_eq!(scripts.len(), 3);
        for (i, (script, doc)) in scripts.iter().zip([&a, &b, &c]).enumerate() {
            assert_eq!(script.index, i);
            assert_eq!(script.payload, serde_json::to_string(doc).unwrap());
        }
    }

    #[test]
    fn test_no_leakage_after_empty_structured_data() {
        let config = config();
        let mut sync = MetadataSync::new(&config);

        sync.apply(&descriptor("One").structured_data(vec![json!({"@type": "WebPage"})]));
        sync.apply(&descriptor("Two"));

        assert_eq!(sync.head().managed_scripts().count(), 0);
    }

    #[test]
    fn test_release_is_idempotent_and_spares_meta() {
        let config = config();
        let mut sync = MetadataSync::new(&config);

        sync.apply(&descriptor("One").structured_data(vec![json!({"@type": "WebPage"})]));
        sync.release();
        sync.release();

        assert_eq!(sync.head().managed_scripts().count(), 0);
        // Title and meta tags are left as last applied
        assert!(sync.head().title().is_some());
        assert!(sync.head().meta(MetaNs::Name, "description").is_some());
    }

    #[test]
    fn test_release_spares_unmanaged_scripts() {
        let config = config();
        let mut head = DocumentHead::new();
        head.push_script(r#"{"static":true}"#);

        let mut sync = MetadataSync::with_head(&config, head);
        sync.apply(&descriptor("One").structured_data(vec![json!({"a": 1})]));
        sync.release();

        assert_eq!(sync.head().scripts().len(), 1);
        assert!(!sync.head().scripts()[0].managed);
    }

    #[test]
    fn test_end_to_end_navigation() {
        let config = config();
        let mut sync = MetadataSync::new(&config);

        sync.apply(
            &PageDescriptor::new("Blog", "Latest posts")
                .structured_data(vec![json!({"@type": "WebPage"})]),
        );
        sync.apply(
            &PageDescriptor::new("Article X", "An in-depth look")
                .content_type(ContentType::Article)
                .published_at("2025-01-10")
                .structured_data(vec![
                    json!({"@type": "BlogPosting"}),
                    json!({"@type": "BreadcrumbList"}),
                ]),
        );

        let head = sync.head();
        assert_eq!(
            head.title(),
            Some("Article X | VisionCut – Creative Digital Marketing Agency")
        );
        assert_eq!(
            head.meta(MetaNs::Property, "article:published_time"),
            Some("2025-01-10")
        );

        let scripts: Vec<_> = head.managed_scripts().collect();
        assert_eq!(scripts.len(), 2);
        assert!(scripts[0].payload.contains("BlogPosting"));
        assert!(scripts[1].payload.contains("BreadcrumbList"));
    }

    #[test]
    #[should_panic(expected = "title must not be empty")]
    fn test_empty_title_panics() {
        let config = config();
        let mut sync = MetadataSync::new(&config);
        sync.apply(&PageDescriptor::new("", "desc"));
    }

    #[test]
    #[should_panic(expected = "description must not be empty")]
    fn test_empty_description_panics() {
        let config = config();
        let mut sync = MetadataSync::new(&config);
        sync.apply(&PageDescriptor::new("title", ""));
    }
}
