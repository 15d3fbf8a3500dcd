//! `[base]` section configuration.
//!
//! Brand identity used by the metadata synchronizer and the schema
//! generators: name, title suffix, canonical URL, social defaults.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in visioncut.toml - brand metadata.
///
/// # Example
/// ```toml
/// [base]
/// name = "VisionCut"
/// url = "https://visioncut.com"
/// locale = "en_IN"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Brand name, used as `og:site_name` and the default meta author.
    #[serde(default = "defaults::base::name")]
    #[educe(Default = defaults::base::name())]
    pub name: String,

    /// Alternate brand name for the Organization document.
    #[serde(default = "defaults::base::alternate_name")]
    #[educe(Default = defaults::base::alternate_name())]
    pub alternate_name: String,

    /// Suffix appended to every document title: `"{page} | {suffix}"`.
    #[serde(default = "defaults::base::title_suffix")]
    #[educe(Default = defaults::base::title_suffix())]
    pub title_suffix: String,

    /// Brand description for the Organization document.
    #[serde(default = "defaults::base::description")]
    #[educe(Default = defaults::base::description())]
    pub description: String,

    /// Base URL for canonical links and structured data.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: String,

    /// Absolute logo URL for Organization/LocalBusiness documents.
    #[serde(default = "defaults::base::logo")]
    #[educe(Default = defaults::base::logo())]
    pub logo: String,

    /// Contact email for the LocalBusiness document.
    #[serde(default = "defaults::base::email")]
    #[educe(Default = defaults::base::email())]
    pub email: String,

    /// Open Graph locale (e.g., "en_IN").
    #[serde(default = "defaults::base::locale")]
    #[educe(Default = defaults::base::locale())]
    pub locale: String,

    /// Twitter handle for `twitter:site` (with leading `@`).
    #[serde(default = "defaults::base::twitter_site")]
    #[educe(Default = defaults::base::twitter_site())]
    pub twitter_site: String,

    /// Fallback social-preview image when a descriptor sets none.
    #[serde(default = "defaults::base::default_image")]
    #[educe(Default = defaults::base::default_image())]
    pub default_image: String,
}

impl BaseConfig {
    /// Base URL without a trailing slash, for joining route paths.
    pub fn url_trimmed(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_defaults() {
        let config = SiteConfig::default();

        assert_eq!(config.base.name, "VisionCut");
        assert_eq!(config.base.url, "https://visioncut.com");
        assert_eq!(config.base.locale, "en_IN");
        assert_eq!(config.base.twitter_site, "@visioncut");
        assert!(config.base.title_suffix.starts_with("VisionCut"));
    }

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            name = "Acme"
            title_suffix = "Acme Studio"
            url = "https://acme.example"
            locale = "en_US"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.name, "Acme");
        assert_eq!(config.base.title_suffix, "Acme Studio");
        assert_eq!(config.base.url, "https://acme.example");
        assert_eq!(config.base.locale, "en_US");
        // Untouched fields keep their defaults
        assert_eq!(config.base.email, "hello@visioncut.com");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            name = "Test"
            unknown_field = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn test_url_trimmed() {
        let config = r#"
            [base]
            url = "https://acme.example/"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();
        assert_eq!(config.base.url_trimmed(), "https://acme.example");
    }
}
