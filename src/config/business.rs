//! `[business]` section configuration.
//!
//! Fixed business facts baked into the LocalBusiness, Organization and
//! Service structured-data documents: address, geo-coordinates, contact
//! point, opening hours and social profiles.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[business]` section in visioncut.toml.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BusinessConfig {
    /// Customer-service telephone number.
    #[serde(default = "defaults::business::phone")]
    #[educe(Default = defaults::business::phone())]
    pub phone: String,

    /// Address region (state).
    #[serde(default = "defaults::business::region")]
    #[educe(Default = defaults::business::region())]
    pub region: String,

    /// ISO country code for the Organization postal address.
    #[serde(default = "defaults::business::country_code")]
    #[educe(Default = defaults::business::country_code())]
    pub country_code: String,

    /// Country display name for LocalBusiness/Service area-served.
    #[serde(default = "defaults::business::country_name")]
    #[educe(Default = defaults::business::country_name())]
    pub country_name: String,

    /// Geo latitude, serialized as text per the vocabulary convention.
    #[serde(default = "defaults::business::latitude")]
    #[educe(Default = defaults::business::latitude())]
    pub latitude: String,

    /// Geo longitude.
    #[serde(default = "defaults::business::longitude")]
    #[educe(Default = defaults::business::longitude())]
    pub longitude: String,

    /// Price range indicator.
    #[serde(default = "defaults::business::price_range")]
    #[educe(Default = defaults::business::price_range())]
    pub price_range: String,

    /// Days of week in the opening-hours specification.
    #[serde(default = "defaults::business::opening_days")]
    #[educe(Default = defaults::business::opening_days())]
    pub opening_days: Vec<String>,

    /// Opening time (HH:MM).
    #[serde(default = "defaults::business::opens")]
    #[educe(Default = defaults::business::opens())]
    pub opens: String,

    /// Closing time (HH:MM).
    #[serde(default = "defaults::business::closes")]
    #[educe(Default = defaults::business::closes())]
    pub closes: String,

    /// Languages available at the contact point.
    #[serde(default = "defaults::business::languages")]
    #[educe(Default = defaults::business::languages())]
    pub languages: Vec<String>,

    /// Instagram handle (without URL).
    #[serde(default = "defaults::business::instagram")]
    #[educe(Default = defaults::business::instagram())]
    pub instagram: String,

    /// Twitter handle (without URL or `@`).
    #[serde(default = "defaults::business::twitter")]
    #[educe(Default = defaults::business::twitter())]
    pub twitter: String,

    /// LinkedIn company handle.
    #[serde(default = "defaults::business::linkedin")]
    #[educe(Default = defaults::business::linkedin())]
    pub linkedin: String,
}

impl BusinessConfig {
    /// Social profile URLs for the Organization `sameAs` collection.
    pub fn profile_urls(&self) -> Vec<String> {
        vec![
            format!("https://instagram.com/{}", self.instagram),
            format!("https://twitter.com/{}", self.twitter),
            format!("https://linkedin.com/company/{}", self.linkedin),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_business_defaults() {
        let config = SiteConfig::default();

        assert_eq!(config.business.phone, "+91-98765-43210");
        assert_eq!(config.business.region, "Karnataka");
        assert_eq!(config.business.latitude, "15.3173");
        assert_eq!(config.business.opening_days.len(), 6);
        assert_eq!(config.business.languages, vec!["English", "Kannada"]);
    }

    #[test]
    fn test_profile_urls() {
        let config = SiteConfig::default();
        let urls = config.business.profile_urls();

        assert_eq!(
            urls,
            vec![
                "https://instagram.com/visioncut.2025",
                "https://twitter.com/visioncut",
                "https://linkedin.com/company/visioncut",
            ]
        );
    }

    #[test]
    fn test_business_override() {
        let config = r#"
            [business]
            phone = "+1-555-0100"
            region = "Nowhere"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.business.phone, "+1-555-0100");
        assert_eq!(config.business.region, "Nowhere");
        // Defaults survive partial override
        assert_eq!(config.business.opens, "09:00");
    }
}
