//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.
//! The defaults reproduce the VisionCut production site facts so the
//! tool works out of the box without a `visioncut.toml`.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn name() -> String {
        "VisionCut".into()
    }

    pub fn alternate_name() -> String {
        "VisionCut Creative Agency".into()
    }

    pub fn title_suffix() -> String {
        "VisionCut – Creative Digital Marketing Agency".into()
    }

    pub fn description() -> String {
        "Creative Digital Marketing Agency in Karnataka, India. \
         We Design. We Market. We Grow Brands."
            .into()
    }

    pub fn url() -> String {
        "https://visioncut.com".into()
    }

    pub fn logo() -> String {
        "https://visioncut.com/logo.png".into()
    }

    pub fn email() -> String {
        "hello@visioncut.com".into()
    }

    pub fn locale() -> String {
        "en_IN".into()
    }

    pub fn twitter_site() -> String {
        "@visioncut".into()
    }

    pub fn default_image() -> String {
        "https://images.unsplash.com/photo-1611162616305-c69b3fa7fbe0?w=1200&h=630&fit=crop".into()
    }
}

// ============================================================================
// [business] Section Defaults
// ============================================================================

pub mod business {
    pub fn phone() -> String {
        "+91-98765-43210".into()
    }

    pub fn region() -> String {
        "Karnataka".into()
    }

    pub fn country_code() -> String {
        "IN".into()
    }

    pub fn country_name() -> String {
        "India".into()
    }

    pub fn latitude() -> String {
        "15.3173".into()
    }

    pub fn longitude() -> String {
        "75.7139".into()
    }

    pub fn price_range() -> String {
        "₹₹".into()
    }

    pub fn opening_days() -> Vec<String> {
        ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
            .iter()
            .map(|s| (*s).to_string())
            .collect()
    }

    pub fn opens() -> String {
        "09:00".into()
    }

    pub fn closes() -> String {
        "18:00".into()
    }

    pub fn languages() -> Vec<String> {
        vec!["English".into(), "Kannada".into()]
    }

    pub fn instagram() -> String {
        "visioncut.2025".into()
    }

    pub fn twitter() -> String {
        "visioncut".into()
    }

    pub fn linkedin() -> String {
        "visioncut".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn output() -> PathBuf {
        "public".into()
    }
}
