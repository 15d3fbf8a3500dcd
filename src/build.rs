//! Head snapshot generation.
//!
//! Walks every published route with a single synchronizer, applying each
//! route's descriptor to the same document head in turn. Reusing one head
//! across the whole walk means every route after the first starts from
//! the previous route's state, so the snapshots also prove that state
//! from one page never leaks into the next.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::head::sync::MetadataSync;
use crate::log;
use crate::pages::{self, Route};

/// Generate a `head.html` snapshot for every route.
///
/// Returns the number of routes written.
pub fn build_site(config: &SiteConfig) -> Result<usize> {
    let catalog = Catalog::builtin();
    let output = config.output_dir();

    if config.build.clean && output.exists() {
        fs::remove_dir_all(&output)
            .with_context(|| format!("failed to clean {}", output.display()))?;
    }
    fs::create_dir_all(&output)
        .with_context(|| format!("failed to create {}", output.display()))?;

    let mut sync = MetadataSync::new(config);
    let mut written = 0;

    for route in Route::all(catalog) {
        let Some(descriptor) = pages::descriptor_for(&route, catalog, config) else {
            log!("build"; "skipped {} (no content)", route.url_path());
            continue;
        };

        sync.apply(&descriptor);
        write_snapshot(&output, &route, &sync.head().render())?;
        written += 1;
    }

    log!("build"; "wrote {written} routes to {}", output.display());
    Ok(written)
}

fn write_snapshot(output: &Path, route: &Route, html: &str) -> Result<()> {
    let dir = output.join(route.output_rel());
    fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let file = dir.join("head.html");
    fs::write(&file, html).with_context(|| format!("failed to write {}", file.display()))?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(dir: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.root = Some(dir.to_path_buf());
        config
    }

    #[test]
    fn test_build_writes_every_route() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path());

        let written = build_site(&config).unwrap();
        let expected = Route::all(Catalog::builtin()).len();
        assert_eq!(written, expected);

        let output = config.output_dir();
        assert!(output.join("head.html").exists());
        assert!(output.join("about/head.html").exists());
        assert!(output.join("services/logo-design/head.html").exists());
        assert!(
            output
                .join("blog/seo-tips-for-small-businesses/head.html")
                .exists()
        );
    }

    #[test]
    fn test_snapshots_carry_route_metadata() {
        let tmp = TempDir::new().unwrap();
        let config = config_in(tmp.path());

        build_site(&config).unwrap();

        let about = fs::read_to_string(config.output_dir().join("about/head.html")).unwrap();
        assert!(about.contains("About VisionCut"));
        assert!(about.contains(r#"property="og:url" content="https://visioncut.com/about""#));

        // Article-only tags appear on posts, not on static pages
        let post = fs::read_to_string(
            config
                .output_dir()
                .join("blog/instagram-marketing-strategies-2025/head.html"),
        )
        .unwrap();
        assert!(post.contains(r#"property="og:type" content="article""#));
        assert!(post.contains("article:published_time"));
        assert!(!about.contains("article:published_time"));
    }

    #[test]
    fn test_clean_removes_stale_output() {
        let tmp = TempDir::new().unwrap();
        let mut config = config_in(tmp.path());
        config.build.clean = true;

        let stale = config.output_dir().join("stale");
        fs::create_dir_all(&stale).unwrap();
        fs::write(stale.join("old.html"), "old").unwrap();

        build_site(&config).unwrap();
        assert!(!stale.exists());
        assert!(config.output_dir().join("head.html").exists());
    }
}
