//! Route table and per-route metadata.
//!
//! Every page the site publishes is a `Route`; `descriptor_for` maps a
//! route to the `PageDescriptor` the synchronizer applies when that page
//! is shown. Dynamic routes carry a slug and resolve against the catalog;
//! a slug with no matching record yields no descriptor.

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::descriptor::{ContentType, PageDescriptor};
use crate::schema;

// ============================================================================
// Routes
// ============================================================================

/// A published page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Services,
    ServiceDetail(String),
    Blog,
    BlogPost(String),
    Author(String),
    Portfolio,
    About,
    Contact,
    Privacy,
    Terms,
}

impl Route {
    /// Every route the site publishes, static pages first, then one
    /// detail route per catalog record.
    pub fn all(catalog: &Catalog) -> Vec<Route> {
        let mut routes = vec![
            Route::Home,
            Route::Services,
            Route::Blog,
            Route::Portfolio,
            Route::About,
            Route::Contact,
            Route::Privacy,
            Route::Terms,
        ];
        for service in catalog.services() {
            routes.push(Route::ServiceDetail(service.id.clone()));
        }
        for post in catalog.posts() {
            routes.push(Route::BlogPost(post.slug.clone()));
        }
        for author in catalog.authors() {
            routes.push(Route::Author(author.id.clone()));
        }
        routes
    }

    /// Absolute URL path, with a leading slash.
    pub fn url_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Services => "/services".to_string(),
            Route::ServiceDetail(id) => format!("/services/{id}"),
            Route::Blog => "/blog".to_string(),
            Route::BlogPost(slug) => format!("/blog/{slug}"),
            Route::Author(id) => format!("/authors/{id}"),
            Route::Portfolio => "/portfolio".to_string(),
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Privacy => "/privacy-policy".to_string(),
            Route::Terms => "/terms".to_string(),
        }
    }

    /// Output directory for this route, relative to the output root.
    pub fn output_rel(&self) -> String {
        match self {
            Route::Home => String::new(),
            other => other.url_path().trim_start_matches('/').to_string(),
        }
    }

    /// Canonical absolute URL on the configured site.
    pub fn canonical(&self, config: &SiteConfig) -> String {
        let base = config.base.url_trimmed();
        match self {
            Route::Home => base.to_string(),
            other => format!("{base}{}", other.url_path()),
        }
    }
}

// ============================================================================
// Descriptors
// ============================================================================

/// Build the metadata descriptor for a route.
///
/// `None` when a dynamic route's slug resolves to nothing; such routes
/// must not touch the head at all.
pub fn descriptor_for(
    route: &Route,
    catalog: &Catalog,
    config: &SiteConfig,
) -> Option<PageDescriptor> {
    let url = route.canonical(config);
    let base = config.base.url_trimmed();

    let descriptor = match route {
        Route::Home => {
            let rating = catalog.average_rating().unwrap_or(5.0);
            PageDescriptor::new(
                "Creative Digital Marketing Agency in Karnataka, India",
                "VisionCut is a creative digital marketing agency in Karnataka, India. We offer graphic design, video editing, SEO, social media marketing, and more. We Design. We Market. We Grow Brands.",
            )
            .keywords("digital marketing agency, graphic design, video editing, SEO, social media marketing, Karnataka, India, VisionCut, YouTube thumbnails, logo design")
            .canonical_url(&url)
            .structured_data(vec![
                schema::organization(config),
                schema::local_business(config),
                schema::aggregate_rating(config, rating, catalog.reviews().len()),
                schema::web_page(
                    config,
                    "VisionCut - Creative Digital Marketing Agency",
                    "Creative Digital Marketing Agency in Karnataka, India. We Design. We Market. We Grow Brands.",
                    &url,
                ),
            ])
        }
        Route::Services => {
            let mut documents = vec![
                schema::web_page(
                    config,
                    "VisionCut Services",
                    "Comprehensive digital marketing and creative services",
                    &url,
                ),
                schema::breadcrumb(&[("Home", base), ("Services", &url)]),
            ];
            for category in catalog.categories() {
                let category_url = format!("{url}#{}", category.id);
                documents.push(serde_json::json!({
                    "@context": "https://schema.org",
                    "@type": "Service",
                    "name": category.name,
                    "description": format!(
                        "Professional {} services by {} - {}",
                        category.name, config.base.name, category.kannada
                    ),
                    "provider": {
                        "@type": "LocalBusiness",
                        "name": config.base.name,
                    },
                    "url": category_url,
                    "areaServed": {
                        "@type": "Country",
                        "name": config.business.country_name,
                    },
                }));
            }
            PageDescriptor::new(
                "Our Services - Graphic Design, Video Editing, Digital Marketing & More",
                "Explore VisionCut's comprehensive digital services: Graphic Design, Video Editing, Social Media Marketing, SEO, Academy Services, Technical Support, and Content Writing. Serving Karnataka, India.",
            )
            .keywords("graphic design services, video editing, digital marketing, SEO services, social media management, YouTube thumbnails, logo design, Karnataka, India")
            .canonical_url(&url)
            .structured_data(documents)
        }
        Route::ServiceDetail(id) => {
            let service = catalog.service(id)?;
            let category_name = catalog
                .category(&service.category)
                .map_or(service.category.as_str(), |c| c.name.as_str());
            PageDescriptor::new(
                format!("{} - {category_name}", service.name),
                service.overview.clone(),
            )
            .keywords(format!(
                "{}, {category_name}, VisionCut, Karnataka, India",
                service.name
            ))
            .canonical_url(&url)
            .structured_data(vec![
                schema::service(config, service, &url),
                schema::breadcrumb(&[
                    ("Home", base),
                    ("Services", &format!("{base}/services")),
                    (&service.name, &url),
                ]),
            ])
        }
        Route::Blog => PageDescriptor::new(
            "Blog - Digital Marketing Tips, Design Insights & Growth Strategies",
            "Read the latest articles on digital marketing, graphic design, video editing, SEO, and social media strategies from VisionCut's expert team.",
        )
        .keywords("digital marketing blog, design tips, SEO strategies, social media marketing, video editing tips, YouTube growth, Karnataka")
        .canonical_url(&url)
        .structured_data(vec![
            schema::web_page(
                config,
                "VisionCut Blog",
                "Digital marketing insights and creative tips",
                &url,
            ),
            schema::breadcrumb(&[("Home", base), ("Blog", &url)]),
        ]),
        Route::BlogPost(slug) => {
            let post = catalog.post(slug)?;
            let author_name = catalog
                .author(&post.author_id)
                .map_or(config.base.name.as_str(), |a| a.name.as_str());
            let mut descriptor = PageDescriptor::new(post.title.clone(), post.excerpt.clone())
                .keywords(post.tags.join(", "))
                .social_image(post.featured_image.clone())
                .canonical_url(&url)
                .content_type(ContentType::Article)
                .author(author_name)
                .published_at(post.published_at.clone())
                .structured_data(vec![
                    schema::blog_posting(config, post, author_name, &url),
                    schema::breadcrumb(&[
                        ("Home", base),
                        ("Blog", &format!("{base}/blog")),
                        (&post.title, &url),
                    ]),
                ]);
            if let Some(modified) = &post.modified_at {
                descriptor = descriptor.modified_at(modified.clone());
            }
            descriptor
        }
        Route::Author(id) => {
            let author = catalog.author(id)?;
            PageDescriptor::new(
                format!("{} - Author at VisionCut", author.name),
                author.bio.clone(),
            )
            .keywords(author.expertise.join(", "))
            .social_image(author.avatar.clone())
            .canonical_url(&url)
            .content_type(ContentType::Profile)
            .author(author.name.clone())
            .structured_data(vec![
                schema::person(author, &url),
                schema::breadcrumb(&[
                    ("Home", base),
                    ("Blog", &format!("{base}/blog")),
                    (&author.name, &url),
                ]),
            ])
        }
        Route::Portfolio => PageDescriptor::new(
            "Portfolio - Our Creative Work & Projects",
            "Explore VisionCut's portfolio of creative work including graphic designs, video editing projects, marketing campaigns, and more. Follow @visioncut.2025 on Instagram.",
        )
        .keywords("portfolio, creative work, graphic design examples, video editing samples, marketing projects, VisionCut work")
        .canonical_url(&url)
        .structured_data(vec![
            schema::web_page(
                config,
                "VisionCut Portfolio",
                "Our creative work and projects showcase",
                &url,
            ),
            schema::breadcrumb(&[("Home", base), ("Portfolio", &url)]),
        ]),
        Route::About => {
            let rating = catalog.average_rating().unwrap_or(5.0);
            PageDescriptor::new(
                "About VisionCut - Our Story, Vision & Mission",
                "Learn about VisionCut, a creative digital marketing agency in Karnataka, India. Discover our story, vision, mission, core values, and meet the team behind the brand.",
            )
            .keywords("about VisionCut, digital marketing agency Karnataka, creative agency India, our story, team")
            .canonical_url(&url)
            .structured_data(vec![
                schema::organization(config),
                schema::aggregate_rating(config, rating, catalog.reviews().len()),
                schema::web_page(
                    config,
                    "About VisionCut",
                    "Our story, vision, mission and values",
                    &url,
                ),
                schema::breadcrumb(&[("Home", base), ("About Us", &url)]),
            ])
        }
        Route::Contact => PageDescriptor::new(
            "Contact Us - Let's Grow Your Brand",
            "Get in touch with VisionCut for graphic design, video editing, digital marketing, and SEO services. Based in Karnataka, India. Call +91-98765-43210 or send us a message.",
        )
        .keywords("contact VisionCut, digital marketing enquiry, Karnataka agency contact, hire designers")
        .canonical_url(&url)
        .structured_data(vec![
            schema::local_business(config),
            schema::breadcrumb(&[("Home", base), ("Contact", &url)]),
        ]),
        Route::Privacy => PageDescriptor::new(
            "Privacy Policy",
            "Read VisionCut's privacy policy to understand how we collect, use, and protect your personal information.",
        )
        .canonical_url(&url)
        .structured_data(vec![schema::web_page(
            config,
            "Privacy Policy",
            "How VisionCut handles your data",
            &url,
        )]),
        Route::Terms => PageDescriptor::new(
            "Terms of Service",
            "Read the terms and conditions that govern the use of VisionCut's services and website.",
        )
        .canonical_url(&url)
        .structured_data(vec![schema::web_page(
            config,
            "Terms of Service",
            "Conditions for using VisionCut services",
            &url,
        )]),
    };

    Some(descriptor)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig::default()
    }

    #[test]
    fn test_all_routes_cover_catalog() {
        let catalog = Catalog::builtin();
        let routes = Route::all(catalog);

        // 8 static routes plus one per service, post, and author
        let expected = 8 + catalog.services().len() + catalog.posts().len() + catalog.authors().len();
        assert_eq!(routes.len(), expected);
        assert!(routes.contains(&Route::ServiceDetail("logo-design".into())));
        assert!(routes.contains(&Route::BlogPost("seo-tips-for-small-businesses".into())));
    }

    #[test]
    fn test_url_paths() {
        assert_eq!(Route::Home.url_path(), "/");
        assert_eq!(Route::Privacy.url_path(), "/privacy-policy");
        assert_eq!(
            Route::BlogPost("hello".into()).url_path(),
            "/blog/hello"
        );
        assert_eq!(Route::Author("2".into()).url_path(), "/authors/2");
    }

    #[test]
    fn test_output_rel() {
        assert_eq!(Route::Home.output_rel(), "");
        assert_eq!(Route::Blog.output_rel(), "blog");
        assert_eq!(
            Route::ServiceDetail("logo-design".into()).output_rel(),
            "services/logo-design"
        );
    }

    #[test]
    fn test_canonical_urls() {
        let config = config();
        assert_eq!(Route::Home.canonical(&config), "https://visioncut.com");
        assert_eq!(
            Route::About.canonical(&config),
            "https://visioncut.com/about"
        );
    }

    #[test]
    fn test_home_descriptor_schema_stack() {
        let config = config();
        let catalog = Catalog::builtin();

        let d = descriptor_for(&Route::Home, catalog, &config).unwrap();
        assert_eq!(d.content_type, ContentType::Website);
        assert_eq!(d.structured_data.len(), 4);
        assert_eq!(d.structured_data[0]["@type"], "Organization");
        assert_eq!(d.structured_data[1]["@type"], "LocalBusiness");
        assert_eq!(d.structured_data[2]["@type"], "AggregateRating");
        assert_eq!(d.structured_data[3]["@type"], "WebPage");
    }

    #[test]
    fn test_services_descriptor_per_category_schemas() {
        let config = config();
        let catalog = Catalog::builtin();

        let d = descriptor_for(&Route::Services, catalog, &config).unwrap();
        // WebPage + breadcrumb + one Service document per category
        assert_eq!(d.structured_data.len(), 2 + catalog.categories().len());
        assert_eq!(d.structured_data[1]["@type"], "BreadcrumbList");
        assert_eq!(d.structured_data[2]["@type"], "Service");

        // Category documents carry the bilingual description
        let description = d.structured_data[2]["description"].as_str().unwrap();
        assert_eq!(
            description,
            "Professional Graphic Design services by VisionCut - ಗ್ರಾಫಿಕ್ ಡಿಸೈನ್"
        );
    }

    #[test]
    fn test_blog_post_descriptor_is_article() {
        let config = config();
        let catalog = Catalog::builtin();

        let route = Route::BlogPost("instagram-marketing-strategies-2025".into());
        let d = descriptor_for(&route, catalog, &config).unwrap();

        assert_eq!(d.content_type, ContentType::Article);
        assert_eq!(d.author.as_deref(), Some("Priya Sharma"));
        assert_eq!(d.published_at.as_deref(), Some("2025-01-10"));
        assert_eq!(d.modified_at.as_deref(), Some("2025-02-02"));
        assert_eq!(d.structured_data[0]["@type"], "BlogPosting");

        let crumbs = d.structured_data[1]["itemListElement"].as_array().unwrap();
        assert_eq!(crumbs.len(), 3);
        assert_eq!(crumbs[2]["position"], 3);
    }

    #[test]
    fn test_author_descriptor_is_profile() {
        let config = config();
        let catalog = Catalog::builtin();

        let d = descriptor_for(&Route::Author("2".into()), catalog, &config).unwrap();
        assert_eq!(d.content_type, ContentType::Profile);
        assert_eq!(d.structured_data[0]["@type"], "Person");
    }

    #[test]
    fn test_missing_slug_yields_no_descriptor() {
        let config = config();
        let catalog = Catalog::builtin();

        assert!(descriptor_for(&Route::BlogPost("missing".into()), catalog, &config).is_none());
        assert!(descriptor_for(&Route::ServiceDetail("missing".into()), catalog, &config).is_none());
        assert!(descriptor_for(&Route::Author("99".into()), catalog, &config).is_none());
    }

    #[test]
    fn test_every_resolvable_route_has_nonempty_required_fields() {
        let config = config();
        let catalog = Catalog::builtin();

        for route in Route::all(catalog) {
            let d = descriptor_for(&route, catalog, &config)
                .unwrap_or_else(|| panic!("route {route:?} did not resolve"));
            assert!(!d.title.is_empty(), "empty title for {route:?}");
            assert!(!d.description.is_empty(), "empty description for {route:?}");
        }
    }
}
