//! Structured-data document generators.
//!
//! Pure functions mapping content records and configured business facts to
//! schema.org documents (as opaque `serde_json::Value` blobs). Each
//! generator covers exactly one vocabulary type; optional inputs that are
//! absent are omitted from the output, never emitted as null or empty.

use crate::catalog::{Author, BlogPost, Review, Service};
use crate::config::SiteConfig;
use serde_json::{Value, json};

/// Fixed schema.org context for every document.
const CONTEXT: &str = "https://schema.org";

// ============================================================================
// Business Documents
// ============================================================================

/// Organization document with the configured contact point and address.
pub fn organization(config: &SiteConfig) -> Value {
    let base = &config.base;
    let business = &config.business;
    json!({
        "@context": CONTEXT,
        "@type": "Organization",
        "name": base.name,
        "alternateName": base.alternate_name,
        "url": base.url,
        "logo": base.logo,
        "description": base.description,
        "address": {
            "@type": "PostalAddress",
            "addressRegion": business.region,
            "addressCountry": business.country_code,
        },
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": business.phone,
            "contactType": "customer service",
            "availableLanguage": business.languages,
        },
        "sameAs": business.profile_urls(),
    })
}

/// LocalBusiness document with geo-coordinates and opening hours.
pub fn local_business(config: &SiteConfig) -> Value {
    let base = &config.base;
    let business = &config.business;
    json!({
        "@context": CONTEXT,
        "@type": "LocalBusiness",
        "@id": format!("{}/#localbusiness", base.url_trimmed()),
        "name": base.name,
        "image": base.logo,
        "description": base.description,
        "address": {
            "@type": "PostalAddress",
            "addressRegion": business.region,
            "addressCountry": business.country_name,
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": business.latitude,
            "longitude": business.longitude,
        },
        "telephone": business.phone,
        "email": base.email,
        "url": base.url,
        "priceRange": business.price_range,
        "openingHoursSpecification": {
            "@type": "OpeningHoursSpecification",
            "dayOfWeek": business.opening_days,
            "opens": business.opens,
            "closes": business.closes,
        },
    })
}

// ============================================================================
// Rating Documents
// ============================================================================

/// AggregateRating document. The rating value is formatted to one decimal
/// place; bounds are fixed at 5/1.
pub fn aggregate_rating(config: &SiteConfig, rating: f64, review_count: usize) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "AggregateRating",
        "itemReviewed": {
            "@type": "LocalBusiness",
            "name": config.base.name,
            "image": config.base.logo,
        },
        "ratingValue": format!("{rating:.1}"),
        "bestRating": "5",
        "worstRating": "1",
        "ratingCount": review_count,
    })
}

/// Review document. `date` defaults to the current date.
pub fn review(config: &SiteConfig, review: &Review, date: Option<&str>) -> Value {
    let date = date.map_or_else(today, str::to_owned);
    json!({
        "@context": CONTEXT,
        "@type": "Review",
        "itemReviewed": {
            "@type": "LocalBusiness",
            "name": config.base.name,
        },
        "reviewRating": {
            "@type": "Rating",
            "ratingValue": review.rating,
            "bestRating": "5",
            "worstRating": "1",
        },
        "author": {
            "@type": "Person",
            "name": review.name,
        },
        "reviewBody": review.text,
        "datePublished": date,
        "publisher": {
            "@type": "Organization",
            "name": review.company,
        },
    })
}

// ============================================================================
// Content Documents
// ============================================================================

/// BlogPosting document. `dateModified` falls back to the publication date.
pub fn blog_posting(config: &SiteConfig, post: &BlogPost, author_name: &str, url: &str) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "BlogPosting",
        "headline": post.title,
        "description": post.excerpt,
        "image": post.featured_image,
        "author": {
            "@type": "Person",
            "name": author_name,
        },
        "publisher": {
            "@type": "Organization",
            "name": config.base.name,
            "logo": {
                "@type": "ImageObject",
                "url": config.base.logo,
            },
        },
        "datePublished": post.published_at,
        "dateModified": post.modified_at.as_deref().unwrap_or(&post.published_at),
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": url,
        },
    })
}

/// Person document. Social platforms without a handle are omitted from
/// `sameAs` entirely.
pub fn person(author: &Author, url: &str) -> Value {
    let mut same_as = Vec::new();
    if let Some(handle) = &author.instagram {
        same_as.push(format!("https://instagram.com/{handle}"));
    }
    if let Some(handle) = &author.twitter {
        same_as.push(format!("https://twitter.com/{handle}"));
    }
    if let Some(handle) = &author.linkedin {
        same_as.push(format!("https://linkedin.com/in/{handle}"));
    }
    json!({
        "@context": CONTEXT,
        "@type": "Person",
        "name": author.name,
        "description": author.bio,
        "image": author.avatar,
        "url": url,
        "sameAs": same_as,
    })
}

/// Service document with the configured provider and area served.
pub fn service(config: &SiteConfig, service: &Service, url: &str) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "Service",
        "name": service.name,
        "description": service.overview,
        "provider": {
            "@type": "LocalBusiness",
            "name": config.base.name,
        },
        "url": url,
        "areaServed": {
            "@type": "Country",
            "name": config.business.country_name,
        },
    })
}

/// WebPage document marking the page as part of the brand site.
pub fn web_page(config: &SiteConfig, title: &str, description: &str, url: &str) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "WebPage",
        "name": title,
        "description": description,
        "url": url,
        "isPartOf": {
            "@type": "WebSite",
            "name": config.base.name,
            "url": config.base.url,
        },
    })
}

/// BreadcrumbList document; positions are 1-based.
pub fn breadcrumb(items: &[(&str, &str)]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, (name, url))| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": name,
                "item": url,
            })
        })
        .collect();
    json!({
        "@context": CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

/// FAQPage document from question/answer pairs.
pub fn faq_page(faqs: &[(&str, &str)]) -> Value {
    let entities: Vec<Value> = faqs
        .iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": answer,
                },
            })
        })
        .collect();
    json!({
        "@context": CONTEXT,
        "@type": "FAQPage",
        "mainEntity": entities,
    })
}

/// Current date as YYYY-MM-DD.
fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

// ============================================================================
// Tests
// ============================================================================
