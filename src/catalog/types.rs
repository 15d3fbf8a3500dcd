//! Content record types.
//!
//! Plain data carried by the catalog: services, blog posts, authors,
//! client reviews, portfolio items, and headline stats. All types derive
//! serde so records can be exported or inspected as JSON.

use serde::{Deserialize, Serialize};

/// A service category grouping related offerings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub id: String,
    pub name: String,
    /// Kannada rendering of the category name.
    pub kannada: String,
    pub icon: String,
}

/// A client engagement summary attached to a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub problem: String,
    pub solution: String,
    pub result: String,
}

/// A single service offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Kannada rendering of the service name.
    pub kannada: String,
    /// Category id; always matches a `ServiceCategory`.
    pub category: String,
    pub icon: String,
    pub overview: String,
    pub deliverables: Vec<String>,
    /// Working steps shown on the detail page, in order.
    pub process: Vec<String>,
    pub tools: Vec<String>,
    pub case_study: CaseStudy,
    pub ideal_for: Vec<String>,
}

/// A blog author.
///
/// Social handles are per-platform and optional; absent handles must not
/// surface anywhere downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub bio: String,
    pub expertise: Vec<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
}

/// A published blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub category: String,
    pub tags: Vec<String>,
    /// Author id; always matches an `Author`.
    pub author_id: String,
    pub featured_image: String,
    /// Estimated reading time in minutes.
    pub read_time: u32,
    pub views: u32,
    /// Publication date, YYYY-MM-DD.
    pub published_at: String,
    /// Last-modified date; publication date when absent.
    pub modified_at: Option<String>,
}

/// A client review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub name: String,
    pub company: String,
    pub service: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub text: String,
    pub featured: bool,
}

/// A portfolio showcase item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    /// Category id; matches a `ServiceCategory`.
    pub category: String,
    pub image: String,
    pub likes: u32,
    pub caption: String,
}

/// A headline statistic shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub number: u32,
    pub suffix: String,
    pub label: String,
}
