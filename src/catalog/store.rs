//! Catalog access and queries.
//!
//! The `Catalog` owns every content record and answers the lookups the
//! page layer needs: slug resolution, category filtering, search, related
//! posts, and the aggregate review rating. Content is immutable for the
//! lifetime of a run, so the built-in catalog is a process-wide static.

use std::sync::LazyLock;

use super::seed;
use super::types::{Author, BlogPost, PortfolioItem, Review, Service, ServiceCategory, Stat};

/// The built-in production catalog, initialized on first access.
static BUILTIN: LazyLock<Catalog> = LazyLock::new(Catalog::seeded);

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: Vec<&'a T>,
    /// 1-based page number.
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

// ============================================================================
// Catalog
// ============================================================================

/// All site content.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<ServiceCategory>,
    services: Vec<Service>,
    authors: Vec<Author>,
    posts: Vec<BlogPost>,
    reviews: Vec<Review>,
    portfolio: Vec<PortfolioItem>,
    stats: Vec<Stat>,
}

impl Catalog {
    /// The built-in production content.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    fn seeded() -> Self {
        Self {
            categories: seed::service_categories(),
            services: seed::services(),
            authors: seed::authors(),
            posts: seed::posts(),
            reviews: seed::reviews(),
            portfolio: seed::portfolio(),
            stats: seed::stats(),
        }
    }

    // ------------------------------------------------------------------
    // Services
    // ------------------------------------------------------------------

    pub fn categories(&self) -> &[ServiceCategory] {
        &self.categories
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Resolve a service by its slug-like id.
    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&ServiceCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Services in one category, in catalog order.
    pub fn services_in_category(&self, category_id: &str) -> Vec<&Service> {
        self.services
            .iter()
            .filter(|s| s.category == category_id)
            .collect()
    }

    // ------------------------------------------------------------------
    // Blog
    // ------------------------------------------------------------------

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn post(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn author(&self, id: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// Posts written by one author, in catalog order.
    pub fn posts_by_author(&self, author_id: &str) -> Vec<&BlogPost> {
        self.posts
            .iter()
            .filter(|p| p.author_id == author_id)
            .collect()
    }

    /// Case-insensitive search over title, excerpt, and tags.
    pub fn search_posts(&self, query: &str) -> Vec<&BlogPost> {
        let query = query.to_lowercase();
        if query.is_empty() {
            return self.posts.iter().collect();
        }
        self.posts
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&query)
                    || p.excerpt.to_lowercase().contains(&query)
                    || p.tags.iter().any(|t| t.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Other posts sharing the given post's category, newest first.
    pub fn related_posts(&self, slug: &str, limit: usize) -> Vec<&BlogPost> {
        let Some(post) = self.post(slug) else {
            return Vec::new();
        };
        let mut related: Vec<&BlogPost> = self
            .posts
            .iter()
            .filter(|p| p.slug != slug && p.category == post.category)
            .collect();
        related.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        related.truncate(limit);
        related
    }

    // ------------------------------------------------------------------
    // Reviews
    // ------------------------------------------------------------------

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn featured_reviews(&self) -> Vec<&Review> {
        self.reviews.iter().filter(|r| r.featured).collect()
    }

    /// Mean star rating across all reviews, recomputed on demand.
    ///
    /// `None` when there are no reviews; an average is never reported
    /// from an empty set.
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        Some(f64::from(sum) / self.reviews.len() as f64)
    }

    // ------------------------------------------------------------------
    // Portfolio & Stats
    // ------------------------------------------------------------------

    pub fn portfolio(&self) -> &[PortfolioItem] {
        &self.portfolio
    }

    pub fn portfolio_in_category(&self, category_id: &str) -> Vec<&PortfolioItem> {
        self.portfolio
            .iter()
            .filter(|p| p.category == category_id)
            .collect()
    }

    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// Slice items into a 1-based page.
///
/// `number` past the end yields an empty page with the correct totals;
/// `per_page` of zero is treated as one item per page.
pub fn paginate<T>(items: &[T], number: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let number = number.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);

    let start = (number - 1).saturating_mul(per_page);
    let page_items = items
        .iter()
        .skip(start)
        .take(per_page)
        .collect();

    Page {
        items: page_items,
        number,
        total_pages,
        total_items,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_category() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.categories().len(), 7);
        for category in catalog.categories() {
            assert!(
                !catalog.services_in_category(&category.id).is_empty(),
                "category {} has no services",
                category.id
            );
        }
    }

    #[test]
    fn test_service_lookup() {
        let catalog = Catalog::builtin();

        let service = catalog.service("youtube-thumbnail").unwrap();
        assert_eq!(service.name, "YouTube Thumbnail Design");
        assert_eq!(service.category, "graphic");

        assert!(catalog.service("nonexistent").is_none());
    }

    #[test]
    fn test_service_records_are_complete() {
        let catalog = Catalog::builtin();

        for category in catalog.categories() {
            assert!(!category.kannada.is_empty(), "{} has no kannada name", category.id);
        }
        for service in catalog.services() {
            assert!(!service.kannada.is_empty(), "{} has no kannada name", service.id);
            assert!(!service.process.is_empty(), "{} has no process steps", service.id);
            assert!(!service.case_study.problem.is_empty(), "{} case study empty", service.id);
            assert!(!service.case_study.result.is_empty(), "{} case study empty", service.id);
        }

        let service = catalog.service("youtube-thumbnail").unwrap();
        assert_eq!(service.kannada, "ಯೂಟ್ಯೂಬ್ ಥಂಬ್ನೈಲ್ ಡಿಸೈನ್");
        assert_eq!(service.process.len(), 4);
        assert_eq!(
            service.case_study.result,
            "Increased CTR to 8.5% within 30 days"
        );
    }

    #[test]
    fn test_post_and_author_integrity() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.posts().len(), 3);
        for post in catalog.posts() {
            assert!(
                catalog.author(&post.author_id).is_some(),
                "post {} references missing author {}",
                post.slug,
                post.author_id
            );
        }
    }

    #[test]
    fn test_search_posts_case_insensitive() {
        let catalog = Catalog::builtin();

        let hits = catalog.search_posts("INSTAGRAM");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "instagram-marketing-strategies-2025");

        // Tag match
        let hits = catalog.search_posts("ctr");
        assert_eq!(hits.len(), 1);

        // Empty query returns everything
        assert_eq!(catalog.search_posts("").len(), 3);
    }

    #[test]
    fn test_related_posts_share_category() {
        let catalog = Catalog::builtin();

        let related = catalog.related_posts("how-to-create-viral-youtube-thumbnails", 3);
        for post in &related {
            assert_eq!(post.category, "Design Tips");
            assert_ne!(post.slug, "how-to-create-viral-youtube-thumbnails");
        }

        assert!(catalog.related_posts("missing-slug", 3).is_empty());
    }

    #[test]
    fn test_average_rating() {
        let catalog = Catalog::builtin();

        // Five 5-star reviews and one 4-star: 29 / 6
        let rating = catalog.average_rating().unwrap();
        assert!((rating - 29.0 / 6.0).abs() < 1e-9);

        let empty = Catalog::default();
        assert_eq!(empty.average_rating(), None);
    }

    #[test]
    fn test_featured_reviews_subset() {
        let catalog = Catalog::builtin();

        let featured = catalog.featured_reviews();
        assert_eq!(featured.len(), 5);
        assert!(featured.iter().all(|r| r.featured));
    }

    #[test]
    fn test_paginate_basic() {
        let items: Vec<u32> = (1..=10).collect();

        let page = paginate(&items, 1, 4);
        assert_eq!(page.items, vec![&1, &2, &3, &4]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 10);

        let last = paginate(&items, 3, 4);
        assert_eq!(last.items, vec![&9, &10]);
    }

    #[test]
    fn test_paginate_out_of_range() {
        let items: Vec<u32> = (1..=3).collect();

        let page = paginate(&items, 9, 2);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_paginate_empty() {
        let items: Vec<u32> = Vec::new();

        let page = paginate(&items, 1, 5);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_items, 0);
    }

    #[test]
    fn test_portfolio_category_filter() {
        let catalog = Catalog::builtin();

        let video = catalog.portfolio_in_category("video");
        assert_eq!(video.len(), 3);
        assert!(video.iter().all(|p| p.category == "video"));
    }
}
