//! VisionCut head pipeline - per-route document head metadata generator.

mod build;
mod catalog;
mod cli;
mod config;
mod descriptor;
mod head;
mod logger;
mod pages;
mod schema;

use anyhow::Result;
use build::build_site;
use catalog::Catalog;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use pages::Route;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Build { .. } => build_site(&config).map(|_| ()),
        Commands::Routes { page, per_page } => list_routes(&config, *page, *per_page),
        Commands::Search { query } => search_posts(query),
        Commands::Check => check_catalog(),
    }
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error; the built-in brand defaults
/// describe the production site.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

/// Print published routes with their canonical URLs, one page at a time
/// when `--page` is given.
fn list_routes(config: &SiteConfig, page: Option<usize>, per_page: usize) -> Result<()> {
    let catalog = Catalog::builtin();
    let routes = Route::all(catalog);

    match page {
        Some(number) => {
            let page = catalog::paginate(&routes, number, per_page);
            for route in &page.items {
                log!("routes"; "{}", route.canonical(config));
            }
            log!("routes"; "page {} of {} ({} routes total)", page.number, page.total_pages, page.total_items);
        }
        None => {
            for route in &routes {
                log!("routes"; "{}", route.canonical(config));
            }
            log!("routes"; "{} routes total", routes.len());
        }
    }
    Ok(())
}

/// Search blog posts and show related reading for each hit.
fn search_posts(query: &str) -> Result<()> {
    let catalog = Catalog::builtin();
    let hits = catalog.search_posts(query);

    for post in &hits {
        log!("search"; "{} ({})", post.title, post.published_at);
        for related in catalog.related_posts(&post.slug, 3) {
            log!("search"; "  related: {}", related.title);
        }
    }
    log!("search"; "{} posts match `{query}`", hits.len());
    Ok(())
}

/// Print catalog counts and the aggregate review rating.
fn check_catalog() -> Result<()> {
    let catalog = Catalog::builtin();

    log!("check"; "{} services in {} categories", catalog.services().len(), catalog.categories().len());
    for category in catalog.categories() {
        log!("check"; "  {}: {} services, {} portfolio items",
            category.name,
            catalog.services_in_category(&category.id).len(),
            catalog.portfolio_in_category(&category.id).len());
    }
    log!("check"; "{} posts by {} authors", catalog.posts().len(), catalog.authors().len());
    for author in catalog.authors() {
        log!("check"; "  {}: {} posts", author.name, catalog.posts_by_author(&author.id).len());
    }
    match catalog.average_rating() {
        Some(rating) => {
            log!("check"; "{} reviews ({} featured), average rating {rating:.1}",
                catalog.reviews().len(),
                catalog.featured_reviews().len());
        }
        None => log!("check"; "no reviews"),
    }
    for stat in catalog.stats() {
        log!("check"; "  {}{} {}", stat.number, stat.suffix, stat.label);
    }
    Ok(())
}
