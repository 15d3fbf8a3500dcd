//! Site content catalog.
//!
//! Everything the site publishes lives here as typed records: service
//! offerings, blog posts and their authors, client reviews, portfolio
//! items, and headline stats.
//!
//! # Architecture
//!
//! | Module  | Responsibility                             |
//! |---------|--------------------------------------------|
//! | `types` | Record definitions                         |
//! | `store` | `Catalog` queries, lookups, and pagination |
//! | `seed`  | Built-in production content                |

mod seed;
mod store;
mod types;

pub use store::{Catalog, paginate};
pub use types::{Author, BlogPost, Review, Service};
