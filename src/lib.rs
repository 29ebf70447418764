//! Price List Library
//!
//! Turns a brand-grouped price catalog into print-ready price list pages.
//! This library provides functionality to:
//! - Validate a catalog read from JSON
//! - Split the catalog into pages, one brand per page, with a smaller first page
//! - Number rows with serials that run across the whole document
//! - Present the pages as an HTML document with a colour theme
//!
//! # Example
//!
//! ```
//! use price_list::catalog::sample_catalog;
//! use price_list::config::PaginationConfig;
//! use price_list::pipeline::generate;
//!
//! let pages = generate(&sample_catalog(), &PaginationConfig::default()).unwrap();
//!
//! // iPhone and Samsung each get their own page
//! assert_eq!(pages.len(), 2);
//! assert_eq!(pages[1].start_serial, 5);
//! ```

pub mod error;
pub mod catalog;
pub mod paginate;
pub mod render;
pub mod pipeline;
pub mod config;
pub mod layout;
pub mod theme;
pub mod date;
pub mod present;

// Re-export commonly used items
pub use error::{Error, Result};
pub use catalog::{validate, Catalog, CatalogItem};
pub use paginate::{paginate, PageDescriptor};
pub use render::{render, RenderedPage};
pub use pipeline::{generate, InputChange, Presenter, PriceList};
