//! Splitting a catalog into pages
//!
//! Pages are filled one brand at a time. The first page of the whole document
//! holds fewer rows than the rest because it also carries the title block. A
//! brand's last page may be left partly empty; the next brand always starts on
//! a fresh page so every page shows a single series.

use crate::catalog::Catalog;
use crate::error::{Error, Result};

/// One row's worth of data before serial numbers are assigned
#[derive(Debug, Clone, PartialEq)]
pub struct PageItem {
    pub brand: String,
    pub name: String,
    pub price: f64,
}

/// One page of items, in catalog order
#[derive(Debug, Clone, PartialEq)]
pub struct PageDescriptor {
    /// 1-based page number
    pub page_number: usize,
    pub items: Vec<PageItem>,
}

/// Partition `catalog` into pages
///
/// `first_page_capacity` applies only to page 1 of the document, not to the
/// first page of each brand. Brands without items produce no pages.
///
/// # Example
///
/// ```
/// use price_list::catalog::validate;
/// use price_list::paginate::paginate;
///
/// let items: Vec<_> = (1..=20)
///     .map(|i| serde_json::json!({ "name": format!("Item {}", i), "price": i }))
///     .collect();
/// let catalog = validate(&serde_json::json!({ "A": items })).unwrap();
///
/// let pages = paginate(&catalog, 15, 16).unwrap();
/// assert_eq!(pages.len(), 2);
/// assert_eq!(pages[0].items.len(), 15);
/// assert_eq!(pages[1].items.len(), 5);
/// ```
pub fn paginate(
    catalog: &Catalog,
    first_page_capacity: usize,
    regular_page_capacity: usize,
) -> Result<Vec<PageDescriptor>> {
    if first_page_capacity == 0 || regular_page_capacity == 0 {
        return Err(Error::InvalidCapacity {
            first: first_page_capacity,
            regular: regular_page_capacity,
        });
    }

    let mut pages = Vec::new();
    let mut page_number = 1;

    for brand in catalog.brands() {
        if brand.items.is_empty() {
            log::warn!("Brand \"{}\" has no items and gets no page", brand.name);
            continue;
        }

        let mut remaining = brand.items.as_slice();
        while !remaining.is_empty() {
            let capacity = if page_number == 1 {
                first_page_capacity
            } else {
                regular_page_capacity
            };
            let (chunk, rest) = remaining.split_at(capacity.min(remaining.len()));

            log::debug!(
                "Page {}: {} items of \"{}\" (capacity {})",
                page_number,
                chunk.len(),
                brand.name,
                capacity
            );

            pages.push(PageDescriptor {
                page_number,
                items: chunk
                    .iter()
                    .map(|item| PageItem {
                        brand: brand.name.clone(),
                        name: item.name.clone(),
                        price: item.price,
                    })
                    .collect(),
            });

            remaining = rest;
            page_number += 1;
        }
    }

    log::info!("Created {} pages from {} items", pages.len(), catalog.item_count());

    Ok(pages)
}
