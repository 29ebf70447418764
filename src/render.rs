//! Turning page descriptors into structured pages

use crate::paginate::PageDescriptor;

/// A numbered table row
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub serial: usize,
    pub name: String,
    pub price: f64,
}

/// One brand's table on a page
#[derive(Debug, Clone, PartialEq)]
pub struct BrandSection {
    pub brand: String,
    pub rows: Vec<Row>,
}

/// A page ready for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub page_number: usize,
    pub total_pages: usize,
    pub start_serial: usize,
    pub brand_sections: Vec<BrandSection>,
}

impl RenderedPage {
    /// The title block only appears on the first page of the document
    pub fn is_first_page(&self) -> bool {
        self.page_number == 1
    }

    pub fn row_count(&self) -> usize {
        self.brand_sections.iter().map(|s| s.rows.len()).sum()
    }

    /// Serial of the last row, or `None` for a page without rows
    pub fn end_serial(&self) -> Option<usize> {
        match self.row_count() {
            0 => None,
            n => Some(self.start_serial + n - 1),
        }
    }
}

/// Build one page, numbering rows from `start_serial`
///
/// Items are grouped by brand in the order each brand is first seen on the
/// page, then numbered group by group.
pub fn render(descriptor: &PageDescriptor, total_pages: usize, start_serial: usize) -> RenderedPage {
    let mut brand_sections: Vec<BrandSection> = Vec::new();

    for item in &descriptor.items {
        let index = match brand_sections.iter().position(|s| s.brand == item.brand) {
            Some(index) => index,
            None => {
                brand_sections.push(BrandSection {
                    brand: item.brand.clone(),
                    rows: Vec::new(),
                });
                brand_sections.len() - 1
            }
        };

        brand_sections[index].rows.push(Row {
            serial: 0,
            name: item.name.clone(),
            price: item.price,
        });
    }

    let mut serial = start_serial;
    for row in brand_sections.iter_mut().flat_map(|s| s.rows.iter_mut()) {
        row.serial = serial;
        serial += 1;
    }

    RenderedPage {
        page_number: descriptor.page_number,
        total_pages,
        start_serial,
        brand_sections,
    }
}

/// Render a whole page sequence with serials running across pages from 1
pub fn render_all(descriptors: &[PageDescriptor]) -> Vec<RenderedPage> {
    let total_pages = descriptors.len();
    let mut serial = 1;

    descriptors
        .iter()
        .map(|descriptor| {
            let page = render(descriptor, total_pages, serial);
            serial += descriptor.items.len();
            page
        })
        .collect()
}
