//! Page layout calculations
//!
//! Price tables have fixed-height rows, so the number of rows a page can hold
//! follows from the page size and the height of the fixed page furniture.

use serde::Deserialize;

/// Simple length type in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct Length(pub f64);

impl Length {
    /// Create a length from millimeters
    pub fn from_mm(mm: f64) -> Self {
        Length(mm)
    }

    /// Get the value in millimeters
    pub fn mm(&self) -> f64 {
        self.0
    }
}

/// Page dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageDimensions {
    pub width: Length,
    pub height: Length,
}

impl PageDimensions {
    /// US Letter size (8.5" × 11")
    pub fn letter() -> Self {
        Self {
            width: Length::from_mm(215.9),
            height: Length::from_mm(279.4),
        }
    }

    /// A4 size (210mm × 297mm)
    pub fn a4() -> Self {
        Self {
            width: Length::from_mm(210.0),
            height: Length::from_mm(297.0),
        }
    }
}

/// Paper size as named in a config file
///
/// `"a4"`, `"letter"` or `{ "custom": { "width": 100.0, "height": 150.0 } }`
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Custom { width: Length, height: Length },
}

impl PageSize {
    pub fn dimensions(&self) -> PageDimensions {
        match *self {
            PageSize::A4 => PageDimensions::a4(),
            PageSize::Letter => PageDimensions::letter(),
            PageSize::Custom { width, height } => PageDimensions { width, height },
        }
    }
}

/// Margins for page content
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: Length,
    pub bottom: Length,
    pub left: Length,
    pub right: Length,
}

impl Margins {
    /// Create margins with same value on all sides
    pub fn uniform(margin: Length) -> Self {
        Self {
            top: margin,
            bottom: margin,
            left: margin,
            right: margin,
        }
    }
}

impl Default for Margins {
    /// 10mm on every side
    fn default() -> Self {
        Self::uniform(Length::from_mm(10.0))
    }
}

/// Vertical space taken by each part of a price list page
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub page: PageSize,
    pub margins: Margins,
    /// Logo and contact block
    pub header_height: Length,
    /// Validity notice and page number
    pub footer_height: Length,
    /// Document title, first page only
    pub title_height: Length,
    /// "SERIES" heading above the table
    pub section_header_height: Length,
    /// Column headings of the table
    pub table_header_height: Length,
    pub row_height: Length,
}

impl Default for PageLayout {
    /// A4 layout that fits 15 rows on the first page and 16 on the rest
    fn default() -> Self {
        Self {
            page: PageSize::A4,
            margins: Margins::default(),
            header_height: Length::from_mm(35.0),
            footer_height: Length::from_mm(15.0),
            title_height: Length::from_mm(15.0),
            section_header_height: Length::from_mm(10.0),
            table_header_height: Length::from_mm(10.0),
            row_height: Length::from_mm(12.5),
        }
    }
}

impl PageLayout {
    /// Height left for table rows on a page without the title
    pub fn table_body_height(&self) -> Length {
        Length::from_mm(
            self.page.dimensions().height.mm()
                - self.margins.top.mm()
                - self.margins.bottom.mm()
                - self.header_height.mm()
                - self.footer_height.mm()
                - self.section_header_height.mm()
                - self.table_header_height.mm(),
        )
    }

    /// Row capacities as (first page, other pages)
    ///
    /// A layout too cramped for a single row yields a capacity of 0, which
    /// pagination rejects.
    pub fn capacities(&self) -> (usize, usize) {
        let rows = |height: f64| {
            if self.row_height.mm() <= 0.0 || height <= 0.0 {
                0
            } else {
                (height / self.row_height.mm()).floor() as usize
            }
        };

        let body = self.table_body_height().mm();
        (rows(body - self.title_height.mm()), rows(body))
    }
}
