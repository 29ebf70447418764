//! Print-ready HTML output
//!
//! Each rendered page becomes an A4 `<div class="page">` with the company
//! header, the document title (first page only), one titled price table per
//! brand and a footer with the validity notice and page number. Page breaks
//! are left to the browser's print stylesheet.

use std::fmt::Write as _;
use std::path::Path;
use chrono::NaiveDate;
use crate::config::{CompanyInfo, Config};
use crate::date::{format_month_year, parse_date_expression, resolve_date};
use crate::error::Result;
use crate::pipeline::Presenter;
use crate::render::{BrandSection, RenderedPage};
use crate::theme::Theme;

/// Everything on a page that does not come from the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlOptions {
    pub title: String,
    pub company: CompanyInfo,
    pub currency_symbol: String,
    pub theme: Theme,
    /// Month shown in the footer; omitted from the notice when `None`
    pub valid_from: Option<NaiveDate>,
}

impl HtmlOptions {
    /// Resolve theme colours and the valid-from date from a config
    pub fn from_config(config: &Config) -> Result<Self> {
        let theme = Theme::resolve(&config.theme.primary, &config.theme.secondary)?;
        let valid_from = resolve_date(&parse_date_expression(&config.document.valid_from)?);

        Ok(Self {
            title: config.document.title.clone(),
            company: config.company.clone(),
            currency_symbol: config.document.currency_symbol.clone(),
            theme,
            valid_from,
        })
    }
}

/// Presenter that keeps the latest document as an HTML string
#[derive(Debug, Clone)]
pub struct HtmlPresenter {
    options: HtmlOptions,
    document: String,
}

impl HtmlPresenter {
    pub fn new(options: HtmlOptions) -> Self {
        Self {
            options,
            document: String::new(),
        }
    }

    /// The last presented document, empty before the first call
    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.options.theme = theme;
    }

    /// Write the last presented document to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.document)?;
        log::info!("Wrote {} bytes to {}", self.document.len(), path.display());
        Ok(())
    }
}

impl Presenter for HtmlPresenter {
    fn present(&mut self, pages: &[RenderedPage]) -> Result<()> {
        self.document = render_document(pages, &self.options);
        Ok(())
    }
}

/// Build the complete HTML document for a page sequence
pub fn render_document(pages: &[RenderedPage], options: &HtmlOptions) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(&options.title));
    let _ = writeln!(
        html,
        "<style>\n:root {{ {} }}\n{}</style>",
        options.theme.css_variables(),
        STYLESHEET
    );
    html.push_str("</head>\n<body>\n");

    for page in pages {
        render_page(&mut html, page, options);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_page(html: &mut String, page: &RenderedPage, options: &HtmlOptions) {
    html.push_str("<div class=\"page\">\n");
    let _ = writeln!(html, "<div class=\"watermark\">{}</div>", escape_html(&options.company.name));
    render_header(html, &options.company);

    if page.is_first_page() && !options.title.is_empty() {
        let _ = writeln!(html, "<h2 class=\"page-title\">{}</h2>", escape_html(&options.title));
    }

    html.push_str("<div class=\"content-area\">\n");
    for section in &page.brand_sections {
        render_section(html, section, &options.currency_symbol);
    }
    html.push_str("</div>\n");

    render_footer(html, page, options.valid_from.as_ref());
    html.push_str("</div>\n");
}

fn render_header(html: &mut String, company: &CompanyInfo) {
    html.push_str("<div class=\"header\">\n<div class=\"logo-section\">\n");
    if let Some(ref logo) = company.logo_url {
        let _ = writeln!(
            html,
            "<div class=\"logo\"><img src=\"{}\" alt=\"{} logo\"></div>",
            escape_html(logo),
            escape_html(&company.name)
        );
    }
    let _ = writeln!(html, "<div class=\"company-name\">{}</div>", escape_html(&company.name));
    html.push_str("</div>\n<div class=\"contact-info\">\n<h3>Contact Us</h3>\n");
    for line in [&company.phone, &company.email, &company.website] {
        if !line.is_empty() {
            let _ = writeln!(html, "<p>{}</p>", escape_html(line));
        }
    }
    html.push_str("</div>\n</div>\n");
}

fn render_section(html: &mut String, section: &BrandSection, currency_symbol: &str) {
    let _ = writeln!(
        html,
        "<div class=\"section-header\">{} SERIES</div>",
        escape_html(&section.brand.to_uppercase())
    );
    html.push_str(
        "<table class=\"price-table\">\n<thead>\n\
         <tr><th>S.No.</th><th>Model Description</th><th>Price</th></tr>\n\
         </thead>\n<tbody>\n",
    );
    for row in &section.rows {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td><span class=\"price-currency\">{}</span> {}</td></tr>",
            row.serial,
            escape_html(&row.name),
            escape_html(currency_symbol),
            row.price
        );
    }
    html.push_str("</tbody>\n</table>\n");
}

fn render_footer(html: &mut String, page: &RenderedPage, valid_from: Option<&NaiveDate>) {
    let notice = match valid_from {
        Some(date) => format!(
            "Valid from: {} | Prices subject to change without prior notice",
            format_month_year(date)
        ),
        None => "Prices subject to change without prior notice".to_string(),
    };

    let _ = writeln!(
        html,
        "<div class=\"footer\"><span>{}</span><span class=\"page-number\">Page {} of {}</span></div>",
        notice, page.page_number, page.total_pages
    );
}

/// Escape text for use in element content and attribute values
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const STYLESHEET: &str = "\
body { margin: 0; font-family: Arial, sans-serif; }
.page { position: relative; width: 210mm; min-height: 297mm; padding: 10mm; box-sizing: border-box; page-break-after: always; }
.page:last-child { page-break-after: auto; }
.watermark { position: absolute; top: 45%; left: 0; right: 0; text-align: center; transform: rotate(-30deg); font-size: 48pt; opacity: 0.05; }
.header { display: flex; justify-content: space-between; border-bottom: 3px solid var(--primary-color); }
.company-name { font-size: 24pt; font-weight: bold; color: var(--primary-dark); }
.contact-info h3 { color: var(--secondary-color); margin: 0; }
.contact-info p { margin: 2px 0; }
.page-title { text-align: center; color: var(--secondary-dark); }
.section-header { background: var(--primary-color); color: #fff; padding: 4px 8px; font-weight: bold; }
.price-table { width: 100%; border-collapse: collapse; }
.price-table th { background: var(--secondary-light); }
.price-table td, .price-table th { border: 1px solid var(--secondary-dark); padding: 4px 8px; }
.footer { position: absolute; bottom: 10mm; left: 10mm; right: 10mm; display: flex; justify-content: space-between; font-size: 9pt; }
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Row;

    fn options() -> HtmlOptions {
        HtmlOptions {
            title: "BATTERY PRICE LIST 2025".to_string(),
            company: CompanyInfo::default(),
            currency_symbol: "₹".to_string(),
            theme: Theme::resolve("orange", "blue").unwrap(),
            valid_from: NaiveDate::from_ymd_opt(2025, 3, 14),
        }
    }

    fn page(page_number: usize, total_pages: usize, brand: &str, rows: &[(usize, &str, f64)]) -> RenderedPage {
        RenderedPage {
            page_number,
            total_pages,
            start_serial: rows.first().map(|r| r.0).unwrap_or(1),
            brand_sections: vec![BrandSection {
                brand: brand.to_string(),
                rows: rows
                    .iter()
                    .map(|(serial, name, price)| Row {
                        serial: *serial,
                        name: name.to_string(),
                        price: *price,
                    })
                    .collect(),
            }],
        }
    }

    #[test]
    fn test_title_only_on_first_page() {
        let pages = vec![
            page(1, 2, "iPhone", &[(1, "iPhone 5G Battery", 380.0)]),
            page(2, 2, "Samsung", &[(2, "Galaxy A11 Battery", 390.0)]),
        ];
        let html = render_document(&pages, &options());

        assert_eq!(html.matches("class=\"page-title\"").count(), 1);
        assert_eq!(html.matches("<div class=\"page\">").count(), 2);
        assert!(html.contains("IPHONE SERIES"));
        assert!(html.contains("SAMSUNG SERIES"));
        assert!(html.contains("Page 1 of 2"));
        assert!(html.contains("Page 2 of 2"));
    }

    #[test]
    fn test_rows_and_footer() {
        let html = render_document(
            &[page(1, 1, "iPhone", &[(1, "iPhone 5G Battery", 380.0), (2, "Cable", 12.5)])],
            &options(),
        );

        assert!(html.contains("<td>1</td><td>iPhone 5G Battery</td>"));
        assert!(html.contains("<span class=\"price-currency\">₹</span> 380</td>"));
        assert!(html.contains("<span class=\"price-currency\">₹</span> 12.5</td>"));
        assert!(html.contains("Valid from: March 2025 | Prices subject to change without prior notice"));
        assert!(html.contains("--primary-color: #ff6b35;"));
    }

    #[test]
    fn test_footer_without_date() {
        let options = HtmlOptions {
            valid_from: None,
            ..options()
        };
        let html = render_document(&[page(1, 1, "A", &[(1, "x", 1.0)])], &options);
        assert!(!html.contains("Valid from"));
        assert!(html.contains("Prices subject to change without prior notice"));
    }

    #[test]
    fn test_escapes_catalog_text() {
        let html = render_document(&[page(1, 1, "<b>A&B</b>", &[(1, "\"Pro\" <x>", 1.0)])], &options());
        assert!(html.contains("&lt;B&gt;A&amp;B&lt;/B&gt; SERIES"));
        assert!(html.contains("&quot;Pro&quot; &lt;x&gt;"));
        assert!(!html.contains("<x>"));
    }

    #[test]
    fn test_presenter_keeps_latest_document() {
        let mut presenter = HtmlPresenter::new(options());
        assert!(presenter.document().is_empty());

        presenter.present(&[page(1, 1, "A", &[(1, "x", 1.0)])]).unwrap();
        assert!(presenter.document().contains("--primary-color: #ff6b35;"));

        presenter.set_theme(Theme::resolve("green", "navy").unwrap());
        presenter.present(&[page(1, 1, "A", &[(1, "x", 1.0)])]).unwrap();
        assert!(presenter.document().contains("--primary-color: #4caf50;"));
    }

    #[test]
    fn test_options_from_config() {
        let mut config = Config::default();
        config.document.valid_from = "2025-03".to_string();
        config.theme.primary = "#000000".to_string();

        let options = HtmlOptions::from_config(&config).unwrap();
        assert_eq!(options.valid_from, NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(options.theme.primary.light.to_string(), "#4c4c4c");

        config.theme.secondary = "magenta".to_string();
        assert!(HtmlOptions::from_config(&config).is_err());
    }
}
