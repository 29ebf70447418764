//! Generator configuration
//!
//! Every setting has a default, so a config file only needs the values that
//! differ. Command-line flags are applied on top of the file.

use std::path::Path;
use serde::Deserialize;
use crate::error::{Error, Result};
use crate::layout::PageLayout;

/// How many rows go on the first page and on every page after it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub first_page_capacity: usize,
    pub regular_page_capacity: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            first_page_capacity: 15,
            regular_page_capacity: 16,
        }
    }
}

impl PaginationConfig {
    /// Capacities that fit the given page geometry
    pub fn from_layout(layout: &PageLayout) -> Self {
        let (first_page_capacity, regular_page_capacity) = layout.capacities();
        Self {
            first_page_capacity,
            regular_page_capacity,
        }
    }

    /// Both capacities must be positive
    pub fn validate(&self) -> Result<()> {
        if self.first_page_capacity == 0 || self.regular_page_capacity == 0 {
            return Err(Error::InvalidCapacity {
                first: self.first_page_capacity,
                regular: self.regular_page_capacity,
            });
        }
        Ok(())
    }
}

/// Contact block printed in every page header
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub logo_url: Option<String>,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "BACKUP FACTORY".to_string(),
            phone: "+91 98765 43210".to_string(),
            email: "info@backupfactory.com".to_string(),
            website: "www.backupfactory.com".to_string(),
            logo_url: None,
        }
    }
}

/// Static text of the document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Shown on the first page only
    pub title: String,
    pub currency_symbol: String,
    /// Date expression, see [`crate::date::parse_date_expression`]
    pub valid_from: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: "BATTERY PRICE LIST 2025".to_string(),
            currency_symbol: "₹".to_string(),
            valid_from: "today".to_string(),
        }
    }
}

/// Colour settings: preset names or `#rrggbb`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub primary: String,
    pub secondary: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "orange".to_string(),
            secondary: "blue".to_string(),
        }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pagination: PaginationConfig,
    /// When set, capacities are derived from the page geometry instead
    pub layout: Option<PageLayout>,
    pub document: DocumentConfig,
    pub company: CompanyInfo,
    pub theme: ThemeConfig,
}

impl Config {
    /// Load a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let text = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        log::debug!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// Capacities in effect, taking a configured layout into account
    pub fn effective_pagination(&self) -> PaginationConfig {
        match &self.layout {
            Some(layout) => PaginationConfig::from_layout(layout),
            None => self.pagination,
        }
    }
}
