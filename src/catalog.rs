//! Catalog data model and validation
//!
//! A catalog is an ordered mapping of brand name to the items sold under that
//! brand. Brand order is significant: it decides page order in the finished
//! price list, so the JSON object is read with insertion order preserved.

use std::path::Path;
use serde::Serialize;
use serde_json::{Map, Value};
use crate::error::{Error, Result};

/// A single priced item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    pub name: String,
    pub price: f64,
}

/// All items belonging to one brand, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
    pub name: String,
    pub items: Vec<CatalogItem>,
}

/// Validated catalog, read-only once constructed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    brands: Vec<Brand>,
}

impl Catalog {
    /// Brands in insertion order
    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    /// Total number of items across all brands
    pub fn item_count(&self) -> usize {
        self.brands.iter().map(|b| b.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Convert back into the JSON shape accepted by [`validate`]
    pub fn to_json(&self) -> Result<Value> {
        let mut map = Map::new();
        for brand in &self.brands {
            let items = brand
                .items
                .iter()
                .map(serde_json::to_value)
                .collect::<serde_json::Result<Vec<_>>>()?;
            map.insert(brand.name.clone(), Value::Array(items));
        }
        Ok(Value::Object(map))
    }
}

/// Check that a parsed JSON document has the catalog shape
///
/// The first violation found is reported; nothing is coerced or repaired.
///
/// # Example
///
/// ```
/// use price_list::catalog::validate;
///
/// let raw = serde_json::json!({ "iPhone": [{ "name": "iPhone 5S Battery", "price": 350 }] });
/// let catalog = validate(&raw).unwrap();
/// assert_eq!(catalog.item_count(), 1);
/// ```
pub fn validate(raw: &Value) -> Result<Catalog> {
    let object = raw.as_object().ok_or(Error::MalformedInput)?;

    let mut brands = Vec::with_capacity(object.len());
    for (brand_name, value) in object {
        let entries = value
            .as_array()
            .ok_or_else(|| Error::InvalidBrandShape(brand_name.clone()))?;

        let mut items = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let invalid = || Error::InvalidItemShape {
                brand: brand_name.clone(),
                index,
            };

            let name = entry
                .get("name")
                .and_then(Value::as_str)
                .filter(|name| !name.is_empty())
                .ok_or_else(invalid)?;
            let price = entry
                .get("price")
                .filter(|price| price.is_number())
                .and_then(Value::as_f64)
                .ok_or_else(invalid)?;

            items.push(CatalogItem {
                name: name.to_string(),
                price,
            });
        }

        brands.push(Brand {
            name: brand_name.clone(),
            items,
        });
    }

    Ok(Catalog { brands })
}

/// Parse and validate a catalog from JSON text
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let raw: Value = serde_json::from_str(json)?;
    validate(&raw)
}

/// Read, parse and validate a catalog file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&text)?;

    log::info!(
        "Loaded {} brands ({} items) from {}",
        catalog.brands.len(),
        catalog.item_count(),
        path.display()
    );

    Ok(catalog)
}

/// Small catalog for trying out the generator
pub fn sample_catalog() -> Catalog {
    fn brand(name: &str, items: &[(&str, f64)]) -> Brand {
        Brand {
            name: name.to_string(),
            items: items
                .iter()
                .map(|(name, price)| CatalogItem {
                    name: name.to_string(),
                    price: *price,
                })
                .collect(),
        }
    }

    Catalog {
        brands: vec![
            brand(
                "iPhone",
                &[
                    ("iPhone 5G Battery", 380.0),
                    ("iPhone 5S Battery", 350.0),
                    ("iPhone 6G Battery", 390.0),
                    ("iPhone 6 Plus Battery", 540.0),
                ],
            ),
            brand(
                "Samsung",
                &[
                    ("Galaxy A11 Battery", 390.0),
                    ("Galaxy A71 Battery", 340.0),
                    ("Galaxy A01 Battery", 370.0),
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_preserves_brand_order() {
        let raw = json!({
            "Samsung": [{ "name": "Galaxy A11 Battery", "price": 390 }],
            "Apple": [{ "name": "iPhone 5S Battery", "price": 350 }],
            "Motorola": []
        });

        let catalog = validate(&raw).unwrap();
        let names: Vec<&str> = catalog.brands().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Samsung", "Apple", "Motorola"]);
        assert_eq!(catalog.item_count(), 2);
    }

    #[test]
    fn test_validate_rejects_non_objects() {
        for raw in [json!(null), json!([]), json!("catalog"), json!(42), json!(true)] {
            assert!(matches!(validate(&raw), Err(Error::MalformedInput)), "accepted {}", raw);
        }
    }

    #[test]
    fn test_validate_rejects_non_array_brand() {
        let raw = json!({ "A": "not-an-array" });
        match validate(&raw) {
            Err(Error::InvalidBrandShape(brand)) => assert_eq!(brand, "A"),
            other => panic!("Expected InvalidBrandShape, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let raw = json!({ "A": [{ "name": "", "price": 10 }] });
        match validate(&raw) {
            Err(Error::InvalidItemShape { brand, index }) => {
                assert_eq!(brand, "A");
                assert_eq!(index, 0);
            }
            other => panic!("Expected InvalidItemShape, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_reports_item_index() {
        let raw = json!({
            "A": [{ "name": "ok", "price": 1 }],
            "B": [
                { "name": "ok", "price": 1 },
                { "name": "ok", "price": 2 },
                { "name": "bad", "price": "200" }
            ]
        });
        match validate(&raw) {
            Err(Error::InvalidItemShape { brand, index }) => {
                assert_eq!(brand, "B");
                assert_eq!(index, 2);
            }
            other => panic!("Expected InvalidItemShape, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_malformed_items() {
        let cases = vec![
            json!({ "A": [{ "price": 10 }] }),
            json!({ "A": [{ "name": "x" }] }),
            json!({ "A": [{ "name": 5, "price": 10 }] }),
            json!({ "A": [{ "name": "x", "price": null }] }),
            json!({ "A": ["x"] }),
            json!({ "A": [null] }),
        ];

        for raw in cases {
            assert!(
                matches!(validate(&raw), Err(Error::InvalidItemShape { index: 0, .. })),
                "accepted {}",
                raw
            );
        }
    }

    #[test]
    fn test_validate_accepts_fractional_and_zero_prices() {
        let raw = json!({ "A": [{ "name": "x", "price": 0 }, { "name": "y", "price": 12.5 }] });
        let catalog = validate(&raw).unwrap();
        assert_eq!(catalog.brands()[0].items[0].price, 0.0);
        assert_eq!(catalog.brands()[0].items[1].price, 12.5);
    }

    #[test]
    fn test_empty_object_is_empty_catalog() {
        let catalog = validate(&json!({})).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.brands().is_empty());
    }

    #[test]
    fn test_parse_catalog_reports_json_errors() {
        assert!(matches!(parse_catalog("{ not json"), Err(Error::Json(_))));
    }

    #[test]
    fn test_load_catalog_nonexistent_file() {
        let result = load_catalog(Path::new("nonexistent.json"));
        assert!(matches!(result.unwrap_err(), Error::FileNotFound(_)));
    }

    #[test]
    fn test_sample_catalog_survives_json() {
        let sample = sample_catalog();
        let reparsed = validate(&sample.to_json().unwrap()).unwrap();
        assert_eq!(reparsed, sample);
        assert_eq!(sample.item_count(), 7);
    }

    #[test]
    fn test_to_json_item_shape() {
        let catalog = validate(&json!({ "A": [{ "name": "x", "price": 12.5 }], "B": [] })).unwrap();
        assert_eq!(
            catalog.to_json().unwrap(),
            json!({ "A": [{ "name": "x", "price": 12.5 }], "B": [] })
        );
    }
}
