//! Food Item Model

use serde::{Deserialize, Deserializer, Serialize};

use crate::money::{format_rupiah, parse_price};

/// Description shown when the catalog carries none
pub const DEFAULT_DESCRIPTION: &str = "Menu spesial dari DanTen";

/// Orderable food item as published by the catalog source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Accepts either a JSON string or integer
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    /// Display price, e.g. `"Rp 15.000"`
    #[serde(deserialize_with = "de_price")]
    pub price: String,
    #[serde(default, deserialize_with = "de_categories")]
    pub category: Vec<String>,
    /// The literal string `"null"` in the source is read as absent
    #[serde(default, deserialize_with = "de_description")]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl FoodItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            category: Vec::new(),
            description: None,
            image_url: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category.push(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Numeric unit price parsed from the display string (0 if unparsable)
    pub fn unit_price(&self) -> i64 {
        parse_price(&self.price)
    }

    /// Whether the item belongs to the given category keyword
    pub fn has_category(&self, keyword: &str) -> bool {
        self.category.iter().any(|c| c == keyword)
    }

    /// Description, or the stall's default blurb
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn de_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match RawScalar::deserialize(deserializer)? {
        RawScalar::Text(s) => s,
        RawScalar::Integer(n) => n.to_string(),
        RawScalar::Float(f) => format!("{}", f),
    })
}

fn de_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match RawScalar::deserialize(deserializer)? {
        RawScalar::Text(s) => s,
        RawScalar::Integer(n) => format_rupiah(n),
        RawScalar::Float(f) => format_rupiah(f.round() as i64),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategories {
    List(Vec<String>),
    Joined(String),
}

fn de_categories<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Option::<RawCategories>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(RawCategories::List(list)) => list,
        Some(RawCategories::Joined(joined)) => split_categories(&joined),
    })
}

/// Split a comma separated category cell (`"snack, ayam"`) into keywords
pub fn split_categories(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn de_description<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|d| !d.trim().is_empty() && d != "null"))
}
