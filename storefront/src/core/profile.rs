//! Storefront profiles
//!
//! The deployed site had several near-identical pages that differed only in
//! their category menu, whether a notes field was shown and whether the
//! buyer ordered from a cart or straight from an item's detail page. Those
//! differences live here as data.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Category keyword that disables filtering
pub const ALL_CATEGORIES: &str = "all";

/// One entry of the category menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

impl CategoryOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// How an order is assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderFlow {
    /// Buyer fills a cart, then checks out every line at once
    Cart,
    /// Buyer orders one item with a quantity from its detail page
    SingleItem,
}

/// Named preset selectable through `PROFILE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileKind {
    #[default]
    Cart,
    Detail,
}

impl FromStr for ProfileKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cart" | "menu" => Ok(Self::Cart),
            "detail" | "single" => Ok(Self::Detail),
            other => Err(format!("unknown profile: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontProfile {
    pub name: String,
    pub categories: Vec<CategoryOption>,
    /// Whether the notes field is collected and forwarded
    pub collect_notes: bool,
    pub flow: OrderFlow,
}

impl StorefrontProfile {
    pub fn from_kind(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Cart => Self::cart(),
            ProfileKind::Detail => Self::detail(),
        }
    }

    /// Menu page with a cart and a notes field
    pub fn cart() -> Self {
        Self {
            name: "cart".into(),
            categories: default_categories(),
            collect_notes: true,
            flow: OrderFlow::Cart,
        }
    }

    /// Detail page ordering a single item, no notes
    pub fn detail() -> Self {
        Self {
            name: "detail".into(),
            categories: default_categories(),
            collect_notes: false,
            flow: OrderFlow::SingleItem,
        }
    }

    /// Whether the keyword is one of this profile's menu entries
    pub fn has_category(&self, keyword: &str) -> bool {
        self.categories.iter().any(|c| c.value == keyword)
    }
}

fn default_categories() -> Vec<CategoryOption> {
    vec![
        CategoryOption::new(ALL_CATEGORIES, "🍽️ Semua Menu"),
        CategoryOption::new("snack", "🍿 Snack"),
        CategoryOption::new("ayam", "🍗 Ayam"),
        CategoryOption::new("nugget", "🍤 Nugget"),
    ]
}
