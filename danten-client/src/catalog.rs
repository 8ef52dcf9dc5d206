//! Catalog fetching
//!
//! Two source shapes are supported:
//!
//! - a plain JSON array of food items
//! - a spreadsheet export wrapped in a JSONP call
//!   (`google.visualization.Query.setResponse({...});`) whose table has
//!   labelled columns and rows of cell values
//!
//! Spreadsheet rows are pivoted into objects keyed by column label and get a
//! synthetic sequential id (`"1"`, `"2"`, ...).

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{ClientError, ClientResult, HttpClient};
use shared::models::FoodItem;

const JSONP_MARKER: &str = "setResponse";

/// Where the catalog comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Static endpoint returning a JSON array
    Json(String),
    /// Spreadsheet query endpoint returning JSONP
    Spreadsheet(String),
}

impl CatalogSource {
    pub fn url(&self) -> &str {
        match self {
            Self::Json(url) | Self::Spreadsheet(url) => url,
        }
    }

    /// Decode a response body for this source shape
    pub fn decode(&self, body: &str) -> ClientResult<Vec<FoodItem>> {
        match self {
            Self::Json(_) => Ok(serde_json::from_str(body)?),
            Self::Spreadsheet(_) => parse_spreadsheet(body),
        }
    }
}

/// Anything that can produce the food list
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch_catalog(&self) -> ClientResult<Vec<FoodItem>>;
}

/// Network catalog client
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: HttpClient,
    source: CatalogSource,
}

impl CatalogClient {
    pub fn new(http: HttpClient, source: CatalogSource) -> Self {
        Self { http, source }
    }
}

#[async_trait]
impl CatalogProvider for CatalogClient {
    async fn fetch_catalog(&self) -> ClientResult<Vec<FoodItem>> {
        let body = self.http.get_text(self.source.url()).await?;
        let items = self.source.decode(&body)?;
        tracing::info!(count = items.len(), url = self.source.url(), "Catalog fetched");
        Ok(items)
    }
}

/// Strip the JSONP function-call envelope and return the inner JSON text.
///
/// The payload starts after the first `(` following the `setResponse`
/// marker (or the first `(` at all when the marker is absent) and ends at
/// the last `)`.
pub fn unwrap_jsonp(body: &str) -> ClientResult<&str> {
    let search_from = body.find(JSONP_MARKER).unwrap_or(0);
    let open = body[search_from..]
        .find('(')
        .map(|i| search_from + i)
        .ok_or_else(|| ClientError::InvalidResponse("JSONP envelope has no '('".into()))?;
    let close = body
        .rfind(')')
        .filter(|close| *close > open)
        .ok_or_else(|| ClientError::InvalidResponse("JSONP envelope has no closing ')'".into()))?;
    Ok(body[open + 1..close].trim())
}

#[derive(Debug, Deserialize)]
struct SheetResponse {
    #[serde(default)]
    status: Option<String>,
    table: Option<SheetTable>,
}

#[derive(Debug, Deserialize)]
struct SheetTable {
    cols: Vec<SheetColumn>,
    #[serde(default)]
    rows: Vec<SheetRow>,
}

#[derive(Debug, Deserialize)]
struct SheetColumn {
    #[serde(default)]
    id: String,
    #[serde(default)]
    label: String,
}

impl SheetColumn {
    fn key(&self) -> &str {
        let label = self.label.trim();
        if label.is_empty() { self.id.trim() } else { label }
    }
}

#[derive(Debug, Deserialize)]
struct SheetRow {
    #[serde(default)]
    c: Vec<Option<SheetCell>>,
}

#[derive(Debug, Deserialize)]
struct SheetCell {
    #[serde(default)]
    v: Value,
}

/// Parse a JSONP spreadsheet export into food items.
///
/// Rows that do not form a valid item (e.g. an empty name cell) are skipped.
pub fn parse_spreadsheet(body: &str) -> ClientResult<Vec<FoodItem>> {
    let json = unwrap_jsonp(body)?;
    let response: SheetResponse = serde_json::from_str(json)?;

    if let Some(status) = response.status.as_deref()
        && status != "ok"
    {
        return Err(ClientError::InvalidResponse(format!(
            "spreadsheet query status: {}",
            status
        )));
    }

    let table = response
        .table
        .ok_or_else(|| ClientError::InvalidResponse("spreadsheet response has no table".into()))?;

    let mut items = Vec::with_capacity(table.rows.len());
    for (index, row) in table.rows.into_iter().enumerate() {
        let record = pivot_row(&table.cols, row, index + 1);
        match serde_json::from_value::<FoodItem>(Value::Object(record)) {
            Ok(item) if !item.name.trim().is_empty() => items.push(item),
            Ok(_) => tracing::debug!(row = index + 1, "Skipping spreadsheet row without name"),
            Err(e) => tracing::warn!(row = index + 1, error = %e, "Skipping malformed spreadsheet row"),
        }
    }

    Ok(items)
}

fn pivot_row(cols: &[SheetColumn], row: SheetRow, id: usize) -> Map<String, Value> {
    let mut record = Map::new();
    for (col, cell) in cols.iter().zip(row.c.into_iter()) {
        let value = cell.map(|c| c.v).unwrap_or(Value::Null);
        if !col.key().is_empty() {
            record.insert(col.key().to_string(), value);
        }
    }
    record.insert("id".to_string(), Value::String(id.to_string()));
    record
}
