//! Wire types exchanged with the listings service.

use listings_core::listing::{ListingCategory, ListingType};
use listings_core::types::DbId;
use serde::{Deserialize, Serialize};

/// A listing as returned by `GET /api/products`.
///
/// Legacy records may lack `category`, `type` and `bed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: DbId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub img: Vec<String>,
    pub price: String,
    #[serde(default)]
    pub category: Option<ListingCategory>,
    #[serde(rename = "type", default)]
    pub listing_type: Option<ListingType>,
    #[serde(default)]
    pub bed: Option<i64>,
}

impl Listing {
    /// First non-blank image URL, used as the table thumbnail.
    pub fn thumbnail(&self) -> Option<&str> {
        self.img
            .iter()
            .map(String::as_str)
            .find(|url| !url.trim().is_empty())
    }
}

/// Body of `POST /api/products`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub img: Vec<String>,
    pub price: String,
    pub category: ListingCategory,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    pub bed: Option<i64>,
}
