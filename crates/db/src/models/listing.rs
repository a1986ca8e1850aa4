//! Listing entity model and DTOs.

use listings_core::listing::{ListingCategory, ListingType};
use listings_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A listing row from the `listings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Listing {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// Image URLs in display order, stored as a JSON array.
    pub img: Json<Vec<String>>,
    pub price: String,
    pub category: String,
    #[serde(rename = "type")]
    pub listing_type: Option<String>,
    pub bed: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateListing {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub img: Vec<String>,
    #[serde(deserialize_with = "price_text")]
    pub price: String,
    pub category: ListingCategory,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    #[serde(default, deserialize_with = "bed_count")]
    pub bed: Option<i64>,
}

/// DTO for updating an existing listing.
///
/// Absent keys leave the column untouched. For the nullable columns
/// (`type`, `bed`) the outer `Option` tracks presence and the inner one the
/// value, so an explicit `null` clears them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateListing {
    pub title: Option<String>,
    pub description: Option<String>,
    pub img: Option<Vec<String>>,
    #[serde(default, deserialize_with = "optional_price_text")]
    pub price: Option<String>,
    pub category: Option<ListingCategory>,
    #[serde(rename = "type", default, deserialize_with = "present")]
    pub listing_type: Option<Option<ListingType>>,
    #[serde(default, deserialize_with = "present_bed_count")]
    pub bed: Option<Option<i64>>,
}

/* --------------------------------------------------------------------------
Lenient field decoding
-------------------------------------------------------------------------- */

/// Form inputs send numbers as text, API clients send JSON numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

fn price_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => n.to_string(),
        NumberOrText::Text(text) => text,
    })
}

fn optional_price_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n.to_string())),
        Some(NumberOrText::Text(text)) => Ok(Some(text)),
    }
}

/// `null` and `""` both mean "unset". Sign is checked by the handler so a
/// negative count surfaces as a validation error rather than a parse error.
fn bed_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("bed must be a whole number")),
        Some(NumberOrText::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse()
                .map(Some)
                .map_err(|_| serde::de::Error::custom("bed must be a whole number"))
        }
    }
}

fn present_bed_count<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    bed_count(deserializer).map(Some)
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
