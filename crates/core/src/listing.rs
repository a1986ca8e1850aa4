//! Listing enums and field validation.
//!
//! Both the HTTP layer (before touching the store) and the dashboard forms
//! (before issuing a request) validate through these functions, so the two
//! sides agree on what a well-formed listing is.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Enumerations
-------------------------------------------------------------------------- */

/// Whether a property is offered for sale or for rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingCategory {
    Sale,
    Rent,
}

impl ListingCategory {
    /// All categories in display order.
    pub const ALL: [ListingCategory; 2] = [ListingCategory::Sale, ListingCategory::Rent];

    /// Stored and wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ListingCategory::Sale => "Sale",
            ListingCategory::Rent => "Rent",
        }
    }
}

impl fmt::Display for ListingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Property type. Legacy records may have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingType {
    Residential,
    Commercial,
}

impl ListingType {
    /// All property types in display order.
    pub const ALL: [ListingType; 2] = [ListingType::Residential, ListingType::Commercial];

    /// Stored and wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ListingType::Residential => "Residential",
            ListingType::Commercial => "Commercial",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Validate that a title is not blank.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".to_string()));
    }
    Ok(())
}

/// Validate that a price string is a finite, non-negative number.
///
/// Prices travel as text (`"250000"`, `"1200.50"`) and are stored as given.
pub fn validate_price(price: &str) -> Result<(), CoreError> {
    let value: f64 = price.trim().parse().map_err(|_| {
        CoreError::Validation(format!("Price must be a number (got '{price}')"))
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(
            "Price must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

/// Whether the image list holds at least one real URL.
///
/// A list made only of empty strings (the form's "nothing chosen yet"
/// sentinel is `[""]`) does not count.
pub fn has_image(img: &[String]) -> bool {
    img.iter().any(|url| !url.trim().is_empty())
}

/// Validate that at least one image has been chosen.
pub fn validate_images(img: &[String]) -> Result<(), CoreError> {
    if !has_image(img) {
        return Err(CoreError::Validation(
            "At least one image is required".to_string(),
        ));
    }
    Ok(())
}

/// Validate that a bedroom count is not negative.
pub fn validate_bed(bed: i64) -> Result<(), CoreError> {
    if bed < 0 {
        return Err(CoreError::Validation(format!(
            "Bedroom count must not be negative (got {bed})"
        )));
    }
    Ok(())
}

/// Parse a bedroom count from form text.
///
/// An empty string means "unset". Anything else must be a non-negative
/// integer.
pub fn parse_bed(text: &str) -> Result<Option<i64>, CoreError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let bed: i64 = text.parse().map_err(|_| {
        CoreError::Validation(format!("Bedroom count must be a whole number (got '{text}')"))
    })?;
    validate_bed(bed)?;
    Ok(Some(bed))
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
