//! Inline form for editing an existing listing.

use listings_core::error::CoreError;
use listings_core::listing::{parse_bed, ListingCategory, ListingType};
use listings_core::types::DbId;

use crate::client::ListingsApi;
use crate::form::{FormError, FormState};
use crate::model::Listing;

/// Editable copy of a listing, pre-filled from the selected row.
///
/// Text inputs are plain public fields; images and bedroom count go through
/// [`on_images_uploaded`](Self::on_images_uploaded) and
/// [`set_bed`](Self::set_bed), which carry the input rules.
#[derive(Debug, Clone)]
pub struct EditListingForm {
    original: Listing,
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: ListingCategory,
    pub listing_type: ListingType,
    img: Vec<String>,
    bed: Option<i64>,
    state: FormState,
}

impl EditListingForm {
    /// Open the form on `listing`. Missing category and type fall back to
    /// `Sale` and `Residential`; a missing bedroom count stays unset.
    pub fn new(listing: Listing) -> Self {
        Self {
            title: listing.title.clone(),
            description: listing.description.clone(),
            price: listing.price.clone(),
            category: listing.category.unwrap_or(ListingCategory::Sale),
            listing_type: listing.listing_type.unwrap_or(ListingType::Residential),
            img: listing.img.clone(),
            bed: listing.bed,
            state: FormState::Editing,
            original: listing,
        }
    }

    pub fn id(&self) -> DbId {
        self.original.id
    }

    pub fn img(&self) -> &[String] {
        &self.img
    }

    pub fn bed(&self) -> Option<i64> {
        self.bed
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Upload widget callback.
    ///
    /// A non-empty result replaces the image list wholesale. An empty result
    /// is ignored and the current images are kept.
    pub fn on_images_uploaded(&mut self, urls: Vec<String>) {
        if !urls.is_empty() {
            self.img = urls;
        }
    }

    /// Bedroom count input. Empty text clears it; negative or non-integer
    /// text is refused and the previous value kept.
    pub fn set_bed(&mut self, text: &str) -> Result<(), CoreError> {
        self.bed = parse_bed(text)?;
        Ok(())
    }

    /// The original record with the edited fields merged over it.
    pub fn to_listing(&self) -> Listing {
        Listing {
            title: self.title.clone(),
            description: self.description.clone(),
            img: self.img.clone(),
            price: self.price.clone(),
            category: Some(self.category),
            listing_type: Some(self.listing_type),
            bed: self.bed,
            ..self.original.clone()
        }
    }

    /// Send the merged record as one update.
    ///
    /// On success the form is closed and the stored listing returned. On
    /// failure the error is logged and the form stays open for another try.
    pub async fn submit<A>(&mut self, api: &A) -> Result<Listing, FormError>
    where
        A: ListingsApi + ?Sized,
    {
        if self.state != FormState::Editing {
            return Err(FormError::NotEditing);
        }

        self.state = FormState::Submitting;
        let payload = self.to_listing();

        match api.update(&payload).await {
            Ok(saved) => {
                self.state = FormState::Closed;
                Ok(saved)
            }
            Err(e) => {
                tracing::error!(listing_id = payload.id, error = %e, "Failed to update product");
                self.state = FormState::Editing;
                Err(e.into())
            }
        }
    }
}
