//! Form for adding a new listing.

use listings_core::error::CoreError;
use listings_core::listing::{has_image, parse_bed, ListingCategory, ListingType};

use crate::client::ListingsApi;
use crate::form::{FormError, FormState};
use crate::interaction::Interaction;
use crate::model::{Listing, NewListing};
use crate::DASHBOARD_PATH;

pub const MISSING_CATEGORY: &str = "Please select a category";
pub const MISSING_TYPE: &str = "Please select a type";
pub const MISSING_IMAGE: &str = "Please choose at least 1 image";

/// Local state of the create form.
#[derive(Debug, Clone)]
pub struct CreateListingForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: Option<ListingCategory>,
    pub listing_type: Option<ListingType>,
    img: Vec<String>,
    bed: Option<i64>,
    state: FormState,
}

impl Default for CreateListingForm {
    /// Empty form. The image list starts as `[""]`, meaning nothing chosen.
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            price: String::new(),
            category: None,
            listing_type: None,
            img: vec![String::new()],
            bed: None,
            state: FormState::Editing,
        }
    }
}

impl CreateListingForm {
    pub fn new() -> Self {
        Self::default()
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

    /// Upload widget callback. An empty result leaves the list as it was.
    pub fn on_images_uploaded(&mut self, urls: Vec<String>) {
        if !urls.is_empty() {
            self.img = urls;
        }
    }

    /// Bedroom count input; see [`parse_bed`].
    pub fn set_bed(&mut self, text: &str) -> Result<(), CoreError> {
        self.bed = parse_bed(text)?;
        Ok(())
    }

    /// Run the pre-submit checks and build the request body.
    pub fn validate(&self) -> Result<NewListing, FormError> {
        let category = self.category.ok_or(FormError::Invalid(MISSING_CATEGORY))?;
        let listing_type = self.listing_type.ok_or(FormError::Invalid(MISSING_TYPE))?;
        if !has_image(&self.img) {
            return Err(FormError::Invalid(MISSING_IMAGE));
        }

        Ok(NewListing {
            title: self.title.clone(),
            description: self.description.clone(),
            img: self.img.clone(),
            price: self.price.clone(),
            category,
            listing_type,
            bed: self.bed,
        })
    }

    /// Validate and create the listing.
    ///
    /// A failed check is alerted and nothing is sent. After a successful
    /// create the browser is sent to the dashboard; a failed one is alerted
    /// and the form stays open.
    pub async fn submit<A, I>(&mut self, api: &A, ui: &I) -> Result<Listing, FormError>
    where
        A: ListingsApi + ?Sized,
        I: Interaction + ?Sized,
    {
        if self.state != FormState::Editing {
            return Err(FormError::NotEditing);
        }

        let payload = match self.validate() {
            Ok(payload) => payload,
            Err(e) => {
                ui.alert(&e.to_string());
                return Err(e);
            }
        };

        self.state = FormState::Submitting;
        match api.create(&payload).await {
            Ok(created) => {
                self.state = FormState::Closed;
                tracing::info!(listing_id = created.id, "Listing created");
                ui.alert("Product added successfully!");
                ui.navigate(DASHBOARD_PATH);
                Ok(created)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to add product");
                self.state = FormState::Editing;
                ui.alert("Failed to add product");
                Err(e.into())
            }
        }
    }
}
