//! Listing table view.
//!
//! [`ListingTable`] owns the collection currently on screen. It is the only
//! copy the dashboard keeps and it is re-fetched after every successful
//! update or delete.

use listings_core::types::DbId;
use maud::Markup;

use crate::client::{ClientError, ListingsApi};
use crate::edit_form::EditListingForm;
use crate::form::FormError;
use crate::interaction::Interaction;
use crate::model::Listing;
use crate::render;

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this product?";

pub struct ListingTable<A> {
    api: A,
    listings: Vec<Listing>,
    editing: Option<EditListingForm>,
}

impl<A: ListingsApi> ListingTable<A> {
    /// An empty table; call [`refresh`](Self::refresh) to load it.
    pub fn new(api: A) -> Self {
        Self {
            api,
            listings: Vec::new(),
            editing: None,
        }
    }

    /// Build the table and load the collection, as the view does when shown.
    pub async fn mount(api: A) -> Self {
        let mut table = Self::new(api);
        table.refresh().await;
        table
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn editing(&self) -> Option<&EditListingForm> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut EditListingForm> {
        self.editing.as_mut()
    }

    /// Re-fetch the collection. A failed fetch is logged and the rows
    /// already on screen are kept. Returns whether the fetch succeeded.
    pub async fn refresh(&mut self) -> bool {
        match self.api.list().await {
            Ok(listings) => {
                tracing::debug!(count = listings.len(), "Fetched listings");
                self.listings = listings;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch products");
                false
            }
        }
    }

    /// Open the edit form on the row with `id`, replacing any form already
    /// open. Returns `None` if no such row is displayed.
    pub fn begin_edit(&mut self, id: DbId) -> Option<&mut EditListingForm> {
        let listing = self.listings.iter().find(|l| l.id == id)?.clone();
        self.editing = Some(EditListingForm::new(listing));
        self.editing.as_mut()
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Submit the open edit form. On success the form closes, the user is
    /// told, and the collection is re-fetched. On failure the form stays
    /// open and nothing is shown beyond the log.
    pub async fn save_edit<I>(&mut self, ui: &I) -> Result<(), FormError>
    where
        I: Interaction + ?Sized,
    {
        let form = self.editing.as_mut().ok_or(FormError::NotEditing)?;
        form.submit(&self.api).await?;

        self.editing = None;
        ui.alert("Product updated successfully");
        self.refresh().await;
        Ok(())
    }

    /// Delete the row with `id` after the user confirms.
    ///
    /// Returns `Ok(false)` when the user backs out. On success the user is
    /// told and the collection re-fetched; on failure the error is logged and
    /// a generic alert shown.
    pub async fn delete<I>(&mut self, id: DbId, ui: &I) -> Result<bool, ClientError>
    where
        I: Interaction + ?Sized,
    {
        if !ui.confirm(CONFIRM_DELETE) {
            return Ok(false);
        }

        match self.api.delete(id).await {
            Ok(()) => {
                if self.editing.as_ref().is_some_and(|form| form.id() == id) {
                    self.editing = None;
                }
                ui.alert("Product deleted successfully");
                self.refresh().await;
                Ok(true)
            }
            Err(e) => {
                tracing::error!(listing_id = id, error = %e, "Failed to delete product");
                ui.alert("Failed to delete product");
                Err(e)
            }
        }
    }

    /// Render the open edit form (if any) above the table.
    pub fn render(&self) -> Markup {
        render::listing_table(&self.listings, self.editing.as_ref())
    }
}
