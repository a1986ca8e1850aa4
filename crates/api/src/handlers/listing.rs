//! Handlers for the `/products` resource.
//!
//! Store failures on list/create/update/delete are not told apart: the
//! cause is logged and the caller gets a fixed per-operation 500. Input is
//! validated before the store is touched and rejected with 400.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use listings_core::error::CoreError;
use listings_core::listing::{validate_bed, validate_images, validate_price, validate_title};
use listings_core::types::DbId;
use listings_db::models::listing::{CreateListing, Listing, UpdateListing};
use listings_db::repositories::ListingRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const LIST_FAILED: &str = "Failed to fetch products";
const CREATE_FAILED: &str = "Failed to create product";
const UPDATE_FAILED: &str = "Failed to update product";
const DELETE_FAILED: &str = "Failed to delete product";

/// Confirmation body returned by DELETE.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Log the underlying store error and collapse it into a generic failure.
fn store_failure(message: &'static str, err: sqlx::Error) -> AppError {
    tracing::error!(error = %err, "{message}");
    AppError::StoreFailure(message)
}

fn validate_create(input: &CreateListing) -> Result<(), CoreError> {
    validate_title(&input.title)?;
    validate_price(&input.price)?;
    validate_images(&input.img)?;
    if let Some(bed) = input.bed {
        validate_bed(bed)?;
    }
    Ok(())
}

fn validate_update(input: &UpdateListing) -> Result<(), CoreError> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(price) = &input.price {
        validate_price(price)?;
    }
    if let Some(Some(bed)) = input.bed {
        validate_bed(bed)?;
    }
    Ok(())
}

/// GET /api/products
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Listing>>> {
    let listings = ListingRepo::list(&state.pool)
        .await
        .map_err(|e| store_failure(LIST_FAILED, e))?;
    Ok(Json(listings))
}

/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateListing>,
) -> AppResult<(StatusCode, Json<Listing>)> {
    validate_create(&input)?;

    let listing = ListingRepo::create(&state.pool, &input)
        .await
        .map_err(|e| store_failure(CREATE_FAILED, e))?;

    tracing::info!(listing_id = listing.id, title = %listing.title, "Listing created");
    Ok((StatusCode::CREATED, Json(listing)))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Listing>> {
    let listing = ListingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Listing",
            id,
        }))?;
    Ok(Json(listing))
}

/// PATCH /api/products/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateListing>,
) -> AppResult<Json<Listing>> {
    validate_update(&input)?;
    tracing::debug!(listing_id = id, img = ?input.img, "Updating listing");

    let listing = ListingRepo::update(&state.pool, id, &input)
        .await
        .map_err(|e| store_failure(UPDATE_FAILED, e))?
        .ok_or_else(|| {
            tracing::error!(listing_id = id, "{UPDATE_FAILED}: no such listing");
            AppError::StoreFailure(UPDATE_FAILED)
        })?;

    tracing::info!(listing_id = id, "Listing updated");
    Ok(Json(listing))
}

/// DELETE /api/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ListingRepo::delete(&state.pool, id)
        .await
        .map_err(|e| store_failure(DELETE_FAILED, e))?;
    if !deleted {
        tracing::error!(listing_id = id, "{DELETE_FAILED}: no such listing");
        return Err(AppError::StoreFailure(DELETE_FAILED));
    }

    tracing::info!(listing_id = id, "Listing deleted");
    Ok(Json(MessageResponse {
        message: "Product deleted successfully",
    }))
}
