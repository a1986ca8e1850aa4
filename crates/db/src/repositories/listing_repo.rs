//! Repository for the `listings` table.

use chrono::Utc;
use listings_core::types::DbId;
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::models::listing::{CreateListing, Listing, UpdateListing};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, img, price, category, listing_type, bed, created_at, updated_at";

/// Provides CRUD operations for listings.
pub struct ListingRepo;

impl ListingRepo {
    /// Insert a new listing, returning the created row with its generated id.
    pub async fn create(pool: &SqlitePool, input: &CreateListing) -> Result<Listing, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO listings
                (title, description, img, price, category, listing_type, bed, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Listing>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(Json(&input.img))
            .bind(&input.price)
            .bind(input.category.as_str())
            .bind(input.listing_type.as_str())
            .bind(input.bed)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a listing by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Listing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM listings WHERE id = ?1");
        sqlx::query_as::<_, Listing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all listings, most recently created first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Listing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM listings ORDER BY id DESC");
        sqlx::query_as::<_, Listing>(&query).fetch_all(pool).await
    }

    /// Number of stored listings. Fails if the `listings` table is missing.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM listings")
            .fetch_one(pool)
            .await
    }

    /// Update a listing. Fields absent from `input` keep their stored value;
    /// `type` and `bed` are overwritten (possibly with NULL) whenever present.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateListing,
    ) -> Result<Option<Listing>, sqlx::Error> {
        let query = format!(
            "UPDATE listings SET
                title = COALESCE(?2, title),
                description = COALESCE(?3, description),
                img = COALESCE(?4, img),
                price = COALESCE(?5, price),
                category = COALESCE(?6, category),
                listing_type = CASE WHEN ?7 THEN ?8 ELSE listing_type END,
                bed = CASE WHEN ?9 THEN ?10 ELSE bed END,
                updated_at = ?11
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Listing>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.img.as_ref().map(Json))
            .bind(&input.price)
            .bind(input.category.map(|c| c.as_str()))
            .bind(input.listing_type.is_some())
            .bind(input.listing_type.flatten().map(|t| t.as_str()))
            .bind(input.bed.is_some())
            .bind(input.bed.flatten())
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a listing by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM listings WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
