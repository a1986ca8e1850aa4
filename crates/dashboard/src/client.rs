//! HTTP client for the listings service.
//!
//! [`ListingsApi`] is the seam the table and forms depend on;
//! [`ListingsClient`] implements it over the `/api/products` endpoints
//! using [`reqwest`].

use async_trait::async_trait;
use listings_core::types::DbId;

use crate::model::{Listing, NewListing};

/// Errors from the listings REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Listings API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Operations the dashboard performs against the listings service.
#[async_trait]
pub trait ListingsApi: Send + Sync {
    /// Fetch every listing.
    async fn list(&self) -> Result<Vec<Listing>, ClientError>;

    /// Create a listing, returning it with its generated id.
    async fn create(&self, listing: &NewListing) -> Result<Listing, ClientError>;

    /// Write the full record back, returning the stored version.
    async fn update(&self, listing: &Listing) -> Result<Listing, ClientError>;

    /// Delete a listing by id.
    async fn delete(&self, id: DbId) -> Result<(), ClientError>;
}

/// HTTP client for a listings service instance.
pub struct ListingsClient {
    client: reqwest::Client,
    base_url: String,
}

impl ListingsClient {
    /// Create a new client.
    ///
    /// * `base_url` - Service root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }

    fn product_url(&self, id: DbId) -> String {
        format!("{}/api/products/{id}", self.base_url)
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or a
    /// [`ClientError::Api`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ListingsApi for ListingsClient {
    async fn list(&self) -> Result<Vec<Listing>, ClientError> {
        let response = self.client.get(self.products_url()).send().await?;
        Self::parse_response(response).await
    }

    async fn create(&self, listing: &NewListing) -> Result<Listing, ClientError> {
        let response = self
            .client
            .post(self.products_url())
            .json(listing)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn update(&self, listing: &Listing) -> Result<Listing, ClientError> {
        let response = self
            .client
            .patch(self.product_url(listing.id))
            .json(listing)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        let response = self.client.delete(self.product_url(id)).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_ignore_trailing_slash() {
        let client = ListingsClient::new("http://localhost:3000/");
        assert_eq!(client.products_url(), "http://localhost:3000/api/products");
        assert_eq!(client.product_url(7), "http://localhost:3000/api/products/7");
    }
}
