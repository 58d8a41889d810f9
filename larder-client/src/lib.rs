//! Larder HTTP Client
//!
//! A simple, type-safe HTTP client for the Larder recipe API.
//!
//! # Example
//!
//! ```no_run
//! use larder_client::LarderClient;
//! use larder_core::dto::recipe::NewRecipe;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = LarderClient::new("http://localhost:8080", "alice");
//!
//!     let recipe = client
//!         .create_recipe(&NewRecipe::new("base", "dockerfile", "FROM alpine"))
//!         .await?;
//!
//!     println!("Created recipe: {}", recipe.id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod recipes;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// Header the server reads the caller identity from
pub const CALLER_HEADER: &str = "X-User-Id";

/// HTTP client for the Larder recipe API
///
/// Every request carries the configured user as the caller identity.
#[derive(Debug, Clone)]
pub struct LarderClient {
    /// Base URL of the server (e.g., "http://localhost:8080")
    base_url: String,
    /// User the requests are made on behalf of
    user: String,
    /// HTTP client instance
    client: Client,
}

impl LarderClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the server (e.g., "http://localhost:8080")
    /// * `user` - Identity sent with every request
    pub fn new(base_url: impl Into<String>, user: impl Into<String>) -> Self {
        Self::with_client(base_url, user, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use larder_client::LarderClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = LarderClient::with_client("http://localhost:8080", "alice", http_client);
    /// ```
    pub fn with_client(
        base_url: impl Into<String>,
        user: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user: user.into(),
            client,
        }
    }

    /// Get the base URL of the server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the user requests are made as
    pub fn user(&self) -> &str {
        &self.user
    }

    fn recipes_url(&self) -> String {
        format!("{}/api/recipe", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(CALLER_HEADER, &self.user)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status of a response, turning failures into `ClientError`
    async fn check_status(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::debug!("Request failed with {}: {}", status, error_text);
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response)
    }

    /// Handle an API response and deserialize JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        self.check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response that returns no content (e.g., DELETE operations)
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        self.check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = LarderClient::new("http://localhost:8080", "alice");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.user(), "alice");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = LarderClient::new("http://localhost:8080/", "alice");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.recipes_url(), "http://localhost:8080/api/recipe");
    }

    #[test]
    fn test_client_with_custom_client() {
        let client = LarderClient::with_client("http://localhost:8080", "bob", Client::new());
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.user(), "bob");
    }
}
