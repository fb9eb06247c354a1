//! Catalog client for the gallery HTTP API.
//!
//! Fetches animal records from a menagerie catalog server by querying
//! its JSON endpoint, typically served on port 3000.
//!
//! ## Example
//!
//! ```rust,no_run
//! use menagerie_client::gallery::GalleryClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GalleryClient::builder()
//!         .origin("http://localhost:3000")
//!         .build();
//!
//!     let animals = client.fetch_animals().await?;
//!
//!     for animal in &animals {
//!         println!("{} ({})", animal.name, animal.kind);
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::Client;

use menagerie_types::AnimalRecord;

use crate::ClientError;

/// Path of the record-list endpoint, relative to the origin.
const IMAGES_PATH: &str = "/api/images";

/// HTTP client for a menagerie catalog server.
#[derive(Debug, Clone)]
pub struct GalleryClient {
    client: Client,
    origin: String,
}

impl GalleryClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> GalleryClientBuilder {
        GalleryClientBuilder::default()
    }

    /// The server origin this client talks to.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Fetch the full list of animal records.
    ///
    /// Returns every record the server knows about; filtering is the
    /// caller's concern. Non-success statuses and transport failures
    /// map to distinct [`ClientError`] variants.
    pub async fn fetch_animals(&self) -> Result<Vec<AnimalRecord>, ClientError> {
        let url = format!("{}{}", self.origin, IMAGES_PATH);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status().as_u16()));
        }

        let records: Vec<AnimalRecord> = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        Ok(records)
    }
}

/// Builder for [`GalleryClient`].
#[derive(Debug, Default)]
pub struct GalleryClientBuilder {
    origin: Option<String>,
    timeout: Option<Duration>,
}

impl GalleryClientBuilder {
    /// Set the server origin (e.g., "http://localhost:3000").
    ///
    /// A trailing slash is stripped so image paths join cleanly.
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Set the request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> GalleryClient {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(10));

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        let origin = self
            .origin
            .unwrap_or_else(|| "http://localhost:3000".to_string());

        GalleryClient {
            client,
            origin: origin.trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = GalleryClient::builder().build();
        assert_eq!(client.origin, "http://localhost:3000");
    }

    #[test]
    fn test_builder_custom_origin() {
        let client = GalleryClient::builder()
            .origin("http://zoo.example:8080")
            .timeout(Duration::from_secs(3))
            .build();

        assert_eq!(client.origin, "http://zoo.example:8080");
    }

    #[test]
    fn test_builder_strips_trailing_slash() {
        let client = GalleryClient::builder()
            .origin("http://zoo.example:8080/")
            .build();

        assert_eq!(client.origin, "http://zoo.example:8080");
    }

    #[test]
    fn test_response_body_parses_as_records() {
        // The endpoint returns a plain JSON array of records
        let body = r#"[
            {
                "name": "Fox",
                "type": "Mammal",
                "color": "Red",
                "description": "A small canid.",
                "lifeSpan": "2-5 years",
                "imagePath": "/images/fox.png"
            },
            {
                "name": "Owl",
                "type": "Bird",
                "color": "Brown",
                "description": "A nocturnal raptor.",
                "lifespan": "10 years",
                "imagePath": "/images/owl.png"
            }
        ]"#;

        let records: Vec<AnimalRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Fox");
        assert_eq!(records[0].kind, "Mammal");
        // Both life-span spellings deserialize into the same field
        assert_eq!(records[0].life_span, "2-5 years");
        assert_eq!(records[1].life_span, "10 years");
    }
}
