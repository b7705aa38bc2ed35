use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{AddTagRequest, Donor, DonorCreate, DonorUpdate, MergeDonorsRequest};
use thiserror::Error;

/// Default backend origin; override at build time via `DONOR_API_URL`.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// The single way a donor API call fails: a non-success response carrying
/// the server's status text, or the transport error on the way there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct RequestFailed(pub String);

/// API client for the donor endpoints under `/api/v1/donors`.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the configured base URL.
    pub fn new() -> Self {
        Self::with_base_url(
            option_env!("DONOR_API_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
        )
    }

    /// Create a new API client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn donors_url(&self, suffix: &str) -> String {
        format!("{}/api/v1/donors{}", self.base_url, suffix)
    }

    /// List donors in server-provided order.
    pub async fn list_donors(&self, skip: u32, limit: u32) -> Result<Vec<Donor>, RequestFailed> {
        let url = self.donors_url(&format!("?skip={}&limit={}", skip, limit));
        let response = send(Request::get(&url)).await?;
        parse(response).await
    }

    /// Fetch a single donor by id.
    pub async fn get_donor(&self, id: i64) -> Result<Donor, RequestFailed> {
        let response = send(Request::get(&self.donors_url(&format!("/{}", id)))).await?;
        parse(response).await
    }

    /// Create a donor from the full form payload.
    pub async fn create_donor(&self, donor: &DonorCreate) -> Result<Donor, RequestFailed> {
        let response = send_json(Request::post(&self.donors_url("")), donor).await?;
        parse(response).await
    }

    /// Update an existing donor with the form payload.
    pub async fn update_donor(
        &self,
        id: i64,
        updates: &DonorUpdate,
    ) -> Result<Donor, RequestFailed> {
        let url = self.donors_url(&format!("/{}", id));
        let response = send_json(Request::put(&url), updates).await?;
        parse(response).await
    }

    /// Full-text donor search, delegated to the backend.
    pub async fn search_donors(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Donor>, RequestFailed> {
        let limit = limit.to_string();
        let request = Request::get(&self.donors_url("/search"))
            .query([("q", query), ("limit", limit.as_str())]);
        let response = send(request).await?;
        parse(response).await
    }

    /// Candidate duplicates for a donor. The search itself is the backend's;
    /// this client only fetches what it found.
    pub async fn find_duplicates(&self, donor_id: i64) -> Result<Vec<Donor>, RequestFailed> {
        let url = self.donors_url(&format!("/{}/duplicates", donor_id));
        let response = send(Request::get(&url)).await?;
        parse(response).await
    }

    /// Merge the duplicate record into the primary one. Irreversible.
    pub async fn merge_donors(
        &self,
        primary_id: i64,
        duplicate_id: i64,
    ) -> Result<Donor, RequestFailed> {
        let body = MergeDonorsRequest {
            primary_donor_id: primary_id,
            duplicate_donor_id: duplicate_id,
        };
        let response = send_json(Request::post(&self.donors_url("/merge")), &body).await?;
        parse(response).await
    }

    /// Tag a donor. Fire-and-forget from the caller's point of view; no body
    /// comes back.
    pub async fn add_tag(&self, donor_id: i64, tag_name: &str) -> Result<(), RequestFailed> {
        let url = self.donors_url(&format!("/{}/tags", donor_id));
        let body = AddTagRequest {
            tag_name: tag_name.to_string(),
        };
        let response = send_json(Request::post(&url), &body).await?;
        check(response)
    }

    /// Delete a donor record.
    pub async fn delete_donor(&self, id: i64) -> Result<(), RequestFailed> {
        let response = send(Request::delete(&self.donors_url(&format!("/{}", id)))).await?;
        check(response)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn send(request: gloo::net::http::RequestBuilder) -> Result<Response, RequestFailed> {
    request
        .send()
        .await
        .map_err(|e| RequestFailed(format!("Network error: {}", e)))
}

async fn send_json<B: serde::Serialize>(
    request: gloo::net::http::RequestBuilder,
    body: &B,
) -> Result<Response, RequestFailed> {
    request
        .json(body)
        .map_err(|e| RequestFailed(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| RequestFailed(format!("Network error: {}", e)))
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, RequestFailed> {
    check_status(&response)?;
    response
        .json::<T>()
        .await
        .map_err(|e| RequestFailed(format!("Failed to parse response: {}", e)))
}

fn check(response: Response) -> Result<(), RequestFailed> {
    check_status(&response)
}

fn check_status(response: &Response) -> Result<(), RequestFailed> {
    if response.ok() {
        Ok(())
    } else {
        Err(RequestFailed(response.status_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = ApiClient::new();
        assert!(client.donors_url("").starts_with("http://"));
        assert!(client.donors_url("").ends_with("/api/v1/donors"));
    }

    #[test]
    fn test_custom_base_url() {
        let client = ApiClient::with_base_url("https://crm.example.org".to_string());
        assert_eq!(
            client.donors_url("/7/duplicates"),
            "https://crm.example.org/api/v1/donors/7/duplicates"
        );
    }
}
