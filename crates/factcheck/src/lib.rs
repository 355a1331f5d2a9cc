//! Stateless client for the Google Fact Check Tools search API.
//!
//! One endpoint: `GET /v1alpha1/claims:search`. The client maps each
//! returned claim to a flat [`FactCheckResult`], taking the *first* review
//! when a claim has several. No verdict logic lives here — this is
//! transport glue for a side panel, nothing more.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use soapbox_core::error::FactCheckError;

const DEFAULT_ENDPOINT: &str = "https://factchecktools.googleapis.com/v1alpha1/claims:search";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// One fact-check match, flattened from the API's claim/review nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactCheckResult {
    /// The claim text as reviewed
    pub text: String,

    /// Who made the claim, when known
    pub claimant: Option<String>,

    /// Textual rating from the first review (e.g. "False", "Mostly true")
    pub rating: Option<String>,

    /// Publisher of the first review
    pub publisher: Option<String>,

    /// URL of the first review
    pub url: Option<String>,
}

/// Client for claim search queries.
pub struct FactCheckClient {
    endpoint: String,
    api_key: String,
    language_code: String,
    page_size: u32,
    client: reqwest::Client,
}

impl FactCheckClient {
    /// Create a client against the production endpoint.
    ///
    /// `api_key` is required up front so a missing key fails before any
    /// query is attempted.
    pub fn new(api_key: Option<String>) -> Result<Self, FactCheckError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key)
    }

    /// Create a client against an explicit endpoint (tests).
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self, FactCheckError> {
        let api_key = match api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(FactCheckError::MissingApiKey),
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| FactCheckError::Network(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.into(),
            api_key,
            language_code: "en-US".into(),
            page_size: 5,
            client,
        })
    }

    /// Set the BCP-47 language code for results.
    pub fn with_language_code(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = language_code.into();
        self
    }

    /// Set the number of results per search.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Search published fact checks matching a claim text.
    ///
    /// Zero matches is a normal outcome, not an error.
    pub async fn search(&self, query: &str) -> Result<Vec<FactCheckResult>, FactCheckError> {
        debug!(query_len = query.len(), "Searching fact checks");

        let page_size = self.page_size.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("query", query),
                ("languageCode", self.language_code.as_str()),
                ("pageSize", page_size.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| FactCheckError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.text().await.unwrap_or_default();
            return Err(FactCheckError::ApiError {
                status_code: status,
                message: body,
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| FactCheckError::InvalidResponse(e.to_string()))?;

        Ok(body
            .claims
            .into_iter()
            .map(|claim| {
                let review = claim.claim_review.into_iter().next();
                FactCheckResult {
                    text: claim.text.unwrap_or_default(),
                    claimant: claim.claimant,
                    rating: review.as_ref().and_then(|r| r.textual_rating.clone()),
                    publisher: review
                        .as_ref()
                        .and_then(|r| r.publisher.as_ref())
                        .and_then(|p| p.name.clone()),
                    url: review.and_then(|r| r.url),
                }
            })
            .collect())
    }
}

// ── Wire shapes ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    claims: Vec<ApiClaim>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiClaim {
    text: Option<String>,
    claimant: Option<String>,
    #[serde(default)]
    claim_review: Vec<ApiReview>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiReview {
    publisher: Option<ApiPublisher>,
    url: Option<String>,
    textual_rating: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiPublisher {
    name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::Server) -> FactCheckClient {
        FactCheckClient::with_endpoint(
            format!("{}/v1alpha1/claims:search", server.url()),
            Some("test-key".into()),
        )
        .unwrap()
    }

    #[test]
    fn missing_api_key_is_a_typed_error() {
        assert!(matches!(
            FactCheckClient::new(None),
            Err(FactCheckError::MissingApiKey)
        ));
        assert!(matches!(
            FactCheckClient::new(Some("  ".into())),
            Err(FactCheckError::MissingApiKey)
        ));
    }

    #[tokio::test]
    async fn search_flattens_first_review() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1alpha1/claims:search")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("query".into(), "IRA raised taxes".into()),
                mockito::Matcher::UrlEncoded("languageCode".into(), "en-US".into()),
                mockito::Matcher::UrlEncoded("pageSize".into(), "5".into()),
                mockito::Matcher::UrlEncoded("key".into(), "test-key".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"claims":[{
                    "text":"The IRA raised taxes on the middle class",
                    "claimant":"A politician",
                    "claimReview":[
                        {"publisher":{"name":"FactCheck.org"},"url":"https://factcheck.example/1","textualRating":"False"},
                        {"publisher":{"name":"Other"},"url":"https://other.example","textualRating":"Pants on fire"}
                    ]
                }]}"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let results = client.search("IRA raised taxes").await.unwrap();

        assert_eq!(results.len(), 1);
        let r = &results[0];
        assert_eq!(r.text, "The IRA raised taxes on the middle class");
        assert_eq!(r.claimant.as_deref(), Some("A politician"));
        assert_eq!(r.rating.as_deref(), Some("False"));
        assert_eq!(r.publisher.as_deref(), Some("FactCheck.org"));
        assert_eq!(r.url.as_deref(), Some("https://factcheck.example/1"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn zero_matches_is_ok_and_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1alpha1/claims:search")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = client_for(&server);
        let results = client.search("nothing matches this").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn claim_without_reviews_keeps_text_only() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1alpha1/claims:search")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"claims":[{"text":"Unreviewed claim"}]}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let results = client.search("q").await.unwrap();
        assert_eq!(results[0].text, "Unreviewed claim");
        assert!(results[0].rating.is_none());
        assert!(results[0].publisher.is_none());
    }

    #[tokio::test]
    async fn api_error_carries_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1alpha1/claims:search")
            .match_query(mockito::Matcher::Any)
            .with_status(403)
            .with_body("API key invalid")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client.search("q").await.unwrap_err();
        match err {
            FactCheckError::ApiError {
                status_code,
                message,
            } => {
                assert_eq!(status_code, 403);
                assert!(message.contains("API key invalid"));
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn page_size_override_is_sent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1alpha1/claims:search")
            .match_query(mockito::Matcher::UrlEncoded("pageSize".into(), "2".into()))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = client_for(&server).with_page_size(2);
        client.search("q").await.unwrap();
        mock.assert_async().await;
    }
}
