use std::collections::HashMap;

use colored::Colorize;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Url};

use crate::error::DownloaderError;

// This is the base client used to make requests to the repository. It
// wraps a reqwest::Client together with the repository base URL and the
// optional API token, so both download phases share one immutable
// session configuration.
#[derive(Debug, Clone)]
pub struct BaseClient {
    base_url: Url,
    api_token: Option<String>,
    client: Client,
}

impl BaseClient {
    pub fn new(base_url: &str, api_token: Option<&str>) -> Result<Self, DownloaderError> {
        let parsed = Url::parse(base_url).map_err(|e| DownloaderError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        // No request timeout is configured; a stalled transfer blocks
        // the whole run.
        let client = Client::builder()
            .default_headers(Self::default_headers(api_token))
            .build()
            .map_err(|e| DownloaderError::Network {
                base_url: base_url.to_string(),
                source: e,
            })?;

        Ok(BaseClient {
            base_url: parsed,
            api_token: api_token.map(|s| s.to_string()),
            client,
        })
    }

    // The API token header is only inserted when a token exists. Requests
    // of unauthenticated sessions carry no X-Dataverse-key header at all.
    fn default_headers(api_token: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Some(api_token) = api_token {
            headers.insert(
                "X-Dataverse-key",
                api_token.parse().expect("Failed to parse API token"),
            );
        }

        headers.insert("Accept", HeaderValue::from_static("*/*"));
        headers.insert("User-Agent", HeaderValue::from_static("dvdownloader/0.1.0"));

        headers
    }

    /// Get the base URL of the client
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether an API token is configured for this session
    pub fn has_api_token(&self) -> bool {
        self.api_token.is_some()
    }

    /// Sends a GET request to a path below the base URL.
    ///
    /// # Arguments
    ///
    /// * `path` - The path relative to the base URL.
    /// * `parameters` - Optional query parameters.
    ///
    /// # Returns
    ///
    /// The raw `reqwest::Response`; status evaluation is left to the caller.
    pub async fn get(
        &self,
        path: &str,
        parameters: Option<HashMap<String, String>>,
    ) -> Result<reqwest::Response, DownloaderError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| DownloaderError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                reason: e.to_string(),
            })?;

        let request = self.client.get(url);
        let request = match parameters {
            Some(parameters) => request.query(&parameters),
            None => request,
        };

        request.send().await.map_err(|e| DownloaderError::Network {
            base_url: self.base_url.to_string(),
            source: e,
        })
    }
}

/// Prints an error message in the CLI's diagnostic style.
pub fn print_error(error: &DownloaderError) {
    println!("\n{} {}\n", "Error:".red().bold(), error);
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use lazy_static::lazy_static;

    use super::*;

    lazy_static! {
        static ref MOCK_SERVER: MockServer = MockServer::start();
    }

    #[tokio::test]
    async fn test_get_request() {
        let client = BaseClient::new(&MOCK_SERVER.base_url(), None).unwrap();

        let _m = MOCK_SERVER.mock(|when, then| {
            when.method(GET).path("/test");
            then.status(200).body("test");
        });

        let response = client.get("test", None).await;
        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn test_parameter_request() {
        let client = BaseClient::new(&MOCK_SERVER.base_url(), None).unwrap();

        let mock = MOCK_SERVER.mock(|when, then| {
            when.method(GET)
                .path("/test_parameters")
                .query_param("key1", "value1")
                .query_param("key2", "value2");
            then.status(200).body("test");
        });

        let parameters = Some(HashMap::from([
            ("key1".to_string(), "value1".to_string()),
            ("key2".to_string(), "value2".to_string()),
        ]));

        let response = client.get("test_parameters", parameters).await;

        assert!(response.is_ok());

        mock.assert();
    }

    #[tokio::test]
    async fn test_api_token_header_is_sent() {
        let client = BaseClient::new(&MOCK_SERVER.base_url(), Some("s3cret")).unwrap();

        let mock = MOCK_SERVER.mock(|when, then| {
            when.method(GET)
                .path("/test_token")
                .header("X-Dataverse-key", "s3cret");
            then.status(200).body("test");
        });

        let response = client.get("test_token", None).await;

        assert!(response.is_ok());
        assert!(client.has_api_token());

        mock.assert();
    }

    #[tokio::test]
    async fn test_api_token_header_is_omitted_without_token() {
        let client = BaseClient::new(&MOCK_SERVER.base_url(), None).unwrap();

        // Only requests carrying the token header can hit this mock.
        let with_header = MOCK_SERVER.mock(|when, then| {
            when.method(GET)
                .path("/test_no_token")
                .header_exists("X-Dataverse-key");
            then.status(500);
        });

        let without_header = MOCK_SERVER.mock(|when, then| {
            when.method(GET).path("/test_no_token");
            then.status(200).body("test");
        });

        let response = client
            .get("test_no_token", None)
            .await
            .expect("Request failed");

        assert!(!client.has_api_token());
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(with_header.hits(), 0);
        assert_eq!(without_header.hits(), 1);
    }

    #[test]
    fn test_invalid_base_url() {
        let result = BaseClient::new("not a url", None);
        assert!(matches!(result, Err(DownloaderError::InvalidUrl { .. })));
    }
}
