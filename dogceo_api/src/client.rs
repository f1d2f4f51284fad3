//! HTTP client for the dog.ceo breed API.

use std::time::Duration;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use crate::{types::SubBreedsResponse, BreedFetcher, Error};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo";

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Characters escaped inside the breed segment. `%` is left alone so names
/// the caller already escaped pass through unchanged.
const BREED_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\');

const USER_AGENT: &str = concat!("dogceo-api/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the dog.ceo API.
///
/// Owns a single `reqwest::Client`, so connections are pooled across calls
/// made through the same instance. Each call issues exactly one request and
/// never retries.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to `https://dog.ceo`.
    base_api_url: String,
    timeout: Duration,
}

/// Builder for [`Client`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        Url::parse(&self.base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.base_url, e);
            Error::fetch_failed(format!("Invalid base URL: {}", self.base_url))
        })?;
        let http = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::fetch_failed("Failed to build HTTP client")
            })?;
        Ok(Client {
            http,
            base_api_url: self.base_url,
            timeout: self.timeout,
        })
    }
}

impl Client {
    /// Creates a new client pointing at the production dog.ceo API.
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::builder().base_url(base_url).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds `<base>/api/breed/<breed>/list`.
    ///
    /// Spaces, `/`, `?`, `#` and the like are percent-encoded so the breed
    /// stays in one path segment. Existing `%XX` escapes are kept as given.
    /// Empty names and dot segments (`.`, `..`, `%2E%2E`) are rejected since
    /// they would address a different endpoint.
    pub fn sub_breeds_url(&self, breed: &str) -> Result<Url, Error> {
        let generic =
            || Error::fetch_failed(format!("Failed to fetch sub-breeds for breed: {}", breed));

        let decoded = percent_decode_str(breed).decode_utf8_lossy();
        if breed.is_empty() || decoded == "." || decoded == ".." {
            tracing::error!("Breed name is not a usable path segment: {:?}", breed);
            return Err(generic());
        }

        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            generic()
        })?;
        if url.cannot_be_a_base() {
            tracing::error!("Base URL cannot carry a path: {}", self.base_api_url);
            return Err(generic());
        }
        let path = format!(
            "{}/api/breed/{}/list",
            url.path().trim_end_matches('/'),
            utf8_percent_encode(breed, BREED_SEGMENT)
        );
        url.set_path(&path);
        Ok(url)
    }

    /// Fetches the sub-breeds of `breed`.
    ///
    /// The HTTP status is checked before the body is read; a non-2xx reply
    /// fails without being parsed.
    pub async fn get_sub_breeds(&self, breed: &str) -> Result<Vec<String>, Error> {
        let url = self.sub_breeds_url(breed)?;
        let generic =
            || Error::fetch_failed(format!("Failed to fetch sub-breeds for breed: {}", breed));

        tracing::debug!("GET {}", url);
        let resp = self.http.get(url.clone()).send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            generic()
        })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!("Request failed with status {} for {}", status, url);
            return Err(Error::fetch_failed(format!(
                "Unexpected HTTP status {} for {}",
                status.as_u16(),
                url
            )));
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            generic()
        })?;
        if body.trim().is_empty() {
            tracing::error!("Empty response body from {}", url);
            return Err(Error::fetch_failed(format!("Empty response body from {}", url)));
        }

        let parsed = SubBreedsResponse::from_body(&body).map_err(|e| {
            tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(&body));
            generic()
        })?;

        if !parsed.is_success() {
            let api_status = parsed.status_text();
            tracing::error!("API returned status {} for {}", api_status, url);
            return Err(Error::fetch_failed(format!("API returned status: {}", api_status)));
        }

        let sub_breeds = parsed.into_sub_breeds().map_err(|e| {
            tracing::error!("Failed to decode sub-breeds: {} | body: {}", e, truncate_body(&body));
            generic()
        })?;
        tracing::debug!("{} has {} sub-breeds", breed, sub_breeds.len());
        Ok(sub_breeds)
    }
}

impl BreedFetcher for Client {
    async fn get_sub_breeds(&self, breed: &str) -> Result<Vec<String>, Error> {
        Client::get_sub_breeds(self, breed).await
    }
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 500;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
