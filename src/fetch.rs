use crate::error::ScrapeError;

/// Desktop Chrome identity; some storefronts serve reduced markup to unknown agents
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Source of page markup and image bytes
pub trait Fetch {
    fn fetch_text(&self, url: &str) -> Result<String, ScrapeError>;
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ScrapeError>;
}

pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(user_agent: &str) -> Result<Self, ScrapeError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| ScrapeError::fetch("<client>", e))?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response, ScrapeError> {
        tracing::debug!(%url, "GET");
        self.client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| ScrapeError::fetch(url, e))
    }
}

impl Fetch for HttpClient {
    fn fetch_text(&self, url: &str) -> Result<String, ScrapeError> {
        self.get(url)?
            .text()
            .map_err(|e| ScrapeError::fetch(url, e))
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        let bytes = self
            .get(url)?
            .bytes()
            .map_err(|e| ScrapeError::fetch(url, e))?;
        Ok(bytes.to_vec())
    }
}
