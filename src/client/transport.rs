use crate::client::ClientError;

/// Raw transport response before any format specific handling.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

/// Outbound HTTP port of the client. Implementations issue one GET request
/// and hand back the status and body text.
pub trait Transport {
    fn fetch(&self, url: reqwest::Url) -> Result<FetchResponse, ClientError>;
}

/// Blocking HTTP transport backed by [`reqwest`].
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        HttpTransport {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        HttpTransport::new()
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: reqwest::Url) -> Result<FetchResponse, ClientError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| ClientError::ResponseTextExtractionFailed(e.to_string()))?;

        Ok(FetchResponse { status, body })
    }
}
