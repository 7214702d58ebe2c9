use crate::book::{ApiResponse, AuthorBook, BookRecord, ErrorDetails, QueryReply};
use crate::client::transport::Transport;
use std::fmt;

pub mod transport;
pub mod xml;

/// Book seller API search endpoint URL.
const BY_AUTHOR_ENDPOINT: &'static str = "http://api.book-seller-example.com/by-author";

/// Wire format requested from and parsed from the book seller API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Xml,
    Json,
}

impl Format {
    /// Parses the configured format string. Anything other than `xml` or
    /// `json` is rejected here, before a client exists, so a request can
    /// never be issued with an unsupported format.
    pub fn from_str(s: &str) -> Result<Self, ErrorDetails> {
        match s {
            "xml" => Ok(Format::Xml),
            "json" => Ok(Format::Json),
            _ => Err(ErrorDetails::bad_request(
                "Invalid format requested, must be either xml or json",
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Xml => "xml",
            Format::Json => "json",
        }
    }
}

/// Hard faults raised by the query pipeline. These are logged and returned
/// as `Err`, never converted into an [`ErrorDetails`] value.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    InvalidBaseUrl,
    RequestFailed(String),
    ResponseTextExtractionFailed(String),
    ResponseParseFailed(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ClientError {}

/// Client for the book seller search API. Fetches books by author name in
/// the configured wire format and normalizes the response into flat
/// [`AuthorBook`] records.
#[derive(Debug)]
pub struct BookSearchApiClient<T: Transport> {
    format: Format,
    base_url: String,
    transport: T,
}

impl<T: Transport> BookSearchApiClient<T> {
    pub fn new(format: Format, transport: T) -> Self {
        BookSearchApiClient {
            format,
            base_url: BY_AUTHOR_ENDPOINT.to_owned(),
            transport,
        }
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Searches books by author name.
    ///
    /// Input validation failures are soft errors, returned as
    /// [`QueryReply::Rejected`] without touching the network. Transport,
    /// status and parse failures are hard faults, logged and returned as
    /// `Err` for the caller's own fault handling.
    pub fn get_books_by_author(
        &self,
        author_name: &str,
        limit: Option<u32>,
    ) -> Result<QueryReply, ClientError> {
        // limit 0 is rejected the same as a missing limit, matching the
        // upstream API contract.
        let limit = match limit {
            Some(l) if l > 0 && !author_name.is_empty() => l,
            _ => {
                tracing::error!(
                    author_name,
                    limit,
                    "missing required book search query parameters"
                );
                return Ok(QueryReply::Rejected(ErrorDetails::validation_error(
                    "Missing required query parameters",
                )));
            }
        };

        match self.fetch_books(author_name, limit) {
            Ok(records) => {
                let books: Vec<AuthorBook> = records.into_iter().map(AuthorBook::from).collect();
                Ok(QueryReply::Books(ApiResponse::new(books)))
            }
            Err(e) => {
                tracing::error!(author_name, limit, error = %e, "book search request failed");
                Err(e)
            }
        }
    }

    fn fetch_books(&self, author_name: &str, limit: u32) -> Result<Vec<BookRecord>, ClientError> {
        let url = self.build_search_url(author_name, limit)?;
        let response = self.transport.fetch(url)?;

        if !(200..300).contains(&response.status) {
            return Err(ClientError::RequestFailed(format!(
                "unexpected response status: {}",
                response.status
            )));
        }

        match self.format {
            Format::Json => serde_json::from_str(&response.body)
                .map_err(|e| ClientError::ResponseParseFailed(e.to_string())),
            Format::Xml => xml::parse_books(&response.body),
        }
    }

    fn build_search_url(&self, author_name: &str, limit: u32) -> Result<reqwest::Url, ClientError> {
        let mut url =
            reqwest::Url::parse(&self.base_url).map_err(|_| ClientError::InvalidBaseUrl)?;

        url.query_pairs_mut()
            .append_pair("authorName", author_name)
            .append_pair("limit", &limit.to_string())
            .append_pair("format", self.format.as_str());

        Ok(url)
    }
}
