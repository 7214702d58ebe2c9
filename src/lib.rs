use crate::book::ErrorDetails;
use crate::client::transport::HttpTransport;
use crate::client::{BookSearchApiClient, Format};
use crate::config::AppConfig;

pub mod book;
pub mod client;
pub mod config;

/// Builds a ready to use client from loaded configuration. The format
/// string, taken from `format_override` when given and from the
/// configuration otherwise, is validated here, so an unsupported format is
/// rejected before any query can be made.
pub fn create_client(
    config: &AppConfig,
    format_override: Option<&str>,
) -> Result<BookSearchApiClient<HttpTransport>, ErrorDetails> {
    let format_name = format_override.unwrap_or_else(|| config.api().format());
    let format = Format::from_str(format_name)?;
    let mut client = BookSearchApiClient::new(format, HttpTransport::new());

    if let Some(base_url) = config.api().base_url() {
        client = client.with_base_url(base_url);
    }

    Ok(client)
}
