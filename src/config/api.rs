use serde::Deserialize;

/// Book seller API settings.
#[derive(Debug, Deserialize)]
pub struct Api {
    /// Search endpoint URL. The client falls back to its built-in endpoint
    /// when not set.
    base_url: Option<String>,

    /// Wire format to request, `xml` or `json`.
    format: String,
}

impl Api {
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn format(&self) -> &str {
        &self.format
    }
}
