use serde::{Deserialize, Serialize};

/// Book detail group as returned by the book seller API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookDetail {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

/// Stock level group as returned by the book seller API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StockLevel {
    pub quantity: i32,
    pub price: f64,
}

/// Remote representation of a single book before normalization.
/// The API splits each record into a `book` group and a `stock` group.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookRecord {
    pub book: BookDetail,
    pub stock: StockLevel,
}

/// Canonical flat record returned to callers, built by collapsing the
/// `book` and `stock` groups of a [`BookRecord`] into one shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub quantity: i32,
    pub price: f64,
}

impl From<BookRecord> for AuthorBook {
    fn from(record: BookRecord) -> Self {
        AuthorBook {
            title: record.book.title,
            author: record.book.author,
            isbn: record.book.isbn,
            quantity: record.stock.quantity,
            price: record.stock.price,
        }
    }
}

/// Result envelope wrapping a successful list result.
/// `count` always equals the length of `results`; the only way to build an
/// envelope is [`ApiResponse::new`], which derives the count itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    results: Vec<T>,
    count: usize,
}

impl<T> ApiResponse<T> {
    pub fn new(results: Vec<T>) -> Self {
        let count = results.len();
        ApiResponse { results, count }
    }

    pub fn results(&self) -> &[T] {
        &self.results
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Structured soft error returned in place of an envelope. Serializes under
/// an `error` key so callers can branch on its presence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDetails {
    error: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct ErrorBody {
    status: u16,
    code: String,
    message: String,
}

impl ErrorDetails {
    pub fn new<C: Into<String>, M: Into<String>>(status: u16, code: C, message: M) -> Self {
        ErrorDetails {
            error: ErrorBody {
                status,
                code: code.into(),
                message: message.into(),
            },
        }
    }

    pub fn validation_error<M: Into<String>>(message: M) -> Self {
        ErrorDetails::new(400, "VALIDATION_ERROR", message)
    }

    pub fn bad_request<M: Into<String>>(message: M) -> Self {
        ErrorDetails::new(400, "BAD_REQUEST", message)
    }

    pub fn status(&self) -> u16 {
        self.error.status
    }

    pub fn code(&self) -> &str {
        &self.error.code
    }

    pub fn message(&self) -> &str {
        &self.error.message
    }
}

/// Reply returned to inbound callers, either a result envelope or a soft
/// error. Serializes untagged to match the two JSON shapes the caller
/// branches on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryReply {
    Books(ApiResponse<AuthorBook>),
    Rejected(ErrorDetails),
}

/// Inbound query DTO for callers sourcing the search from a request body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthorQuery {
    pub author: String,
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, isbn: &str, quantity: i32, price: f64) -> BookRecord {
        BookRecord {
            book: BookDetail {
                title: title.to_owned(),
                author: "author".to_owned(),
                isbn: isbn.to_owned(),
            },
            stock: StockLevel { quantity, price },
        }
    }

    #[test]
    fn flatten_collapses_book_and_stock_groups() {
        let flat = AuthorBook::from(record("title1", "isbn1", 1, 2.5));

        assert_eq!(flat.title, "title1");
        assert_eq!(flat.author, "author");
        assert_eq!(flat.isbn, "isbn1");
        assert_eq!(flat.quantity, 1);
        assert_eq!(flat.price, 2.5);
    }

    #[test]
    fn envelope_count_equals_results_length() {
        let books: Vec<AuthorBook> = vec![
            record("title1", "isbn1", 1, 2.5).into(),
            record("title2", "isbn2", 2, 3.5).into(),
        ];
        let response = ApiResponse::new(books);

        assert_eq!(response.count(), 2);
        assert_eq!(response.count(), response.results().len());
    }

    #[test]
    fn empty_envelope_has_zero_count() {
        let response: ApiResponse<AuthorBook> = ApiResponse::new(vec![]);

        assert_eq!(response.count(), 0);
        assert!(response.results().is_empty());
    }

    #[test]
    fn error_details_serialize_under_error_key() {
        let details = ErrorDetails::validation_error("Missing required query parameters");
        let json = serde_json::to_value(&details).unwrap();

        assert_eq!(json["error"]["status"], 400);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["message"], "Missing required query parameters");
    }

    #[test]
    fn reply_serializes_without_enum_tag() {
        let success = QueryReply::Books(ApiResponse::new(vec![AuthorBook::from(record(
            "title1", "isbn1", 1, 2.5,
        ))]));
        let success_json = serde_json::to_value(&success).unwrap();
        assert_eq!(success_json["count"], 1);
        assert_eq!(success_json["results"][0]["isbn"], "isbn1");

        let rejected = QueryReply::Rejected(ErrorDetails::bad_request("bad"));
        let rejected_json = serde_json::to_value(&rejected).unwrap();
        assert_eq!(rejected_json["error"]["code"], "BAD_REQUEST");
    }

    #[test]
    fn author_query_deserializes_with_optional_limit() {
        let query: AuthorQuery = serde_json::from_str(r#"{"author":"author","limit":10}"#).unwrap();
        assert_eq!(query.author, "author");
        assert_eq!(query.limit, Some(10));

        let without_limit: AuthorQuery = serde_json::from_str(r#"{"author":"author"}"#).unwrap();
        assert_eq!(without_limit.limit, None);
    }
}
