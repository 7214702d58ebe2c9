use crate::book::{BookDetail, BookRecord, StockLevel};
use crate::client::ClientError;
use serde::Deserialize;
use serde_with::serde_as;

/// XML document returned by the book seller API:
/// `<response><data><item>...</item></data></response>`.
#[derive(Debug, Deserialize)]
pub struct Document {
    pub data: Data,
}

#[derive(Debug, Deserialize)]
pub struct Data {
    #[serde(rename = "item")]
    pub item: Option<Vec<Item>>,
}

#[derive(Debug, Deserialize)]
pub struct Item {
    pub book: Book,
    pub stock: Stock,
}

#[derive(Debug, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

/// Stock levels arrive as element text, so the numeric fields are parsed
/// from their string representation.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct Stock {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub quantity: i32,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub price: f64,
}

impl Item {
    fn into_record(self) -> BookRecord {
        BookRecord {
            book: BookDetail {
                title: self.book.title,
                author: self.book.author,
                isbn: self.book.isbn,
            },
            stock: StockLevel {
                quantity: self.stock.quantity,
                price: self.stock.price,
            },
        }
    }
}

/// Parses an XML response body into the same raw record sequence the JSON
/// path produces, so both formats share one normalization step.
pub fn parse_books(text: &str) -> Result<Vec<BookRecord>, ClientError> {
    let document: Document =
        serde_xml_rs::from_str(text).map_err(|e| ClientError::ResponseParseFailed(e.to_string()))?;

    let items = document.data.item.unwrap_or_else(|| vec![]);
    Ok(items.into_iter().map(Item::into_record).collect())
}
