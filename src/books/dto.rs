use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for Catalog service. Missing fields in a request
// body fall back to empty strings and a zero quantity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct BookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub quantity: i64,
}

impl BookDto {
    pub fn new(id: &str, title: &str, author: &str, quantity: i64) -> BookDto {
        BookDto {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            quantity,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            quantity: other.quantity,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        BookEntity::new(other.id.as_str(), other.title.as_str(), other.author.as_str(), other.quantity)
    }
}
