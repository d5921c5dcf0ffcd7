use serde::{Deserialize, Serialize};
use crate::books::Book;
use crate::core::domain::Identifiable;

// BookEntity is the persisted form of a catalog entry. The quantity counts the copies
// on the shelf; it is never checked for uniqueness of id or sign on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub id: String,
    pub title: String,
    pub author: String,
    pub quantity: i64,
}

impl BookEntity {
    pub fn new(id: &str, title: &str, author: &str, quantity: i64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            quantity,
        }
    }

    pub fn is_field(name: &str) -> bool {
        matches!(name, "id" | "title" | "author")
    }

    // field lookup used by repository predicates
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(self.id.as_str()),
            "title" => Some(self.title.as_str()),
            "author" => Some(self.author.as_str()),
            _ => None,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

impl Book for BookEntity {
    fn quantity(&self) -> i64 {
        self.quantity
    }
}
