//! Book model

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Message returned when a create request lacks a usable title or author
pub const MISSING_FIELDS_MESSAGE: &str = "Title and author are required.";

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Assigned by the catalog, never by the client
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// Message returned when a title or author holds a non-text value
pub const NON_TEXT_FIELDS_MESSAGE: &str = "Title and author must be strings.";

/// Create book request
///
/// Fields are kept as raw JSON values so that `null`, `false`, `0` and
/// blank strings are reported as missing by [`CreateBook::validate`].
/// Anything other than a JSON object fails to decode.
#[derive(Debug, Default, ToSchema)]
pub struct CreateBook {
    #[schema(value_type = Option<String>)]
    pub title: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub author: Option<Value>,
}

impl<'de> Deserialize<'de> for CreateBook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Going through a map keeps serde from accepting a positional array
        let mut object = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self {
            title: object.remove("title"),
            author: object.remove("author"),
        })
    }
}

/// Title and author that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
}

impl CreateBook {
    /// Check that title and author are present and not blank.
    ///
    /// A missing or falsy field is a validation error even when the other
    /// field holds a non-text value. Values are kept as supplied; surrounding
    /// whitespace is not stripped.
    pub fn validate(self) -> AppResult<NewBook> {
        if is_missing(self.title.as_ref()) || is_missing(self.author.as_ref()) {
            return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }

        match (self.title, self.author) {
            (Some(Value::String(title)), Some(Value::String(author))) => {
                Ok(NewBook { title, author })
            }
            _ => Err(AppError::MalformedRequest(NON_TEXT_FIELDS_MESSAGE.to_string())),
        }
    }
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

/// Records present in the catalog at startup
pub fn seed_books() -> Vec<Book> {
    [
        (1, "The Lord of the Rings", "J.R.R. Tolkien"),
        (2, "Pride and Prejudice", "Jane Austen"),
        (3, "1984", "George Orwell"),
    ]
    .into_iter()
    .map(|(id, title, author)| Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
    })
    .collect()
}
