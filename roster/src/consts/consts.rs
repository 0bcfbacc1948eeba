use serde::{Deserialize, Serialize};
use thiserror::Error;

// Messages
pub const INDEX_OUT_OF_RANGE_MESSAGE: &str = "Index out of range.";
pub const INDEX_NOT_POSITIVE_MESSAGE: &str = "Index must be greater than zero.";
pub const EMPTY_BODY_MESSAGE: &str = "A non-empty request body is required.";
pub const INVALID_JSON_MESSAGE: &str = "The input was not valid JSON.";
pub const NOT_AN_OBJECT_MESSAGE: &str = "The JSON value could not be converted to a Person.";

// Model state keys
pub const PERSON_ERROR_KEY: &str = "person";
pub const BODY_ERROR_KEY: &str = "";

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
/// 1-based position of a person within the store
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "i64")]
pub struct PersonIndex(usize);

impl PersonIndex {
    pub fn to_number(self) -> usize {
        self.0
    }

    /// Zero based offset into the backing sequence
    pub fn offset(self) -> usize {
        self.0 - 1
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum PersonIndexError {
    #[error("{}", INDEX_NOT_POSITIVE_MESSAGE)]
    NegativeOrZero(i64),
}

impl TryFrom<i64> for PersonIndex {
    type Error = PersonIndexError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(PersonIndexError::NegativeOrZero(value));
        }

        // i64 -> usize only fails on 32 bit targets, which can never hold that many rows anyway
        let index = usize::try_from(value).unwrap_or(usize::MAX);

        Ok(PersonIndex(index))
    }
}
