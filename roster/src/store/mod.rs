use thiserror::Error;

use crate::{
    consts::consts::{INDEX_NOT_POSITIVE_MESSAGE, INDEX_OUT_OF_RANGE_MESSAGE},
    model::person::Person,
};

pub mod memory;
pub mod options;
pub mod seed;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Index was zero or negative
    #[error("{}", INDEX_NOT_POSITIVE_MESSAGE)]
    InvalidIndex(i64),

    /// Index was past the last person in the store
    #[error("{}", INDEX_OUT_OF_RANGE_MESSAGE)]
    IndexOutOfRange(usize),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Owner of the ordered person sequence. Indices handed to `get_one` are 1-based.
///
/// Implementations are not expected to synchronise access themselves, callers that share a
/// store between threads wrap it in a lock.
pub trait PersonStore {
    fn get_all(&self) -> Vec<Person>;
    fn get_one(&self, index: i64) -> StoreResult<Person>;
    fn create(&mut self, person: Person);
    fn count(&self) -> usize;
}
