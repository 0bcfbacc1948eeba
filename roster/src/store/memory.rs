use crate::{consts::consts::PersonIndex, model::person::Person};

use super::{
    options::StoreOptions,
    seed::{self, SeedError},
    PersonStore, StoreError, StoreResult,
};

/// Keeps the roster in insertion order for the lifetime of the process
#[derive(Debug, Default)]
pub struct InMemoryPersonStore {
    people: Vec<Person>,
}

impl InMemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_people(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn from_options(options: StoreOptions) -> Result<Self, SeedError> {
        let people = seed::load(&options.seed)?;

        log::info!("Person store ready with {} people", people.len());

        Ok(Self::from_people(people))
    }
}

impl PersonStore for InMemoryPersonStore {
    fn get_all(&self) -> Vec<Person> {
        self.people.clone()
    }

    #[tracing::instrument(skip(self))]
    fn get_one(&self, index: i64) -> StoreResult<Person> {
        let person_index =
            PersonIndex::try_from(index).map_err(|_| StoreError::InvalidIndex(index))?;

        self.people
            .get(person_index.offset())
            .cloned()
            .ok_or(StoreError::IndexOutOfRange(person_index.to_number()))
    }

    #[tracing::instrument(skip(self, person))]
    fn create(&mut self, person: Person) {
        self.people.push(person);
    }

    fn count(&self) -> usize {
        self.people.len()
    }
}
