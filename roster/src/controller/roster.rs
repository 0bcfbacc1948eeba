use crate::{
    consts::consts::{EMPTY_BODY_MESSAGE, PERSON_ERROR_KEY},
    model::{
        person::Person,
        response::{RosterAction, RosterResponse},
        validation::ModelState,
    },
    store::{PersonStore, StoreError, StoreResult},
};

/// Request handling for the roster: list everyone, show one person, add a person.
///
/// The controller owns its store; callers that serve concurrent requests wrap the
/// controller in a lock.
pub struct RosterController<S: PersonStore> {
    store: S,
}

impl<S: PersonStore> RosterController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list(&self) -> RosterResponse {
        let people = self.store.get_all();

        log::debug!("Listing {} people", people.len());

        RosterResponse::List(people)
    }

    /// An index past the end becomes a not found response. A non-positive index is a caller
    /// error and is handed back as `StoreError::InvalidIndex`.
    pub fn detail(&self, index: i64) -> StoreResult<RosterResponse> {
        match self.store.get_one(index) {
            Ok(person) => Ok(RosterResponse::Detail(person)),
            Err(e @ StoreError::IndexOutOfRange(_)) => {
                log::info!("No person at index {}", index);
                Ok(RosterResponse::NotFound(e.to_string()))
            }
            Err(e) => {
                log::warn!("Rejected index {}: {}", index, e);
                Err(e)
            }
        }
    }

    pub fn create(
        &mut self,
        person: Option<Person>,
        mut model_state: ModelState,
    ) -> RosterResponse {
        let person = match person {
            Some(person) if model_state.is_valid() => person,
            person => {
                // An absent payload is only reported when nothing else already was
                if person.is_none() && model_state.is_valid() {
                    model_state.add_model_error(PERSON_ERROR_KEY, EMPTY_BODY_MESSAGE);
                }

                log::info!(
                    "Create rejected with {} validation error(s)",
                    model_state.error_count()
                );

                return RosterResponse::Form {
                    person,
                    model_state,
                };
            }
        };

        log::info!("Adding {} to the roster", person.full_name());

        self.store.create(person);

        RosterResponse::RedirectTo(RosterAction::List)
    }
}
