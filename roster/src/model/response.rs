use serde::{Deserialize, Serialize};

use super::{person::Person, validation::ModelState};

/// Controller operations a response can redirect to
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum RosterAction {
    List,
}

/// Outcome of a controller operation, independent of how it is rendered
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum RosterResponse {
    /// Every person in store order
    List(Vec<Person>),
    Detail(Person),
    /// Plain text explanation of why nothing was found
    NotFound(String),
    /// Re-render of the submission form together with what was wrong with it
    Form {
        person: Option<Person>,
        model_state: ModelState,
    },
    RedirectTo(RosterAction),
}

// Typed accessors for when the caller knows which variant an operation produces
impl RosterResponse {
    pub fn list(self) -> Vec<Person> {
        if let RosterResponse::List(l) = self {
            l
        } else {
            panic!("Roster response is not of type List")
        }
    }

    pub fn detail(self) -> Person {
        if let RosterResponse::Detail(p) = self {
            p
        } else {
            panic!("Roster response is not of type Detail")
        }
    }

    pub fn not_found(self) -> String {
        if let RosterResponse::NotFound(s) = self {
            s
        } else {
            panic!("Roster response is not of type NotFound")
        }
    }

    pub fn form(self) -> (Option<Person>, ModelState) {
        if let RosterResponse::Form {
            person,
            model_state,
        } = self
        {
            (person, model_state)
        } else {
            panic!("Roster response is not of type Form")
        }
    }

    pub fn redirect_to(self) -> RosterAction {
        if let RosterResponse::RedirectTo(a) = self {
            a
        } else {
            panic!("Roster response is not of type RedirectTo")
        }
    }
}
