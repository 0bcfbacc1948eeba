pub mod form;
pub mod person;
pub mod response;
pub mod validation;
