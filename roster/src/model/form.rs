use std::str::FromStr;

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::consts::consts::{BODY_ERROR_KEY, INVALID_JSON_MESSAGE, NOT_AN_OBJECT_MESSAGE};

use super::{
    person::{Gender, Person},
    validation::ModelState,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Loosely typed submission of a person. Every field is optional so that a
/// partially filled form still binds and reports each problem separately.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PersonForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub phone_number: Option<String>,
    pub birth_place: Option<String>,
    pub is_graduated: Option<bool>,
}

impl PersonForm {
    /// Binds a raw request body. An empty body or `null` binds to no person
    /// with a valid state; deciding whether that is acceptable is up to the caller.
    ///
    /// Only a body that fails to parse is a whole-payload error. A field holding
    /// the wrong JSON type is reported under its own key and the rest still bind.
    pub fn bind_json(body: &[u8], today: NaiveDate) -> (Option<Person>, ModelState) {
        let mut model_state = ModelState::new();

        if body.iter().all(u8::is_ascii_whitespace) {
            return (None, model_state);
        }

        let fields = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => fields,
            Ok(Value::Null) => return (None, model_state),
            Ok(other) => {
                log::debug!("Person form is not an object: {}", other);

                model_state.add_model_error(BODY_ERROR_KEY, NOT_AN_OBJECT_MESSAGE);
                return (None, model_state);
            }
            Err(e) => {
                log::debug!("Unable to parse person form: {}", e);

                model_state.add_model_error(BODY_ERROR_KEY, INVALID_JSON_MESSAGE);
                return (None, model_state);
            }
        };

        let form = PersonForm {
            first_name: field(&mut model_state, &fields, "first_name", "FirstName"),
            last_name: field(&mut model_state, &fields, "last_name", "LastName"),
            gender: field(&mut model_state, &fields, "gender", "Gender"),
            date_of_birth: field(&mut model_state, &fields, "date_of_birth", "DateOfBirth"),
            phone_number: field(&mut model_state, &fields, "phone_number", "PhoneNumber"),
            birth_place: field(&mut model_state, &fields, "birth_place", "BirthPlace"),
            is_graduated: field(&mut model_state, &fields, "is_graduated", "IsGraduated"),
        };

        form.validate(today, model_state)
    }

    /// Validates every field, `today` bounds the date of birth
    pub fn bind(self, today: NaiveDate) -> (Option<Person>, ModelState) {
        self.validate(today, ModelState::new())
    }

    fn validate(
        self,
        today: NaiveDate,
        mut model_state: ModelState,
    ) -> (Option<Person>, ModelState) {
        let first_name = required(&mut model_state, "first_name", "FirstName", self.first_name);
        let last_name = required(&mut model_state, "last_name", "LastName", self.last_name);
        let birth_place = required(
            &mut model_state,
            "birth_place",
            "BirthPlace",
            self.birth_place,
        );

        let gender = required(&mut model_state, "gender", "Gender", self.gender).and_then(
            |value| match Gender::from_str(&value) {
                Ok(gender) => Some(gender),
                Err(_) => {
                    model_state.add_model_error(
                        "gender",
                        format!("The value '{}' is not valid for Gender.", value),
                    );
                    None
                }
            },
        );

        let date_of_birth = required(
            &mut model_state,
            "date_of_birth",
            "DateOfBirth",
            self.date_of_birth,
        )
        .and_then(|value| match NaiveDate::parse_from_str(&value, DATE_FORMAT) {
            Ok(date) if date > today => {
                model_state
                    .add_model_error("date_of_birth", "DateOfBirth cannot be in the future.");
                None
            }
            Ok(date) => Some(date),
            Err(_) => {
                model_state.add_model_error(
                    "date_of_birth",
                    format!("The value '{}' is not valid for DateOfBirth.", value),
                );
                None
            }
        });

        let phone_number = self.phone_number.unwrap_or_default().trim().to_string();

        if !is_phone_number(&phone_number) {
            model_state.add_model_error(
                "phone_number",
                "The PhoneNumber field is not a valid phone number.",
            );
        }

        let person = match (first_name, last_name, gender, date_of_birth, birth_place) {
            (
                Some(first_name),
                Some(last_name),
                Some(gender),
                Some(date_of_birth),
                Some(birth_place),
            ) if model_state.is_valid() => {
                Some(Person {
                    first_name,
                    last_name,
                    gender,
                    date_of_birth,
                    phone_number,
                    birth_place,
                    is_graduated: self.is_graduated.unwrap_or(false),
                })
            }
            _ => None,
        };

        (person, model_state)
    }
}

impl From<Person> for PersonForm {
    fn from(person: Person) -> Self {
        PersonForm {
            first_name: Some(person.first_name),
            last_name: Some(person.last_name),
            gender: Some(person.gender.to_string()),
            date_of_birth: Some(person.date_of_birth.format(DATE_FORMAT).to_string()),
            phone_number: Some(person.phone_number),
            birth_place: Some(person.birth_place),
            is_graduated: Some(person.is_graduated),
        }
    }
}

fn required(
    model_state: &mut ModelState,
    key: &str,
    label: &str,
    value: Option<String>,
) -> Option<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            // A value of the wrong type was already reported under this key
            if model_state.get(key).is_none() {
                model_state.add_model_error(key, format!("The {} field is required.", label));
            }
            None
        }
    }
}

/// Reads one field of a submitted object. Missing and `null` are both absent.
fn field<T: DeserializeOwned>(
    model_state: &mut ModelState,
    fields: &Map<String, Value>,
    key: &str,
    label: &str,
) -> Option<T> {
    let value = fields.get(key).filter(|value| !value.is_null())?;

    match T::deserialize(value) {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("Field {} has the wrong type: {}", key, e);

            let shown = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            model_state.add_model_error(
                key,
                format!("The value '{}' is not valid for {}.", shown, label),
            );
            None
        }
    }
}

// Empty is allowed, the roster keeps blank phone numbers
fn is_phone_number(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 6, 1).unwrap()
    }

    fn valid_form() -> PersonForm {
        PersonForm::from(Person::new_test("Nguyen Hoang"))
    }

    mod bind {
        use super::*;

        #[test]
        fn valid_form_binds_to_person() {
            let (person, model_state) = valid_form().bind(today());

            assert!(model_state.is_valid());
            assert_eq!(person, Some(Person::new_test("Nguyen Hoang")));
        }

        #[test]
        fn optional_fields_default() {
            let form = PersonForm {
                phone_number: None,
                is_graduated: None,
                ..valid_form()
            };

            let (person, model_state) = form.bind(today());
            let person = person.expect("should bind");

            assert!(model_state.is_valid());
            assert_eq!(person.phone_number, "");
            assert!(!person.is_graduated);
        }

        #[test]
        fn empty_form_reports_every_required_field() {
            let (person, model_state) = PersonForm::default().bind(today());

            assert_eq!(person, None);
            assert_eq!(model_state.error_count(), 5);

            for key in [
                "first_name",
                "last_name",
                "gender",
                "date_of_birth",
                "birth_place",
            ] {
                assert!(model_state.get(key).is_some(), "missing error for {}", key);
            }

            assert_eq!(
                model_state.get("first_name"),
                Some(&["The FirstName field is required.".to_string()][..])
            );
        }

        #[test]
        fn blank_strings_count_as_missing() {
            let form = PersonForm {
                first_name: Some("   ".to_string()),
                ..valid_form()
            };

            let (person, model_state) = form.bind(today());

            assert_eq!(person, None);
            assert_eq!(model_state.error_count(), 1);
        }

        #[test]
        fn unknown_gender_is_rejected() {
            let form = PersonForm {
                gender: Some("Robot".to_string()),
                ..valid_form()
            };

            let (_, model_state) = form.bind(today());

            assert_eq!(
                model_state.get("gender"),
                Some(&["The value 'Robot' is not valid for Gender.".to_string()][..])
            );
        }

        #[rstest]
        #[case("22/01/2001", "The value '22/01/2001' is not valid for DateOfBirth.")]
        #[case("2001-02-30", "The value '2001-02-30' is not valid for DateOfBirth.")]
        #[case("2030-01-01", "DateOfBirth cannot be in the future.")]
        fn bad_dates_are_rejected(#[case] date: &str, #[case] message: &str) {
            let form = PersonForm {
                date_of_birth: Some(date.to_string()),
                ..valid_form()
            };

            let (person, model_state) = form.bind(today());

            assert_eq!(person, None);
            assert_eq!(
                model_state.get("date_of_birth"),
                Some(&[message.to_string()][..])
            );
        }

        #[rstest]
        #[case("0912 345 678", true)]
        #[case("+84 (912) 345-678", true)]
        #[case("", true)]
        #[case("call me", false)]
        fn phone_number_characters(#[case] phone: &str, #[case] valid: bool) {
            let form = PersonForm {
                phone_number: Some(phone.to_string()),
                ..valid_form()
            };

            let (person, model_state) = form.bind(today());

            assert_eq!(model_state.is_valid(), valid);
            assert_eq!(person.is_some(), valid);
        }
    }

    mod bind_json {
        use super::*;

        #[rstest]
        #[case(&b""[..])]
        #[case(&b"  \n"[..])]
        #[case(&b"null"[..])]
        fn absent_payload_binds_to_nothing(#[case] body: &[u8]) {
            let (person, model_state) = PersonForm::bind_json(body, today());

            assert_eq!(person, None);
            assert!(model_state.is_valid());
        }

        #[test]
        fn malformed_json_is_a_body_error() {
            let (person, model_state) = PersonForm::bind_json(b"{ not json", today());

            assert_eq!(person, None);
            assert_eq!(
                model_state.get(BODY_ERROR_KEY),
                Some(&[INVALID_JSON_MESSAGE.to_string()][..])
            );
        }

        #[rstest]
        #[case(&b"5"[..])]
        #[case(&b"[1, 2]"[..])]
        #[case(&b"\"Phuong\""[..])]
        fn json_that_is_not_an_object_is_a_body_error(#[case] body: &[u8]) {
            let (person, model_state) = PersonForm::bind_json(body, today());

            assert_eq!(person, None);
            assert_eq!(
                model_state.get(BODY_ERROR_KEY),
                Some(&[NOT_AN_OBJECT_MESSAGE.to_string()][..])
            );
        }

        #[rstest]
        #[case("first_name", "5", "The value '5' is not valid for FirstName.")]
        #[case("gender", "true", "The value 'true' is not valid for Gender.")]
        #[case(
            "date_of_birth",
            "[2001, 1, 22]",
            "The value '[2001,1,22]' is not valid for DateOfBirth."
        )]
        #[case(
            "phone_number",
            "912345678",
            "The value '912345678' is not valid for PhoneNumber."
        )]
        #[case("is_graduated", "\"yes\"", "The value 'yes' is not valid for IsGraduated.")]
        fn wrongly_typed_field_is_reported_under_its_key(
            #[case] key: &str,
            #[case] raw: &str,
            #[case] message: &str,
        ) {
            let mut body = serde_json::to_value(valid_form()).expect("should serialize");
            body[key] = serde_json::from_str(raw).expect("should be json");
            let body = serde_json::to_vec(&body).expect("should serialize");

            let (person, model_state) = PersonForm::bind_json(&body, today());

            assert_eq!(person, None);
            assert_eq!(model_state.error_count(), 1);
            assert_eq!(model_state.get(key), Some(&[message.to_string()][..]));
        }

        #[test]
        fn wrongly_typed_field_keeps_the_other_errors() {
            let body = br#"{ "first_name": 5, "gender": "Robot" }"#;

            let (person, model_state) = PersonForm::bind_json(body, today());

            assert_eq!(person, None);
            assert_eq!(model_state.get(BODY_ERROR_KEY), None);
            assert_eq!(
                model_state.get("first_name"),
                Some(&["The value '5' is not valid for FirstName.".to_string()][..])
            );
            assert_eq!(
                model_state.get("gender"),
                Some(&["The value 'Robot' is not valid for Gender.".to_string()][..])
            );

            for key in ["last_name", "date_of_birth", "birth_place"] {
                assert!(model_state.get(key).is_some(), "missing error for {}", key);
            }
            assert_eq!(model_state.error_count(), 5);
        }

        #[test]
        fn json_object_binds() {
            let body = br#"{
                "first_name": "Phuong",
                "last_name": "Nguyen Hoang",
                "gender": "male",
                "date_of_birth": "2001-01-22",
                "birth_place": "Phu Tho"
            }"#;

            let (person, model_state) = PersonForm::bind_json(body, today());

            assert!(model_state.is_valid());
            assert_eq!(person, Some(Person::new_test("Nguyen Hoang")));
        }
    }
}
