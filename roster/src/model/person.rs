use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Serialize, Deserialize, Display, EnumString, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(ascii_case_insensitive)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub phone_number: String,
    pub birth_place: String,
    #[serde(default)]
    pub is_graduated: bool,
}

impl Person {
    pub fn new(
        first_name: String,
        last_name: String,
        gender: Gender,
        date_of_birth: NaiveDate,
        birth_place: String,
    ) -> Self {
        Person {
            first_name,
            last_name,
            gender,
            date_of_birth,
            phone_number: String::new(),
            birth_place,
            is_graduated: false,
        }
    }

    pub fn set_phone_number(mut self, phone_number: String) -> Self {
        self.phone_number = phone_number;
        self
    }

    pub fn set_graduated(mut self, is_graduated: bool) -> Self {
        self.is_graduated = is_graduated;
        self
    }

    /// Family name first, e.g. "Nguyen Nam Phuong"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    /// Whole years lived as of `date`, zero if `date` precedes the birth date
    pub fn age_on(&self, date: NaiveDate) -> u32 {
        date.years_since(self.date_of_birth).unwrap_or(0)
    }

    pub fn new_test(last_name: &str) -> Self {
        Person::new(
            "Phuong".to_string(),
            last_name.to_string(),
            Gender::Male,
            NaiveDate::from_ymd_opt(2001, 1, 22).expect("valid test date"),
            "Phu Tho".to_string(),
        )
    }
}
