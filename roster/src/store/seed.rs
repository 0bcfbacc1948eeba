use std::{fs, path::Path};

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::person::{Gender, Person};

use super::options::SeedSource;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Unable to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load(source: &SeedSource) -> Result<Vec<Person>, SeedError> {
    match source {
        SeedSource::Empty => Ok(vec![]),
        SeedSource::Sample => Ok(sample_roster()),
        SeedSource::File(path) => read_file(path),
    }
}

#[tracing::instrument]
fn read_file(path: &Path) -> Result<Vec<Person>, SeedError> {
    let bytes = fs::read(path)?;
    let people: Vec<Person> = serde_json::from_slice(&bytes)?;

    log::info!("Loaded {} people from {}", people.len(), path.display());

    Ok(people)
}

/// Three rookies from Phu Tho, enough to click around with
pub fn sample_roster() -> Vec<Person> {
    let born = NaiveDate::from_ymd_opt(2001, 1, 22).unwrap_or_default();

    ["Nguyen Nam", "Nguyen Hoai", "Nguyen Ngoc"]
        .into_iter()
        .map(|last_name| {
            Person::new(
                "Phuong".to_string(),
                last_name.to_string(),
                Gender::Male,
                born,
                "Phu Tho".to_string(),
            )
        })
        .collect()
}
