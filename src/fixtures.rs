// 📦 Fixtures - sample datasets, built fresh on every call
// Same record shapes can also be loaded from CSV (header row required)

use crate::people::{Gender, Person};
use crate::rounding::City;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

// ============================================================================
// IN-CODE SAMPLES
// ============================================================================

pub fn sample_people() -> Vec<Person> {
    vec![
        Person::new("Sara", Gender::Female, 20),
        Person::new("Sara", Gender::Female, 22),
        Person::new("Bob", Gender::Male, 20),
        Person::new("Paula", Gender::Female, 32),
        Person::new("Paul", Gender::Male, 32),
        Person::new("Jack", Gender::Male, 2),
        Person::new("Jack", Gender::Male, 72),
        Person::new("Jill", Gender::Female, 12),
    ]
}

pub fn sample_cities() -> Vec<City> {
    vec![
        City::new("Nice", 942_208),
        City::new("Abu Dhabi", 1_482_816),
        City::new("Naples", 2_186_853),
        City::new("Vatican City", 572),
    ]
}

/// 1 through 10
pub fn sample_numbers() -> Vec<i64> {
    (1..=10).collect()
}

/// 1 through 5, twice
pub fn repeated_numbers() -> Vec<i64> {
    (1..=5).chain(1..=5).collect()
}

/// 1 through 20 with 4 and 5 swapped
pub fn find_first_numbers() -> Vec<i64> {
    let mut numbers: Vec<i64> = (1..=20).collect();
    numbers.swap(3, 4);
    numbers
}

// ============================================================================
// CSV LOADING
// ============================================================================

fn load_csv<T: DeserializeOwned>(csv_path: &Path) -> Result<Vec<T>> {
    let mut rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {:?}", csv_path))?;

    let mut records = Vec::new();

    for (index, result) in rdr.deserialize().enumerate() {
        // +2: header is line 1
        let record: T = result.with_context(|| format!("Failed to deserialize line {}", index + 2))?;
        records.push(record);
    }

    debug!(path = ?csv_path, count = records.len(), "loaded fixture");
    Ok(records)
}

/// Header: `name,gender,age` (gender is `FEMALE` or `MALE`)
pub fn load_people_csv(csv_path: &Path) -> Result<Vec<Person>> {
    load_csv(csv_path)
}

/// Header: `name,population`. Negative populations fail to load.
pub fn load_cities_csv(csv_path: &Path) -> Result<Vec<City>> {
    load_csv(csv_path)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_sample_sizes() {
        assert_eq!(sample_people().len(), 8);
        assert_eq!(sample_cities().len(), 4);
        assert_eq!(sample_numbers().len(), 10);
        assert_eq!(repeated_numbers(), vec![1, 2, 3, 4, 5, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_find_first_numbers_swapped() {
        let numbers = find_first_numbers();

        assert_eq!(&numbers[..6], &[1, 2, 3, 5, 4, 6]);
        assert_eq!(numbers.len(), 20);
    }

    #[test]
    fn test_load_people_csv() {
        let file = write_csv("name,gender,age\nSara,FEMALE,20\nBob,MALE,20\n");

        let people = load_people_csv(file.path()).unwrap();

        assert_eq!(
            people,
            vec![Person::new("Sara", Gender::Female, 20), Person::new("Bob", Gender::Male, 20)]
        );
    }

    #[test]
    fn test_load_cities_csv() {
        let file = write_csv("name,population\nNice,942208\nVatican City,572\n");

        let cities = load_cities_csv(file.path()).unwrap();

        assert_eq!(cities, vec![City::new("Nice", 942_208), City::new("Vatican City", 572)]);
    }

    #[test]
    fn test_negative_population_rejected() {
        let file = write_csv("name,population\nNowhere,-5\n");

        let err = load_cities_csv(file.path()).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
    }

    #[test]
    fn test_unknown_gender_rejected() {
        let file = write_csv("name,gender,age\nAlex,OTHER,30\n");
        assert!(load_people_csv(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = load_people_csv(Path::new("/definitely/not/here.csv"));
        assert!(result.is_err());
    }
}
