// 👥 People Pipelines - group-by and to-map over a fixed list of records
//
// Keys are derived from record fields. Groups keep the input order of their
// members; to-map refuses (or overwrites) colliding keys depending on policy.

use crate::error::{KataError, Result};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

// ============================================================================
// GENDER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "FEMALE",
            Gender::Male => "MALE",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PERSON
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub gender: Gender,
    pub age: u32,
}

impl Person {
    pub fn new(name: &str, gender: Gender, age: u32) -> Self {
        Person {
            name: name.to_string(),
            gender,
            age,
        }
    }

    /// `name-age`, e.g. `Sara-20`
    pub fn composite_key(&self) -> String {
        format!("{}-{}", self.name, self.age)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}}}", self.name, self.gender, self.age)
    }
}

// ============================================================================
// GROUP BY
// ============================================================================

/// Partition `records` by `key_fn`.
///
/// Each group lists its records in the order they appear in the input.
/// Keys iterate in sorted order.
pub fn group_by<T, K, F>(records: &[T], key_fn: F) -> BTreeMap<K, Vec<T>>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    records.iter().fold(BTreeMap::new(), |mut groups, record| {
        groups
            .entry(key_fn(record))
            .or_insert_with(Vec::new)
            .push(record.clone());
        groups
    })
}

pub fn group_by_name(people: &[Person]) -> BTreeMap<String, Vec<Person>> {
    let groups = group_by(people, |p| p.name.clone());
    debug!(people = people.len(), groups = groups.len(), "grouped by name");
    groups
}

// ============================================================================
// TO MAP
// ============================================================================

/// What to do when two records produce the same key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeyPolicy {
    /// Fail with `KataError::DuplicateKey`
    #[default]
    Reject,

    /// Later record replaces the earlier one
    KeepLast,
}

/// Key each record by `key_fn`
pub fn to_map<T, F>(records: &[T], key_fn: F, policy: DuplicateKeyPolicy) -> Result<BTreeMap<String, T>>
where
    T: Clone,
    F: Fn(&T) -> String,
{
    let mut map = BTreeMap::new();

    for record in records {
        match map.entry(key_fn(record)) {
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
            }
            Entry::Occupied(mut slot) => match policy {
                DuplicateKeyPolicy::Reject => {
                    return Err(KataError::DuplicateKey {
                        key: slot.key().clone(),
                    });
                }
                DuplicateKeyPolicy::KeepLast => {
                    warn!(key = %slot.key(), "duplicate key, keeping last record");
                    slot.insert(record.clone());
                }
            },
        }
    }

    Ok(map)
}

pub fn to_map_by_name_and_age(
    people: &[Person],
    policy: DuplicateKeyPolicy,
) -> Result<BTreeMap<String, Person>> {
    to_map(people, Person::composite_key, policy)
}

// ============================================================================
// RENDERING
// ============================================================================

/// `{Bob=[{Bob, MALE, 20}], Jack=[{Jack, MALE, 2}, {Jack, MALE, 72}]}`
pub fn render_groups<T: fmt::Display>(groups: &BTreeMap<String, Vec<T>>) -> String {
    let entries: Vec<String> = groups
        .iter()
        .map(|(key, members)| {
            let members: Vec<String> = members.iter().map(|m| m.to_string()).collect();
            format!("{}=[{}]", key, members.join(", "))
        })
        .collect();

    format!("{{{}}}", entries.join(", "))
}

/// `{Bob-20={Bob, MALE, 20}, Jack-2={Jack, MALE, 2}}`
pub fn render_map<T: fmt::Display>(map: &BTreeMap<String, T>) -> String {
    let entries: Vec<String> = map
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();

    format!("{{{}}}", entries.join(", "))
}

// ============================================================================
// TESTS
// ============================================================================
