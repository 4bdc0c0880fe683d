// 🏃 Kata Runner - one named kata, one fixture, one result line
// Each kata is independent; running one never touches another's data

use crate::config::{KataConfig, OutputFormat};
use crate::error::{KataError, Result};
use crate::fixtures::{
    find_first_numbers, load_cities_csv, load_people_csv, repeated_numbers, sample_cities, sample_numbers,
    sample_people,
};
use crate::order::is_in_order;
use crate::parallel::{sum_parallel, sum_parallel_with_workers, timed, SimulatedCost};
use crate::people::{group_by_name, render_groups, render_map, to_map_by_name_and_age, Person};
use crate::rounding::City;
use crate::sequence::{concat_digits, double_evens_and_sum, first_doubled_even_above, range, render_concat, sum};
use serde_json::json;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Input for the order-check kata
pub const ORDER_CHECK_INPUT: &str = "edabit";

// ============================================================================
// KATA
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kata {
    InOrder,
    Rounding,
    Range,
    Reduce,
    FindFirst,
    Infinite,
    GroupBy,
    ToMap,
    Parallel,
}

impl Kata {
    pub const ALL: [Kata; 9] = [
        Kata::InOrder,
        Kata::Rounding,
        Kata::Range,
        Kata::Reduce,
        Kata::FindFirst,
        Kata::Infinite,
        Kata::GroupBy,
        Kata::ToMap,
        Kata::Parallel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Kata::InOrder => "in-order",
            Kata::Rounding => "rounding",
            Kata::Range => "range",
            Kata::Reduce => "reduce",
            Kata::FindFirst => "find-first",
            Kata::Infinite => "infinite",
            Kata::GroupBy => "group-by",
            Kata::ToMap => "to-map",
            Kata::Parallel => "parallel",
        }
    }
}

impl fmt::Display for Kata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kata {
    type Err = KataError;

    fn from_str(s: &str) -> Result<Self> {
        Kata::ALL
            .iter()
            .copied()
            .find(|kata| kata.as_str() == s)
            .ok_or_else(|| KataError::UnknownKata(s.to_string()))
    }
}

// ============================================================================
// REPORT
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct KataReport {
    pub kata: Kata,

    /// Human-readable result, e.g. `false`, `Some(8)`, `{Bob=[...]}`
    pub text: String,

    /// Same result as a JSON value
    pub value: serde_json::Value,
}

impl KataReport {
    fn new(kata: Kata, text: String, value: serde_json::Value) -> Self {
        KataReport { kata, text, value }
    }

    /// The single output line for this kata
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.text.clone(),
            OutputFormat::Json => json!({ "kata": self.kata.as_str(), "result": self.value }).to_string(),
        }
    }
}

// ============================================================================
// INPUTS
// ============================================================================

/// Configured people CSV, or the sample people
fn people(config: &KataConfig) -> Result<Vec<Person>> {
    match &config.people_csv {
        Some(path) => Ok(load_people_csv(path)?),
        None => Ok(sample_people()),
    }
}

/// Configured cities CSV, or the sample cities
fn cities(config: &KataConfig) -> Result<Vec<City>> {
    match &config.cities_csv {
        Some(path) => Ok(load_cities_csv(path)?),
        None => Ok(sample_cities()),
    }
}

// ============================================================================
// RUN
// ============================================================================

pub fn run(kata: Kata, config: &KataConfig) -> Result<KataReport> {
    info!(kata = kata.as_str(), "running kata");

    let report = match kata {
        Kata::InOrder => {
            let sorted = is_in_order(ORDER_CHECK_INPUT);
            KataReport::new(kata, sorted.to_string(), json!(sorted))
        }
        Kata::Rounding => {
            let rounded = config.rounding.apply(&cities(config)?);
            let text: Vec<String> = rounded.iter().map(|c| c.to_string()).collect();
            KataReport::new(kata, format!("[{}]", text.join(", ")), json!(rounded))
        }
        Kata::Range => {
            let values: Vec<i64> = range(1, 10).collect();
            KataReport::new(kata, render_concat(values.iter().copied()), json!(values))
        }
        Kata::Reduce => {
            let numbers = repeated_numbers();
            let total = sum(&numbers);
            let digits = concat_digits(&numbers);
            let doubled = double_evens_and_sum(&numbers);
            KataReport::new(
                kata,
                format!("sum={} concat={} double_evens={}", total, digits, doubled),
                json!({ "sum": total, "concat": digits, "double_evens": doubled }),
            )
        }
        Kata::FindFirst => {
            let first = first_doubled_even_above(&find_first_numbers(), 3);
            let text = match first {
                Some(value) => format!("Some({})", value),
                None => "None".to_string(),
            };
            KataReport::new(kata, text, json!(first))
        }
        Kata::Infinite => {
            let settings = &config.generator;
            let total = settings.pipeline.compute_declarative(settings.start, settings.count)?;
            KataReport::new(kata, total.to_string(), json!(total))
        }
        Kata::GroupBy => {
            let groups = group_by_name(&people(config)?);
            KataReport::new(kata, render_groups(&groups), json!(groups))
        }
        Kata::ToMap => {
            let map = to_map_by_name_and_age(&people(config)?, config.duplicate_keys)?;
            KataReport::new(kata, render_map(&map), json!(map))
        }
        Kata::Parallel => {
            let workload = SimulatedCost::new(config.parallel.simulated_cost());
            let numbers = sample_numbers();

            let (total, _) = timed(kata.as_str(), || match config.parallel.workers {
                Some(workers) => sum_parallel_with_workers(&numbers, &workload, workers),
                None => sum_parallel(&numbers, &workload),
            });
            let total = total?;

            KataReport::new(kata, total.to_string(), json!(total))
        }
    };

    Ok(report)
}

/// Every kata in declaration order; stops at the first failure
pub fn run_all(config: &KataConfig) -> Result<Vec<KataReport>> {
    Kata::ALL.iter().map(|kata| run(*kata, config)).collect()
}

// ============================================================================
// TESTS
// ============================================================================
