// 🏙️ Rounding in Millions - city populations to the nearest million
// Small cities (below the cutoff) round down to zero

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

// ============================================================================
// CITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,

    /// Unsigned: a negative population cannot be constructed or loaded
    pub population: u64,
}

impl City {
    pub fn new(name: &str, population: u64) -> Self {
        City {
            name: name.to_string(),
            population,
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.name, self.population)
    }
}

// ============================================================================
// ROUNDING RULE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundingRule {
    /// Populations strictly below this become 0 (default: 500,000)
    pub cutoff: u64,

    /// Rounding granularity (default: 1,000,000)
    pub unit: u64,
}

impl RoundingRule {
    /// Rule with the default cutoff and unit
    pub fn new() -> Self {
        RoundingRule {
            cutoff: 500_000,
            unit: 1_000_000,
        }
    }

    /// Round one population value.
    ///
    /// Ties round half-up: 1,500,000 becomes 2,000,000. Integer arithmetic
    /// only, saturating at `u64::MAX`.
    pub fn round(&self, population: u64) -> u64 {
        if population < self.cutoff || self.unit == 0 {
            return 0;
        }

        let half = self.unit / 2;
        (population.saturating_add(half) / self.unit).saturating_mul(self.unit)
    }

    /// New list, same length and order, populations rounded
    pub fn apply(&self, cities: &[City]) -> Vec<City> {
        debug!(count = cities.len(), cutoff = self.cutoff, unit = self.unit, "rounding populations");

        cities
            .iter()
            .map(|city| City {
                name: city.name.clone(),
                population: self.round(city.population),
            })
            .collect()
    }

    /// Same per-position result as [`RoundingRule::apply`], written back into `cities`
    pub fn apply_in_place(&self, cities: &mut [City]) {
        for city in cities.iter_mut() {
            city.population = self.round(city.population);
        }
    }
}

impl Default for RoundingRule {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// DEFAULT-RULE SHORTCUTS
// ============================================================================

pub fn round_population(population: u64) -> u64 {
    RoundingRule::new().round(population)
}

pub fn millions_rounding(cities: &[City]) -> Vec<City> {
    RoundingRule::new().apply(cities)
}

pub fn round_in_place(cities: &mut [City]) {
    RoundingRule::new().apply_in_place(cities)
}

// ============================================================================
// TESTS
// ============================================================================
