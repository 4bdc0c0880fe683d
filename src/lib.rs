// Stream Katas - Core Library
// Small independent collection pipelines; the binary and tests both use these modules

pub mod error;
pub mod config;
pub mod logging;
pub mod fixtures;
pub mod order;      // Is the string in order?
pub mod rounding;   // Rounding in millions
pub mod sequence;   // Ranges, reductions, find-first
pub mod generator;  // Unbounded lazy generator
pub mod people;     // Group-by and to-map
pub mod parallel;   // Parallel map + reduce
pub mod runner;

// Re-export commonly used types
pub use error::{KataError, Result};
pub use config::{KataConfig, GeneratorSettings, ParallelSettings, OutputFormat, CONFIG_ENV_VAR};
pub use fixtures::{
    sample_people, sample_cities, sample_numbers, repeated_numbers, find_first_numbers,
    load_people_csv, load_cities_csv,
};
pub use order::{is_in_order, is_in_order_pairwise};
pub use rounding::{City, RoundingRule, round_population, millions_rounding, round_in_place};
pub use sequence::{
    range, render_concat, sum, concat_digits, double_evens_and_sum,
    first_doubled_even_above, first_doubled_even_above_imperative, first_doubled_even_above_traced,
};
pub use generator::{Ascending, GeneratorPipeline, compute};
pub use people::{
    Gender, Person, DuplicateKeyPolicy,
    group_by, group_by_name, to_map, to_map_by_name_and_age, render_groups, render_map,
};
pub use parallel::{
    Workload, Doubling, SimulatedCost,
    sum_sequential, sum_parallel, sum_parallel_with_workers, timed,
};
pub use runner::{Kata, KataReport, run, run_all};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
