pub mod config;
pub mod pair_sum;
pub mod telemetry;

pub use pair_sum::{find_all_pairs, find_pair_with_sum, PairSumError};
