use std::{
    env,
    fmt::{self, Display, Formatter},
    sync::OnceLock,
};

use thiserror::Error;
use tracing::info;

const NUMS_VAR: &str = "PAIR_SUM_NUMS";
const TARGET_VAR: &str = "PAIR_SUM_TARGET";

const DEFAULT_NUMS: [i32; 4] = [2, 7, 11, 15];
const DEFAULT_TARGET: i32 = 9;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} contains an invalid integer: {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} is not valid unicode")]
    NotUnicode { var: &'static str },
    #[error("failed to load .env: {0}")]
    DotEnv(String),
}

type Error = ConfigError;
type Result<T> = std::result::Result<T, Error>;

/// Input for the demo binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    nums: Vec<i32>,
    target: i32,
}

impl Display for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "nums={:?} target={}", self.nums, self.target)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nums: DEFAULT_NUMS.to_vec(),
            target: DEFAULT_TARGET,
        }
    }
}

/// Loads the config from the environment on first call.
/// A `.env` file in the working directory is honored if present.
pub fn get() -> Result<&'static Config> {
    static CELL: OnceLock<Config> = OnceLock::new();

    if let Some(config) = CELL.get() {
        return Ok(config);
    }

    load_dotenv(dotenv::dotenv())?;

    let nums = read_var(NUMS_VAR)?;
    let target = read_var(TARGET_VAR)?;
    let config = Config::from_vars(nums.as_deref(), target.as_deref())?;
    let config = CELL.get_or_init(|| config);

    info!(%config, "initialized config");

    Ok(config)
}

/// A missing `.env` is fine, a malformed one is not.
fn load_dotenv<T>(result: dotenv::Result<T>) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(Error::DotEnv(e.to_string())),
    }
}

fn read_var(var: &'static str) -> Result<Option<String>> {
    match env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(Error::NotUnicode { var }),
    }
}

impl Config {
    /// Builds a config from raw variable values, falling back to the
    /// sample input for whatever is unset.
    pub fn from_vars(nums: Option<&str>, target: Option<&str>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(nums) = nums {
            config.nums = parse_nums(nums)?;
        }

        if let Some(target) = target {
            config.target = parse_int(TARGET_VAR, target)?;
        }

        Ok(config)
    }

    pub fn nums(&self) -> &[i32] {
        &self.nums
    }

    pub fn target(&self) -> i32 {
        self.target
    }
}

fn parse_nums(value: &str) -> Result<Vec<i32>> {
    if value.trim().is_empty() {
        return Ok(Vec::new());
    }

    value.split(',').map(|n| parse_int(NUMS_VAR, n)).collect()
}

fn parse_int(var: &'static str, value: &str) -> Result<i32> {
    value.trim().parse().map_err(|_| Error::InvalidNumber {
        var,
        value: value.to_owned(),
    })
}
