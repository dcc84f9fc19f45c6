// src/config/consts.rs

// Net config
pub const API_BASE: &str = "https://api.propublica.org/congress/v1";
pub const DEFAULT_CONGRESS: u32 = 117;
pub const STATES_URL: &str = "https://gist.githubusercontent.com/mshafrir/2646763/raw/8b0dbb93521f5d6889502305335104218454c2bf/states_hash.json";
pub const API_KEY_HEADER: &str = "X-API-Key";
pub const API_KEY_ENV: &str = "CONGRESS_API_KEY";
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("congress_stats/", env!("CARGO_PKG_VERSION"));

// Local cache
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Config file (key=value, optional)
pub const CONFIG_FILE: &str = "congress_stats.cfg";

// Statistics
pub const PERCENTILE_FRACTION: f64 = 0.1;
pub const DISPLAY_LIMIT: usize = 10;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
