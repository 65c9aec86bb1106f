// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.practo.com/";
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.114 Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Pagination
pub const FIRST_PAGE: u32 = 1;
pub const MAX_PAGES: u32 = 100;

// Sentinels
pub const FIELD_MISSING: &str = "N/A";
pub const COUNT_MISSING: &str = "No data found";

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
pub const LOG_ENV: &str = "PRACTO_LOG";
