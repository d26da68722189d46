// src/config/consts.rs

// Net config
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = concat!("volby_scrape/", env!("CARGO_PKG_VERSION"));

// Logging
pub const DEFAULT_LOG_FILTER: &str = "volby_scrape=warn";

// Index page markers
pub const TERRITORY_HEADING: &str = "h3";
pub const TERRITORY_PREFIXES: [&str; 2] = ["Kraj:", "Okres:"];
pub const CODE_CELL_CLASS: &str = "cislo";
pub const NAME_CELL_CLASS: &str = "overflow_name";

// Detail page markers (values of the `headers` attribute)
pub const REGISTERED_KEY: &str = "sa2";
pub const ENVELOPES_KEY: &str = "sa3";
pub const VALID_KEY: &str = "sa6";
pub const PARTY_VOTES_KEYS: [&str; 2] = ["sa2", "sb3"];

// Export
pub const DELIMITER: u8 = b';';
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
pub const FIXED_COLUMNS: [&str; 5] = ["code", "location", "registered", "envelopes", "valid"];
/// Substituted for any missing summary figure or party cell.
pub const FALLBACK: &str = "";
