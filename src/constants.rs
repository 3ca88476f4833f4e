//! Application constants
//!
//! Centralized location for environment variable names, header values and
//! user-facing messages.

/// Application version, printed by `-V`
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent sent with every request
pub const USER_AGENT: &str = concat!("eh/", env!("CARGO_PKG_VERSION"));

/// Base endpoint URI
pub const ENV_URI: &str = "EHURI";

/// Combined `user:secret` credentials
pub const ENV_AUTH: &str = "EHAUTH";

/// Log filter (EnvFilter syntax)
pub const ENV_LOG: &str = "EH_LOG";

pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const CONTENT_TYPE_TEXT: &str = "text/plain";
pub const CONTENT_TYPE_BINARY: &str = "application/octet-stream";
pub const ACCEPT_JSON: &str = "application/json";

pub const MSG_MISSING_URI: &str =
    "Please provide the <API endpoint URI> as an argument or EHURI environment variable";
pub const MSG_MISSING_AUTH: &str =
    "Please provide <user uuid>:<secret API key> as an argument or EHAUTH environment variable";
pub const MSG_MALFORMED_AUTH: &str = "Malformed ehauth, please review it";
