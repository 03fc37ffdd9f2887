//! Application-wide constants

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_RUST_LOG: &str = "info";

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// CODEFORCES API
// =============================================================================

/// Public Codeforces API base URL
pub const DEFAULT_CODEFORCES_API_URL: &str = "https://codeforces.com/api/";

/// Request timeout for Codeforces API calls
pub const DEFAULT_CODEFORCES_TIMEOUT_SECONDS: u64 = 30;

/// `status` value of a successful API envelope
pub const CODEFORCES_STATUS_OK: &str = "OK";

/// Verdict of an accepted submission
pub const VERDICT_ACCEPTED: &str = "OK";

/// Label for submissions the judge has not produced a verdict for
pub const VERDICT_UNKNOWN: &str = "Unknown";

// =============================================================================
// QUERY DEFAULTS
// =============================================================================

/// Default `count` for `problemset.recentStatus`
pub const DEFAULT_RECENT_STATUS_COUNT: u32 = 30;

/// Default `count` for contest standings
pub const DEFAULT_STANDINGS_COUNT: u32 = 20;

/// Standings rows fetched for the contest detail view
pub const DETAIL_STANDINGS_COUNT: u32 = 50;

/// Default `count` for user and contest submission lists
pub const DEFAULT_STATUS_COUNT: u32 = 10;

/// Submissions fetched to build profile statistics
pub const PROFILE_SUBMISSIONS_COUNT: u32 = 100;

/// Default `maxCount` for recent actions
pub const DEFAULT_RECENT_ACTIONS_COUNT: u32 = 100;

/// Upper bound accepted for any `count`-style query parameter
pub const MAX_QUERY_COUNT: u32 = 1000;

/// Verdicts listed in the profile statistics
pub const TOP_VERDICTS: usize = 5;

/// Editor sessions returned by the recent list
pub const RECENT_SESSIONS_LIMIT: i64 = 10;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// VALIDATION
// =============================================================================

/// Handle length bounds
pub const MIN_HANDLE_LENGTH: usize = 3;
pub const MAX_HANDLE_LENGTH: usize = 24;

/// Maximum problem id length
pub const MAX_PROBLEM_ID_LENGTH: usize = 32;

/// Maximum note length in characters
pub const MAX_NOTE_LENGTH: u64 = 10_000;

/// Maximum source code size in bytes (64 KB)
pub const MAX_SOURCE_CODE_SIZE: usize = 64 * 1024;

/// Maximum custom test input/output size in bytes (1 MB)
pub const MAX_TEST_DATA_SIZE: usize = 1024 * 1024;

// =============================================================================
// EXECUTION PLACEHOLDER
// =============================================================================

pub const EXECUTION_UNAVAILABLE: &str = "Execution unavailable: no backend configured.";

pub const COMMUNITY_TESTS_UNAVAILABLE: &str = "Community tests unavailable: no backend configured.";
