// Single source of truth for all default values.

// --- Matching ---
// Neither 0.25 cutoff has been calibrated against labelled data.
pub const DEFAULT_FUZZY_OVERLAP_THRESHOLD: f64 = 0.25;
pub const DEFAULT_MIN_FUZZY_TOKENS: usize = 2;

// --- Scoring ---
pub const DEFAULT_HARD_FAIL_NO_MATCH_RATIO: f64 = 0.25;
pub const DEFAULT_VERBATIM_WEIGHT: f64 = 1.0;
pub const DEFAULT_NORMALIZED_WEIGHT: f64 = 0.6;
pub const DEFAULT_NO_MATCH_WEIGHT: f64 = 0.0;
pub const DEFAULT_SCORE_PRECISION: u32 = 3;

// --- Contamination ---
pub const DEFAULT_METADATA_LABELS: [&str; 12] = [
    "category",
    "role",
    "age",
    "gender",
    "location",
    "department",
    "interviewee",
    "interviewer",
    "participant",
    "respondent",
    "moderator",
    "researcher",
];
pub const DEFAULT_MAX_CONTAMINATION_EXAMPLES: usize = 5;
pub const DEFAULT_EXAMPLE_MAX_CHARS: usize = 160;

// --- Filter ---
pub const DEFAULT_RESEARCHER_LABELS: [&str; 3] = ["researcher", "interviewer", "moderator"];
pub const DEFAULT_AGE_BACKFILL_ENABLED: bool = true;
pub const DEFAULT_AGE_WINDOW: u32 = 2;
pub const DEFAULT_AGE_SPREAD_TOLERANCE: u32 = 5;
pub const DEFAULT_MIN_NEAR_VERBATIM_TOKENS: usize = 2;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
