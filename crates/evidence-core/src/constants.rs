/// Evidence engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Trait field holding the persona's goals.
pub const FIELD_GOALS: &str = "goals_and_motivations";

/// Trait field holding the persona's pain points.
pub const FIELD_CHALLENGES: &str = "challenges_and_frustrations";

/// Trait field holding verbatim quotes.
pub const FIELD_KEY_QUOTES: &str = "key_quotes";

/// The trait fields whose evidence is validated, in scan order.
/// Every other persona field passes through untouched.
pub const CORE_TRAIT_FIELDS: [&str; 3] = [FIELD_GOALS, FIELD_CHALLENGES, FIELD_KEY_QUOTES];

/// Persona key carrying demographic attributes.
pub const FIELD_DEMOGRAPHICS: &str = "demographics";

/// Separator placed between transcript segments when they are addressed as one buffer.
pub const SEGMENT_SEPARATOR: char = '\n';

/// Youngest age accepted when scanning source text for ages.
pub const MIN_PLAUSIBLE_AGE: u32 = 13;

/// Oldest age accepted when scanning source text for ages.
pub const MAX_PLAUSIBLE_AGE: u32 = 100;

/// Demographic values treated as "not provided".
pub const UNKNOWN_MARKERS: [&str; 5] = ["unknown", "n/a", "na", "not specified", "none"];
