//! Golden datasets for evidence validation.
//!
//! Each case under `golden/validation/` is a JSON file holding the raw
//! extraction output and sources that go into the engine, plus the outcome
//! the engine is expected to report:
//!
//! ```json
//! { "description": "...",
//!   "input": { "persona": {...}, "transcript": [...], "source_text": "..." },
//!   "expected": { "status": "PASS", "counts": {...}, ... } }
//! ```

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Subdirectory holding the validation golden set.
pub const VALIDATION_CASES: &str = "golden/validation";

/// Raw engine inputs. Kept as JSON so the engine's own ingestion is exercised.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenInput {
    pub persona: Value,
    #[serde(default)]
    pub transcript: Option<Value>,
    #[serde(default)]
    pub source_text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ExpectedCounts {
    pub verbatim: usize,
    pub normalized: usize,
    pub no_match: usize,
}

/// Expected report, with detector findings given as counts.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpectation {
    pub status: String,
    pub counts: ExpectedCounts,
    pub evidence_match_score: f64,
    pub cross_trait_reuse: usize,
    pub speaker_mismatches: usize,
    pub contamination: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenCase {
    pub description: String,
    pub input: GoldenInput,
    pub expected: GoldenExpectation,
}

/// The directory this crate's fixtures live in.
///
/// Resolved from the calling crate's manifest directory: either this crate
/// itself or a sibling under the same `crates/` parent.
pub fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    Path::new(&manifest_dir)
        .ancestors()
        .map(|dir| {
            if dir.ends_with("test-fixtures") {
                dir.to_path_buf()
            } else {
                dir.join("test-fixtures")
            }
        })
        .find(|candidate| candidate.join("golden").is_dir())
        .unwrap_or_else(|| panic!("no test-fixtures/golden above {manifest_dir}"))
}

/// Deserialize one fixture file, panicking with its path on failure.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("cannot parse fixture {}: {e}", path.display()))
}

pub fn load_fixture_value(relative_path: &str) -> Value {
    load_fixture(relative_path)
}

/// Every JSON file in a fixture subdirectory, as paths relative to the
/// fixtures root, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<String> {
    let root = fixtures_root();
    let Ok(entries) = std::fs::read_dir(root.join(subdir)) else {
        return Vec::new();
    };
    let mut files: Vec<String> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .filter_map(|path| {
            path.strip_prefix(&root)
                .ok()
                .map(|rel| rel.to_string_lossy().into_owned())
        })
        .collect();
    files.sort();
    files
}

/// Load every validation golden case as `(relative path, case)`.
pub fn load_validation_cases() -> Vec<(String, GoldenCase)> {
    list_fixtures(VALIDATION_CASES)
        .into_iter()
        .map(|path| {
            let case = load_fixture(&path);
            (path, case)
        })
        .collect()
}
