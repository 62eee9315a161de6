//! JSON Output

use crate::report::RunRecord;

/// Generate a single compact JSON line for a run
pub fn generate_json_record(record: &RunRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string(record)
}
