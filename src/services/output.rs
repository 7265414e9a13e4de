use crate::domain::models::LookupRecord;
use serde::Serialize;

pub fn print_json<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Renders a lookup outcome for the plain-text modes.
pub fn print_record_text(record: &LookupRecord) {
    if record.is_success() {
        println!("IP location result:");
        println!("{}", record.raw_result.as_deref().unwrap_or(""));
    } else {
        println!(
            "lookup failed: {}",
            record.error.as_deref().unwrap_or("unknown error")
        );
    }
}

/// Top-level error rendering used by `main`; keeps stdout valid JSON
/// when `--json` is set.
pub fn print_error(json: bool, message: &str) {
    if json {
        let out = serde_json::json!({ "status": "error", "error": message });
        println!("{out:#}");
    } else {
        eprintln!("{message}");
    }
}
