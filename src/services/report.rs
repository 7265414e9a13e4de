use crate::domain::models::{BatchSummary, LookupRecord};
use anyhow::Context;
use std::io::Write;
use std::path::Path;

const RECORD_RULE: &str = "--------------------------------------------------";

pub fn batch_summary(results: Vec<LookupRecord>) -> BatchSummary {
    let success_count = results.iter().filter(|r| r.is_success()).count();
    BatchSummary {
        query_time: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        total_count: results.len(),
        success_count,
        results,
    }
}

fn render_text(records: &[LookupRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!("IP: {}\n", record.ip));
        if record.is_success() {
            out.push_str("result:\n");
            out.push_str(record.raw_result.as_deref().unwrap_or(""));
            out.push('\n');
        } else {
            out.push_str(&format!(
                "error: {}\n",
                record.error.as_deref().unwrap_or("unknown error")
            ));
        }
        out.push_str(RECORD_RULE);
        out.push('\n');
    }
    out
}

pub fn save_text(records: &[LookupRecord], path: &Path) -> anyhow::Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("cannot write results to {}", path.display()))?;
    file.write_all(render_text(records).as_bytes())?;
    Ok(())
}

pub fn save_json(summary: &BatchSummary, path: &Path) -> anyhow::Result<()> {
    let body = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, body)
        .with_context(|| format!("cannot write results to {}", path.display()))?;
    Ok(())
}
