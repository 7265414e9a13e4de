use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupStatus {
    Success,
    Error,
}

/// Outcome of one lookup. Serializes to the per-IP JSON record: error
/// records carry only `ip`, `status` and `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupRecord {
    pub ip: String,
    pub status: LookupStatus,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub location_data: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LookupRecord {
    pub fn success(ip: &str, location_data: BTreeMap<String, String>, raw_result: String) -> Self {
        Self {
            ip: ip.to_string(),
            status: LookupStatus::Success,
            location_data,
            raw_result: Some(raw_result),
            error: None,
        }
    }

    pub fn failure(ip: &str, error: impl Into<String>) -> Self {
        Self {
            ip: ip.to_string(),
            status: LookupStatus::Error,
            location_data: BTreeMap::new(),
            raw_result: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == LookupStatus::Success
    }
}

/// `--local` result. Same shape as `LookupRecord` but the address is
/// reported under `local_ip`.
#[derive(Debug, Serialize)]
pub struct LocalReport {
    pub local_ip: String,
    pub status: LookupStatus,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub location_data: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<LookupRecord> for LocalReport {
    fn from(r: LookupRecord) -> Self {
        Self {
            local_ip: r.ip,
            status: r.status,
            location_data: r.location_data,
            raw_result: r.raw_result,
            error: r.error,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchSummary {
    pub query_time: String,
    pub total_count: usize,
    pub success_count: usize,
    pub results: Vec<LookupRecord>,
}
