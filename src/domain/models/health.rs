use serde::{Deserialize, Serialize};

/// Backend health snapshot
/// `/api/v1/health/status` omits service and version, so both default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub uptime_seconds: Option<f64>,
    #[serde(default)]
    pub system: Option<SystemResources>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemResources {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub disk_percent: f64,
}

impl HealthStatus {
    /// Whole minutes of uptime, hidden when the backend reports none
    pub fn uptime_minutes(&self) -> Option<u64> {
        self.uptime_seconds
            .filter(|seconds| *seconds > 0.0)
            .map(|seconds| (seconds / 60.0).floor() as u64)
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}
