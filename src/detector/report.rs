//! Serializable run summary: input size, parameters, label counts and
//! per-stage timings.
use super::params::EdgeParams;
use serde::Serialize;

/// Elapsed time of one pipeline stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Total latency plus the individual stages in execution order.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming {
            label: label.into(),
            elapsed_ms,
        });
    }

    /// Look up a stage by label.
    pub fn stage_ms(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeReport {
    pub width: usize,
    pub height: usize,
    pub params: EdgeParams,
    /// Pixels labelled strong by the double threshold.
    pub strong_pixels: usize,
    /// Pixels labelled weak by the double threshold.
    pub weak_pixels: usize,
    /// Pixels set in the final edge map.
    pub edge_pixels: usize,
    /// The gradient magnitude had no dynamic range and was zeroed.
    pub degenerate: bool,
    pub timings: TimingBreakdown,
}
