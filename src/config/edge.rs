//! Config of the `detect_edges` tool.
//!
//! ```json
//! {
//!   "input": "board.png",
//!   "edge": { "lowThreshold": 20, "highThreshold": 100, "sigma": 1.4 },
//!   "output": {
//!     "edgesImage": "out/edges.png",
//!     "magnitudeImage": "out/magnitude.png",
//!     "reportJson": "out/report.json"
//!   }
//! }
//! ```
use crate::detector::EdgeParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub edge: EdgeParams,
    pub output: EdgeOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeOutputConfig {
    /// Binary edge map (PNG).
    pub edges_image: PathBuf,
    /// Rescaled gradient magnitude (PNG).
    #[serde(default)]
    pub magnitude_image: Option<PathBuf>,
    /// Three-level label grid before linking (PNG).
    #[serde(default)]
    pub labels_image: Option<PathBuf>,
    /// Run summary with counts and timings.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn parse_config(data: &str) -> Result<EdgeToolConfig, String> {
    let config: EdgeToolConfig =
        serde_json::from_str(data).map_err(|e| format!("Failed to parse config: {e}"))?;
    config
        .edge
        .validate()
        .map_err(|e| format!("Invalid edge parameters: {e}"))?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("{}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::GradientKernel;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(r#"{"input": "a.png", "output": {"edgesImage": "e.png"}}"#).unwrap();
        assert_eq!(cfg.input, PathBuf::from("a.png"));
        assert_eq!(cfg.edge, EdgeParams::default());
        assert!(cfg.output.report_json.is_none());
    }

    #[test]
    fn edge_section_overrides_fields() {
        let cfg = parse_config(
            r#"{
                "input": "a.png",
                "edge": {"lowThreshold": 10, "highThreshold": 40, "blurSize": 5, "gradientKernel": "scharr"},
                "output": {"edgesImage": "e.png", "reportJson": "r.json"}
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.edge.low_threshold, 10.0);
        assert_eq!(cfg.edge.blur_size, 5);
        assert_eq!(cfg.edge.gradient_kernel, GradientKernel::Scharr);
        assert_eq!(cfg.output.report_json, Some(PathBuf::from("r.json")));
    }

    #[test]
    fn invalid_parameters_are_reported() {
        let err = parse_config(
            r#"{"input": "a.png", "edge": {"blurSize": 4}, "output": {"edgesImage": "e.png"}}"#,
        )
        .unwrap_err();
        assert!(err.contains("blur size"), "{err}");
    }
}
