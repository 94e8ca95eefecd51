use crate::types::ManualPoint;
use crate::GridParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Where to write the JSON report; stdout when absent.
    pub json_out: Option<PathBuf>,
    /// Directory for intermediate planes and signals.
    pub debug_dir: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    /// Calibration points in input pixels, used when detection fails.
    #[serde(default)]
    pub manual_points: Vec<ManualPoint>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub grid_params: GridParams,
}

impl RuntimeConfig {
    pub fn manual_points(&self) -> Option<&[ManualPoint]> {
        (!self.manual_points.is_empty()).then_some(self.manual_points.as_slice())
    }
}

pub fn parse_config(contents: &str) -> Result<RuntimeConfig, String> {
    serde_json::from_str(contents).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&contents).map_err(|e| format!("{e} ({})", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(r#"{ "input_path": "map.png" }"#).unwrap();
        assert_eq!(cfg.input_path, PathBuf::from("map.png"));
        assert!(cfg.manual_points().is_none());
        assert!(cfg.output.json_out.is_none());
        assert_eq!(cfg.grid_params, GridParams::default());
    }

    #[test]
    fn full_config_overrides_defaults() {
        let cfg = parse_config(
            r#"{
                "input_path": "map.webp",
                "manual_points": [{ "x": 10, "y": 10 }, { "x": 110, "y": 110 }],
                "output": { "json_out": "out/report.json", "debug_dir": "out/debug" },
                "grid_params": { "max_processing_dim": 1024, "peak_candidates": 3 }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.manual_points().map(<[ManualPoint]>::len), Some(2));
        assert_eq!(cfg.grid_params.max_processing_dim, 1024);
        assert_eq!(cfg.grid_params.peak_candidates, 3);
        assert_eq!(cfg.grid_params.min_lag_floor, 8);
        assert_eq!(cfg.output.debug_dir, Some(PathBuf::from("out/debug")));
    }

    #[test]
    fn missing_input_is_an_error() {
        let err = parse_config("{}").unwrap_err();
        assert!(err.contains("input_path"), "{err}");
    }
}
