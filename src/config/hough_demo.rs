use crate::detector::HoughParams;
use crate::types::CanvasSize;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct HoughDemoConfig {
    /// Stroke JSON: `[{"x": .., "y": ..}, ..]`.
    pub input: PathBuf,
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub mode: VoteMode,
    #[serde(default)]
    pub hough: HoughParams,
    pub output: HoughDemoOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct CanvasConfig {
    pub width: usize,
    pub height: usize,
}

impl CanvasConfig {
    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.width, self.height)
    }
}

/// How the stroke is turned into votes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteMode {
    /// Only the captured points vote.
    #[default]
    Points,
    /// The stroke is drawn as a polyline and every drawn pixel votes.
    Raster,
}

#[derive(Debug, Deserialize)]
pub struct HoughDemoOutputConfig {
    pub result_json: PathBuf,
    #[serde(default)]
    pub accumulator_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<HoughDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(data: &str) -> Result<HoughDemoConfig, serde_json::Error> {
    serde_json::from_str(data)
}
