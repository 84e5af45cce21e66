use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub calibrator: CalibratorConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalibratorConfig {
    /// キャプチャに必要な静止時間（秒）
    #[serde(default = "default_hold_duration")]
    pub hold_duration: f32,
    /// 静止とみなすフレーム間平均変位の上限（正規化座標）
    #[serde(default = "default_still_threshold")]
    pub still_threshold: f32,
    /// ランドマーク検出側に渡す検出信頼度の下限（コアでは未使用）
    #[serde(default = "default_detection_confidence")]
    pub detection_confidence: f32,
}

fn default_hold_duration() -> f32 { 2.0 }
fn default_still_threshold() -> f32 { 0.005 }
fn default_detection_confidence() -> f32 { 0.7 }

impl Default for CalibratorConfig {
    fn default() -> Self {
        Self {
            hold_duration: default_hold_duration(),
            still_threshold: default_still_threshold(),
            detection_confidence: default_detection_confidence(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// ファイルが無ければデフォルト設定
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CalibratorConfig::default();
        assert_eq!(config.hold_duration, 2.0);
        assert_eq!(config.still_threshold, 0.005);
        assert_eq!(config.detection_confidence, 0.7);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [calibrator]
            hold_duration = 3.5
            "#,
        )
        .unwrap();
        assert_eq!(config.calibrator.hold_duration, 3.5);
        // 省略フィールドはデフォルト
        assert_eq!(config.calibrator.still_threshold, 0.005);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.calibrator.hold_duration, 2.0);
    }
}
