use anyhow::Result;
use std::io::{self, BufRead};

use neutral_pose::calibrator::PoseCalibrator;
use neutral_pose::config::Config;
use neutral_pose::pose::LandmarkSet;

const CONFIG_PATH: &str = "config.toml";

fn main() -> Result<()> {
    let config = Config::load_or_default(CONFIG_PATH);

    println!("=== Neutral Pose - Frame Replay ===");
    println!("hold_duration: {}s", config.calibrator.hold_duration);
    println!("still_threshold: {}", config.calibrator.still_threshold);
    println!();
    println!("標準入力から1行1フレームを読み込みます:");
    println!("  [[x, y], ...]  - 33点の正規化ランドマーク");
    println!("  null           - 人物未検出フレーム");
    println!();

    let mut calibrator = PoseCalibrator::from_config(&config.calibrator);
    let stdin = io::stdin();

    for (frame, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        let detection = parse_frame(line.trim())?;

        let feedback = calibrator.evaluate(detection.as_ref());
        println!("frame {:>4}: [{:>3}] {}", frame, feedback.score, feedback.message);

        if feedback.captured {
            println!("基準ポーズを取得しました");
        }
    }

    Ok(())
}

/// 1行をフレームにパースする
///
/// "null" / 空行は未検出フレーム。それ以外は33点の (x, y) 配列。
fn parse_frame(line: &str) -> Result<Option<LandmarkSet>> {
    if line.is_empty() || line == "null" {
        return Ok(None);
    }

    let points: Vec<[f32; 2]> = serde_json::from_str(line)?;
    match LandmarkSet::from_points(&points) {
        Some(set) => Ok(Some(set)),
        None => anyhow::bail!("expected 33 landmarks, got {}", points.len()),
    }
}
