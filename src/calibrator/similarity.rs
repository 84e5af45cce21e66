use crate::feedback::{Feedback, FeedbackColor};
use crate::pose::LandmarkSet;

/// 平均変位 → スコア換算係数（正規化座標0.1のずれでスコア0）
const DISTANCE_GAIN: f32 = 1000.0;
/// このスコアを超えたら一致
const MATCH_SCORE: u8 = 85;
/// このスコアを超えたら軽度のずれ、以下は大きなずれ
const WARNING_SCORE: u8 = 65;

/// 現在ポーズを基準ポーズと照合する（フェーズ2）
///
/// score = max(0, 100 - dist * 1000) の整数切り捨て。
/// dist >= 0 なので上限クランプは不要。
pub fn score(reference: &LandmarkSet, current: &LandmarkSet) -> Feedback {
    let dist = reference.mean_displacement(current);
    let score = (100.0 - dist * DISTANCE_GAIN).max(0.0) as u8;

    if score > MATCH_SCORE {
        Feedback::matched(score)
    } else if score > WARNING_SCORE {
        Feedback::off_pose(score, FeedbackColor::Warning)
    } else {
        Feedback::off_pose(score, FeedbackColor::Alert)
    }
}
