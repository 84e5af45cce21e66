pub mod similarity;
pub mod stillness;

pub use stillness::StillnessDetector;

use std::time::{Duration, Instant};

use crate::config::CalibratorConfig;
use crate::feedback::Feedback;
use crate::pose::LandmarkSet;

/// ポーズキャリブレータ（フレームごとの単一エントリポイント）
///
/// 基準ポーズ未取得の間は静止検出（フェーズ1）、取得後は照合
/// （フェーズ2）を行う。フェーズ1→2の遷移は一度きりで、基準ポーズが
/// 上書きされることはない。
pub struct PoseCalibrator {
    reference_pose: Option<LandmarkSet>,
    stillness: StillnessDetector,
}

impl PoseCalibrator {
    pub fn new(hold_duration: Duration, still_threshold: f32) -> Self {
        Self {
            reference_pose: None,
            stillness: StillnessDetector::new(hold_duration, still_threshold),
        }
    }

    pub fn from_config(config: &CalibratorConfig) -> Self {
        Self::new(
            Duration::from_secs_f32(config.hold_duration),
            config.still_threshold,
        )
    }

    /// 取得済みの基準ポーズ
    pub fn reference_pose(&self) -> Option<&LandmarkSet> {
        self.reference_pose.as_ref()
    }

    /// 1フレーム評価（現在時刻で）
    pub fn evaluate(&mut self, detection: Option<&LandmarkSet>) -> Feedback {
        self.evaluate_at(detection, Instant::now())
    }

    /// 1フレーム評価（時刻注入版）
    ///
    /// `detection` がNoneのフレームは人物未検出として即座に返し、
    /// 静止タイマーも前フレーム記録も変更しない。
    pub fn evaluate_at(&mut self, detection: Option<&LandmarkSet>, now: Instant) -> Feedback {
        let current = match detection {
            Some(current) => current,
            None => return Feedback::no_person(),
        };

        if let Some(reference) = &self.reference_pose {
            return similarity::score(reference, current);
        }

        let feedback = self.stillness.evaluate_at(current, now);
        if feedback.captured {
            self.reference_pose = Some(current.clone());
        }
        feedback
    }
}
