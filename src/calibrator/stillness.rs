use std::time::{Duration, Instant};

use crate::feedback::Feedback;
use crate::pose::LandmarkSet;

/// 静止検出器（フェーズ1: 基準ポーズの自動キャプチャ）
///
/// 連続フレーム間の平均ランドマーク変位が閾値未満のまま
/// `hold_duration` 経過したら、そのフレームを基準ポーズとして確定する。
/// 経過時間はフレーム数ではなく壁時計で測る。
pub struct StillnessDetector {
    hold_duration: Duration,
    still_threshold: f32,
    last_pose: Option<LandmarkSet>,
    still_start: Option<Instant>,
}

impl StillnessDetector {
    pub fn new(hold_duration: Duration, still_threshold: f32) -> Self {
        Self {
            hold_duration,
            still_threshold,
            last_pose: None,
            still_start: None,
        }
    }

    /// 1フレーム評価
    ///
    /// 戻り値の `captured` がtrueのとき、呼び出し側は `current` を
    /// 基準ポーズとして確定する。
    pub fn evaluate_at(&mut self, current: &LandmarkSet, now: Instant) -> Feedback {
        let last = match &self.last_pose {
            Some(last) => last,
            None => {
                // 初回フレーム: 比較対象がないので記録だけ行い、
                // ここから静止候補区間を開始する
                self.last_pose = Some(current.clone());
                self.still_start = Some(now);
                return Feedback::stay_still();
            }
        };

        let movement = last.mean_displacement(current);

        if movement < self.still_threshold {
            let start = *self.still_start.get_or_insert(now);
            let elapsed = now.duration_since(start);

            if elapsed >= self.hold_duration {
                return Feedback::captured();
            }

            // 切り捨て: スコア100はキャプチャフレームでのみ出す
            let progress = elapsed.as_secs_f32() / self.hold_duration.as_secs_f32();
            let remaining = (self.hold_duration.as_secs_f32() - elapsed.as_secs_f32()).max(0.0);
            self.last_pose = Some(current.clone());
            return Feedback::holding((progress * 100.0) as u8, remaining);
        }

        // 動きすぎ: タイマーをリセットし、次の静止区間をゼロから数え直す
        self.still_start = None;
        self.last_pose = Some(current.clone());
        Feedback::stay_still()
    }

    #[cfg(test)]
    fn still_start(&self) -> Option<Instant> {
        self.still_start
    }
}
