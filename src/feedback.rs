//! 描画側へ返すフレームごとのフィードバック
//!
//! コアは抽象的な色タグだけを割り当てる。`to_bgr` はオーバーレイ用の
//! デフォルトマッピング。

/// フィードバック色タグ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackColor {
    /// 静止待ち（基準ポーズ未取得）
    Neutral,
    /// 静止ホールド中
    Pending,
    /// キャプチャ成功 / ポーズ一致
    Success,
    /// 基準ポーズから軽度のずれ
    Warning,
    /// 基準ポーズから大きなずれ
    Alert,
    /// 人物未検出
    Error,
}

impl FeedbackColor {
    /// オーバーレイ描画用のBGR値
    pub fn to_bgr(&self) -> (u8, u8, u8) {
        match self {
            Self::Neutral => (255, 255, 255),
            Self::Pending => (0, 255, 255),
            Self::Success => (0, 255, 0),
            Self::Warning => (0, 165, 255),
            Self::Alert => (0, 0, 255),
            Self::Error => (0, 0, 255),
        }
    }
}

/// 1フレーム分の判定結果
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    /// 0〜100
    pub score: u8,
    pub message: String,
    pub color: FeedbackColor,
    /// このフレームで基準ポーズを取得したか（取得フレームのみtrue）
    pub captured: bool,
}

impl Feedback {
    fn new(score: u8, message: impl Into<String>, color: FeedbackColor, captured: bool) -> Self {
        Self {
            score,
            message: message.into(),
            color,
            captured,
        }
    }

    /// 人物未検出
    pub fn no_person() -> Self {
        Self::new(0, "NO PERSON DETECTED", FeedbackColor::Error, false)
    }

    /// 静止待ち（初回フレーム、または動きすぎでタイマーリセット）
    pub fn stay_still() -> Self {
        Self::new(0, "STAY STILL TO CAPTURE", FeedbackColor::Neutral, false)
    }

    /// 静止ホールド中
    pub fn holding(score: u8, remaining_secs: f32) -> Self {
        Self::new(
            score,
            format!("HOLD STILL... {:.1}s", remaining_secs),
            FeedbackColor::Pending,
            false,
        )
    }

    /// 基準ポーズ取得
    pub fn captured() -> Self {
        Self::new(100, "POSE CAPTURED!", FeedbackColor::Success, true)
    }

    /// ポーズ一致
    pub fn matched(score: u8) -> Self {
        Self::new(score, "MATCH FOUND", FeedbackColor::Success, false)
    }

    /// 基準ポーズからのずれ
    pub fn off_pose(score: u8, color: FeedbackColor) -> Self {
        Self::new(score, "RETURN TO SAVED POSE", color, false)
    }
}
