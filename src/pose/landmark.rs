/// ホリスティックモデルの 33 ランドマークインデックス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum LandmarkIndex {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl LandmarkIndex {
    pub const COUNT: usize = 33;

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Nose),
            1 => Some(Self::LeftEyeInner),
            2 => Some(Self::LeftEye),
            3 => Some(Self::LeftEyeOuter),
            4 => Some(Self::RightEyeInner),
            5 => Some(Self::RightEye),
            6 => Some(Self::RightEyeOuter),
            7 => Some(Self::LeftEar),
            8 => Some(Self::RightEar),
            9 => Some(Self::MouthLeft),
            10 => Some(Self::MouthRight),
            11 => Some(Self::LeftShoulder),
            12 => Some(Self::RightShoulder),
            13 => Some(Self::LeftElbow),
            14 => Some(Self::RightElbow),
            15 => Some(Self::LeftWrist),
            16 => Some(Self::RightWrist),
            17 => Some(Self::LeftPinky),
            18 => Some(Self::RightPinky),
            19 => Some(Self::LeftIndex),
            20 => Some(Self::RightIndex),
            21 => Some(Self::LeftThumb),
            22 => Some(Self::RightThumb),
            23 => Some(Self::LeftHip),
            24 => Some(Self::RightHip),
            25 => Some(Self::LeftKnee),
            26 => Some(Self::RightKnee),
            27 => Some(Self::LeftAnkle),
            28 => Some(Self::RightAnkle),
            29 => Some(Self::LeftHeel),
            30 => Some(Self::RightHeel),
            31 => Some(Self::LeftFootIndex),
            32 => Some(Self::RightFootIndex),
            _ => None,
        }
    }
}

/// 単一ランドマーク
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    /// 正規化されたX座標 (0.0〜1.0)
    pub x: f32,
    /// 正規化されたY座標 (0.0〜1.0)
    pub y: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// 2点間のユークリッド距離
    pub fn distance_to(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// ピクセル座標に変換
    pub fn to_pixel(&self, width: u32, height: u32) -> (i32, i32) {
        let px = (self.x * width as f32) as i32;
        let py = (self.y * height as f32) as i32;
        (px, py)
    }
}

impl Default for Landmark {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// 1フレーム分の33ランドマーク
///
/// インデックスはフレーム間で同じ部位を指す。検出後は不変。
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    pub landmarks: [Landmark; LandmarkIndex::COUNT],
}

impl LandmarkSet {
    pub fn new(landmarks: [Landmark; LandmarkIndex::COUNT]) -> Self {
        Self { landmarks }
    }

    /// (x, y) ペアのスライスから作成
    ///
    /// 33点以外の場合はNone。
    pub fn from_points(points: &[[f32; 2]]) -> Option<Self> {
        if points.len() != LandmarkIndex::COUNT {
            return None;
        }
        let mut landmarks = [Landmark::default(); LandmarkIndex::COUNT];
        for (landmark, point) in landmarks.iter_mut().zip(points) {
            *landmark = Landmark::new(point[0], point[1]);
        }
        Some(Self::new(landmarks))
    }

    /// インデックスでランドマークを取得
    pub fn get(&self, index: LandmarkIndex) -> &Landmark {
        &self.landmarks[index as usize]
    }

    /// 2フレーム間の平均ランドマーク変位
    ///
    /// 静止判定の「movement」と類似度判定の「dist」の両方に使う。
    pub fn mean_displacement(&self, other: &LandmarkSet) -> f32 {
        let sum: f32 = self
            .landmarks
            .iter()
            .zip(other.landmarks.iter())
            .map(|(a, b)| a.distance_to(b))
            .sum();
        sum / LandmarkIndex::COUNT as f32
    }
}

impl Default for LandmarkSet {
    fn default() -> Self {
        Self {
            landmarks: [Landmark::default(); LandmarkIndex::COUNT],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_index_count() {
        assert_eq!(LandmarkIndex::COUNT, 33);
    }

    #[test]
    fn test_landmark_index_from_index() {
        assert_eq!(LandmarkIndex::from_index(0), Some(LandmarkIndex::Nose));
        assert_eq!(
            LandmarkIndex::from_index(32),
            Some(LandmarkIndex::RightFootIndex)
        );
        assert_eq!(LandmarkIndex::from_index(33), None);
    }

    #[test]
    fn test_landmark_distance() {
        let a = Landmark::new(0.0, 0.0);
        let b = Landmark::new(0.3, 0.4);
        assert!((a.distance_to(&b) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_landmark_to_pixel() {
        let landmark = Landmark::new(0.5, 0.25);
        let (px, py) = landmark.to_pixel(640, 480);
        assert_eq!(px, 320);
        assert_eq!(py, 120);
    }

    #[test]
    fn test_from_points_wrong_count() {
        assert!(LandmarkSet::from_points(&[[0.5, 0.5]; 17]).is_none());
        assert!(LandmarkSet::from_points(&[]).is_none());
        assert!(LandmarkSet::from_points(&[[0.5, 0.5]; 33]).is_some());
    }

    #[test]
    fn test_set_get() {
        let mut landmarks = [Landmark::default(); LandmarkIndex::COUNT];
        landmarks[LandmarkIndex::Nose as usize] = Landmark::new(0.5, 0.3);

        let set = LandmarkSet::new(landmarks);
        let nose = set.get(LandmarkIndex::Nose);
        assert_eq!(nose.x, 0.5);
        assert_eq!(nose.y, 0.3);
    }

    #[test]
    fn test_mean_displacement_identical() {
        let set = LandmarkSet::from_points(&[[0.4, 0.6]; 33]).unwrap();
        assert_eq!(set.mean_displacement(&set.clone()), 0.0);
    }

    #[test]
    fn test_mean_displacement_uniform_offset() {
        // 全ランドマークを同じ量だけ動かすと平均変位はその量に一致する
        let a = LandmarkSet::from_points(&[[0.5, 0.5]; 33]).unwrap();
        let b = LandmarkSet::from_points(&[[0.53, 0.54]; 33]).unwrap();
        assert!((a.mean_displacement(&b) - 0.05).abs() < 1e-6);
    }
}
