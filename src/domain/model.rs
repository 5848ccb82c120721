use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 使用者提交的表單內容 (尚未驗證)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub mood: String,
}

/// 已通過驗證的身高體重
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub height_cm: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Bmi(pub f64);

impl Bmi {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodLabel {
    Happy,
    Neutral,
    Stressed,
    Tired,
    Energetic,
}

impl MoodLabel {
    pub const ALL: [MoodLabel; 5] = [
        MoodLabel::Happy,
        MoodLabel::Neutral,
        MoodLabel::Stressed,
        MoodLabel::Tired,
        MoodLabel::Energetic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Happy => "Happy",
            MoodLabel::Neutral => "Neutral",
            MoodLabel::Stressed => "Stressed",
            MoodLabel::Tired => "Tired",
            MoodLabel::Energetic => "Energetic",
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label that is not part of the closed mood set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMood(pub String);

impl FromStr for MoodLabel {
    type Err = UnknownMood;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // 只接受五個標準標籤，大小寫與空白都必須完全一致
        MoodLabel::ALL
            .into_iter()
            .find(|mood| mood.as_str() == s)
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}

/// Exercise intensity. Variant order is the safety order used for reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IntensityTier {
    Light,
    Moderate,
    Intense,
}

impl IntensityTier {
    pub const ALL: [IntensityTier; 3] = [
        IntensityTier::Light,
        IntensityTier::Moderate,
        IntensityTier::Intense,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntensityTier::Light => "Light",
            IntensityTier::Moderate => "Moderate",
            IntensityTier::Intense => "Intense",
        }
    }
}

impl fmt::Display for IntensityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub tier: IntensityTier,
    pub activities: &'static [&'static str],
}

/// BMI 與心情各自的分級以及調和後的結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub bmi_tier: IntensityTier,
    pub mood_tier: IntensityTier,
    pub final_tier: IntensityTier,
}

/// 額外健康建議的請求內容
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdviceRequest {
    pub subject_name: String,
    pub bmi: Bmi,
    pub intensity_tier: IntensityTier,
    pub mood: MoodLabel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AdviceOutcome {
    NotRequested,
    Tips(String),
    Failed(String),
}
