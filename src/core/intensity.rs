use crate::core::bmi::bmi_tier;
use crate::domain::model::{Bmi, Classification, IntensityTier, MoodLabel};
use crate::utils::error::{BazaiError, Result};

pub fn mood_tier(mood: MoodLabel) -> IntensityTier {
    match mood {
        MoodLabel::Stressed | MoodLabel::Tired => IntensityTier::Light,
        MoodLabel::Neutral => IntensityTier::Moderate,
        MoodLabel::Happy | MoodLabel::Energetic => IntensityTier::Intense,
    }
}

/// Tier for a raw mood label. `None` means the label has no mapping.
pub fn mood_tier_for_label(label: &str) -> Option<IntensityTier> {
    label.parse::<MoodLabel>().ok().map(mood_tier)
}

/// 取兩者中較保守 (較低) 的等級
pub fn reconcile(bmi_tier: IntensityTier, mood_tier: IntensityTier) -> IntensityTier {
    bmi_tier.min(mood_tier)
}

pub fn classify(bmi: Bmi, mood: MoodLabel) -> Classification {
    let bmi_tier = bmi_tier(bmi);
    let mood_tier = mood_tier(mood);
    Classification {
        bmi_tier,
        mood_tier,
        final_tier: reconcile(bmi_tier, mood_tier),
    }
}

/// An unknown mood is a data error, never a default.
pub fn parse_mood(label: &str) -> Result<MoodLabel> {
    label
        .parse::<MoodLabel>()
        .map_err(|unknown| BazaiError::ClassificationError { label: unknown.0 })
}
