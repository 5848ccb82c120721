use crate::domain::model::{IntensityTier, Recommendation};

const LIGHT: &[&str] = &["Yoga", "Walking", "Stretching"];
const MODERATE: &[&str] = &["Jogging", "Pilates", "Brisk Walking"];
const INTENSE: &[&str] = &["Strength Training", "Running", "HIIT"];

/// Activities for a tier, in display order.
pub fn activities_for(tier: IntensityTier) -> &'static [&'static str] {
    match tier {
        IntensityTier::Light => LIGHT,
        IntensityTier::Moderate => MODERATE,
        IntensityTier::Intense => INTENSE,
    }
}

pub fn recommend(tier: IntensityTier) -> Recommendation {
    Recommendation {
        tier,
        activities: activities_for(tier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tier_has_activities() {
        for tier in IntensityTier::ALL {
            assert!(!activities_for(tier).is_empty(), "{} has no activities", tier);
        }
    }

    #[test]
    fn test_display_order_is_preserved() {
        assert_eq!(
            recommend(IntensityTier::Light).activities,
            &["Yoga", "Walking", "Stretching"]
        );
        assert_eq!(
            recommend(IntensityTier::Intense).activities,
            &["Strength Training", "Running", "HIIT"]
        );
    }
}
