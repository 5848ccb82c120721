use crate::domain::model::{Bmi, IntensityTier, Measurement};

pub const UNDERWEIGHT_LIMIT: f64 = 18.5;
pub const OVERWEIGHT_LIMIT: f64 = 25.0;

/// weight_kg / (height_cm / 100)^2, or `None` when the height is not positive.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Option<Bmi> {
    let height_m = height_cm / 100.0;
    if height_m > 0.0 {
        Some(Bmi(weight_kg / (height_m * height_m)))
    } else {
        None
    }
}

impl Measurement {
    pub fn bmi(&self) -> Option<Bmi> {
        calculate_bmi(self.weight_kg, self.height_cm)
    }
}

/// 邊界值 (18.5、25.0) 歸入較高的等級
pub fn bmi_tier(bmi: Bmi) -> IntensityTier {
    if bmi.value() < UNDERWEIGHT_LIMIT {
        IntensityTier::Light
    } else if bmi.value() < OVERWEIGHT_LIMIT {
        IntensityTier::Moderate
    } else {
        IntensityTier::Intense
    }
}
