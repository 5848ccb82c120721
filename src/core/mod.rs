pub mod bmi;
pub mod gate;
pub mod intensity;
pub mod recommendation;

pub use crate::domain::model::{
    AdviceOutcome, AdviceRequest, Bmi, Classification, IntensityTier, Measurement, MoodLabel,
    Recommendation, Submission,
};
pub use crate::domain::ports::{DocumentExporter, GenerationError, Storage, TextGenerator};
pub use crate::utils::error::Result;
