use crate::core::gate::{admit, INVALID_SUBMISSION};
use crate::core::intensity::{classify, parse_mood};
use crate::core::recommendation::recommend;
use crate::core::{
    AdviceOutcome, AdviceRequest, Bmi, Classification, Recommendation, Submission, TextGenerator,
};
use crate::utils::error::{BazaiError, Result};
use std::fmt;

pub const ADVICE_HINT: &str =
    "Provide a Gemini API key (--api-key or GEMINI_API_KEY) to receive extra health tips.";

/// 建立額外健康建議的提示詞
pub fn advice_prompt(request: &AdviceRequest) -> String {
    format!(
        "Provide additional health tips for {}, who has a BMI of {}, a recommended exercise \
         intensity of {}, and is currently feeling {}.\n\
         Include advice on diet, exercise, and lifestyle modifications to improve overall health.",
        request.subject_name, request.bmi, request.intensity_tier, request.mood
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct HealthReport {
    pub name: String,
    pub bmi: Bmi,
    pub classification: Classification,
    pub recommendation: Recommendation,
    pub advice: AdviceOutcome,
}

impl fmt::Display for HealthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}, your BMI is: {}", self.name, self.bmi)?;
        writeln!(
            f,
            "Recommended Exercise Intensity: {}",
            self.classification.final_tier
        )?;

        if self.recommendation.activities.is_empty() {
            writeln!(f, "No recommendations available at this time.")?;
        } else {
            writeln!(f, "Tailored Exercise Recommendations:")?;
            for activity in self.recommendation.activities {
                writeln!(f, "- {}", activity)?;
            }
        }

        match &self.advice {
            AdviceOutcome::NotRequested => writeln!(f, "\n{}", ADVICE_HINT),
            AdviceOutcome::Tips(text) | AdviceOutcome::Failed(text) => {
                writeln!(f, "\nAdditional Health Tips")?;
                writeln!(f, "{}", text)
            }
        }
    }
}

/// Runs one submission through the gate, the classifier and the optional advice call.
pub struct HealthRecommender<G: TextGenerator> {
    generator: Option<G>,
}

impl<G: TextGenerator> HealthRecommender<G> {
    pub fn new(generator: Option<G>) -> Self {
        Self { generator }
    }

    pub fn with_generator(generator: G) -> Self {
        Self::new(Some(generator))
    }

    pub fn without_advice() -> Self {
        Self::new(None)
    }

    pub async fn recommend(&self, submission: &Submission) -> Result<HealthReport> {
        let measurement = admit(submission)?;
        let bmi = measurement
            .bmi()
            .ok_or_else(|| BazaiError::ValidationError {
                message: INVALID_SUBMISSION.to_string(),
            })?;

        let mood = parse_mood(&submission.mood)?;
        let classification = classify(bmi, mood);
        let recommendation = recommend(classification.final_tier);
        tracing::info!(
            "BMI {} -> {} (bmi tier {}, mood tier {})",
            bmi,
            classification.final_tier,
            classification.bmi_tier,
            classification.mood_tier
        );

        let advice = match &self.generator {
            Some(generator) => {
                let request = AdviceRequest {
                    subject_name: submission.name.clone(),
                    bmi,
                    intensity_tier: classification.final_tier,
                    mood,
                };
                Self::fetch_advice(generator, &request).await
            }
            None => AdviceOutcome::NotRequested,
        };

        Ok(HealthReport {
            name: submission.name.clone(),
            bmi,
            classification,
            recommendation,
            advice,
        })
    }

    async fn fetch_advice(generator: &G, request: &AdviceRequest) -> AdviceOutcome {
        tracing::info!("Fetching additional health tips...");
        match generator.generate(&advice_prompt(request)).await {
            Ok(text) => AdviceOutcome::Tips(text),
            Err(e) => {
                tracing::warn!("Advice service failed: {}", e);
                AdviceOutcome::Failed(e.to_string())
            }
        }
    }
}
