pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::Submission;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "bazai")]
#[command(about = "Personalized exercise recommendations from BMI and mood")]
pub struct CliConfig {
    /// Your name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Height in centimeters
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub height: f64,

    /// Weight in kilograms
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub weight: f64,

    /// How are you feeling today? (Happy, Neutral, Stressed, Tired, Energetic)
    #[arg(long, default_value = "Happy")]
    pub mood: String,

    /// API key for extra health tips (falls back to the config file, then GEMINI_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn submission(&self) -> Submission {
        Submission {
            name: self.name.clone(),
            height_cm: self.height,
            weight_kg: self.weight,
            mood: self.mood.clone(),
        }
    }
}
