use anyhow::Context;
use bazai::app::storybook::export_state;
use bazai::domain::story::{AgeGroup, StoryRequest, StoryState, Theme};
use bazai::utils::{logger, validation::Validate};
use bazai::{AppConfig, GeminiClient, LocalStorage, StorybookGenerator, ZipDocumentExporter};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "storybook")]
#[command(about = "Children's storybook generator")]
struct Args {
    /// Age group: 3-5, 6-8 or 9-12
    #[arg(long, default_value = "3-5")]
    age_group: String,

    /// Adventure, Fantasy, Friendship, Nature, Learning, Family, Animals, Space or Custom
    #[arg(long, default_value = "Adventure")]
    theme: String,

    /// Theme text used when --theme is Custom
    #[arg(long)]
    custom_theme: Option<String>,

    /// Main characters (separated by commas)
    #[arg(long, default_value = "")]
    characters: String,

    /// Moral or lesson of the story
    #[arg(long, default_value = "")]
    moral: String,

    /// Additional story elements
    #[arg(long, default_value = "")]
    prompt: String,

    /// API key (falls back to the config file, then GEMINI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override the output directory from config
    #[arg(short, long)]
    output: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref())
        .with_context(|| format!("failed to load config {:?}", args.config))?;
    if let Some(output) = &args.output {
        config.storybook.output_path = output.clone();
    }

    logger::init_logger(args.verbose, config.logging.format);
    tracing::info!("📚 Starting children's storybook generator");

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let age_group: AgeGroup = args.age_group.parse().map_err(anyhow::Error::msg)?;
    let theme = Theme::resolve(&args.theme, args.custom_theme.as_deref()).map_err(anyhow::Error::msg)?;
    let request = StoryRequest {
        age_group,
        theme,
        characters: args.characters.clone(),
        moral: args.moral.clone(),
        extra_prompt: args.prompt.clone(),
    };

    let generator = config
        .resolve_api_key(args.api_key.as_deref())
        .map(|key| GeminiClient::from_config(&config.advice, key))
        .transpose()?;
    let storybook = StorybookGenerator::new(generator);

    let state = StoryState::default();
    let state = match storybook.generate(&state, &request).await {
        Ok(next) => next,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    println!("{}\n", state.title);
    println!("{}\n", state.story);
    for illustration in &state.illustrations {
        println!("[{}] {}", illustration.caption, illustration.scene_text);
    }

    let storage = LocalStorage::new(config.storybook.output_path.clone());
    let filename = config.storybook.filename.clone();
    if let Err(e) = export_state(&state, &ZipDocumentExporter::new(), &storage, &filename).await {
        // 匯出失敗不影響已顯示的故事
        tracing::error!("❌ Failed to export storybook: {}", e);
        eprintln!("❌ Failed to generate storybook bundle: {}", e);
        std::process::exit(3);
    }

    println!("\n📥 Storybook saved to: {}", storage.full_path(&filename));
    Ok(())
}
